//! Compliance service client: industries, checklists, and validation.
//!
//! All compliance reads are unauthenticated in this design.

use regeng_config::Service;
use regeng_core::compliance::{
    ComplianceChecklist, Industry, ValidationRequest, ValidationResult,
};

use crate::{
    ApiClient, ClientError,
    http::{check_response, decode_json},
};

/// Path and query for the checklist listing, with an optional industry filter.
fn checklists_path(industry: Option<&str>) -> String {
    match industry {
        Some(industry) => format!("/checklists?industry={}", urlencoding::encode(industry)),
        None => String::from("/checklists"),
    }
}

impl ApiClient {
    /// List supported regulatory domains. `GET /industries`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn industries(&self) -> Result<Vec<Industry>, ClientError> {
        let url = format!("{}/industries", self.base(Service::Compliance));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp, "industries").await
    }

    /// List checklists, optionally filtered by industry.
    /// `GET /checklists?industry=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn checklists(
        &self,
        industry: Option<&str>,
    ) -> Result<Vec<ComplianceChecklist>, ClientError> {
        let url = format!(
            "{}{}",
            self.base(Service::Compliance),
            checklists_path(industry)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp, "checklists").await
    }

    /// Fetch one checklist. `GET /checklists/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 for an unknown id.
    pub async fn checklist(&self, id: &str) -> Result<ComplianceChecklist, ClientError> {
        let url = format!(
            "{}/checklists/{}",
            self.base(Service::Compliance),
            urlencoding::encode(id)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp, "checklist").await
    }

    /// Validate a config mapping against a checklist. `POST /validate`.
    ///
    /// The config is forwarded opaquely; its interpretation is entirely the
    /// compliance service's contract.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ClientError> {
        let url = format!("{}/validate", self.base(Service::Compliance));
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        decode_json(resp, "validate").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn checklists_path_without_filter() {
        assert_eq!(checklists_path(None), "/checklists");
    }

    #[test]
    fn checklists_path_encodes_filter() {
        assert_eq!(
            checklists_path(Some("healthcare")),
            "/checklists?industry=healthcare"
        );
        assert_eq!(
            checklists_path(Some("food & beverage")),
            "/checklists?industry=food%20%26%20beverage"
        );
    }

    #[tokio::test]
    #[ignore] // requires a running compliance service
    async fn live_filtered_checklists_are_a_subset() {
        use regeng_config::ServicesConfig;

        let client = crate::ApiClient::new(&ServicesConfig::default());
        let all = client.checklists(None).await.expect("unfiltered listing");
        let industries = client.industries().await.expect("industries");

        for industry in industries {
            let filtered = client
                .checklists(Some(&industry.id))
                .await
                .expect("filtered listing");
            for checklist in &filtered {
                assert_eq!(checklist.industry, industry.id);
                assert!(all.iter().any(|c| c.id == checklist.id));
            }
        }
    }

    #[test]
    fn industries_fixture_parses() {
        let industries: Vec<Industry> = serde_json::from_str(
            r#"[
                {"id": "healthcare", "name": "Healthcare", "description": "HIPAA et al.", "checklist_count": 3},
                {"id": "finance", "name": "Finance", "description": "SOX, PCI", "checklist_count": 5}
            ]"#,
        )
        .unwrap();
        assert_eq!(industries.len(), 2);
        assert_eq!(industries[1].checklist_count, 5);
    }
}
