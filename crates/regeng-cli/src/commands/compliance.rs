//! `rge industries | checklists | checklist | validate`.

use std::path::Path;

use regeng_core::compliance::ValidationRequest;
use regeng_query::Queries;

use crate::cli::OutputFormat;
use crate::output;

pub async fn industries(queries: &Queries, format: OutputFormat) -> anyhow::Result<()> {
    let industries = queries.industries().await?;
    output::output(&industries, format)
}

pub async fn checklists(
    queries: &Queries,
    industry: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let checklists = queries.checklists(industry).await?;
    output::output(&checklists, format)
}

pub async fn checklist(queries: &Queries, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let checklist = queries.checklist(id).await?;
    output::output(&checklist, format)
}

pub async fn validate(
    queries: &Queries,
    checklist_id: &str,
    config_path: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let request = build_request(checklist_id, config_path)?;
    let result = queries.validate_config(&request).await?;
    output::output(&result, format)?;

    if !result.passed {
        std::process::exit(1);
    }
    Ok(())
}

/// Read the config file and require a JSON object; interpretation of its
/// contents is entirely the compliance service's contract.
fn build_request(checklist_id: &str, config_path: &Path) -> anyhow::Result<ValidationRequest> {
    let raw = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", config_path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("{} is not valid JSON: {e}", config_path.display()))?;

    let serde_json::Value::Object(config) = value else {
        anyhow::bail!("{} must contain a JSON object", config_path.display());
    };

    Ok(ValidationRequest {
        checklist_id: checklist_id.to_string(),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn object_config_builds_a_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"encryption_at_rest": true, "regions": ["eu-west-1"]}}"#).unwrap();

        let request = build_request("hipaa-v1", file.path()).unwrap();
        assert_eq!(request.checklist_id, "hipaa-v1");
        assert_eq!(request.config.len(), 2);
    }

    #[test]
    fn non_object_config_is_rejected_before_any_call() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = build_request("hipaa-v1", file.path()).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = build_request("hipaa-v1", Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }
}
