//! Integration tests for environment-variable overrides.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::Jail;
use regeng_config::{RegEngineConfig, Service};

#[test]
fn env_overrides_service_ports() {
    Jail::expect_with(|jail| {
        jail.set_env("REGENGINE_SERVICES__ADMIN_PORT", "9400");
        jail.set_env("REGENGINE_SERVICES__COMPLIANCE_PORT", "9500");

        let config = RegEngineConfig::load().expect("config loads");
        assert_eq!(config.services.admin_port, 9400);
        assert_eq!(config.services.compliance_port, 9500);
        // Untouched services keep their defaults.
        assert_eq!(config.services.ingestion_port, 8000);
        assert_eq!(config.services.opportunity_port, 8300);
        Ok(())
    });
}

#[test]
fn env_overrides_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("REGENGINE_SERVICES__BASE_URL", "http://reg.internal");

        let config = RegEngineConfig::load().expect("config loads");
        assert_eq!(
            config.services.url(Service::Opportunity),
            "http://reg.internal:8300"
        );
        Ok(())
    });
}

#[test]
fn env_provides_credentials() {
    Jail::expect_with(|jail| {
        jail.set_env("REGENGINE_AUTH__ADMIN_KEY", "master-key");
        jail.set_env("REGENGINE_AUTH__API_KEY", "rgk_abc");

        let config = RegEngineConfig::load().expect("config loads");
        assert!(config.auth.has_admin_key());
        assert_eq!(config.auth.admin_key, "master-key");
        assert_eq!(config.auth.api_key, "rgk_abc");
        Ok(())
    });
}
