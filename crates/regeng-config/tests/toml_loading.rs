//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use regeng_config::{RegEngineConfig, Service};

#[test]
fn loads_services_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[services]
base_url = "http://staging.reg.internal"
admin_port = 18400
ingestion_port = 18000

[auth]
admin_key = "staging-master"
"#,
        )?;

        let config: RegEngineConfig = Figment::from(Serialized::defaults(RegEngineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()
            .expect("config extracts");

        assert_eq!(
            config.services.url(Service::Admin),
            "http://staging.reg.internal:18400"
        );
        assert_eq!(config.services.ingestion_port, 18000);
        // Unset sections keep defaults.
        assert_eq!(config.services.opportunity_port, 8300);
        assert_eq!(config.auth.admin_key, "staging-master");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[services]
admin_port = 18400
"#,
        )?;
        jail.set_env("REGENGINE_SERVICES__ADMIN_PORT", "28400");

        let config: RegEngineConfig = Figment::from(Serialized::defaults(RegEngineConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("REGENGINE_").split("__"))
            .extract()
            .expect("config extracts");

        assert_eq!(config.services.admin_port, 28400);
        Ok(())
    });
}
