//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use club_config::{ClubConfig, ConfigError};
use pretty_assertions::assert_eq;

#[test]
fn loads_api_and_sync_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://club.example.org/api"
token = "tok-123"
timeout_secs = 30

[sync]
concurrency = 1
call_timeout_ms = 2500
"#,
        )?;

        let config: ClubConfig = Figment::from(Serialized::defaults(ClubConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://club.example.org/api");
        assert_eq!(config.api.bearer_token(), Some("tok-123"));
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.sync.concurrency, 1);
        assert_eq!(config.sync.call_timeout_ms, 2500);
        assert_eq!(config.general.default_limit, 50);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".clubhouse")?;
        jail.create_file(
            ".clubhouse/config.toml",
            r#"
[api]
base_url = "http://localhost:3333"
"#,
        )?;

        let config = ClubConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".clubhouse")?;
        jail.create_file(
            ".clubhouse/config.toml",
            r#"
[api]
base_url = "http://localhost:3333"

[sync]
concurrency = 2
"#,
        )?;
        jail.set_env("CLUB_API__BASE_URL", "https://prod.example.org");
        jail.set_env("CLUB_SYNC__CONCURRENCY", "8");

        let config = ClubConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://prod.example.org");
        assert_eq!(config.sync.concurrency, 8);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("CLUB_SYNC__CONCURRENCY", "many");

        let err = ClubConfig::load().expect_err("non-numeric concurrency should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn explicit_file_outside_the_project_can_be_layered() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[general]\ndefault_limit = 5\n\n[sync]\ncall_timeout_ms = 0"
    )
    .expect("write config");

    let config: ClubConfig = Figment::from(Serialized::defaults(ClubConfig::default()))
        .merge(Toml::file(file.path()))
        .extract()
        .expect("config extracts");

    assert_eq!(config.general.default_limit, 5);
    assert!(config.sync.validate().is_err());
}
