//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use forge_config::{ConfigError, ForgeConfig};

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
base_url = "http://localhost:9000/v1beta"
model = "gemini-test"
connect_timeout_secs = 5
request_timeout_secs = 20
"#,
        )?;

        let config: ForgeConfig = Figment::from(Serialized::defaults(ForgeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.base_url, "http://localhost:9000/v1beta");
        assert_eq!(config.gemini.model, "gemini-test");
        assert_eq!(config.gemini.connect_timeout_secs, 5);
        assert_eq!(config.gemini.request_timeout_secs, 20);
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn partial_context_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[context]
max_notes = 5
",
        )?;

        let config: ForgeConfig = Figment::from(Serialized::defaults(ForgeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.context.max_notes, 5);
        assert_eq!(config.context.max_conversations, 3);
        assert_eq!(config.context.note_excerpt_chars, 80);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "from-toml"
"#,
        )?;
        jail.set_env("FORGE_GEMINI__API_KEY", "from-env");
        jail.set_env("FORGE_GENERAL__DEFAULT_STAGE_COUNT", "4");

        let config: ForgeConfig = Figment::from(Serialized::defaults(ForgeConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FORGE_").split("__"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "from-env");
        assert_eq!(config.general.default_stage_count, 4);
        Ok(())
    });
}

#[test]
fn load_reads_project_local_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ideaforge")?;
        jail.create_file(
            ".ideaforge/config.toml",
            r#"
[gemini]
model = "gemini-local"
"#,
        )?;

        let config = ForgeConfig::load().expect("config loads");
        assert_eq!(config.gemini.model, "gemini-local");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_values() {
    Jail::expect_with(|jail| {
        jail.set_env("FORGE_GEMINI__CONNECT_TIMEOUT_SECS", "0");

        let err = ForgeConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
