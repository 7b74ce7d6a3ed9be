//! Integration tests for TOML and environment layering.
//!
//! Uses `figment::Jail` for sandboxed env vars and working directory.

use faultline_config::{ConfigError, FaultlineConfig, View};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_project_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".faultline")?;
        jail.create_file(
            ".faultline/config.toml",
            r#"
[output]
view = "diagnostic"
pretty = false

[log]
level = "debug"
"#,
        )?;

        let config = FaultlineConfig::load().expect("config loads");
        assert_eq!(config.output.view, View::Diagnostic);
        assert!(!config.output.pretty);
        assert_eq!(config.log.level, "debug");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\nview = \"public\"\n")?;

        let config: FaultlineConfig =
            Figment::from(Serialized::defaults(FaultlineConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.output.view, View::Public);
        assert!(config.output.pretty);
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".faultline")?;
        jail.create_file(".faultline/config.toml", "[output]\nview = \"public\"\n")?;
        jail.set_env("FAULTLINE_OUTPUT__VIEW", "full");
        jail.set_env("FAULTLINE_OUTPUT__PRETTY", "false");

        let config = FaultlineConfig::load().expect("config loads");
        assert_eq!(config.output.view, View::Full);
        assert!(!config.output.pretty);
        Ok(())
    });
}

#[test]
fn tracing_filter_var_is_not_a_section() {
    Jail::expect_with(|jail| {
        jail.set_env("FAULTLINE_LOG", "faultline=trace,warn");

        let config = FaultlineConfig::load().expect("config loads");
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}

#[test]
fn unknown_view_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("FAULTLINE_OUTPUT__VIEW", "everything");

        let err = FaultlineConfig::load().expect_err("bad view");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn unknown_level_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("FAULTLINE_LOG__LEVEL", "shouty");

        let err = FaultlineConfig::load().expect_err("bad level");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "log.level"));
        Ok(())
    });
}
