//! Layered configuration loading.
//!
//! Uses figment::Jail so env vars and the working directory are sandboxed.

use figment::Jail;
use investor_pages::{ConfigError, PagesConfig};
use std::path::{Path, PathBuf};

/// Keep the real user-level config out of the picture.
fn isolate(jail: &mut Jail) {
    let dir = jail.directory().display().to_string();
    jail.set_env("XDG_CONFIG_HOME", dir.clone());
    jail.set_env("HOME", dir);
}

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|jail| {
        isolate(jail);

        let config = PagesConfig::load().expect("config loads");
        assert_eq!(config, PagesConfig::default());
        Ok(())
    });
}

#[test]
fn env_overrides_nested_port() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("INVESTOR_PAGES_SERVER__PORT", "8080");
        jail.set_env("INVESTOR_PAGES_DEFAULT_SITE", "tech");

        let config = PagesConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.default_site, "tech");
        Ok(())
    });
}

#[test]
fn local_file_is_picked_up_from_working_directory() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file(
            "investor-pages.toml",
            r#"
default_site = "tech"
content_dir = "./sites"

[server]
host = "127.0.0.1"
port = 9000
"#,
        )?;

        let config = PagesConfig::load().expect("config loads");
        assert_eq!(config.default_site, "tech");
        assert_eq!(config.content_dir.as_deref(), Some(Path::new("./sites")));
        assert_eq!(config.server.address(), "127.0.0.1:9000");
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_local_file() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file("investor-pages.toml", "default_site = \"local\"\n")?;
        jail.create_file("custom.toml", "log_file = \"ui.log\"\n")?;

        let config = PagesConfig::load_from(Some(Path::new("custom.toml"))).expect("config loads");
        assert_eq!(config.default_site, "hotel");
        assert_eq!(config.log_file, Some(PathBuf::from("ui.log")));
        Ok(())
    });
}

#[test]
fn env_beats_file() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file("investor-pages.toml", "[server]\nport = 9000\n")?;
        jail.set_env("INVESTOR_PAGES_SERVER__PORT", "7000");

        let config = PagesConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7000);
        Ok(())
    });
}

#[test]
fn zero_port_is_rejected() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("INVESTOR_PAGES_SERVER__PORT", "0");

        let err = PagesConfig::load().expect_err("port 0 is invalid");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.port"));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("INVESTOR_PAGES_SERVER__PORT", "not-a-port");

        let err = PagesConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
