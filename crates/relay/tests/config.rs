//! Relay configuration tests.

use fitb_relay::{RelayConfig, config, utils::expand_env_vars};
use std::io::Write;

#[test]
fn empty_config_uses_defaults() {
    unsafe { std::env::set_var("OPENROUTER_API_KEY", "from-env") };
    let config = RelayConfig::from_toml("").unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:3000");
    assert_eq!(config.upstream.model, "openai/gpt-3.5-turbo");
    assert_eq!(config.upstream.base_url, "https://openrouter.ai/api/v1");
    assert_eq!(
        config.upstream.endpoint(),
        "https://openrouter.ai/api/v1/chat/completions"
    );
    assert_eq!(config.upstream.api_key, "from-env");
    assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
    let toml = r#"
[server]
bind = "0.0.0.0:8080"

[upstream]
api_key = "sk-test"
base_url = "http://localhost:11434/v1/"
model = "llama3"
"#;
    let config = RelayConfig::from_toml(toml).unwrap();
    assert_eq!(config.server.bind, "0.0.0.0:8080");
    assert_eq!(config.upstream.api_key, "sk-test");
    assert_eq!(config.upstream.model, "llama3");
    assert_eq!(
        config.upstream.endpoint(),
        "http://localhost:11434/v1/chat/completions"
    );
}

#[test]
fn env_var_expansion() {
    unsafe { std::env::set_var("TEST_FITB_KEY", "expanded-value") };
    let toml = r#"
[upstream]
api_key = "${TEST_FITB_KEY}"
"#;
    let config = RelayConfig::from_toml(toml).unwrap();
    assert_eq!(config.upstream.api_key, "expanded-value");
    unsafe { std::env::remove_var("TEST_FITB_KEY") };
}

#[test]
fn missing_key_fails_validation() {
    let toml = r#"
[upstream]
api_key = "${TEST_FITB_UNSET_KEY}"
"#;
    let config = RelayConfig::from_toml(toml).unwrap();
    assert!(config.upstream.api_key.is_empty());
    let err = config.validate().unwrap_err().to_string();
    assert!(err.contains("OPENROUTER_API_KEY"), "{err}");
}

#[test]
fn debug_redacts_api_key() {
    let toml = r#"
[upstream]
api_key = "sk-secret"
"#;
    let config = RelayConfig::from_toml(toml).unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("sk-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[upstream]\napi_key = \"file-key\"\nmodel = \"m\"").unwrap();
    let config = RelayConfig::resolve(Some(file.path())).unwrap();
    assert_eq!(config.upstream.api_key, "file-key");
    assert_eq!(config.upstream.model, "m");
}

#[test]
fn load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(RelayConfig::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn rejects_invalid_toml() {
    assert!(RelayConfig::from_toml("[upstream\nmodel = 1").is_err());
}

#[test]
fn default_config_path_ends_with_relay_toml() {
    if let Some(path) = config::default_config_path() {
        assert!(path.ends_with("fitb/relay.toml"));
    }
}

#[test]
fn expand_keeps_unterminated_placeholder() {
    assert_eq!(expand_env_vars("a ${OPEN"), "a ${OPEN");
    assert_eq!(expand_env_vars("no vars"), "no vars");
}

#[test]
fn expand_unknown_var_is_empty() {
    assert_eq!(expand_env_vars("x${TEST_FITB_NOPE_123}y"), "xy");
}
