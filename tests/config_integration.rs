use rasoi_the_tasty::config::{AppConfig, LogFormat};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("RASOI_SERVER__PORT");
        env::remove_var("RASOI_SITE__NAME");
        env::remove_var("RASOI_LOGGING__FORMAT");
        env::remove_var("RASOI_SESSION__MAX_SESSIONS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("CATALOGUE_PATH");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["rasoi"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.site.name, "Rasoi – The Tasty");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.catalogue.path.is_none());
    assert_eq!(config.session.max_sessions, 10_000);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("RASOI_SERVER__PORT", "9090");
        env::set_var("RASOI_LOGGING__FORMAT", "json");
        env::set_var("RASOI_SESSION__MAX_SESSIONS", "50");
    }

    let config = AppConfig::load_from_args(["rasoi"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.session.max_sessions, 50);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("RASOI_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["rasoi", "--port", "4040"]).unwrap();
    assert_eq!(config.server.port, 4040);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("site.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
site:
  name: "Rasoi Express"
catalogue:
  path: "menus/winter.json"
"#,
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args(["rasoi"]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.site.name, "Rasoi Express");
    assert_eq!(config.site.tagline, "Authentic Vegetarian Cuisine");
    assert_eq!(
        config.catalogue.path.as_deref(),
        Some(Path::new("menus/winter.json"))
    );

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["rasoi", "--config", "/no/such/config.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args(["rasoi"]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
