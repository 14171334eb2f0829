use std::fs;
use std::sync::Arc;

use rasoi_the_tasty::AppState;
use rasoi_the_tasty::catalogue::{CatalogueError, MenuCatalogue};
use rasoi_the_tasty::config::AppConfig;

const YAML_MENU: &str = r"
menu:
  - category: Soups
    items:
      - name: Tomato Shorba
        price: 90
      - name: Sweet Corn
        price: 95.5
  - category: Desserts
    items:
      - name: Gulab Jamun
        price: 60
";

#[test]
fn test_load_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.yml");
    fs::write(&path, YAML_MENU).unwrap();

    let catalogue = MenuCatalogue::load(&path).unwrap();
    assert_eq!(catalogue.first_category(), Some("Soups"));
    assert_eq!(
        catalogue.category("Soups").unwrap().items[1].formatted_price(),
        "₹95.5"
    );
}

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.JSON");
    fs::write(
        &path,
        r#"{"menu":[{"category":"Thali","items":[{"name":"Deluxe Thali","price":250}]}]}"#,
    )
    .unwrap();

    let catalogue = MenuCatalogue::load(&path).unwrap();
    assert_eq!(catalogue.len(), 1);
}

#[test]
fn test_malformed_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    fs::write(&path, r#"{"menu": [{"category": "Soups", "items": [{"name": "x"}]}]}"#).unwrap();

    assert!(matches!(
        MenuCatalogue::load(&path),
        Err(CatalogueError::Json(_))
    ));
}

#[test]
fn test_state_from_configured_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.yaml");
    fs::write(&path, YAML_MENU).unwrap();

    let config = AppConfig::load_from_args([
        "rasoi".to_string(),
        "--catalogue".to_string(),
        path.display().to_string(),
    ])
    .unwrap();
    let state = AppState::from_config(Arc::new(config)).unwrap();

    assert_eq!(state.catalogue.first_category(), Some("Soups"));
}

#[test]
fn test_state_rejects_missing_catalogue() {
    let config = AppConfig::load_from_args(["rasoi", "--catalogue", "/no/such/menu.json"]).unwrap();
    let err = AppState::from_config(Arc::new(config)).unwrap_err();

    assert!(err.to_string().contains("failed to load catalogue"));
}
