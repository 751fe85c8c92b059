mod common;

use recipe_core::config::{BrowserConfig, SidebarConfig};
use recipe_core::consts::DEFAULT_NARROW_WIDTH;
use recipe_core::error::RecipeError;
use recipe_core::scale::ScaleBounds;

use common::write_temp;

#[test]
fn test_default_config() {
    let config = BrowserConfig::default();
    assert!(config.data.is_none());
    assert_eq!(config.scale, ScaleBounds { min: 1.0, max: 5.0 });
    assert!(config.sidebar.start_collapsed);
    assert_eq!(config.sidebar.narrow_width, DEFAULT_NARROW_WIDTH);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_config_toml_round_trip() {
    let config = BrowserConfig::default();
    let text = config.to_toml().unwrap();
    assert!(text.contains("[scale]"), "got: {text}");
    assert!(!text.contains("data"), "got: {text}");
    assert_eq!(BrowserConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(BrowserConfig::from_toml_str("").unwrap(), BrowserConfig::default());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = BrowserConfig::from_toml_str(
        r#"
data = "my-recipes.toml"

[scale]
max = 10.0

[sidebar]
start_collapsed = false
"#,
    )
    .unwrap();
    assert_eq!(config.data.as_deref(), Some(std::path::Path::new("my-recipes.toml")));
    assert_eq!(config.scale, ScaleBounds { min: 1.0, max: 10.0 });
    assert_eq!(
        config.sidebar,
        SidebarConfig {
            start_collapsed: false,
            narrow_width: DEFAULT_NARROW_WIDTH,
        }
    );
}

#[test]
fn test_inverted_bounds_rejected() {
    let err = BrowserConfig::from_toml_str("[scale]\nmin = 6.0\nmax = 2.0\n").unwrap_err();
    assert!(matches!(err, RecipeError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_negative_narrow_width_rejected() {
    let err = BrowserConfig::from_toml_str("[sidebar]\nnarrow_width = -1.0\n").unwrap_err();
    assert!(matches!(err, RecipeError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_malformed_toml_rejected() {
    let err = BrowserConfig::from_toml_str("[scale\nmin = 1").unwrap_err();
    assert!(matches!(err, RecipeError::Toml(_)), "got: {err}");
}

#[test]
fn test_load_from_file() {
    let file = write_temp("[scale]\nmin = 2.0\nmax = 3.0\n", "toml");
    let config = BrowserConfig::load(file.path()).unwrap();
    assert_eq!(config.scale, ScaleBounds { min: 2.0, max: 3.0 });
}

#[test]
fn test_load_store_defaults_to_bundled() {
    let store = BrowserConfig::default().load_store().unwrap();
    assert!(!store.is_empty());
}

#[test]
fn test_load_store_from_configured_path() {
    let data = write_temp(
        r#"[{ "label": "Riz", "ingredients": [], "steps": [], "img": "" }]"#,
        "json",
    );
    let config = BrowserConfig {
        data: Some(data.path().to_path_buf()),
        ..BrowserConfig::default()
    };
    let store = config.load_store().unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("Riz").is_some());
}
