use super::*;

#[test]
fn default_matches_page_template() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-bs-theme");
    assert_eq!(config.toggle_id, "themeToggleButton");
    assert_eq!(config.dark_icon, r#"<i class="bi bi-moon-stars-fill"></i>"#);
    assert_eq!(config.light_icon, r#"<i class="bi bi-sun-fill"></i>"#);
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"ui.theme","toggle_id":"modeBtn"}"#).unwrap();
    assert_eq!(config.storage_key, "ui.theme");
    assert_eq!(config.toggle_id, "modeBtn");
    assert_eq!(config.attribute, DEFAULT_ATTRIBUTE);
    assert_eq!(config.dark_icon, DEFAULT_DARK_ICON);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn from_json_rejects_unknown_fields() {
    assert!(ThemeConfig::from_json(r#"{"follow_system":true}"#).is_err());
}

#[test]
fn from_json_or_default_falls_back() {
    assert_eq!(ThemeConfig::from_json_or_default(None), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_json_or_default(Some("  ")), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_json_or_default(Some("{not json")), ThemeConfig::default());
}

#[test]
fn from_json_or_default_applies_valid_override() {
    let config = ThemeConfig::from_json_or_default(Some(r#" {"attribute":"data-theme"} "#));
    assert_eq!(config.attribute, "data-theme");
}
