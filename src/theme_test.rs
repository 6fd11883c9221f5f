use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_str_accepts_lowercase_names() {
    assert_eq!("light".parse::<Theme>().ok(), Some(Theme::Light));
    assert_eq!("dark".parse::<Theme>().ok(), Some(Theme::Dark));
}

#[test]
fn from_str_rejects_other_values() {
    for raw in ["", "Dark", " light", "auto", "sepia"] {
        let err = raw.parse::<Theme>().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidTheme(ref v) if v == raw));
    }
}

#[test]
fn display_matches_as_str() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Flipping and attribute reads
// =============================================================

#[test]
fn flipped_swaps_and_is_an_involution() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn from_attribute_treats_anything_but_dark_as_light() {
    assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_attribute(None), Theme::Light);
}

// =============================================================
// Icons and serde
// =============================================================

#[test]
fn icon_uses_moon_stars_for_dark_and_sun_for_light() {
    let config = ThemeConfig::default();
    assert!(Theme::Dark.icon(&config).contains("bi-moon-stars-fill"));
    assert!(Theme::Light.icon(&config).contains("bi-sun-fill"));
}

#[test]
fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}
