//! Names and markup the controller works against.
//!
//! Defaults match the page template: `localStorage["theme"]`,
//! `<html data-bs-theme>`, and `#themeToggleButton` holding a single
//! Bootstrap Icons glyph.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-bs-theme";
pub const DEFAULT_TOGGLE_ID: &str = "themeToggleButton";
pub const DEFAULT_DARK_ICON: &str = r#"<i class="bi bi-moon-stars-fill"></i>"#;
pub const DEFAULT_LIGHT_ICON: &str = r#"<i class="bi bi-sun-fill"></i>"#;

/// Element id of the optional inline JSON override read by the browser host.
pub const CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub dark_icon: String,
    pub light_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            dark_icon: DEFAULT_DARK_ICON.to_owned(),
            light_icon: DEFAULT_LIGHT_ICON.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a partial override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error for malformed input or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse an override, falling back to defaults when absent or invalid.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid theme toggle config: {e}");
                Self::default()
            }
        }
    }
}
