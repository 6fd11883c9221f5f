//! Theme controller: applies, persists, and flips the page theme.
//!
//! DESIGN
//! ======
//! The persisted preference is read exactly once, in [`ThemeController::new`].
//! [`ThemeController::preferred_theme`] keeps answering from that captured
//! value for the controller's lifetime, so a preference rewritten by another
//! tab is not observed until the next page load. Clicks do not consult it at
//! all: they flip whatever the root attribute currently says.
//!
//! Every failure degrades to a no-op. Missing toggle control and missing
//! preference are ordinary states; port errors are logged at `warn`.

use crate::config::ThemeConfig;
use crate::ports::{DocumentRoot, PreferenceStore};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, D> {
    store: S,
    document: D,
    config: ThemeConfig,
    stored: Option<Theme>,
}

impl<S: PreferenceStore, D: DocumentRoot> ThemeController<S, D> {
    /// Build a controller, capturing the persisted preference once.
    pub fn new(store: S, document: D, config: ThemeConfig) -> Self {
        let stored = read_stored_theme(&store, &config.storage_key);
        Self { store, document, config, stored }
    }

    /// Theme captured from storage at construction, or light.
    pub fn preferred_theme(&self) -> Theme {
        self.stored.unwrap_or_default()
    }

    /// Theme currently on the document root.
    pub fn current_theme(&self) -> Theme {
        match self.document.root_attribute(&self.config.attribute) {
            Ok(value) => Theme::from_attribute(value.as_deref()),
            Err(e) => {
                log::warn!("theme: reading {} failed: {e}", self.config.attribute);
                Theme::Light
            }
        }
    }

    /// Write `theme` to the root attribute.
    pub fn set_theme(&self, theme: Theme) {
        match self.document.set_root_attribute(&self.config.attribute, theme.as_str()) {
            Ok(()) => log::debug!("theme: applied {theme}"),
            Err(e) => log::warn!("theme: applying {theme} failed: {e}"),
        }
    }

    /// Show the icon for `theme` in the toggle control.
    ///
    /// Returns `false` when the control is not in the document.
    pub fn update_toggle_button_icon(&self, theme: Theme) -> bool {
        self.document
            .set_inner_html(&self.config.toggle_id, theme.icon(&self.config))
    }

    /// Load-time step: apply the preferred theme before the body exists.
    pub fn on_load(&self) -> Theme {
        let theme = self.preferred_theme();
        self.set_theme(theme);
        theme
    }

    /// DOM-ready step: sync the icon and report whether the control exists.
    ///
    /// The host attaches the click listener only when this returns `true`.
    pub fn on_dom_ready(&self) -> bool {
        self.update_toggle_button_icon(self.preferred_theme());
        let present = self.document.has_element(&self.config.toggle_id);
        if !present {
            log::debug!("theme: no #{} in document, toggle disabled", self.config.toggle_id);
        }
        present
    }

    /// Click step: flip the current theme, persist it, apply it, show it.
    pub fn on_click(&self) -> Theme {
        let next = self.current_theme().flipped();
        if let Err(e) = self.store.set(&self.config.storage_key, next.as_str()) {
            log::warn!("theme: persisting {next} failed: {e}");
        }
        self.set_theme(next);
        self.update_toggle_button_icon(next);
        log::debug!("theme: toggled to {next}");
        next
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

fn read_stored_theme<S: PreferenceStore>(store: &S, key: &str) -> Option<Theme> {
    let raw = match store.get(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return None,
        Err(e) => {
            log::warn!("theme: reading stored preference failed: {e}");
            return None;
        }
    };
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("theme: ignoring stored preference: {e}");
            None
        }
    }
}
