//! # theme-toggle
//!
//! Light/dark theme switch for server-rendered Bootstrap pages, compiled to
//! WebAssembly. Applies `data-bs-theme` on `<html>` from the preference in
//! `localStorage["theme"]`, keeps the `#themeToggleButton` icon in sync, and
//! flips and persists the theme on click.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `Theme` value, parsing and icon markup |
//! | [`config`] | Storage key, attribute, control id and icons |
//! | [`ports`] | Storage and document capability traits, in-memory adapters |
//! | [`controller`] | Apply, persist and flip the theme |
//! | [`dispatcher`] | Page events in, controller steps out, in order |
//! | [`error`] | Port and parse failures |
//! | `browser` | web-sys adapters and event wiring (`hydrate` only) |

pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod ports;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use controller::ThemeController;
pub use dispatcher::{Dispatch, Dispatcher, ThemeEvent};
pub use theme::Theme;

/// WASM entry point: install logging and mount the toggle on the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("theme: logger already installed");
    }
    if let Err(e) = browser::mount() {
        log::warn!("theme: toggle not mounted: {e}");
    }
}
