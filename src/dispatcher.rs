//! Single entry point for the host events that drive the controller.
//!
//! The page delivers two kinds of event: `DOMContentLoaded` once, and clicks
//! on the toggle control. The dispatcher tracks which phase the page is in
//! so a click can never run before the ready step has synced the icon and
//! found the control.

use crate::controller::ThemeController;
use crate::ports::{DocumentRoot, PreferenceStore};
use crate::theme::Theme;

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod dispatcher_test;

/// Events delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    DomContentLoaded,
    ToggleClicked,
}

/// Page lifecycle as seen by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Load-time theme applied; the body may not exist yet.
    Loading,
    /// Ready step ran. `listening` is whether the toggle control was found.
    Ready { listening: bool },
}

/// What a dispatched event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The ready step ran; the host should attach a click listener iff `listening`.
    Ready { listening: bool },
    /// A click flipped the theme to this value.
    Applied(Theme),
    /// The event arrived in a phase that does not accept it.
    Ignored,
}

pub struct Dispatcher<S, D> {
    controller: ThemeController<S, D>,
    phase: Phase,
}

impl<S: PreferenceStore, D: DocumentRoot> Dispatcher<S, D> {
    /// Take ownership of the controller and run the load-time step.
    pub fn new(controller: ThemeController<S, D>) -> Self {
        controller.on_load();
        Self { controller, phase: Phase::Loading }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn controller(&self) -> &ThemeController<S, D> {
        &self.controller
    }

    pub fn dispatch(&mut self, event: ThemeEvent) -> Dispatch {
        match (event, self.phase) {
            (ThemeEvent::DomContentLoaded, Phase::Loading) => {
                let listening = self.controller.on_dom_ready();
                self.phase = Phase::Ready { listening };
                Dispatch::Ready { listening }
            }
            (ThemeEvent::ToggleClicked, Phase::Ready { listening: true }) => {
                Dispatch::Applied(self.controller.on_click())
            }
            (event, phase) => {
                log::debug!("theme: ignoring {event:?} while {phase:?}");
                Dispatch::Ignored
            }
        }
    }
}
