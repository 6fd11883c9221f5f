//! Browser host: web-sys adapters for the ports and DOM event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is glue; the
//! behavior lives in `controller` and `dispatcher` and is tested natively
//! against the in-memory ports.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::{CONFIG_ELEMENT_ID, ThemeConfig};
use crate::controller::ThemeController;
use crate::dispatcher::{Dispatch, Dispatcher, ThemeEvent};
use crate::error::ThemeError;
use crate::ports::{DocumentRoot, PreferenceStore};

type PageDispatcher = Dispatcher<LocalStorage, BrowserDocument>;

/// `window.localStorage`, or nothing when the page may not use it.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("theme: localStorage unavailable: {}", describe(&e));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::Unavailable("localStorage"))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(describe(&e)))
    }
}

/// The live `document`.
#[derive(Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn root(&self) -> Result<web_sys::Element, ThemeError> {
        self.document
            .document_element()
            .ok_or(ThemeError::Unavailable("document element"))
    }

    fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id).and_then(|el| el.text_content())
    }
}

impl DocumentRoot for BrowserDocument {
    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.root()?.get_attribute(name))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root()?
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Document(describe(&e)))
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }
}

/// Build the controller against the live page and wire its events.
///
/// The theme attribute is applied before this returns. The ready step runs
/// on `DOMContentLoaded`, or immediately when the module started after it.
///
/// # Errors
///
/// Returns an error when there is no `window`/`document` or a listener
/// cannot be registered.
pub fn mount() -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::Unavailable("window"))?;
    let document = window.document().ok_or(ThemeError::Unavailable("document"))?;
    let page = BrowserDocument::new(document.clone());

    let config = ThemeConfig::from_json_or_default(page.text_of(CONFIG_ELEMENT_ID).as_deref());
    let store = LocalStorage::from_window(&window);
    let controller = ThemeController::new(store, page.clone(), config);
    let dispatcher = Rc::new(RefCell::new(Dispatcher::new(controller)));

    if !page.is_loading() {
        return on_ready(&dispatcher, &document);
    }

    let ready_dispatcher = Rc::clone(&dispatcher);
    let ready_document = document.clone();
    let on_dom_loaded = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Err(e) = on_ready(&ready_dispatcher, &ready_document) {
            log::warn!("theme: ready step failed: {e}");
        }
    });
    window
        .add_event_listener_with_callback("DOMContentLoaded", on_dom_loaded.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Document(describe(&e)))?;
    on_dom_loaded.forget();
    Ok(())
}

fn on_ready(dispatcher: &Rc<RefCell<PageDispatcher>>, document: &web_sys::Document) -> Result<(), ThemeError> {
    let outcome = dispatcher.borrow_mut().dispatch(ThemeEvent::DomContentLoaded);
    if outcome != (Dispatch::Ready { listening: true }) {
        return Ok(());
    }
    let toggle_id = dispatcher.borrow().controller().config().toggle_id.clone();
    let Some(button) = document.get_element_by_id(&toggle_id) else {
        return Ok(());
    };

    let click_dispatcher = Rc::clone(dispatcher);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        click_dispatcher.borrow_mut().dispatch(ThemeEvent::ToggleClicked);
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Document(describe(&e)))?;
    on_click.forget();
    Ok(())
}

/// Best-effort text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
