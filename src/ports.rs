//! Capability ports for the two browser globals the controller touches.
//!
//! DESIGN
//! ======
//! `PreferenceStore` stands in for `localStorage` and `DocumentRoot` for the
//! parts of `document` the toggle uses: one attribute on the root element and
//! the inner markup of one element looked up by id. The browser adapters live
//! in `browser`; the in-memory adapters here back native tests and any host
//! without a DOM.
//!
//! Absence is an `Option`, never an error. `Err` is reserved for a capability
//! that exists but refused the operation (quota, security policy).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "ports_test.rs"]
mod ports_test;

/// Durable key-value storage for the persisted preference.
pub trait PreferenceStore {
    /// Read `key`, or `None` when no entry exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document root attribute and the element markup the toggle owns.
pub trait DocumentRoot {
    /// Read an attribute of the root element.
    ///
    /// # Errors
    ///
    /// Returns an error when the document has no root element.
    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError>;

    /// Set an attribute of the root element.
    ///
    /// # Errors
    ///
    /// Returns an error when the document has no root element or the name is invalid.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether an element with `id` is currently in the document.
    fn has_element(&self, id: &str) -> bool;

    /// Replace the inner markup of the element with `id`.
    ///
    /// Returns `false` when no such element exists.
    fn set_inner_html(&self, id: &str, html: &str) -> bool;
}

/// In-memory `PreferenceStore`.
///
/// Clones share the same entries, so a test can keep a handle after moving
/// one into the controller.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make subsequent writes fail, like a full or locked-down `localStorage`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Current value without going through the trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only.get() {
            return Err(ThemeError::Storage(format!("write to {key:?} rejected")));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryDom {
    root_attributes: HashMap<String, String>,
    elements: HashMap<String, String>,
}

/// In-memory `DocumentRoot`: root attributes plus elements keyed by id.
///
/// Clones share the same document.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    dom: Rc<RefCell<MemoryDom>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing one empty element with `id`.
    pub fn with_element(id: &str) -> Self {
        let doc = Self::new();
        doc.insert_element(id);
        doc
    }

    /// Add an empty element, as the page template would.
    pub fn insert_element(&self, id: &str) {
        self.dom.borrow_mut().elements.insert(id.to_owned(), String::new());
    }

    /// Inner markup of the element with `id`, if present.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.dom.borrow().elements.get(id).cloned()
    }

    /// Current root attribute value without going through the trait.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.dom.borrow().root_attributes.get(name).cloned()
    }
}

impl DocumentRoot for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.attribute(name))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        if name.is_empty() {
            return Err(ThemeError::Document("empty attribute name".to_owned()));
        }
        self.dom
            .borrow_mut()
            .root_attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.dom.borrow().elements.contains_key(id)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        match self.dom.borrow_mut().elements.get_mut(id) {
            Some(markup) => {
                html.clone_into(markup);
                true
            }
            None => false,
        }
    }
}
