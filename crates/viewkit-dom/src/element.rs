//! Element
//!
//! A single element: tag, id, class list, attributes, inline styles.

use crate::NodeId;
use std::collections::{HashMap, HashSet};

/// An element in the store
#[derive(Debug, Clone)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    /// Element id attribute (if any)
    pub id: Option<String>,
    /// Class list
    pub classes: HashSet<String>,
    /// Attributes other than id/class
    pub attrs: HashMap<String, String>,
    /// Inline styles (property -> value)
    pub styles: HashMap<String, String>,
    /// Parent element
    pub parent: Option<NodeId>,
    /// Detached from the tree (removed)
    pub detached: bool,
}

impl Element {
    /// Create a new element with the given tag
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            id: None,
            classes: HashSet::new(),
            attrs: HashMap::new(),
            styles: HashMap::new(),
            parent: None,
            detached: false,
        }
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a class (no-op if present)
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Remove a class (no-op if absent)
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Get a `data-*` attribute by bare name (`data("tab")` reads `data-tab`)
    pub fn data(&self, name: &str) -> Option<&str> {
        self.attrs.get(&format!("data-{name}")).map(String::as_str)
    }

    /// Get an inline style property
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Set an inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }
}
