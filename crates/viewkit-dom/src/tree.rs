//! Element Tree
//!
//! Vec arena of elements with parent links, ancestor traversal and
//! `closest`-style matching.

use crate::{DomError, Element, NodeId, SimpleSelector};

/// Arena-backed element store
#[derive(Debug, Default)]
pub struct Dom {
    nodes: Vec<Element>,
}

impl Dom {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements ever created (detached included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a new detached element
    pub fn create(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Element::new(tag));
        id
    }

    /// Get an element
    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.index())
    }

    /// Get an element mutably
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.index())
    }

    /// Attach `child` under `parent`
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(DomError::SelfAppend(child));
        }
        if self.get(parent).is_none() {
            return Err(DomError::UnknownNode(parent));
        }
        let el = self.get_mut(child).ok_or(DomError::UnknownNode(child))?;
        el.parent = Some(parent);
        el.detached = false;
        Ok(())
    }

    /// Detach an element from the tree. Idempotent.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(el) = self.get_mut(node) {
            el.parent = None;
            el.detached = true;
            tracing::debug!(?node, "element detached");
        }
    }

    /// Whether an element has been detached
    pub fn is_detached(&self, node: NodeId) -> bool {
        self.get(node).is_none_or(|el| el.detached)
    }

    /// Iterate a node's ancestors, nearest first
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.get(node).and_then(|el| el.parent);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.get(next).and_then(|el| el.parent);
            Some(next)
        })
    }

    /// Whether `ancestor` is a strict ancestor of `node`
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    /// Whether `node` is `container` or a descendant of it
    pub fn contains(&self, container: NodeId, node: NodeId) -> bool {
        node == container || self.is_ancestor(container, node)
    }

    /// Check a node against a selector
    pub fn matches(&self, node: NodeId, selector: &SimpleSelector) -> bool {
        self.get(node).is_some_and(|el| selector.matches(el))
    }

    /// Nearest matching ancestor, the node itself included
    pub fn closest(&self, node: NodeId, selector: &SimpleSelector) -> Option<NodeId> {
        if self.matches(node, selector) {
            return Some(node);
        }
        self.ancestors(node).find(|&n| self.matches(n, selector))
    }

    // Convenience passthroughs keyed by NodeId. Unknown ids are no-ops;
    // controllers hold ids handed to them at construction.

    /// Check class membership
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|el| el.has_class(class))
    }

    /// Add a class
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.get_mut(node) {
            el.add_class(class);
        }
    }

    /// Remove a class
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.get_mut(node) {
            el.remove_class(class);
        }
    }

    /// Read an attribute
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).and_then(|el| el.attr(name))
    }

    /// Write an attribute
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.get_mut(node) {
            el.set_attr(name, value);
        }
    }

    /// Read a `data-*` attribute by bare name
    pub fn data(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).and_then(|el| el.data(name))
    }

    /// Read an inline style property
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.get(node).and_then(|el| el.style(property))
    }

    /// Write an inline style property
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.get_mut(node) {
            el.set_style(property, value);
        }
    }
}
