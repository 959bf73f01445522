//! viewkit DOM - Element Store
//!
//! Arena-backed element store for the viewkit controllers. Holds tags,
//! class lists, attributes and inline styles; controllers receive the
//! `NodeId`s they drive at construction and never look elements up by
//! ambient selector.

mod element;
mod selector;
mod tree;

pub use element::Element;
pub use selector::SimpleSelector;
pub use tree::Dom;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Construct from a raw arena index. Intended for tests and embedders
    /// that track ids externally.
    pub fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Raw arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM errors
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// Node id does not exist in this store
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),

    /// Attempted to make a node its own ancestor
    #[error("node {0:?} cannot be appended to itself")]
    SelfAppend(NodeId),
}
