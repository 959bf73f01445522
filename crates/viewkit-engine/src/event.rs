//! Input Events
//!
//! Discrete input tasks delivered to the page queue: bubbled clicks,
//! keydowns, asset-load completions and scroll position updates.

use viewkit_dom::NodeId;

/// Keys the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// An input task on the page queue
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Bubbled click; `target` is the innermost element hit
    Click { target: NodeId },
    /// Global keydown
    KeyDown { key: Key },
    /// A swapped-in asset finished fetching
    AssetLoaded { target: NodeId },
    /// Viewport scrolled to a vertical offset
    Scroll { y: f32 },
}
