//! viewkit Observe - Visibility Observation
//!
//! Boundary-crossing observation: reports when an element's visible
//! fraction relative to a (possibly margin-adjusted) root crosses one of
//! its configured thresholds. Events are best-effort; a crossing missed
//! between two checks is not compensated for.

mod hub;
mod margin;
mod observer;
mod rect;

pub use hub::{ObserverHub, ObserverId};
pub use margin::RootMargin;
pub use observer::{ObserverOptions, VisibilityEntry, VisibilityObserver};
pub use rect::Rect;

/// Observation errors
#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    /// Root margin string could not be parsed
    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),
}
