//! Visibility Reactor
//!
//! One generic visibility-reactive state machine behind the reveal, lazy
//! and sticky controllers. One-shot vs continuous is a policy flag, not a
//! different mechanism: a one-shot reactor unobserves a target on its
//! first enter and drops any later events for it; a continuous reactor
//! keeps observing and re-evaluates on every entry.

use std::collections::HashSet;
use viewkit_dom::{Dom, NodeId};
use viewkit_observe::{ObserverHub, ObserverId, VisibilityEntry};

/// Reactor trigger policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fire `on_enter` at most once per target, then unobserve it
    OneShot,
    /// Re-evaluate on every entry; `on_exit` fires on leaving
    Continuous,
}

/// Per-target transition behavior
pub trait VisibilityHandler {
    /// Target crossed into view
    fn on_enter(&mut self, dom: &mut Dom, target: NodeId);

    /// Target crossed out of view (continuous reactors only)
    fn on_exit(&mut self, _dom: &mut Dom, _target: NodeId) {}
}

/// Visibility-reactive state machine
#[derive(Debug)]
pub struct Reactor<H> {
    mode: TriggerMode,
    observer: ObserverId,
    fired: HashSet<NodeId>,
    handler: H,
}

impl<H: VisibilityHandler> Reactor<H> {
    /// Create a one-shot reactor
    pub fn one_shot(observer: ObserverId, handler: H) -> Self {
        Self::new(TriggerMode::OneShot, observer, handler)
    }

    /// Create a continuous reactor
    pub fn continuous(observer: ObserverId, handler: H) -> Self {
        Self::new(TriggerMode::Continuous, observer, handler)
    }

    fn new(mode: TriggerMode, observer: ObserverId, handler: H) -> Self {
        Self {
            mode,
            observer,
            fired: HashSet::new(),
            handler,
        }
    }

    /// The observer this reactor is subscribed to
    pub fn observer(&self) -> ObserverId {
        self.observer
    }

    /// The wrapped handler
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The wrapped handler, mutably
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume an entry batch from this reactor's observer.
    pub fn dispatch(&mut self, dom: &mut Dom, hub: &mut ObserverHub, entries: &[VisibilityEntry]) {
        for entry in entries {
            // Stale events for a target that already fired (or was
            // unobserved) must not re-transition it.
            if self.mode == TriggerMode::OneShot && self.fired.contains(&entry.target) {
                continue;
            }

            if entry.is_intersecting {
                self.handler.on_enter(dom, entry.target);
                if self.mode == TriggerMode::OneShot {
                    self.fired.insert(entry.target);
                    hub.unobserve(self.observer, entry.target);
                }
            } else if self.mode == TriggerMode::Continuous {
                self.handler.on_exit(dom, entry.target);
            }
        }
    }
}
