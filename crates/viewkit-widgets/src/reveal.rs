//! Section Reveal
//!
//! One-shot: removes a hidden class the first time a target scrolls into
//! view, then stops observing it. `hidden → revealed` with no way back.

use crate::{Reactor, VisibilityHandler};
use viewkit_dom::{Dom, NodeId};
use viewkit_observe::{ObserverHub, ObserverId, ObserverOptions, VisibilityEntry};

/// Removes the hidden class on first intersection
#[derive(Debug)]
struct Unhide {
    hidden_class: String,
}

impl VisibilityHandler for Unhide {
    fn on_enter(&mut self, dom: &mut Dom, target: NodeId) {
        dom.remove_class(target, &self.hidden_class);
        tracing::debug!(?target, "section revealed");
    }
}

/// One-shot reveal controller over a fixed target set
#[derive(Debug)]
pub struct RevealController {
    reactor: Reactor<Unhide>,
}

impl RevealController {
    /// Observe `targets` and reveal each once it is at least `threshold`
    /// visible.
    pub fn new(
        hub: &mut ObserverHub,
        targets: &[NodeId],
        hidden_class: &str,
        threshold: f32,
    ) -> Self {
        let observer = hub.create(ObserverOptions {
            thresholds: vec![threshold],
            ..Default::default()
        });
        for &target in targets {
            hub.observe(observer, target);
        }

        Self {
            reactor: Reactor::one_shot(
                observer,
                Unhide {
                    hidden_class: hidden_class.to_string(),
                },
            ),
        }
    }

    /// The observer feeding this controller
    pub fn observer(&self) -> ObserverId {
        self.reactor.observer()
    }

    /// Consume an entry batch
    pub fn handle(&mut self, dom: &mut Dom, hub: &mut ObserverHub, entries: &[VisibilityEntry]) {
        self.reactor.dispatch(dom, hub, entries);
    }
}
