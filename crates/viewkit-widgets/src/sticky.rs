//! Sticky Navigation
//!
//! Continuous: pins the nav bar whenever the header sentinel is out of
//! view and unpins it when the sentinel returns. The observer's root is
//! shrunk by the nav bar's own height so the pin happens exactly where
//! the bar would otherwise overlap content. No hysteresis: rapid toggling
//! near the boundary is accepted steady-state behavior.

use crate::{Reactor, VisibilityHandler};
use viewkit_dom::{Dom, NodeId};
use viewkit_observe::{ObserverHub, ObserverId, ObserverOptions, RootMargin, VisibilityEntry};

/// Toggles the pinned class from sentinel visibility
#[derive(Debug)]
struct PinNav {
    nav: NodeId,
    pinned_class: String,
}

impl VisibilityHandler for PinNav {
    fn on_enter(&mut self, dom: &mut Dom, _target: NodeId) {
        dom.remove_class(self.nav, &self.pinned_class);
        tracing::debug!(nav = ?self.nav, "nav unpinned");
    }

    fn on_exit(&mut self, dom: &mut Dom, _target: NodeId) {
        dom.add_class(self.nav, &self.pinned_class);
        tracing::debug!(nav = ?self.nav, "nav pinned");
    }
}

/// Continuous sticky-nav controller over a single header sentinel
#[derive(Debug)]
pub struct StickyNavController {
    reactor: Reactor<PinNav>,
}

impl StickyNavController {
    /// Observe `sentinel` (the page header) for the controller's whole
    /// lifetime; `nav_height` becomes a negative root margin.
    pub fn new(
        hub: &mut ObserverHub,
        sentinel: NodeId,
        nav: NodeId,
        pinned_class: &str,
        nav_height: f32,
    ) -> Self {
        let observer = hub.create(ObserverOptions {
            root_margin: RootMargin::all(-nav_height),
            ..Default::default()
        });
        hub.observe(observer, sentinel);

        Self {
            reactor: Reactor::continuous(
                observer,
                PinNav {
                    nav,
                    pinned_class: pinned_class.to_string(),
                },
            ),
        }
    }

    /// The observer feeding this controller
    pub fn observer(&self) -> ObserverId {
        self.reactor.observer()
    }

    /// Whether the nav is currently pinned
    pub fn is_pinned(&self, dom: &Dom) -> bool {
        dom.has_class(self.reactor.handler().nav, &self.reactor.handler().pinned_class)
    }

    /// Consume an entry batch
    pub fn handle(&mut self, dom: &mut Dom, hub: &mut ObserverHub, entries: &[VisibilityEntry]) {
        self.reactor.dispatch(dom, hub, entries);
    }
}
