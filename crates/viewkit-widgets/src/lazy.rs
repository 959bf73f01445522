//! Lazy Asset Loading
//!
//! One-shot per target: the first intersection swaps the deferred
//! `data-src` value into `src` and stops observing. "Decided to load" is
//! decoupled from "finished loading": a separate completion signal
//! removes the loading class. A failed load is not compensated for.

use crate::{Reactor, VisibilityHandler};
use std::collections::HashMap;
use viewkit_dom::{Dom, NodeId};
use viewkit_observe::{ObserverHub, ObserverId, ObserverOptions, RootMargin, VisibilityEntry};

/// Per-target load progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Placeholder asset still in place
    Placeholder,
    /// Real asset requested, not yet complete
    Loading,
    /// Real asset complete, loading class removed
    Loaded,
}

/// Swaps `data-src` into `src` on first intersection
#[derive(Debug)]
struct SwapSource {
    loading_class: String,
    states: HashMap<NodeId, LoadState>,
}

impl VisibilityHandler for SwapSource {
    fn on_enter(&mut self, dom: &mut Dom, target: NodeId) {
        let state = self.states.entry(target).or_insert(LoadState::Placeholder);
        if *state != LoadState::Placeholder {
            return;
        }

        let Some(src) = dom.data(target, "src").map(str::to_string) else {
            tracing::warn!(?target, "lazy target has no data-src, left as placeholder");
            return;
        };
        dom.set_attr(target, "src", &src);
        *state = LoadState::Loading;
        tracing::debug!(?target, %src, "lazy asset requested");
    }
}

/// One-shot lazy-load controller over a fixed target set
#[derive(Debug)]
pub struct LazyAssetController {
    reactor: Reactor<SwapSource>,
}

impl LazyAssetController {
    /// Observe `targets`, triggering `margin_px` ahead of the viewport
    /// edge so assets start fetching before they are seen.
    pub fn new(
        hub: &mut ObserverHub,
        targets: &[NodeId],
        loading_class: &str,
        margin_px: f32,
    ) -> Self {
        let observer = hub.create(ObserverOptions {
            root_margin: RootMargin::all(margin_px),
            ..Default::default()
        });

        let mut states = HashMap::with_capacity(targets.len());
        for &target in targets {
            hub.observe(observer, target);
            states.insert(target, LoadState::Placeholder);
        }

        Self {
            reactor: Reactor::one_shot(
                observer,
                SwapSource {
                    loading_class: loading_class.to_string(),
                    states,
                },
            ),
        }
    }

    /// The observer feeding this controller
    pub fn observer(&self) -> ObserverId {
        self.reactor.observer()
    }

    /// Current state of a target
    pub fn state(&self, target: NodeId) -> Option<LoadState> {
        self.reactor.handler().states.get(&target).copied()
    }

    /// Consume an entry batch
    pub fn handle(&mut self, dom: &mut Dom, hub: &mut ObserverHub, entries: &[VisibilityEntry]) {
        self.reactor.dispatch(dom, hub, entries);
    }

    /// Asset-load-completion signal for a target. Only a `Loading` target
    /// transitions; anything else is a no-op.
    pub fn asset_loaded(&mut self, dom: &mut Dom, target: NodeId) {
        let handler = self.reactor.handler_mut();
        let Some(state) = handler.states.get_mut(&target) else {
            return;
        };
        if *state != LoadState::Loading {
            return;
        }

        *state = LoadState::Loaded;
        dom.remove_class(target, &handler.loading_class);
        tracing::debug!(?target, "lazy asset loaded");
    }
}
