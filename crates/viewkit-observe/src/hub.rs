//! Observer Hub
//!
//! Owns every live observer and runs their checks in one pass. Each
//! controller creates its own observer (its own targets, margins and
//! thresholds); the hub is only the shared clock.

use crate::{ObserverOptions, Rect, VisibilityEntry, VisibilityObserver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use viewkit_dom::NodeId;

/// Cancellable observer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

static NEXT_OBSERVER_ID: AtomicU64 = AtomicU64::new(1);

/// Registry of visibility observers
#[derive(Debug, Default)]
pub struct ObserverHub {
    observers: Vec<(ObserverId, VisibilityObserver)>,
}

impl ObserverHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new observer, returning its handle
    pub fn create(&mut self, options: ObserverOptions) -> ObserverId {
        let id = ObserverId(NEXT_OBSERVER_ID.fetch_add(1, Ordering::Relaxed));
        self.observers.push((id, VisibilityObserver::new(options)));
        tracing::debug!(?id, "observer created");
        id
    }

    /// Register a target with an observer
    pub fn observe(&mut self, id: ObserverId, target: NodeId) {
        if let Some(observer) = self.get_mut(id) {
            observer.observe(target);
        }
    }

    /// Deregister a target from an observer
    pub fn unobserve(&mut self, id: ObserverId, target: NodeId) {
        if let Some(observer) = self.get_mut(id) {
            observer.unobserve(target);
            tracing::debug!(?id, ?target, "target unobserved");
        }
    }

    /// Whether an observer still watches a target
    pub fn is_observing(&self, id: ObserverId, target: NodeId) -> bool {
        self.get(id).is_some_and(|observer| observer.is_observing(target))
    }

    /// Drop an observer entirely
    pub fn remove(&mut self, id: ObserverId) {
        self.observers.retain(|(oid, _)| *oid != id);
    }

    fn get(&self, id: ObserverId) -> Option<&VisibilityObserver> {
        self.observers
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, observer)| observer)
    }

    fn get_mut(&mut self, id: ObserverId) -> Option<&mut VisibilityObserver> {
        self.observers
            .iter_mut()
            .find(|(oid, _)| *oid == id)
            .map(|(_, observer)| observer)
    }

    /// Run every observer against the current geometry. Returns one entry
    /// batch per observer that has something to report, in creation order.
    pub fn process(
        &mut self,
        viewport: Rect,
        rects: &HashMap<NodeId, Rect>,
    ) -> Vec<(ObserverId, Vec<VisibilityEntry>)> {
        let mut batches = Vec::new();
        for (id, observer) in &mut self.observers {
            let root = observer
                .options()
                .root
                .and_then(|node| rects.get(&node).copied())
                .unwrap_or(viewport);
            observer.check(root, rects);
            if observer.has_pending() {
                batches.push((*id, observer.take_entries()));
            }
        }
        batches
    }
}
