//! Visibility Observer
//!
//! Tracks a set of targets and emits an entry whenever a target's visible
//! fraction crosses one of the configured thresholds, or its intersecting
//! status flips. The first check after `observe` always reports.

use crate::{Rect, RootMargin};
use std::collections::HashMap;
use viewkit_dom::NodeId;

/// Observer configuration
#[derive(Debug, Clone)]
pub struct ObserverOptions {
    /// Root element rect key (None = viewport)
    pub root: Option<NodeId>,
    /// Margin applied to the root before intersection
    pub root_margin: RootMargin,
    /// Visible-fraction thresholds that trigger an entry
    pub thresholds: Vec<f32>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root: None,
            root_margin: RootMargin::ZERO,
            thresholds: vec![0.0],
        }
    }
}

/// A single visibility report for one target
#[derive(Debug, Clone, Copy)]
pub struct VisibilityEntry {
    pub target: NodeId,
    /// Visible fraction of the target, 0.0 to 1.0
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Visibility observer over a set of targets
#[derive(Debug)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    /// Last reported ratio per target; None until first check
    observed: HashMap<NodeId, Option<f32>>,
    pending: Vec<VisibilityEntry>,
}

impl VisibilityObserver {
    /// Create an observer with the given options
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Observer options
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start observing a target
    pub fn observe(&mut self, target: NodeId) {
        self.observed.entry(target).or_insert(None);
    }

    /// Stop observing a target; no further entries are emitted for it
    pub fn unobserve(&mut self, target: NodeId) {
        self.observed.remove(&target);
        self.pending.retain(|entry| entry.target != target);
    }

    /// Whether a target is currently observed
    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.contains_key(&target)
    }

    /// Stop observing everything
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.pending.clear();
    }

    /// Compare every observed target against the margin-adjusted root and
    /// queue entries for threshold crossings and intersecting-status flips.
    pub fn check(&mut self, root: Rect, rects: &HashMap<NodeId, Rect>) {
        let adjusted = self.options.root_margin.apply(&root);

        for (target, last_ratio) in &mut self.observed {
            let Some(rect) = rects.get(target) else {
                continue;
            };

            let area = rect.area();
            let ratio = if area > 0.0 {
                rect.intersect(&adjusted).map(|i| i.area() / area).unwrap_or(0.0)
            } else {
                0.0
            };
            let is_intersecting = ratio > 0.0;

            let should_notify = match *last_ratio {
                None => true,
                Some(lr) => {
                    let crossed = self
                        .options
                        .thresholds
                        .iter()
                        .any(|&t| (lr < t && ratio >= t) || (lr >= t && ratio < t));
                    crossed || (lr > 0.0) != is_intersecting
                }
            };

            if should_notify {
                *last_ratio = Some(ratio);
                self.pending.push(VisibilityEntry {
                    target: *target,
                    ratio,
                    is_intersecting,
                });
            }
        }
    }

    /// Drain queued entries
    pub fn take_entries(&mut self) -> Vec<VisibilityEntry> {
        std::mem::take(&mut self.pending)
    }

    /// Whether entries are queued
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
