//! Cookie Banner
//!
//! A dismissible message element. Dismissal detaches it from the tree;
//! the transition is terminal and a second dismiss is a no-op.

use viewkit_dom::{Dom, NodeId};

/// Cookie-consent banner controller
#[derive(Debug)]
pub struct CookieBanner {
    banner: NodeId,
    close_button: NodeId,
}

impl CookieBanner {
    /// Wire a banner to its close button
    pub fn new(banner: NodeId, close_button: NodeId) -> Self {
        Self { banner, close_button }
    }

    /// Whether the banner has been dismissed
    pub fn dismissed(&self, dom: &Dom) -> bool {
        dom.is_detached(self.banner)
    }

    /// Click entry point. Returns true when the banner was dismissed.
    pub fn handle_click(&self, dom: &mut Dom, target: NodeId) -> bool {
        if self.dismissed(dom) || !dom.contains(self.close_button, target) {
            return false;
        }
        dom.detach(self.banner);
        tracing::debug!(banner = ?self.banner, "cookie banner dismissed");
        true
    }
}
