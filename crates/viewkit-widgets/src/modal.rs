//! Modal
//!
//! Dismissible modal window with overlay. Open buttons, the close button
//! and overlay clicks are routed through one click entry point; Escape
//! closes only an open modal.

use viewkit_dom::{Dom, NodeId};

/// Modal window controller
#[derive(Debug)]
pub struct ModalController {
    modal: NodeId,
    overlay: NodeId,
    open_buttons: Vec<NodeId>,
    close_button: NodeId,
    hidden_class: String,
}

impl ModalController {
    /// Wire a modal to its overlay and buttons
    pub fn new(
        modal: NodeId,
        overlay: NodeId,
        open_buttons: Vec<NodeId>,
        close_button: NodeId,
        hidden_class: &str,
    ) -> Self {
        Self {
            modal,
            overlay,
            open_buttons,
            close_button,
            hidden_class: hidden_class.to_string(),
        }
    }

    /// Whether the modal is currently shown
    pub fn is_open(&self, dom: &Dom) -> bool {
        !dom.has_class(self.modal, &self.hidden_class)
    }

    /// Show the modal and overlay
    pub fn open(&self, dom: &mut Dom) {
        dom.remove_class(self.modal, &self.hidden_class);
        dom.remove_class(self.overlay, &self.hidden_class);
        tracing::debug!(modal = ?self.modal, "modal opened");
    }

    /// Hide the modal and overlay
    pub fn close(&self, dom: &mut Dom) {
        dom.add_class(self.modal, &self.hidden_class);
        dom.add_class(self.overlay, &self.hidden_class);
        tracing::debug!(modal = ?self.modal, "modal closed");
    }

    /// Click entry point. Returns true when the click was consumed.
    pub fn handle_click(&self, dom: &mut Dom, target: NodeId) -> bool {
        if self.open_buttons.iter().any(|&b| dom.contains(b, target)) {
            self.open(dom);
            return true;
        }
        if dom.contains(self.close_button, target) || target == self.overlay {
            self.close(dom);
            return true;
        }
        false
    }

    /// Escape keydown: closes only an open modal
    pub fn handle_escape(&self, dom: &mut Dom) {
        if self.is_open(dom) {
            self.close(dom);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Dom, ModalController) {
        let mut dom = Dom::new();
        let modal = dom.create("div");
        let overlay = dom.create("div");
        let open_btn = dom.create("button");
        let close_btn = dom.create("button");

        dom.add_class(modal, "hidden");
        dom.add_class(overlay, "hidden");

        let controller = ModalController::new(modal, overlay, vec![open_btn], close_btn, "hidden");
        (dom, controller)
    }

    #[test]
    fn test_open_close_cycle() {
        let (mut dom, modal) = fixture();
        assert!(!modal.is_open(&dom));

        let open_btn = modal.open_buttons[0];
        assert!(modal.handle_click(&mut dom, open_btn));
        assert!(modal.is_open(&dom));
        assert!(!dom.has_class(modal.overlay, "hidden"));

        assert!(modal.handle_click(&mut dom, modal.close_button));
        assert!(!modal.is_open(&dom));
        assert!(dom.has_class(modal.overlay, "hidden"));
    }

    #[test]
    fn test_overlay_click_closes() {
        let (mut dom, modal) = fixture();
        modal.open(&mut dom);

        assert!(modal.handle_click(&mut dom, modal.overlay));
        assert!(!modal.is_open(&dom));
    }

    #[test]
    fn test_escape_only_when_open() {
        let (mut dom, modal) = fixture();

        // Closed: no-op
        modal.handle_escape(&mut dom);
        assert!(!modal.is_open(&dom));

        modal.open(&mut dom);
        modal.handle_escape(&mut dom);
        assert!(!modal.is_open(&dom));
    }

    #[test]
    fn test_unrelated_click_ignored() {
        let (mut dom, modal) = fixture();
        let elsewhere = dom.create("p");

        assert!(!modal.handle_click(&mut dom, elsewhere));
        assert!(!modal.is_open(&dom));
    }
}
