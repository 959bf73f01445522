//! Engine Configuration
//!
//! Class-name conventions, thresholds and margins for the installed
//! controllers. Defaults match the marketing-page conventions the
//! controllers were written against.

use serde::{Deserialize, Serialize};

/// Page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Class removed when a section is revealed
    pub section_hidden_class: String,

    /// Visible fraction required before a section reveals
    pub reveal_threshold: f32,

    /// Blur class removed once a lazy asset finishes loading
    pub lazy_loading_class: String,

    /// How far below the viewport edge lazy loading starts (px)
    pub lazy_margin_px: f32,

    /// Class toggled on the nav bar while pinned
    pub sticky_pinned_class: String,

    /// Class identifying a tab inside the tab container
    pub tab_class: String,

    /// Class carried by the active tab
    pub tab_active_class: String,

    /// Class carried by the active content panel
    pub panel_active_class: String,

    /// Class hiding the modal and overlay
    pub modal_hidden_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            section_hidden_class: "section--hidden".to_string(),
            reveal_threshold: 0.15,
            lazy_loading_class: "lazy-img".to_string(),
            lazy_margin_px: 200.0,
            sticky_pinned_class: "sticky".to_string(),
            tab_class: "operations__tab".to_string(),
            tab_active_class: "operations__tab--active".to_string(),
            panel_active_class: "operations__content--active".to_string(),
            modal_hidden_class: "hidden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reveal_threshold, 0.15);
        assert_eq!(config.section_hidden_class, "section--hidden");
    }
}
