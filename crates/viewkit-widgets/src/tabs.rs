//! Tab Selection
//!
//! Single delegated click entry point on the tab container. The nearest
//! tab ancestor of the click target is resolved; clicks that hit no tab
//! (container padding) are no-ops. At most one (tab, panel) pair is
//! active at a time, keyed by a shared `data-tab` identifier.

use viewkit_dom::{Dom, NodeId, SimpleSelector};

/// A fixed group of tabs and their content panels
#[derive(Debug)]
pub struct TabGroup {
    container: NodeId,
    tab_selector: SimpleSelector,
    active_tab_class: String,
    active_panel_class: String,
    /// (tab, panel) pairs matched by data-tab key at construction
    pairs: Vec<(NodeId, NodeId)>,
}

impl TabGroup {
    /// Build a tab group. Tabs and panels are paired by their `data-tab`
    /// value; a tab with no matching panel is dropped with a warning.
    pub fn new(
        dom: &Dom,
        container: NodeId,
        tabs: &[NodeId],
        panels: &[NodeId],
        tab_class: &str,
        active_tab_class: &str,
        active_panel_class: &str,
    ) -> Self {
        let mut pairs = Vec::with_capacity(tabs.len());
        for &tab in tabs {
            let key = dom.data(tab, "tab");
            let panel = key.and_then(|key| {
                panels
                    .iter()
                    .copied()
                    .find(|&panel| dom.data(panel, "tab") == Some(key))
            });
            match panel {
                Some(panel) => pairs.push((tab, panel)),
                None => tracing::warn!(?tab, "tab has no matching panel, dropped"),
            }
        }

        Self {
            container,
            tab_selector: SimpleSelector::Class(tab_class.to_string()),
            active_tab_class: active_tab_class.to_string(),
            active_panel_class: active_panel_class.to_string(),
            pairs,
        }
    }

    /// Number of (tab, panel) pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the group holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The currently active tab, if any
    pub fn active(&self, dom: &Dom) -> Option<NodeId> {
        self.pairs
            .iter()
            .map(|&(tab, _)| tab)
            .find(|&tab| dom.has_class(tab, &self.active_tab_class))
    }

    /// Delegated click entry point. Returns true when a tab was selected.
    pub fn handle_click(&self, dom: &mut Dom, target: NodeId) -> bool {
        if !dom.contains(self.container, target) {
            return false;
        }

        // Guard clause: click on container padding or other non-tab area
        let Some(clicked) = dom.closest(target, &self.tab_selector) else {
            return false;
        };

        let Some(&(tab, panel)) = self.pairs.iter().find(|&&(tab, _)| tab == clicked) else {
            return false;
        };

        // Clear everything, then activate the matched pair. Idempotent
        // under repeated clicks on the same tab.
        for &(t, p) in &self.pairs {
            dom.remove_class(t, &self.active_tab_class);
            dom.remove_class(p, &self.active_panel_class);
        }
        dom.add_class(tab, &self.active_tab_class);
        dom.add_class(panel, &self.active_panel_class);

        tracing::debug!(?tab, "tab selected");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        dom: Dom,
        group: TabGroup,
        tabs: Vec<NodeId>,
        panels: Vec<NodeId>,
        container: NodeId,
    }

    fn fixture() -> Fixture {
        let mut dom = Dom::new();
        let container = dom.create("div");

        let mut tabs = Vec::new();
        let mut panels = Vec::new();
        for key in ["1", "2", "3"] {
            let tab = dom.create("button");
            dom.add_class(tab, "tab");
            dom.set_attr(tab, "data-tab", key);
            dom.append(container, tab).unwrap();
            tabs.push(tab);

            let panel = dom.create("div");
            dom.set_attr(panel, "data-tab", key);
            panels.push(panel);
        }

        let group = TabGroup::new(&dom, container, &tabs, &panels, "tab", "tab--active", "content--active");
        Fixture { dom, group, tabs, panels, container }
    }

    #[test]
    fn test_single_active_pair() {
        let mut f = fixture();

        assert!(f.group.handle_click(&mut f.dom, f.tabs[1]));
        assert!(f.dom.has_class(f.tabs[1], "tab--active"));
        assert!(f.dom.has_class(f.panels[1], "content--active"));

        assert!(f.group.handle_click(&mut f.dom, f.tabs[2]));
        for i in 0..3 {
            let expect = i == 2;
            assert_eq!(f.dom.has_class(f.tabs[i], "tab--active"), expect);
            assert_eq!(f.dom.has_class(f.panels[i], "content--active"), expect);
        }
    }

    #[test]
    fn test_click_on_descendant_resolves_tab() {
        let mut f = fixture();
        let span = f.dom.create("span");
        f.dom.append(f.tabs[0], span).unwrap();

        assert!(f.group.handle_click(&mut f.dom, span));
        assert!(f.dom.has_class(f.tabs[0], "tab--active"));
    }

    #[test]
    fn test_padding_click_is_noop() {
        let mut f = fixture();
        f.group.handle_click(&mut f.dom, f.tabs[0]);

        assert!(!f.group.handle_click(&mut f.dom, f.container));
        assert!(f.dom.has_class(f.tabs[0], "tab--active"));
        assert_eq!(f.group.active(&f.dom), Some(f.tabs[0]));
    }

    #[test]
    fn test_outside_click_is_noop() {
        let mut f = fixture();
        let outside = f.dom.create("button");
        f.dom.add_class(outside, "tab");

        assert!(!f.group.handle_click(&mut f.dom, outside));
        assert_eq!(f.group.active(&f.dom), None);
    }

    #[test]
    fn test_repeat_click_idempotent() {
        let mut f = fixture();
        f.group.handle_click(&mut f.dom, f.tabs[0]);
        f.group.handle_click(&mut f.dom, f.tabs[0]);

        // Still active, not toggled off
        assert!(f.dom.has_class(f.tabs[0], "tab--active"));
        assert!(f.dom.has_class(f.panels[0], "content--active"));
    }

    #[test]
    fn test_unpaired_tab_dropped() {
        let mut dom = Dom::new();
        let container = dom.create("div");
        let tab = dom.create("button");
        dom.add_class(tab, "tab");
        dom.set_attr(tab, "data-tab", "9");
        dom.append(container, tab).unwrap();

        let group = TabGroup::new(&dom, container, &[tab], &[], "tab", "a", "b");
        assert!(group.is_empty());
    }
}
