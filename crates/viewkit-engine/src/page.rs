//! Page
//!
//! Owns the element store, the observer hub and the installed
//! controllers. Input events run to completion, one at a time, off a
//! FIFO queue; visibility checks run once per frame and each observer's
//! entry batch is routed to the controller subscribed to it. The page
//! does no layout: the embedder supplies per-element rects.

use crate::{Config, InputEvent, Key};
use std::collections::{HashMap, VecDeque};
use viewkit_dom::{Dom, NodeId};
use viewkit_observe::{ObserverHub, Rect};
use viewkit_widgets::{
    CarouselController, CookieBanner, LazyAssetController, ModalController, RevealController,
    StickyNavController, TabGroup, WidgetError,
};

/// A wired page: element store, observers, controllers, input queue
#[derive(Debug)]
pub struct Page {
    dom: Dom,
    hub: ObserverHub,
    config: Config,
    viewport: Rect,
    rects: HashMap<NodeId, Rect>,
    queue: VecDeque<InputEvent>,

    reveal: Option<RevealController>,
    lazy: Option<LazyAssetController>,
    sticky: Option<StickyNavController>,
    tabs: Option<TabGroup>,
    carousel: Option<CarouselController>,
    carousel_buttons: Option<(NodeId, NodeId)>,
    modal: Option<ModalController>,
    banner: Option<CookieBanner>,
}

impl Page {
    /// Create a page over an element store
    pub fn new(dom: Dom, config: Config, viewport: Rect) -> Self {
        Self {
            dom,
            hub: ObserverHub::new(),
            config,
            viewport,
            rects: HashMap::new(),
            queue: VecDeque::new(),
            reveal: None,
            lazy: None,
            sticky: None,
            tabs: None,
            carousel: None,
            carousel_buttons: None,
            modal: None,
            banner: None,
        }
    }

    /// The element store
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// The element store, mutably
    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// The page configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Supply an element's document-coordinate rect
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        self.rects.insert(node, rect);
    }

    /// Install the one-shot section reveal over `targets`
    pub fn install_reveal(&mut self, targets: &[NodeId]) {
        self.reveal = Some(RevealController::new(
            &mut self.hub,
            targets,
            &self.config.section_hidden_class,
            self.config.reveal_threshold,
        ));
    }

    /// Install one-shot lazy loading over `targets`
    pub fn install_lazy(&mut self, targets: &[NodeId]) {
        self.lazy = Some(LazyAssetController::new(
            &mut self.hub,
            targets,
            &self.config.lazy_loading_class,
            self.config.lazy_margin_px,
        ));
    }

    /// Install the sticky nav, pinned whenever `sentinel` leaves view
    pub fn install_sticky(&mut self, sentinel: NodeId, nav: NodeId, nav_height: f32) {
        self.sticky = Some(StickyNavController::new(
            &mut self.hub,
            sentinel,
            nav,
            &self.config.sticky_pinned_class,
            nav_height,
        ));
    }

    /// Install delegated tab selection
    pub fn install_tabs(&mut self, container: NodeId, tabs: &[NodeId], panels: &[NodeId]) {
        self.tabs = Some(TabGroup::new(
            &self.dom,
            container,
            tabs,
            panels,
            &self.config.tab_class,
            &self.config.tab_active_class,
            &self.config.panel_active_class,
        ));
    }

    /// Install the carousel, optionally with (prev, next) buttons
    pub fn install_carousel(
        &mut self,
        slides: Vec<NodeId>,
        buttons: Option<(NodeId, NodeId)>,
    ) -> Result<(), WidgetError> {
        self.carousel = Some(CarouselController::new(&mut self.dom, slides)?);
        self.carousel_buttons = buttons;
        Ok(())
    }

    /// Install the modal
    pub fn install_modal(
        &mut self,
        modal: NodeId,
        overlay: NodeId,
        open_buttons: Vec<NodeId>,
        close_button: NodeId,
    ) {
        self.modal = Some(ModalController::new(
            modal,
            overlay,
            open_buttons,
            close_button,
            &self.config.modal_hidden_class,
        ));
    }

    /// Install the cookie banner
    pub fn install_banner(&mut self, banner: NodeId, close_button: NodeId) {
        self.banner = Some(CookieBanner::new(banner, close_button));
    }

    /// The installed carousel, if any
    pub fn carousel(&self) -> Option<&CarouselController> {
        self.carousel.as_ref()
    }

    /// The installed lazy-load controller, if any
    pub fn lazy(&self) -> Option<&LazyAssetController> {
        self.lazy.as_ref()
    }

    /// The installed sticky-nav controller, if any
    pub fn sticky(&self) -> Option<&StickyNavController> {
        self.sticky.as_ref()
    }

    /// The installed modal controller, if any
    pub fn modal(&self) -> Option<&ModalController> {
        self.modal.as_ref()
    }

    /// The installed cookie banner, if any
    pub fn banner(&self) -> Option<&CookieBanner> {
        self.banner.as_ref()
    }

    /// Queue an input event
    pub fn dispatch(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Drain the input queue, running each handler to completion
    pub fn pump(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            self.handle_event(event);
        }
    }

    /// Pump input, then run visibility checks and route entry batches
    pub fn run_frame(&mut self) {
        self.pump();

        let batches = self.hub.process(self.viewport, &self.rects);

        for (id, entries) in batches {
            if let Some(reveal) = &mut self.reveal {
                if reveal.observer() == id {
                    reveal.handle(&mut self.dom, &mut self.hub, &entries);
                    continue;
                }
            }
            if let Some(lazy) = &mut self.lazy {
                if lazy.observer() == id {
                    lazy.handle(&mut self.dom, &mut self.hub, &entries);
                    continue;
                }
            }
            if let Some(sticky) = &mut self.sticky {
                if sticky.observer() == id {
                    sticky.handle(&mut self.dom, &mut self.hub, &entries);
                }
            }
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { target } => self.handle_click(target),
            InputEvent::KeyDown { key } => self.handle_key(key),
            InputEvent::AssetLoaded { target } => {
                if let Some(lazy) = &mut self.lazy {
                    lazy.asset_loaded(&mut self.dom, target);
                }
            }
            InputEvent::Scroll { y } => {
                self.viewport.y = y;
            }
        }
    }

    fn handle_click(&mut self, target: NodeId) {
        if let Some(banner) = &self.banner {
            if banner.handle_click(&mut self.dom, target) {
                return;
            }
        }
        if let Some(modal) = &self.modal {
            if modal.handle_click(&mut self.dom, target) {
                return;
            }
        }
        if let Some(tabs) = &self.tabs {
            if tabs.handle_click(&mut self.dom, target) {
                return;
            }
        }
        if let Some((prev, next)) = self.carousel_buttons {
            if let Some(carousel) = &mut self.carousel {
                if self.dom.contains(prev, target) {
                    carousel.prev(&mut self.dom);
                } else if self.dom.contains(next, target) {
                    carousel.next(&mut self.dom);
                }
            }
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Escape => {
                if let Some(modal) = &self.modal {
                    modal.handle_escape(&mut self.dom);
                }
            }
            Key::ArrowLeft => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.prev(&mut self.dom);
                }
            }
            Key::ArrowRight => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.next(&mut self.dom);
                }
            }
        }
    }
}
