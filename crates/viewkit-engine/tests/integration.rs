//! Integration tests - a full page driven through scroll and click
//!
//! Builds a synthetic marketing page and exercises reveal, lazy loading,
//! sticky nav, tabs, carousel, modal and cookie banner together through
//! the page queue and frame loop.

use viewkit_dom::{Dom, NodeId};
use viewkit_engine::{Config, InputEvent, Key, Page};
use viewkit_observe::Rect;
use viewkit_widgets::LoadState;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

struct Fixture {
    page: Page,
    header: NodeId,
    nav: NodeId,
    sections: Vec<NodeId>,
    images: Vec<NodeId>,
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    slides_len: usize,
}

/// Header fills the first screen; two hidden sections with a lazy image
/// each follow, one screen apart.
fn build_page() -> Fixture {
    let mut dom = Dom::new();

    let header = dom.create("header");
    let nav = dom.create("nav");

    let mut sections = Vec::new();
    let mut images = Vec::new();
    for i in 0..2 {
        let section = dom.create("section");
        dom.add_class(section, "section--hidden");
        sections.push(section);

        let img = dom.create("img");
        dom.set_attr(img, "src", &format!("img/card-{i}-lazy.jpg"));
        dom.set_attr(img, "data-src", &format!("img/card-{i}.jpg"));
        dom.add_class(img, "lazy-img");
        dom.append(section, img).unwrap();
        images.push(img);
    }

    let container = dom.create("div");
    let mut tabs = Vec::new();
    let mut panels = Vec::new();
    for key in ["1", "2"] {
        let tab = dom.create("button");
        dom.add_class(tab, "operations__tab");
        dom.set_attr(tab, "data-tab", key);
        dom.append(container, tab).unwrap();
        tabs.push(tab);

        let panel = dom.create("div");
        dom.set_attr(panel, "data-tab", key);
        panels.push(panel);
    }

    let slides: Vec<_> = (0..4).map(|_| dom.create("div")).collect();
    let slides_len = slides.len();

    let mut page = Page::new(dom, Config::default(), VIEWPORT);
    page.install_sticky(header, nav, 90.0);
    page.install_reveal(&sections);
    page.install_lazy(&images);
    page.install_tabs(container, &tabs, &panels);
    page.install_carousel(slides, None).unwrap();

    page.set_rect(header, Rect::new(0.0, 0.0, 800.0, 600.0));
    for (i, &section) in sections.iter().enumerate() {
        page.set_rect(section, Rect::new(0.0, 800.0 + 800.0 * i as f32, 800.0, 400.0));
    }
    for (i, &img) in images.iter().enumerate() {
        page.set_rect(img, Rect::new(100.0, 900.0 + 800.0 * i as f32, 300.0, 200.0));
    }

    Fixture {
        page,
        header,
        nav,
        sections,
        images,
        tabs,
        panels,
        slides_len,
    }
}

fn scroll_to(page: &mut Page, y: f32) {
    page.dispatch(InputEvent::Scroll { y });
    page.run_frame();
}

#[test]
fn test_initial_frame_leaves_everything_untouched() {
    let mut f = build_page();
    scroll_to(&mut f.page, 0.0);

    let dom = f.page.dom();
    assert!(dom.has_class(f.sections[0], "section--hidden"));
    assert_eq!(dom.attr(f.images[0], "src"), Some("img/card-0-lazy.jpg"));
    assert!(!f.page.sticky().unwrap().is_pinned(dom));
}

#[test]
fn test_scroll_reveals_and_pins() {
    let mut f = build_page();
    scroll_to(&mut f.page, 0.0);
    scroll_to(&mut f.page, 700.0);

    let dom = f.page.dom();
    // Header is gone: nav pinned
    assert!(f.page.sticky().unwrap().is_pinned(dom));
    // First section is in view: revealed, lazy swap triggered
    assert!(!dom.has_class(f.sections[0], "section--hidden"));
    assert_eq!(dom.attr(f.images[0], "src"), Some("img/card-0.jpg"));
    assert_eq!(f.page.lazy().unwrap().state(f.images[0]), Some(LoadState::Loading));
    // Second section, a screen lower, still untouched
    assert!(dom.has_class(f.sections[1], "section--hidden"));
    assert_eq!(dom.attr(f.images[1], "src"), Some("img/card-1-lazy.jpg"));
}

#[test]
fn test_scroll_back_unpins_but_keeps_reveals() {
    let mut f = build_page();
    scroll_to(&mut f.page, 0.0);
    scroll_to(&mut f.page, 700.0);
    scroll_to(&mut f.page, 0.0);

    let dom = f.page.dom();
    // Sticky is continuous: unpinned again
    assert!(!f.page.sticky().unwrap().is_pinned(dom));
    // Reveal and lazy are one-shot: no transition back
    assert!(!dom.has_class(f.sections[0], "section--hidden"));
    assert_eq!(dom.attr(f.images[0], "src"), Some("img/card-0.jpg"));
}

#[test]
fn test_oscillating_scroll_toggles_sticky_only() {
    let mut f = build_page();

    for _ in 0..5 {
        scroll_to(&mut f.page, 700.0);
        assert!(f.page.sticky().unwrap().is_pinned(f.page.dom()));
        scroll_to(&mut f.page, 0.0);
        assert!(!f.page.sticky().unwrap().is_pinned(f.page.dom()));
    }

    // The one-shot controllers fired exactly once despite the oscillation
    let dom = f.page.dom();
    assert!(!dom.has_class(f.sections[0], "section--hidden"));
    assert_eq!(f.page.lazy().unwrap().state(f.images[0]), Some(LoadState::Loading));
}

#[test]
fn test_asset_completion_unblurs() {
    let mut f = build_page();
    scroll_to(&mut f.page, 700.0);
    assert!(f.page.dom().has_class(f.images[0], "lazy-img"));

    f.page.dispatch(InputEvent::AssetLoaded { target: f.images[0] });
    f.page.run_frame();

    assert!(!f.page.dom().has_class(f.images[0], "lazy-img"));
    assert_eq!(f.page.lazy().unwrap().state(f.images[0]), Some(LoadState::Loaded));
}

#[test]
fn test_completion_for_untriggered_image_is_noop() {
    let mut f = build_page();
    scroll_to(&mut f.page, 0.0);

    f.page.dispatch(InputEvent::AssetLoaded { target: f.images[1] });
    f.page.run_frame();

    let dom = f.page.dom();
    assert!(dom.has_class(f.images[1], "lazy-img"));
    assert_eq!(dom.attr(f.images[1], "src"), Some("img/card-1-lazy.jpg"));
}

#[test]
fn test_tab_clicks_through_queue() {
    let mut f = build_page();

    f.page.dispatch(InputEvent::Click { target: f.tabs[1] });
    f.page.run_frame();

    let dom = f.page.dom();
    assert!(dom.has_class(f.tabs[1], "operations__tab--active"));
    assert!(dom.has_class(f.panels[1], "operations__content--active"));
    assert!(!dom.has_class(f.tabs[0], "operations__tab--active"));
}

#[test]
fn test_carousel_wrap_scenario() {
    let mut f = build_page();
    assert_eq!(f.slides_len, 4);

    for _ in 0..3 {
        f.page.dispatch(InputEvent::KeyDown { key: Key::ArrowRight });
    }
    f.page.run_frame();
    assert_eq!(f.page.carousel().unwrap().current(), 3);

    f.page.dispatch(InputEvent::KeyDown { key: Key::ArrowRight });
    f.page.run_frame();
    assert_eq!(f.page.carousel().unwrap().current(), 0);

    f.page.dispatch(InputEvent::KeyDown { key: Key::ArrowLeft });
    f.page.run_frame();
    assert_eq!(f.page.carousel().unwrap().current(), 3);
}

#[test]
fn test_modal_and_banner_session() {
    let mut f = build_page();

    let modal = f.page.dom_mut().create("div");
    let overlay = f.page.dom_mut().create("div");
    let open_btn = f.page.dom_mut().create("button");
    let close_btn = f.page.dom_mut().create("button");
    f.page.dom_mut().add_class(modal, "hidden");
    f.page.dom_mut().add_class(overlay, "hidden");
    f.page.install_modal(modal, overlay, vec![open_btn], close_btn);

    let banner = f.page.dom_mut().create("div");
    let banner_close = f.page.dom_mut().create("button");
    f.page.dom_mut().append(f.header, banner).unwrap();
    f.page.dom_mut().append(banner, banner_close).unwrap();
    f.page.install_banner(banner, banner_close);

    f.page.dispatch(InputEvent::Click { target: open_btn });
    f.page.run_frame();
    assert!(f.page.modal().unwrap().is_open(f.page.dom()));

    f.page.dispatch(InputEvent::KeyDown { key: Key::Escape });
    f.page.dispatch(InputEvent::Click { target: banner_close });
    f.page.run_frame();

    assert!(!f.page.modal().unwrap().is_open(f.page.dom()));
    assert!(f.page.banner().unwrap().dismissed(f.page.dom()));
}

#[test]
fn test_nav_never_touched_by_other_controllers() {
    let mut f = build_page();
    scroll_to(&mut f.page, 700.0);

    // Only the sticky controller writes the nav's pinned class; the nav
    // carries nothing else after a full scroll-and-reveal pass.
    let dom = f.page.dom();
    let nav = dom.get(f.nav).unwrap();
    assert_eq!(nav.classes.len(), 1);
    assert!(nav.has_class("sticky"));
}
