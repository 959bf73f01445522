//! Demo page
//!
//! Builds a synthetic marketing page (header, sticky nav, hidden
//! sections, lazy images, tabs, carousel, modal, cookie banner) and
//! drives it through a scripted scroll-and-click session, logging every
//! state transition. Run with `RUST_LOG=debug` for transition detail.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use viewkit_engine::{Config, InputEvent, Key, Page, VERSION};
use viewkit_observe::Rect;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!(version = VERSION, "viewkit demo starting");

    let mut dom = viewkit_dom::Dom::new();

    // Header with nav and cookie banner
    let header = dom.create("header");
    let nav = dom.create("nav");
    let banner = dom.create("div");
    let banner_close = dom.create("button");
    dom.append(header, banner)?;
    dom.append(banner, banner_close)?;

    // Three feature sections, hidden until scrolled into view
    let sections: Vec<_> = (0..3)
        .map(|_| {
            let section = dom.create("section");
            dom.add_class(section, "section--hidden");
            section
        })
        .collect();

    // One lazy image per section
    let images: Vec<_> = (0..3)
        .map(|i| {
            let img = dom.create("img");
            dom.set_attr(img, "src", &format!("img/feature-{i}-lazy.jpg"));
            dom.set_attr(img, "data-src", &format!("img/feature-{i}.jpg"));
            dom.add_class(img, "lazy-img");
            img
        })
        .collect();

    // Tabs
    let tab_container = dom.create("div");
    let mut tabs = Vec::new();
    let mut panels = Vec::new();
    for key in ["1", "2", "3"] {
        let tab = dom.create("button");
        dom.add_class(tab, "operations__tab");
        dom.set_attr(tab, "data-tab", key);
        dom.append(tab_container, tab)?;
        tabs.push(tab);

        let panel = dom.create("div");
        dom.set_attr(panel, "data-tab", key);
        panels.push(panel);
    }

    // Carousel with prev/next buttons
    let slides: Vec<_> = (0..4).map(|_| dom.create("div")).collect();
    let btn_prev = dom.create("button");
    let btn_next = dom.create("button");

    // Modal
    let modal = dom.create("div");
    let overlay = dom.create("div");
    let btn_open = dom.create("button");
    let btn_close = dom.create("button");
    dom.add_class(modal, "hidden");
    dom.add_class(overlay, "hidden");

    let mut page = Page::new(dom, Config::default(), Rect::new(0.0, 0.0, 1280.0, 800.0));
    page.install_banner(banner, banner_close);
    page.install_sticky(header, nav, 90.0);
    page.install_reveal(&sections);
    page.install_lazy(&images);
    page.install_tabs(tab_container, &tabs, &panels);
    page.install_carousel(slides, Some((btn_prev, btn_next)))?;
    page.install_modal(modal, overlay, vec![btn_open], btn_close);

    // Geometry: header fills the first screen, sections follow
    page.set_rect(header, Rect::new(0.0, 0.0, 1280.0, 800.0));
    for (i, &section) in sections.iter().enumerate() {
        page.set_rect(section, Rect::new(0.0, 900.0 + 1000.0 * i as f32, 1280.0, 600.0));
    }
    for (i, &img) in images.iter().enumerate() {
        page.set_rect(img, Rect::new(200.0, 1100.0 + 1000.0 * i as f32, 400.0, 300.0));
    }

    // Scroll through the page one half-screen at a time
    for step in 0..8 {
        let y = 400.0 * step as f32;
        page.dispatch(InputEvent::Scroll { y });
        page.run_frame();
        tracing::info!(
            y,
            pinned = page.sticky().map(|s| s.is_pinned(page.dom())),
            "frame"
        );
    }

    // Simulated asset completions
    for &img in &images {
        page.dispatch(InputEvent::AssetLoaded { target: img });
    }

    // A short click session: dismiss the banner, flip tabs, open and
    // escape the modal, ride the carousel
    page.dispatch(InputEvent::Click { target: banner_close });
    page.dispatch(InputEvent::Click { target: tabs[2] });
    page.dispatch(InputEvent::Click { target: btn_open });
    page.dispatch(InputEvent::KeyDown { key: Key::Escape });
    page.dispatch(InputEvent::Click { target: btn_next });
    page.dispatch(InputEvent::Click { target: btn_next });
    page.dispatch(InputEvent::Click { target: btn_prev });
    page.run_frame();

    tracing::info!(
        banner_dismissed = page.banner().map(|b| b.dismissed(page.dom())),
        modal_open = page.modal().map(|m| m.is_open(page.dom())),
        slide = page.carousel().map(|c| c.current()),
        "session complete"
    );

    Ok(())
}
