//! viewkit Widgets - Stateful UI Controllers
//!
//! The interactive controllers of a page: a circular carousel, delegated
//! tab selection, one-shot reveal and lazy-load triggers, a continuous
//! sticky-nav toggle, and the modal / cookie-banner peripherals. Each
//! controller receives the `NodeId`s it drives at construction and owns
//! its own state cell; no two controllers write the same class on the
//! same element.

mod banner;
mod carousel;
mod lazy;
mod modal;
mod reactor;
mod reveal;
mod sticky;
mod tabs;

pub use banner::CookieBanner;
pub use carousel::CarouselController;
pub use lazy::{LazyAssetController, LoadState};
pub use modal::ModalController;
pub use reactor::{Reactor, TriggerMode, VisibilityHandler};
pub use reveal::RevealController;
pub use sticky::StickyNavController;
pub use tabs::TabGroup;

/// Widget errors
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// Carousel constructed without slides
    #[error("carousel requires at least one slide")]
    EmptyCarousel,
}
