//! viewkit Engine
//!
//! Facade over the viewkit crates: a `Page` owns the element store, the
//! observer hub and the installed controllers, and drives them from a
//! single-threaded input queue plus per-frame visibility checks.
//!
//! # Example
//! ```rust,ignore
//! use viewkit_engine::{Config, InputEvent, Page};
//! use viewkit_observe::Rect;
//!
//! let mut page = Page::new(dom, Config::default(), Rect::new(0.0, 0.0, 1280.0, 800.0));
//! page.install_reveal(&sections);
//! page.dispatch(InputEvent::Scroll { y: 600.0 });
//! page.run_frame();
//! ```

mod config;
mod event;
mod page;

pub use config::Config;
pub use event::{InputEvent, Key};
pub use page::Page;

// Re-export sub-crates for advanced usage
pub use viewkit_dom as dom;
pub use viewkit_observe as observe;
pub use viewkit_widgets as widgets;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
