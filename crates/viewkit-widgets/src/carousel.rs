//! Carousel
//!
//! Circular slide-index state machine. The cursor is the single source of
//! truth: `next`, `prev` and `goto` all funnel through the same offset
//! recomputation, which rewrites every slide's horizontal transform.

use crate::WidgetError;
use viewkit_dom::{Dom, NodeId};

/// Circular carousel over a fixed slide set
#[derive(Debug)]
pub struct CarouselController {
    slides: Vec<NodeId>,
    current: usize,
}

impl CarouselController {
    /// Create a carousel and position every slide. Fails on an empty
    /// slide set.
    pub fn new(dom: &mut Dom, slides: Vec<NodeId>) -> Result<Self, WidgetError> {
        if slides.is_empty() {
            return Err(WidgetError::EmptyCarousel);
        }
        let mut carousel = Self { slides, current: 0 };
        carousel.apply(dom);
        Ok(carousel)
    }

    /// Current slide index
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects empty slide sets
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Jump to a slide. Any integer is accepted and normalized into
    /// `[0, N-1]` with Euclidean modulo, so callers never pre-validate.
    pub fn goto(&mut self, dom: &mut Dom, index: i64) {
        let len = self.slides.len() as i64;
        self.current = index.rem_euclid(len) as usize;
        tracing::debug!(current = self.current, "carousel moved");
        self.apply(dom);
    }

    /// Advance one slide, wrapping at the end
    pub fn next(&mut self, dom: &mut Dom) {
        let next = if self.current == self.slides.len() - 1 {
            0
        } else {
            self.current + 1
        };
        self.goto(dom, next as i64);
    }

    /// Step back one slide, wrapping at the start
    pub fn prev(&mut self, dom: &mut Dom) {
        let prev = if self.current == 0 {
            self.slides.len() - 1
        } else {
            self.current - 1
        };
        self.goto(dom, prev as i64);
    }

    /// Signed offset of a slide position in percent: 0 for the current
    /// slide, +100 per step right, -100 per step left.
    pub fn offset_of(&self, position: usize) -> i64 {
        100 * (position as i64 - self.current as i64)
    }

    /// Rewrite every slide's transform from the cursor. O(N), N authored.
    fn apply(&mut self, dom: &mut Dom) {
        for (position, &slide) in self.slides.iter().enumerate() {
            let offset = self.offset_of(position);
            dom.set_style(slide, "transform", &format!("translateX({offset}%)"));
        }
    }
}
