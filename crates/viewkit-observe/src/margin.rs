//! Root Margin
//!
//! Signed per-edge pixel insets applied to the root rect before computing
//! intersection. Positive values grow the root (triggering before the
//! literal edge); negative values shrink it (triggering after).

use crate::{ObserveError, Rect};

/// Per-edge root margin in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    /// No margin
    pub const ZERO: RootMargin = RootMargin {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Same margin on every edge
    pub const fn all(px: f32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Parse a CSS-style margin shorthand: 1 to 4 signed `px` components
    /// (`"200px"`, `"-90px 0px"`, ...). Bare `0` is accepted.
    pub fn parse(s: &str) -> Result<Self, ObserveError> {
        let invalid = || ObserveError::InvalidRootMargin(s.to_string());

        let parts: Vec<f32> = s
            .split_whitespace()
            .map(|part| {
                let number = if part == "0" {
                    "0"
                } else {
                    part.strip_suffix("px").ok_or_else(invalid)?
                };
                number.parse::<f32>().map_err(|_| invalid())
            })
            .collect::<Result<_, _>>()?;

        match parts.as_slice() {
            [all] => Ok(Self::all(*all)),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(invalid()),
        }
    }

    /// Apply this margin to a root rect
    pub fn apply(&self, root: &Rect) -> Rect {
        Rect::new(
            root.x - self.left,
            root.y - self.top,
            root.width + self.left + self.right,
            root.height + self.top + self.bottom,
        )
    }
}
