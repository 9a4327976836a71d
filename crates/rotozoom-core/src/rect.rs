//! Rect - Rectangle regions
//!
//! A sprite's local bounding box, stored as edges. `right` and `bottom` are
//! exclusive, so a box of width `w` at the origin has `right == w`.

use crate::error::{Error, Result};

/// A rectangle given by its four edges
///
/// A plain Copy type; it is small and frequently passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub left: i32,
    /// Top y coordinate
    pub top: i32,
    /// Right x coordinate (exclusive)
    pub right: i32,
    /// Bottom y coordinate (exclusive)
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if `right < left` or `bottom < top`.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        if right < left || bottom < top {
            return Err(Error::InvalidParameter(format!(
                "rect edges out of order: left={left}, top={top}, right={right}, bottom={bottom}"
            )));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle of the given size anchored at the origin
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new_unchecked(0, 0, width, height)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}
