//! Surface comparison
//!
//! Pixel equality ignores row padding and guard rows: two surfaces with
//! different pitches compare equal when their visible pixels match.

use super::Surface;

impl Surface {
    /// Check if two surfaces have identical size, format, and pixels.
    pub fn equals(&self, other: &Surface) -> bool {
        self.sizes_equal(other) && (0..self.height()).all(|y| self.row(y) == other.row(y))
    }

    /// Count the pixels that differ between two surfaces of equal size.
    ///
    /// Returns `None` if the sizes or formats differ.
    pub fn count_pixel_diffs(&self, other: &Surface) -> Option<u64> {
        if !self.sizes_equal(other) {
            return None;
        }
        let bpp = self.bytes_per_pixel() as usize;
        let count = (0..self.height())
            .map(|y| {
                self.row(y)
                    .chunks_exact(bpp)
                    .zip(other.row(y).chunks_exact(bpp))
                    .filter(|(a, b)| a != b)
                    .count() as u64
            })
            .sum();
        Some(count)
    }
}
