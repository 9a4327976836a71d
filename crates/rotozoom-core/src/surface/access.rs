//! Pixel access functions
//!
//! Getting and setting individual pixels by `(x, y)`. Only 32-bit surfaces
//! have RGBA accessors; other formats are reachable through the raw rows.
//!
//! The `_unchecked` variants skip the `Option`/`Result` wrapping but still go
//! through slice indexing, so a bad coordinate panics instead of reading
//! another row.

use super::{Surface, SurfaceMut};
use crate::error::{Error, Result};
use crate::pixel::{BYTES_PER_RGBA, Rgba};

/// Byte offset of pixel `(x, y)` in a 32-bit buffer with the given pitch.
#[inline]
pub fn rgba_offset(pitch: u32, x: u32, y: u32) -> usize {
    y as usize * pitch as usize + x as usize * BYTES_PER_RGBA
}

impl Surface {
    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds or the surface
    /// is not 32-bit.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        if !self.format().is_rgba32() || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get the RGBA value at (x, y) of a 32-bit surface.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the logical surface.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> Rgba {
        let offset = rgba_offset(self.pitch(), x, y);
        Rgba::from_bytes(&self.data()[offset..offset + BYTES_PER_RGBA])
    }
}

impl SurfaceMut {
    /// Get the RGBA value at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        if !self.format().is_rgba32() || x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = rgba_offset(self.pitch(), x, y);
        Some(Rgba::from_bytes(
            &self.data()[offset..offset + BYTES_PER_RGBA],
        ))
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for non-32-bit surfaces and
    /// [`Error::PixelOutOfBounds`] if the coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, value: Rgba) -> Result<()> {
        if !self.format().is_rgba32() {
            return Err(Error::UnsupportedFormat(self.bytes_per_pixel()));
        }
        if x >= self.width() || y >= self.height() {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_rgba_unchecked(x, y, value);
        Ok(())
    }

    /// Set the RGBA value at (x, y) of a 32-bit surface.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the logical surface.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, value: Rgba) {
        let offset = rgba_offset(self.pitch(), x, y);
        value.write_to(&mut self.data_mut()[offset..offset + BYTES_PER_RGBA]);
    }

    /// Set every pixel of a 32-bit surface to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for non-32-bit surfaces.
    pub fn fill(&mut self, value: Rgba) -> Result<()> {
        if !self.format().is_rgba32() {
            return Err(Error::UnsupportedFormat(self.bytes_per_pixel()));
        }
        for y in 0..self.height() {
            for px in self.row_mut(y).chunks_exact_mut(BYTES_PER_RGBA) {
                value.write_to(px);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{PixelFormat, Rgba, Surface, SurfaceMut};

    #[test]
    fn test_set_get_rgba() {
        let mut s = SurfaceMut::new(4, 3, PixelFormat::Rgba32).unwrap();
        let px = Rgba::new(10, 20, 30, 40);
        s.set_rgba(3, 2, px).unwrap();
        assert_eq!(s.get_rgba(3, 2), Some(px));
        assert_eq!(s.get_rgba(0, 0), Some(Rgba::TRANSPARENT));

        let s: Surface = s.into();
        assert_eq!(s.get_rgba(3, 2), Some(px));
        assert_eq!(s.get_rgba(4, 2), None);
        assert_eq!(s.get_rgba(3, 3), None);
    }

    #[test]
    fn test_set_rgba_out_of_bounds() {
        let mut s = SurfaceMut::new(4, 3, PixelFormat::Rgba32).unwrap();
        assert!(s.set_rgba(4, 0, Rgba::default()).is_err());
        assert!(s.set_rgba(0, 3, Rgba::default()).is_err());
    }

    #[test]
    fn test_rgba_access_needs_32bit() {
        let mut s = SurfaceMut::new(4, 3, PixelFormat::Rgb24).unwrap();
        assert_eq!(s.get_rgba(0, 0), None);
        assert!(s.set_rgba(0, 0, Rgba::default()).is_err());
        assert!(s.fill(Rgba::default()).is_err());
    }

    #[test]
    fn test_padded_pitch_addressing() {
        let s = Surface::with_pitch(2, 2, 12, PixelFormat::Rgba32).unwrap();
        let mut s = s.try_into_mut().unwrap();
        s.set_rgba(1, 1, Rgba::new(1, 2, 3, 4)).unwrap();
        // row 1 starts at byte 12, pixel 1 at byte 16
        assert_eq!(&s.data()[16..20], &[1, 2, 3, 4]);
        assert!(s.data()[8..12].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill() {
        let mut s = SurfaceMut::new(5, 5, PixelFormat::Rgba32).unwrap();
        let px = Rgba::opaque(1, 2, 3);
        s.fill(px).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(s.get_rgba(x, y), Some(px));
            }
        }
    }
}
