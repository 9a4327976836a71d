//! Surface - The pixel buffer container
//!
//! `Surface` is the image type consumed and produced by the transforms.
//!
//! # Pixel layout
//!
//! - Pixel data is a row-major byte buffer
//! - Every row starts `pitch` bytes after the previous one
//! - `pitch >= width * bytes_per_pixel`; any extra bytes are row padding
//! - Multi-byte pixels keep the channel order of whoever filled the buffer
//!
//! # Guard rows
//!
//! A surface may own more rows of backing storage than its logical height
//! (see [`Surface::with_guard_rows`]). Those rows are never reachable through
//! the public accessors.
//!
//! # Ownership model
//!
//! `Surface` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `SurfaceMut` via [`Surface::try_into_mut`]
//! or [`Surface::to_mut`], then convert back with `Into<Surface>`.

mod access;
mod compare;

pub use access::rgba_offset;

use crate::error::{Error, Result};
use crate::pixel::Rgba;
use std::sync::Arc;

/// Pixel storage format (bytes per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum PixelFormat {
    /// 8-bit palette index
    Indexed8 = 1,
    /// 16-bit packed color
    Rgb16 = 2,
    /// 24-bit color without alpha
    Rgb24 = 3,
    /// 32-bit color with alpha
    #[default]
    Rgba32 = 4,
}

impl PixelFormat {
    /// Create `PixelFormat` from a byte count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if `bytes` is not 1, 2, 3, or 4.
    pub fn from_bytes_per_pixel(bytes: u32) -> Result<Self> {
        match bytes {
            1 => Ok(PixelFormat::Indexed8),
            2 => Ok(PixelFormat::Rgb16),
            3 => Ok(PixelFormat::Rgb24),
            4 => Ok(PixelFormat::Rgba32),
            _ => Err(Error::InvalidFormat(bytes)),
        }
    }

    /// Get the number of bytes per pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> u32 {
        self as u32
    }

    /// Get the number of bits per pixel.
    #[inline]
    pub fn bits(self) -> u32 {
        self.bytes_per_pixel() * 8
    }

    /// Check whether this is the 4-byte RGBA layout the samplers operate on.
    #[inline]
    pub fn is_rgba32(self) -> bool {
        self == PixelFormat::Rgba32
    }
}

/// Internal surface data
#[derive(Debug, Clone)]
struct SurfaceData {
    /// Width in pixels
    width: u32,
    /// Logical height in pixels
    height: u32,
    /// Bytes per row
    pitch: u32,
    /// Pixel storage format
    format: PixelFormat,
    /// Rows of backing storage (`height` plus hidden guard rows)
    rows: u32,
    /// Pixel bytes, `pitch * rows` long
    data: Vec<u8>,
}

impl SurfaceData {
    fn allocate(
        width: u32,
        height: u32,
        pitch: u32,
        format: PixelFormat,
        guard_rows: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let min = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(Error::AllocationFailed)?;
        if pitch < min {
            return Err(Error::InvalidPitch { pitch, min });
        }

        let rows = height
            .checked_add(guard_rows)
            .ok_or(Error::AllocationFailed)?;
        let size = (pitch as usize)
            .checked_mul(rows as usize)
            .ok_or(Error::AllocationFailed)?;
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailed)?;
        data.resize(size, 0);

        Ok(SurfaceData {
            width,
            height,
            pitch,
            format,
            rows,
            data,
        })
    }

    #[inline]
    fn row_range(&self, y: u32) -> std::ops::Range<usize> {
        let start = y as usize * self.pitch as usize;
        start..start + self.width as usize * self.format.bytes_per_pixel() as usize
    }

    #[inline]
    fn logical_len(&self) -> usize {
        self.pitch as usize * self.height as usize
    }
}

/// Surface - Main pixel container
///
/// `Surface` uses reference counting via `Arc` for cheap cloning.
///
/// # Examples
///
/// ```
/// use rotozoom_core::{PixelFormat, Surface};
///
/// let surface = Surface::new(640, 480, PixelFormat::Rgba32).unwrap();
/// assert_eq!(surface.width(), 640);
/// assert_eq!(surface.pitch(), 640 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    inner: Arc<SurfaceData>,
}

impl Surface {
    /// Create a new surface with tightly packed rows.
    ///
    /// The pixel data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the buffer cannot be obtained.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let pitch = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(Error::AllocationFailed)?;
        Self::with_pitch(width, height, pitch, format)
    }

    /// Create a new surface with an explicit row stride in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPitch`] if `pitch` cannot hold `width` pixels.
    pub fn with_pitch(width: u32, height: u32, pitch: u32, format: PixelFormat) -> Result<Self> {
        let inner = SurfaceData::allocate(width, height, pitch, format, 0)?;
        Ok(Surface {
            inner: Arc::new(inner),
        })
    }

    /// Create a zeroed, tightly packed surface backed by `guard_rows`
    /// extra hidden rows.
    ///
    /// The reported height is `height`; the extra rows absorb sampler
    /// overscan and are never exposed.
    pub fn with_guard_rows(
        width: u32,
        height: u32,
        format: PixelFormat,
        guard_rows: u32,
    ) -> Result<Self> {
        SurfaceMut::with_guard_rows(width, height, format, guard_rows).map(Into::into)
    }

    /// Build a 32-bit surface by evaluating `f(x, y)` for every pixel.
    pub fn from_rgba_fn<F>(width: u32, height: u32, f: F) -> Result<Self>
    where
        F: Fn(u32, u32) -> Rgba,
    {
        let mut surface = SurfaceMut::new(width, height, PixelFormat::Rgba32)?;
        for y in 0..height {
            let row = surface.row_mut(y);
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                f(x as u32, y).write_to(px);
            }
        }
        Ok(surface.into())
    }

    /// Get the surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the logical surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.inner.pitch
    }

    /// Get the pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the number of bytes per pixel.
    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.inner.format.bytes_per_pixel()
    }

    /// Get the number of hidden guard rows behind the logical height.
    #[inline]
    pub fn guard_rows(&self) -> u32 {
        self.inner.rows - self.inner.height
    }

    /// Get the pixel bytes of all logical rows, including row padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data[..self.inner.logical_len()]
    }

    /// Get the pixel bytes of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.inner.height, "row {y} out of range");
        &self.inner.data[self.inner.row_range(y)]
    }

    /// Get the number of strong references to this surface.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two surfaces have the same width, height, and format.
    pub fn sizes_equal(&self, other: &Surface) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.format == other.inner.format
    }

    /// Create a deep copy of this surface.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        self.to_mut().into()
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<SurfaceMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(SurfaceMut { inner: data }),
            Err(arc) => Err(Surface { inner: arc }),
        }
    }

    /// Create a mutable copy of this surface.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> SurfaceMut {
        SurfaceMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable surface
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Surface`] using `Into<Surface>`.
#[derive(Debug)]
pub struct SurfaceMut {
    inner: SurfaceData,
}

impl SurfaceMut {
    /// Create a new zeroed, tightly packed mutable surface.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        Self::with_guard_rows(width, height, format, 0)
    }

    /// Create a zeroed mutable surface backed by `guard_rows` extra hidden
    /// rows. See [`Surface::with_guard_rows`].
    pub fn with_guard_rows(
        width: u32,
        height: u32,
        format: PixelFormat,
        guard_rows: u32,
    ) -> Result<Self> {
        let pitch = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(Error::AllocationFailed)?;
        let inner = SurfaceData::allocate(width, height, pitch, format, guard_rows)?;
        Ok(SurfaceMut { inner })
    }

    /// Get the surface width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the logical surface height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.inner.pitch
    }

    /// Get the pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the number of bytes per pixel.
    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.inner.format.bytes_per_pixel()
    }

    /// Get the number of hidden guard rows behind the logical height.
    #[inline]
    pub fn guard_rows(&self) -> u32 {
        self.inner.rows - self.inner.height
    }

    /// Get the pixel bytes of all logical rows.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data[..self.inner.logical_len()]
    }

    /// Get mutable pixel bytes of all logical rows.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        let len = self.inner.logical_len();
        &mut self.inner.data[..len]
    }

    /// Get the pixel bytes of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.inner.height, "row {y} out of range");
        &self.inner.data[self.inner.row_range(y)]
    }

    /// Get mutable pixel bytes of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.inner.height, "row {y} out of range");
        let range = self.inner.row_range(y);
        &mut self.inner.data[range]
    }
}

impl From<SurfaceMut> for Surface {
    fn from(surface: SurfaceMut) -> Self {
        Surface {
            inner: Arc::new(surface.inner),
        }
    }
}
