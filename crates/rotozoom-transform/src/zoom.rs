//! Axis-aligned zoom
//!
//! Each axis gets a table of accumulated 16.16 source positions, one entry
//! per destination index plus one. The tables never change with the flip
//! flags; mirroring is applied when an entry is turned into a source index.

use log::debug;
use rotozoom_core::{PixelFormat, Surface, SurfaceMut};

use crate::error::{TransformError, TransformResult};
use crate::fixed::Fixed;
use crate::interp::{Smoothing, bilinear_rgba};
use crate::size::{GUARD_ROWS, ZoomFactor};

/// Mapping from destination indices to source indices along one axis
#[derive(Debug, Clone)]
pub struct AxisMap {
    table: Vec<Fixed>,
    last: i64,
    flip: bool,
}

impl AxisMap {
    /// Build the mapping of `dst_len` destination cells onto `src_len`
    /// source cells.
    ///
    /// With smoothing the step spans `src_len - 1` over `dst_len - 1`
    /// intervals so both end cells line up; otherwise it is
    /// `src_len / dst_len`. Accumulated positions are clamped to the last
    /// representable source position.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::AllocationFailed`] if the table cannot be
    /// reserved.
    pub fn new(src_len: u32, dst_len: u32, smooth: Smoothing, flip: bool) -> TransformResult<Self> {
        let (num, den) = if smooth.is_on() {
            (f64::from(src_len.saturating_sub(1)), f64::from(dst_len) - 1.0)
        } else {
            (f64::from(src_len), f64::from(dst_len))
        };
        // A one-cell destination with smoothing divides by zero; the step
        // saturates and the clamp below keeps positions in range.
        let step = Fixed::from_scaled_f64(65536.0 * num / den);
        let limit = Fixed::from_int(i64::from(src_len)) - Fixed::from_raw(1);

        let len = dst_len as usize + 1;
        let mut table = Vec::new();
        table
            .try_reserve_exact(len)
            .map_err(|_| TransformError::AllocationFailed)?;
        let mut pos = Fixed::ZERO;
        for _ in 0..len {
            table.push(pos);
            pos = (pos + step).min(limit);
        }

        Ok(AxisMap {
            table,
            last: i64::from(src_len) - 1,
            flip,
        })
    }

    /// Number of destination cells.
    pub fn len(&self) -> usize {
        self.table.len() - 1
    }

    /// Whether the axis has no destination cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unmirrored source position of destination cell `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Fixed {
        self.table[i]
    }

    /// Source index sampled by destination cell `i`.
    #[inline]
    pub fn source_index(&self, i: usize) -> u32 {
        let cell = self.table[i].int_part();
        let index = if self.flip { self.last - cell } else { cell };
        index as u32
    }

    /// Second source index blended into destination cell `i`.
    ///
    /// One step past [`source_index`](Self::source_index) in the sampling
    /// direction, or the same index at the last source cell.
    #[inline]
    pub fn neighbor_index(&self, i: usize) -> u32 {
        let index = self.source_index(i);
        if self.table[i].int_part() < self.last {
            if self.flip { index - 1 } else { index + 1 }
        } else {
            index
        }
    }

    /// Blend weight of the neighbor for destination cell `i`.
    #[inline]
    pub fn frac(&self, i: usize) -> i32 {
        self.table[i].frac()
    }
}

pub(crate) fn require_rgba32(format: PixelFormat) -> TransformResult<()> {
    if format.is_rgba32() {
        Ok(())
    } else {
        Err(TransformError::UnsupportedFormat(format.bits()))
    }
}

/// Zoom `src` into the pre-sized `dst`.
///
/// Every destination pixel is written. The destination extents decide the
/// scale factors; flips mirror the source along the given axis.
///
/// # Errors
///
/// Returns [`TransformError::UnsupportedFormat`] unless both surfaces are
/// 32-bit, and [`TransformError::AllocationFailed`] if the increment tables
/// cannot be reserved.
pub fn zoom_surface_rgba(
    src: &Surface,
    dst: &mut SurfaceMut,
    flip_x: bool,
    flip_y: bool,
    smooth: Smoothing,
) -> TransformResult<()> {
    require_rgba32(src.format())?;
    require_rgba32(dst.format())?;

    let cols = AxisMap::new(src.width(), dst.width(), smooth, flip_x)?;
    let rows = AxisMap::new(src.height(), dst.height(), smooth, flip_y)?;

    match smooth {
        Smoothing::Off => {
            for y in 0..dst.height() {
                let sy = rows.source_index(y as usize);
                let row = dst.row_mut(y);
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    src.get_rgba_unchecked(cols.source_index(x), sy)
                        .write_to(px);
                }
            }
        }
        Smoothing::On => {
            for y in 0..dst.height() {
                let yi = y as usize;
                let (sy0, sy1, ey) = (rows.source_index(yi), rows.neighbor_index(yi), rows.frac(yi));
                let row = dst.row_mut(y);
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let (sx0, sx1) = (cols.source_index(x), cols.neighbor_index(x));
                    bilinear_rgba(
                        src.get_rgba_unchecked(sx0, sy0),
                        src.get_rgba_unchecked(sx1, sy0),
                        src.get_rgba_unchecked(sx0, sy1),
                        src.get_rgba_unchecked(sx1, sy1),
                        cols.frac(x),
                        ey,
                    )
                    .write_to(px);
                }
            }
        }
    }
    Ok(())
}

/// Zoom a surface by separate horizontal and vertical factors.
///
/// A negative factor mirrors that axis. The result is allocated with
/// [`GUARD_ROWS`] hidden rows.
///
/// # Example
/// ```
/// use rotozoom_core::{Rgba, Surface};
/// use rotozoom_transform::{Smoothing, zoom_surface};
///
/// let src = Surface::from_rgba_fn(8, 4, |x, _| Rgba::opaque(x as u8, 0, 0)).unwrap();
/// let big = zoom_surface(&src, 2.0, -1.0, Smoothing::Off).unwrap();
/// assert_eq!((big.width(), big.height()), (16, 4));
/// ```
pub fn zoom_surface(
    src: &Surface,
    zoom_x: f64,
    zoom_y: f64,
    smooth: Smoothing,
) -> TransformResult<Surface> {
    require_rgba32(src.format())?;

    let zx = ZoomFactor::new(zoom_x);
    let zy = ZoomFactor::new(zoom_y);
    let (dw, dh) = (zx.scale_extent(src.width()), zy.scale_extent(src.height()));
    debug!(
        "zoom {}x{} -> {}x{} (flip x={}, y={}, {:?})",
        src.width(),
        src.height(),
        dw,
        dh,
        zx.flip,
        zy.flip,
        smooth
    );

    let mut dst = SurfaceMut::with_guard_rows(dw, dh, src.format(), GUARD_ROWS)?;
    zoom_surface_rgba(src, &mut dst, zx.flip, zy.flip, smooth)?;
    Ok(dst.into())
}
