//! Rotation with zoom
//!
//! The destination is scanned row by row and every pixel is mapped back into
//! the source by inverse rotation. Positions advance by constant 16.16
//! increments, so each pixel costs a few integer additions. Pixels whose
//! source position falls outside the source keep the destination's zeroed
//! (fully transparent) value.

use log::debug;
use rotozoom_core::{Rgba, Surface, SurfaceMut};

use crate::error::{TransformError, TransformResult};
use crate::fixed::Fixed;
use crate::interp::{Smoothing, bilinear_rgba};
use crate::size::{GUARD_ROWS, VALUE_LIMIT, ZoomFactor, rotozoom_size_trig};
use crate::zoom::require_rgba32;

/// Fill `dst` with `src` rotated about `(center_x, center_y)`.
///
/// `sin_fixed` and `cos_fixed` are the inverse-zoomed trig factors in 16.16
/// fixed point. They are the per-column source increments along x and y.
/// `dst` is expected to be sized by [`rotozoom_size_trig`].
///
/// # Errors
///
/// Returns [`TransformError::UnsupportedFormat`] unless both surfaces are
/// 32-bit.
#[allow(clippy::too_many_arguments)]
pub fn transform_surface_rgba(
    src: &Surface,
    dst: &mut SurfaceMut,
    center_x: i32,
    center_y: i32,
    sin_fixed: Fixed,
    cos_fixed: Fixed,
    flip_x: bool,
    flip_y: bool,
    smooth: Smoothing,
) -> TransformResult<()> {
    require_rgba32(src.format())?;
    require_rgba32(dst.format())?;

    let sw = i64::from(src.width());
    let sh = i64::from(src.height());
    let mirror = move |dx: i64, dy: i64| {
        (
            if flip_x { (sw - 1) - dx } else { dx },
            if flip_y { (sh - 1) - dy } else { dy },
        )
    };

    let scan = Scan::new(src, dst, center_x, center_y, sin_fixed, cos_fixed);
    match smooth {
        Smoothing::Off => scan.run(dst, |sdx, sdy| {
            let (dx, dy) = mirror(sdx.int_part(), sdy.int_part());
            if dx >= 0 && dy >= 0 && dx < sw && dy < sh {
                Some(src.get_rgba_unchecked(dx as u32, dy as u32))
            } else {
                None
            }
        }),
        Smoothing::On => scan.run(dst, |sdx, sdy| {
            let (dx, dy) = mirror(sdx.int_part(), sdy.int_part());
            if dx < 0 || dy < 0 || dx >= sw - 1 || dy >= sh - 1 {
                return None;
            }
            let (x, y) = (dx as u32, dy as u32);
            let mut c00 = src.get_rgba_unchecked(x, y);
            let mut c01 = src.get_rgba_unchecked(x + 1, y);
            let mut c10 = src.get_rgba_unchecked(x, y + 1);
            let mut c11 = src.get_rgba_unchecked(x + 1, y + 1);
            if flip_x {
                std::mem::swap(&mut c00, &mut c01);
                std::mem::swap(&mut c10, &mut c11);
            }
            if flip_y {
                std::mem::swap(&mut c00, &mut c10);
                std::mem::swap(&mut c01, &mut c11);
            }
            Some(bilinear_rgba(c00, c01, c10, c11, sdx.frac(), sdy.frac()))
        }),
    }
    Ok(())
}

/// Inverse-mapping walker shared by both sampling modes
struct Scan {
    center_y: i64,
    base_x: Fixed,
    base_y: Fixed,
    sin: Fixed,
    cos: Fixed,
}

impl Scan {
    fn new(
        src: &Surface,
        dst: &SurfaceMut,
        center_x: i32,
        center_y: i32,
        sin: Fixed,
        cos: Fixed,
    ) -> Self {
        let cx = i64::from(center_x);
        // Half the extent difference, centering the source in the destination
        let off_x = Fixed::from_raw((i64::from(src.width()) - i64::from(dst.width())) << 15);
        let off_y = Fixed::from_raw((i64::from(src.height()) - i64::from(dst.height())) << 15);
        Scan {
            center_y: i64::from(center_y),
            base_x: Fixed::from_int(cx) - cos * cx + off_x,
            base_y: Fixed::from_int(i64::from(center_y)) - sin * cx + off_y,
            sin,
            cos,
        }
    }

    /// Visit every destination pixel with its 16.16 source position.
    fn run<F>(&self, dst: &mut SurfaceMut, sample: F)
    where
        F: Fn(Fixed, Fixed) -> Option<Rgba>,
    {
        for y in 0..dst.height() {
            let row_offset = self.center_y - i64::from(y);
            let mut sdx = self.base_x + self.sin * row_offset;
            let mut sdy = self.base_y - self.cos * row_offset;
            for px in dst.row_mut(y).chunks_exact_mut(4) {
                if let Some(value) = sample(sdx, sdy) {
                    value.write_to(px);
                }
                sdx += self.cos;
                sdy += self.sin;
            }
        }
    }
}

/// Rotate and zoom a surface with a uniform zoom factor.
///
/// See [`rotozoom_surface_xy`].
pub fn rotozoom_surface(
    src: &Surface,
    angle: f64,
    zoom: f64,
    smooth: Smoothing,
) -> TransformResult<Surface> {
    rotozoom_surface_xy(src, angle, zoom, zoom, smooth)
}

/// Rotate a surface by `angle` degrees (counterclockwise) and zoom it.
///
/// A negative zoom mirrors that axis. The destination is sized to hold the
/// whole rotated source and is allocated with [`GUARD_ROWS`] hidden rows;
/// uncovered pixels are transparent black.
///
/// # Errors
///
/// * [`TransformError::UnsupportedFormat`] for non-32-bit sources
/// * [`TransformError::ZeroAngleRotation`] when `|angle|` does not exceed
///   [`VALUE_LIMIT`]; use [`zoom_surface`](crate::zoom_surface) instead
/// * [`TransformError::Core`] if the destination cannot be allocated
///
/// # Example
/// ```
/// use rotozoom_core::{Rgba, Surface};
/// use rotozoom_transform::{Smoothing, rotozoom_surface};
///
/// let src = Surface::from_rgba_fn(32, 16, |_, _| Rgba::opaque(200, 10, 10)).unwrap();
/// let out = rotozoom_surface(&src, 45.0, 1.0, Smoothing::On).unwrap();
/// assert!(out.width() > 32 && out.height() > 16);
/// ```
pub fn rotozoom_surface_xy(
    src: &Surface,
    angle: f64,
    zoom_x: f64,
    zoom_y: f64,
    smooth: Smoothing,
) -> TransformResult<Surface> {
    require_rgba32(src.format())?;

    let zx = ZoomFactor::new(zoom_x);
    let zy = ZoomFactor::new(zoom_y);

    if angle.is_nan() || angle.abs() <= VALUE_LIMIT {
        return Err(TransformError::ZeroAngleRotation { angle });
    }

    let size = rotozoom_size_trig(src.width(), src.height(), angle, zx.magnitude, zy.magnitude);
    let zoom_inv = 65536.0 / (zx.magnitude * zx.magnitude);
    let sin_fixed = Fixed::from_scaled_f64(size.sin_zoom * zoom_inv);
    let cos_fixed = Fixed::from_scaled_f64(size.cos_zoom * zoom_inv);
    debug!(
        "rotozoom {}x{} by {angle} deg, zoom ({}, {}) -> {}x{}",
        src.width(),
        src.height(),
        zx.magnitude,
        zy.magnitude,
        size.width,
        size.height
    );

    let mut dst = SurfaceMut::with_guard_rows(size.width, size.height, src.format(), GUARD_ROWS)?;
    transform_surface_rgba(
        src,
        &mut dst,
        (size.width / 2) as i32,
        (size.height / 2) as i32,
        sin_fixed,
        cos_fixed,
        zx.flip,
        zy.flip,
        smooth,
    )?;
    Ok(dst.into())
}
