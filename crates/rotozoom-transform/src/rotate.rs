//! Orthogonal rotation
//!
//! Quarter turns are exact pixel permutations and need no resampling.

use log::debug;
use rotozoom_core::{Surface, SurfaceMut};

use crate::error::TransformResult;
use crate::zoom::require_rgba32;

/// Rotate a surface clockwise by `num_clockwise_turns` quarter turns.
///
/// Any integer is accepted; the count is taken modulo 4, so `-1` is one
/// counterclockwise turn. Width and height swap for odd counts.
///
/// # Errors
///
/// Returns [`TransformError::UnsupportedFormat`](crate::TransformError::UnsupportedFormat)
/// for non-32-bit sources.
pub fn rotate_surface_90_degrees(src: &Surface, num_clockwise_turns: i32) -> TransformResult<Surface> {
    require_rgba32(src.format())?;

    let turns = num_clockwise_turns.rem_euclid(4);
    debug!(
        "rotate {}x{} by {} quarter turn(s)",
        src.width(),
        src.height(),
        turns
    );
    match turns {
        0 => Ok(src.deep_clone()),
        1 => rotate_quarter(src, true),
        2 => rotate_half(src),
        _ => rotate_quarter(src, false),
    }
}

fn rotate_quarter(src: &Surface, clockwise: bool) -> TransformResult<Surface> {
    let w = src.width();
    let h = src.height();

    // Output dimensions are swapped
    let mut out = SurfaceMut::new(h, w, src.format())?;
    for y in 0..h {
        for x in 0..w {
            let val = src.get_rgba_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_rgba_unchecked(nx, ny, val);
        }
    }
    Ok(out.into())
}

fn rotate_half(src: &Surface) -> TransformResult<Surface> {
    let w = src.width();
    let h = src.height();

    let mut out = SurfaceMut::new(w, h, src.format())?;
    for y in 0..h {
        for x in 0..w {
            out.set_rgba_unchecked(w - 1 - x, h - 1 - y, src.get_rgba_unchecked(x, y));
        }
    }
    Ok(out.into())
}
