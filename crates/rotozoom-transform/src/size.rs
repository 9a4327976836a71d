//! Destination size estimation
//!
//! Sizing is pure arithmetic shared by the size queries and the transform
//! entry points, so a caller can allocate or lay out ahead of time and get
//! exactly the extents the transform will produce.

use log::warn;

/// Hidden rows allocated below every transform destination
pub const GUARD_ROWS: u32 = 2;

/// Smallest zoom magnitude and smallest angle treated as non-zero
pub const VALUE_LIMIT: f64 = 0.001;

/// A zoom factor split into its mirroring request and its magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor {
    /// Magnitude, at least [`VALUE_LIMIT`]
    pub magnitude: f64,
    /// Whether the axis is mirrored (the factor was negative)
    pub flip: bool,
}

impl ZoomFactor {
    /// Split a signed zoom factor.
    ///
    /// Magnitudes below [`VALUE_LIMIT`], and NaN, are clamped up to it.
    pub fn new(zoom: f64) -> Self {
        let flip = zoom < 0.0;
        let mut magnitude = zoom.abs();
        if magnitude.is_nan() || magnitude < VALUE_LIMIT {
            warn!("zoom factor {zoom} clamped to {VALUE_LIMIT}");
            magnitude = VALUE_LIMIT;
        }
        ZoomFactor { magnitude, flip }
    }

    /// Zoomed length of `extent`, rounded to nearest and at least 1.
    pub fn scale_extent(&self, extent: u32) -> u32 {
        ((f64::from(extent) * self.magnitude + 0.5).floor() as u32).max(1)
    }
}

/// Destination extents plus the trig factors used to derive them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotozoomSize {
    /// Destination width, always even and at least 2
    pub width: u32,
    /// Destination height, always even and at least 2
    pub height: u32,
    /// `sin(angle) * zoom_x`
    pub sin_zoom: f64,
    /// `cos(angle) * zoom_x`
    pub cos_zoom: f64,
}

/// Compute the rotozoom destination size and trig factors.
///
/// Only `zoom_x` scales the trig factors, so the vertical zoom has no effect
/// on the result. Odd source extents lose their last row or column through
/// the integer half-extent, which makes identity sizing round down to even.
///
/// # Arguments
/// * `width`, `height` - Source extents
/// * `angle` - Rotation angle in degrees
/// * `zoom_x` - Horizontal zoom magnitude
/// * `_zoom_y` - Vertical zoom magnitude (unused)
pub fn rotozoom_size_trig(
    width: u32,
    height: u32,
    angle: f64,
    zoom_x: f64,
    _zoom_y: f64,
) -> RotozoomSize {
    let radians = angle.to_radians();
    let sin_zoom = radians.sin() * zoom_x;
    let cos_zoom = radians.cos() * zoom_x;

    let x = f64::from(width / 2);
    let y = f64::from(height / 2);
    let (cx, cy) = (cos_zoom * x, cos_zoom * y);
    let (sx, sy) = (sin_zoom * x, sin_zoom * y);

    let half_w = max_abs([cx + sy, cx - sy, -cx + sy, -cx - sy]);
    let half_h = max_abs([sx + cy, sx - cy, -sx + cy, -sx - cy]);

    RotozoomSize {
        width: doubled_half_extent(half_w),
        height: doubled_half_extent(half_h),
        sin_zoom,
        cos_zoom,
    }
}

fn max_abs(values: [f64; 4]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

fn doubled_half_extent(half: f64) -> u32 {
    let half = (half.ceil() as i32).max(1);
    half as u32 * 2
}

/// Destination size of a rotozoom with uniform zoom.
pub fn rotozoom_surface_size(width: u32, height: u32, angle: f64, zoom: f64) -> (u32, u32) {
    rotozoom_surface_size_xy(width, height, angle, zoom, zoom)
}

/// Destination size of a rotozoom with separate horizontal and vertical zoom.
pub fn rotozoom_surface_size_xy(
    width: u32,
    height: u32,
    angle: f64,
    zoom_x: f64,
    zoom_y: f64,
) -> (u32, u32) {
    let size = rotozoom_size_trig(width, height, angle, zoom_x, zoom_y);
    (size.width, size.height)
}

/// Destination size of a pure zoom.
///
/// Negative factors use their magnitude and tiny factors are clamped to
/// [`VALUE_LIMIT`]. Each extent is rounded to nearest and is at least 1.
pub fn zoom_surface_size(width: u32, height: u32, zoom_x: f64, zoom_y: f64) -> (u32, u32) {
    let zx = ZoomFactor::new(zoom_x);
    let zy = ZoomFactor::new(zoom_y);
    (zx.scale_extent(width), zy.scale_extent(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_factor_split() {
        assert_eq!(
            ZoomFactor::new(-2.0),
            ZoomFactor {
                magnitude: 2.0,
                flip: true
            }
        );
        assert_eq!(ZoomFactor::new(0.0).magnitude, VALUE_LIMIT);
        assert!(!ZoomFactor::new(0.0).flip);
        assert_eq!(ZoomFactor::new(-0.0001).magnitude, VALUE_LIMIT);
        assert!(ZoomFactor::new(-0.0001).flip);
        assert_eq!(ZoomFactor::new(f64::NAN).magnitude, VALUE_LIMIT);
    }

    #[test]
    fn test_identity_size_even() {
        assert_eq!(rotozoom_surface_size(64, 32, 0.0, 1.0), (64, 32));
        assert_eq!(rotozoom_surface_size_xy(10, 20, 0.0, 1.0, 1.0), (10, 20));
    }

    #[test]
    fn test_identity_size_odd_rounds_down() {
        assert_eq!(rotozoom_surface_size(7, 5, 0.0, 1.0), (6, 4));
    }

    #[test]
    fn test_minimum_extent() {
        assert_eq!(rotozoom_surface_size(1, 1, 0.0, 1.0), (2, 2));
        assert_eq!(rotozoom_surface_size(100, 100, 30.0, VALUE_LIMIT), (2, 2));
    }

    #[test]
    fn test_quarter_turn_swaps() {
        let (w, h) = rotozoom_surface_size(40, 20, 90.0, 1.0);
        assert!(w.abs_diff(20) <= 2, "width {w}");
        assert!(h.abs_diff(40) <= 2, "height {h}");
    }

    #[test]
    fn test_diagonal_grows() {
        // 45 degrees: half extents 10 * sqrt(2) ~ 14.14, rounded up to 15
        assert_eq!(rotozoom_surface_size(20, 20, 45.0, 1.0), (30, 30));
    }

    #[test]
    fn test_trig_factors() {
        let s = rotozoom_size_trig(10, 10, 30.0, 2.0, 1.0);
        assert!((s.sin_zoom - 1.0).abs() < 1e-12);
        assert!((s.cos_zoom - 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_y_does_not_scale_trig_factors() {
        let a = rotozoom_size_trig(40, 20, 30.0, 1.5, 1.0);
        let b = rotozoom_size_trig(40, 20, 30.0, 1.5, 4.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zoom_surface_size() {
        assert_eq!(zoom_surface_size(10, 10, 2.0, 0.5), (20, 5));
        assert_eq!(zoom_surface_size(10, 10, -3.0, -1.0), (30, 10));
        assert_eq!(zoom_surface_size(3, 3, 0.5, 0.5), (2, 2));
        assert_eq!(zoom_surface_size(10, 10, 0.0, 0.0), (1, 1));
    }

    #[test]
    fn test_scale_extent_uses_magnitude() {
        assert_eq!(ZoomFactor::new(-2.5).scale_extent(4), 10);
        assert_eq!(ZoomFactor::new(0.1).scale_extent(4), 1);
        assert_eq!(ZoomFactor::new(0.0).scale_extent(400), 1);
    }
}
