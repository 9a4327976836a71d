//! Sprite offset geometry
//!
//! When a sprite is drawn rotated, its rotated bounding box no longer starts
//! at the sprite's origin. These helpers give the shift that keeps the
//! rotated box's top-left corner where the unrotated one was.

use rotozoom_core::{Point, Rect};

/// Rotate `point` about the origin by `angle` degrees.
///
/// Positive angles turn counterclockwise on screen. The y axis is negated
/// before and after the rotation because surface y grows downward.
///
/// # Example
/// ```
/// use rotozoom_core::Point;
/// use rotozoom_transform::rotate_point;
///
/// let p = rotate_point(Point::new(10.0, 0.0), 90.0);
/// assert!(p.approx_eq(Point::new(0.0, -10.0), 1e-4));
/// ```
pub fn rotate_point(point: Point, angle: f32) -> Point {
    let radians = angle.to_radians();
    let (sin, cos) = radians.sin_cos();
    let up = -point.y;
    Point::new(point.x * cos - up * sin, -(point.x * sin + up * cos))
}

/// Offset of the rotated and zoomed bounding box of `rect`.
///
/// One corner is picked per quadrant of `angle`, which must lie in
/// `[0, 360)`; any other angle yields `(0, 0)`. The offsets are then scaled
/// by the zoom percentages.
pub fn compute_box_offset(rect: &Rect, angle: f32, zoom_x_percent: f32, zoom_y_percent: f32) -> Point {
    let right = rect.right as f32;
    let bottom = rect.bottom as f32;
    let ne = Point::new(right, 0.0);
    let se = Point::new(right, bottom);
    let sw = Point::new(0.0, bottom);

    let (x, y) = if (0.0..90.0).contains(&angle) {
        (0.0, rotate_point(ne, angle).y)
    } else if (90.0..180.0).contains(&angle) {
        (rotate_point(ne, angle).x, rotate_point(se, angle).y)
    } else if (180.0..270.0).contains(&angle) {
        (rotate_point(se, angle).x, rotate_point(sw, angle).y)
    } else if (270.0..360.0).contains(&angle) {
        (rotate_point(sw, angle).x, 0.0)
    } else {
        (0.0, 0.0)
    };

    Point::new(x, y).scale(zoom_x_percent / 100.0, zoom_y_percent / 100.0)
}
