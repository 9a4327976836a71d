//! Box offset regression test
//!
//! Tests sprite offset geometry:
//!   1. rotate_point reference values
//!   2. No offset without rotation
//!   3. The per-quadrant corner choice matches the minimum over all corners
//!   4. Offsets scale with the zoom percentages

use rotozoom_core::{Point, Rect};
use rotozoom_test::RegParams;
use rotozoom_transform::{compute_box_offset, rotate_point};

fn corner_minimum(rect: &Rect, angle: f32) -> Point {
    let (r, b) = (rect.right as f32, rect.bottom as f32);
    [(0.0, 0.0), (r, 0.0), (r, b), (0.0, b)]
        .into_iter()
        .map(|c| rotate_point(Point::from(c), angle))
        .fold(Point::new(f32::MAX, f32::MAX), |m, p| {
            Point::new(m.x.min(p.x), m.y.min(p.y))
        })
}

#[test]
fn offset_reg() {
    let mut rp = RegParams::new("offset");

    // --- Test 1: rotate_point ---
    let p = rotate_point(Point::new(10.0, 0.0), 90.0);
    rp.compare_values(0.0, p.x as f64, 1e-4);
    rp.compare_values(-10.0, p.y as f64, 1e-4);
    let p = rotate_point(Point::new(10.0, 0.0), 45.0);
    rp.compare_values(7.0711, p.x as f64, 1e-3);
    rp.compare_values(-7.0711, p.y as f64, 1e-3);

    // --- Test 2: zero angle ---
    for rect in [Rect::from_size(40, 20), Rect::from_size(1, 1), Rect::from_size(0, 0)] {
        let o = compute_box_offset(&rect, 0.0, 100.0, 100.0);
        rp.compare_values(0.0, o.x as f64, 0.0);
        rp.compare_values(0.0, o.y as f64, 0.0);
    }

    // --- Test 3: quadrant shortcut ---
    let rect = Rect::from_size(64, 24);
    for step in 0..48 {
        let angle = step as f32 * 7.5;
        let o = compute_box_offset(&rect, angle, 100.0, 100.0);
        let m = corner_minimum(&rect, angle);
        rp.compare_values(m.x as f64, o.x as f64, 1e-2);
        rp.compare_values(m.y as f64, o.y as f64, 1e-2);
    }

    // --- Test 4: zoom scaling ---
    let o = compute_box_offset(&rect, 135.0, 100.0, 100.0);
    let z = compute_box_offset(&rect, 135.0, 250.0, 40.0);
    rp.compare_values(o.x as f64 * 2.5, z.x as f64, 1e-3);
    rp.compare_values(o.y as f64 * 0.4, z.y as f64, 1e-3);

    assert!(rp.cleanup());
}
