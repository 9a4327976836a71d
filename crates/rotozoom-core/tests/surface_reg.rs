//! Surface regression test
//!
//! Tests the pixel container:
//!   1. Padded pitches address the same pixels as packed ones
//!   2. Guard rows are allocated but never exposed
//!   3. Copy-on-write through try_into_mut / to_mut
//!   4. Invalid sizes and pitches are rejected

use rotozoom_core::{Error, PixelFormat, Rgba, Surface, SurfaceMut};
use rotozoom_test::{RegParams, fixtures};

#[test]
fn surface_reg() {
    let mut rp = RegParams::new("surface");

    // --- Test 1: padded pitch ---
    let packed = fixtures::gradient(5, 4).unwrap();
    let mut padded = Surface::with_pitch(5, 4, 32, PixelFormat::Rgba32)
        .unwrap()
        .try_into_mut()
        .unwrap();
    for y in 0..4 {
        for x in 0..5 {
            padded.set_rgba(x, y, packed.get_rgba(x, y).unwrap()).unwrap();
        }
    }
    let padded: Surface = padded.into();
    rp.compare_values(32.0, padded.pitch() as f64, 0.0);
    rp.compare_surfaces(&packed, &padded);

    // --- Test 2: guard rows ---
    let mut guarded = SurfaceMut::with_guard_rows(6, 3, PixelFormat::Rgba32, 2).unwrap();
    guarded.fill(Rgba::opaque(1, 2, 3)).unwrap();
    let guarded: Surface = guarded.into();
    rp.compare_values(3.0, guarded.height() as f64, 0.0);
    rp.compare_values(2.0, guarded.guard_rows() as f64, 0.0);
    rp.compare_values((6 * 4 * 3) as f64, guarded.data().len() as f64, 0.0);
    let plain = fixtures::uniform(6, 3, Rgba::opaque(1, 2, 3)).unwrap();
    rp.compare_surfaces(&plain, &guarded);

    // --- Test 3: copy-on-write ---
    let shared = packed.clone();
    rp.compare_values(2.0, packed.ref_count() as f64, 0.0);
    let still_shared = shared.try_into_mut();
    rp.compare_values(1.0, if still_shared.is_err() { 1.0 } else { 0.0 }, 0.0);
    let mut copy = packed.to_mut();
    copy.set_rgba(0, 0, Rgba::TRANSPARENT).unwrap();
    let copy: Surface = copy.into();
    rp.compare_values(1.0, packed.count_pixel_diffs(&copy).unwrap() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn surface_reg_invalid() {
    assert!(matches!(
        Surface::new(0, 4, PixelFormat::Rgba32),
        Err(Error::InvalidDimension { .. })
    ));
    assert!(matches!(
        Surface::with_pitch(5, 4, 16, PixelFormat::Rgba32),
        Err(Error::InvalidPitch { .. })
    ));
    assert!(PixelFormat::from_bytes_per_pixel(5).is_err());
}
