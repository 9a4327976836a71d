//! Deterministic fixture surfaces
//!
//! All fixtures are 32-bit RGBA and fully opaque unless stated otherwise.

use rotozoom_core::{Rgba, Surface};

use crate::error::TestResult;

/// A surface filled with a single color.
pub fn uniform(width: u32, height: u32, color: Rgba) -> TestResult<Surface> {
    Ok(Surface::from_rgba_fn(width, height, |_, _| color)?)
}

/// Red ramps with x, green ramps with y, blue is their xor.
///
/// Every pixel of a surface up to 256x256 is distinct, which makes
/// permutations easy to check.
pub fn gradient(width: u32, height: u32) -> TestResult<Surface> {
    Ok(Surface::from_rgba_fn(width, height, |x, y| {
        let (r, g) = (x as u8, y as u8);
        Rgba::opaque(r, g, r ^ g)
    })?)
}

/// Number of pixels with non-zero alpha.
pub fn opaque_count(surface: &Surface) -> u64 {
    let mut count = 0;
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if surface.get_rgba(x, y).is_some_and(|p| p.a != 0) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_distinct() {
        let s = gradient(4, 4).unwrap();
        assert_eq!(s.get_rgba(3, 1), Some(Rgba::opaque(3, 1, 2)));
        assert_ne!(s.get_rgba(1, 3), s.get_rgba(3, 1));
    }
}
