//! Bilinear interpolation in 16.16 fixed point

use rotozoom_core::Rgba;

/// Sampling mode for zoom and rotozoom
///
/// Every entry point takes the mode explicitly; there is no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoothing {
    /// Nearest-neighbor sampling
    Off,
    /// Bilinear interpolation
    On,
}

impl Smoothing {
    /// Whether bilinear interpolation is selected.
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, Smoothing::On)
    }
}

impl From<bool> for Smoothing {
    fn from(smooth: bool) -> Self {
        if smooth { Smoothing::On } else { Smoothing::Off }
    }
}

/// Interpolate one channel from `a` toward `b` by `frac / 65536`.
///
/// The product is shifted arithmetically and the sum masked to 8 bits, so
/// the result truncates rather than rounds.
#[inline]
pub fn lerp_channel(a: u8, b: u8, frac: i32) -> i32 {
    let (a, b) = (i32::from(a), i32::from(b));
    ((((b - a) * frac) >> 16) + a) & 0xff
}

/// Blend a 2x2 neighbourhood channel by channel.
///
/// `c00`/`c01` are the upper pair (left, right) and `c10`/`c11` the lower
/// pair. `ex` and `ey` are the fractional offsets in `[0, 65536)`.
#[inline]
pub fn bilinear_rgba(c00: Rgba, c01: Rgba, c10: Rgba, c11: Rgba, ex: i32, ey: i32) -> Rgba {
    let (p00, p01, p10, p11) = (
        c00.to_array(),
        c01.to_array(),
        c10.to_array(),
        c11.to_array(),
    );
    let mut out = [0u8; 4];
    for i in 0..4 {
        let t1 = lerp_channel(p00[i], p01[i], ex);
        let t2 = lerp_channel(p10[i], p11[i], ex);
        out[i] = ((((t2 - t1) * ey) >> 16) + t1) as u8;
    }
    Rgba::from_array(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_channel(10, 200, 0), 10);
        assert_eq!(lerp_channel(10, 200, 0xffff), 199);
        assert_eq!(lerp_channel(0, 255, 0x8000), 127);
    }

    #[test]
    fn test_lerp_downward_truncates() {
        // (-100 * 0x8000) >> 16 == -50 exactly; one step further floors
        assert_eq!(lerp_channel(200, 100, 0x8000), 150);
        assert_eq!(lerp_channel(200, 100, 0x8001), 149);
    }

    #[test]
    fn test_bilinear_uniform() {
        let c = Rgba::new(12, 34, 56, 78);
        for &(ex, ey) in &[(0, 0), (0x1234, 0xfedc), (0xffff, 0xffff), (0x8000, 1)] {
            assert_eq!(bilinear_rgba(c, c, c, c, ex, ey), c);
        }
    }

    #[test]
    fn test_bilinear_corners() {
        let c00 = Rgba::new(0, 0, 0, 255);
        let c01 = Rgba::new(255, 0, 0, 255);
        let c10 = Rgba::new(0, 255, 0, 255);
        let c11 = Rgba::new(0, 0, 255, 255);
        assert_eq!(bilinear_rgba(c00, c01, c10, c11, 0, 0), c00);

        let mid = bilinear_rgba(c00, c01, c10, c11, 0x8000, 0x8000);
        assert_eq!(mid, Rgba::new(63, 63, 63, 255));
    }

    #[test]
    fn test_smoothing_from_bool() {
        assert_eq!(Smoothing::from(true), Smoothing::On);
        assert_eq!(Smoothing::from(false), Smoothing::Off);
        assert!(Smoothing::On.is_on());
        assert!(!Smoothing::Off.is_on());
    }
}
