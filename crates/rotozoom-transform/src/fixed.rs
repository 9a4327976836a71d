//! 16.16 fixed-point numbers
//!
//! All per-pixel positions and increments in the samplers are kept in this
//! format so the inner loops never touch floating point. The backing integer
//! is 64 bits wide: positions accumulated across very large destinations or
//! extreme zoom factors stay exact instead of wrapping.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Number of fractional bits
pub const FRAC_BITS: u32 = 16;

const FRAC_MASK: i64 = (1 << FRAC_BITS) - 1;

/// A signed real number scaled by 65536
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i64);

impl Fixed {
    /// Zero
    pub const ZERO: Fixed = Fixed(0);
    /// One
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);

    /// Wrap an already scaled raw value.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Fixed(raw)
    }

    /// Convert an integer.
    #[inline]
    pub const fn from_int(value: i64) -> Self {
        Fixed(value << FRAC_BITS)
    }

    /// Convert an already scaled `f64`, truncating toward zero.
    ///
    /// The result saturates to the `i32` range, matching a C `(int)` cast on
    /// every input that cast defines. NaN becomes zero.
    #[inline]
    pub fn from_scaled_f64(scaled: f64) -> Self {
        Fixed(i64::from(scaled as i32))
    }

    /// Convert a real number, truncating toward zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::from_scaled_f64(value * (1u32 << FRAC_BITS) as f64)
    }

    /// The raw scaled value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Integer part, rounding toward negative infinity (arithmetic shift).
    #[inline]
    pub const fn int_part(self) -> i64 {
        self.0 >> FRAC_BITS
    }

    /// Low 16 bits, always in `[0, 65536)`.
    #[inline]
    pub const fn frac(self) -> i32 {
        (self.0 & FRAC_MASK) as i32
    }

    /// Convert back to a real number.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << FRAC_BITS) as f64
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 -= rhs.0;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

/// Scale by a plain integer.
impl Mul<i64> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: i64) -> Fixed {
        Fixed(self.0 * rhs)
    }
}
