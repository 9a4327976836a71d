//! RGBA pixel values
//!
//! A 32-bit pixel is four independent 8-bit channels stored in buffer byte
//! order. The samplers never interpret the channels, so a surface holding
//! ABGR or BGRA data goes through them unchanged.

/// Number of bytes in one 32-bit pixel.
pub const BYTES_PER_RGBA: usize = 4;

/// A 32-bit pixel with four 8-bit channels.
///
/// `r`, `g`, `b`, `a` name the channels by their position in the buffer
/// (bytes 0, 1, 2, 3 of the pixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Channel at byte 0
    pub r: u8,
    /// Channel at byte 1
    pub g: u8,
    /// Channel at byte 2
    pub b: u8,
    /// Channel at byte 3
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the value of a freshly allocated pixel.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel (alpha = 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Read a pixel from the first four bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than four bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        }
    }

    /// Write the pixel into the first four bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than four bytes.
    #[inline]
    pub fn write_to(self, bytes: &mut [u8]) {
        bytes[..BYTES_PER_RGBA].copy_from_slice(&self.to_array());
    }

    /// Channels in buffer order.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a pixel from channels in buffer order.
    #[inline]
    pub const fn from_array(channels: [u8; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }

    /// Pack into a `u32` with byte 0 in the most significant position.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.to_array())
    }

    /// Unpack from a `u32` produced by [`Rgba::to_u32`].
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self::from_array(value.to_be_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_roundtrip() {
        let px = Rgba::new(1, 2, 3, 4);
        let mut buf = [0u8; 6];
        px.write_to(&mut buf[1..]);
        assert_eq!(buf, [0, 1, 2, 3, 4, 0]);
        assert_eq!(Rgba::from_bytes(&buf[1..]), px);
    }

    #[test]
    fn test_u32_packing() {
        let px = Rgba::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(px.to_u32(), 0x1122_3344);
        assert_eq!(Rgba::from_u32(0x1122_3344), px);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
        assert_eq!(Rgba::opaque(9, 8, 7).a, 255);
    }
}
