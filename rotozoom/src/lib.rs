//! Rotozoom - Rotation and zoom of pixel surfaces
//!
//! Resamples 32-bit RGBA surfaces with fixed-point arithmetic. Provides:
//!
//! - Rotation by an arbitrary angle combined with independent x/y zoom
//! - Axis-aligned zoom, with negative factors mirroring an axis
//! - Exact quarter-turn rotation
//! - Destination size queries and rotated sprite box offsets
//!
//! Both resamplers offer nearest-neighbor and bilinear sampling.
//!
//! # Example
//!
//! ```
//! use rotozoom::transform::{Smoothing, rotozoom_surface, rotozoom_surface_size};
//! use rotozoom::{Rgba, Surface};
//!
//! let sprite = Surface::from_rgba_fn(32, 32, |x, y| Rgba::opaque(x as u8, y as u8, 0)).unwrap();
//! let rotated = rotozoom_surface(&sprite, 30.0, 1.5, Smoothing::On).unwrap();
//! assert_eq!(
//!     (rotated.width(), rotated.height()),
//!     rotozoom_surface_size(32, 32, 30.0, 1.5)
//! );
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rotozoom_core::*;

// Re-export the transform crate as a module to avoid name conflicts
pub use rotozoom_transform as transform;
