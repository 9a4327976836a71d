//! rotozoom-core - Basic data structures for the rotozoom resampler
//!
//! This crate provides the fundamental types shared by the transforms:
//!
//! - [`Surface`] / [`SurfaceMut`] - Pixel buffer container (immutable / mutable)
//! - [`PixelFormat`] - Bytes-per-pixel tag of a surface
//! - [`Rgba`] - A single 32-bit pixel
//! - [`Rect`] - Sprite bounding box
//! - [`Point`] - Real-valued 2D coordinate

pub mod error;
pub mod pixel;
pub mod point;
pub mod rect;
pub mod surface;

pub use error::{Error, Result};
pub use pixel::Rgba;
pub use point::Point;
pub use rect::Rect;
pub use surface::{PixelFormat, Surface, SurfaceMut, rgba_offset};
