//! rotozoom-transform - Rotation and zoom of RGBA surfaces
//!
//! This crate provides the resampling operations:
//!
//! - Rotation by an arbitrary angle combined with zoom ([`rotozoom_surface`])
//! - Axis-aligned zoom with optional mirroring ([`zoom_surface`])
//! - Exact quarter-turn rotation ([`rotate_surface_90_degrees`])
//! - Destination size queries for all of the above
//! - Sprite bounding-box offsets under rotation ([`compute_box_offset`])
//!
//! Both samplers work in 16.16 fixed point ([`Fixed`]) and support
//! nearest-neighbor or bilinear sampling ([`Smoothing`]).

mod error;
pub mod fixed;
pub mod interp;
pub mod offset;
pub mod rotate;
pub mod rotozoom;
pub mod size;
pub mod zoom;

pub use error::{TransformError, TransformResult};
pub use fixed::Fixed;
pub use interp::{Smoothing, bilinear_rgba, lerp_channel};
pub use offset::{compute_box_offset, rotate_point};
pub use rotate::rotate_surface_90_degrees;
pub use rotozoom::{rotozoom_surface, rotozoom_surface_xy, transform_surface_rgba};
pub use size::{
    GUARD_ROWS, RotozoomSize, VALUE_LIMIT, ZoomFactor, rotozoom_size_trig, rotozoom_surface_size,
    rotozoom_surface_size_xy, zoom_surface_size,
};
pub use zoom::{AxisMap, zoom_surface, zoom_surface_rgba};
