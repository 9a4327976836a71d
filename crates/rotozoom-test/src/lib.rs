//! rotozoom-test - Regression test framework for rotozoom
//!
//! This crate provides a small regression harness in the spirit of
//! regutils, supporting two modes:
//!
//! - **Compare**: Check values and surfaces, recording every failure
//! - **Display**: Additionally dump compared surfaces for visual inspection
//!
//! along with deterministic fixture surfaces, so tests need no image files.
//!
//! # Usage
//!
//! ```ignore
//! use rotozoom_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("zoom");
//! let src = fixtures::gradient(16, 16).unwrap();
//! rp.compare_values(32.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rotozoom-test is at crates/rotozoom-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/target/regout", workspace_root())
}
