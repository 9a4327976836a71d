//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use rotozoom_core::Surface;
use std::fs;
use std::io::Write;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and surfaces (default)
    #[default]
    Compare,
    /// Compare, and also dump surfaces for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognized means compare
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "rotozoom")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || diff.is_nan() {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two surfaces for pixel equality
    ///
    /// Row padding and guard rows are ignored. In display mode both surfaces
    /// are dumped to the regout directory.
    ///
    /// # Returns
    ///
    /// `true` if the surfaces are identical, `false` otherwise.
    pub fn compare_surfaces(&mut self, expected: &Surface, actual: &Surface) -> bool {
        self.index += 1;

        if self.display() {
            let index = self.index;
            for (tag, surface) in [("expected", expected), ("actual", actual)] {
                if let Err(e) = self.dump_surface(surface, &format!("{:02}.{}", index, tag)) {
                    eprintln!("{}", e);
                }
            }
        }

        match expected.count_pixel_diffs(actual) {
            None => {
                self.fail(format!(
                    "Failure in {}_reg: surface comparison for index {} - size mismatch \
                     ({}x{} vs {}x{})",
                    self.test_name,
                    self.index,
                    expected.width(),
                    expected.height(),
                    actual.width(),
                    actual.height()
                ));
                false
            }
            Some(0) => true,
            Some(diffs) => {
                self.fail(format!(
                    "Failure in {}_reg: surface comparison for index {} - {} pixels differ",
                    self.test_name, self.index, diffs
                ));
                false
            }
        }
    }

    /// Write a surface to the regout directory in display mode
    ///
    /// Does nothing in compare mode.
    pub fn write_surface(&mut self, surface: &Surface) -> TestResult<()> {
        self.index += 1;
        if self.display() {
            let tag = format!("{:02}", self.index);
            self.dump_surface(surface, &tag)?;
        }
        Ok(())
    }

    /// Dump a 32-bit surface as a PAM file
    fn dump_surface(&self, surface: &Surface, tag: &str) -> TestResult<()> {
        let dir = regout_dir();
        fs::create_dir_all(&dir)?;
        let path = format!("{}/{}.{}.pam", dir, self.test_name, tag);

        let write = || -> std::io::Result<()> {
            let mut file = std::io::BufWriter::new(fs::File::create(&path)?);
            write!(
                file,
                "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
                surface.width(),
                surface.height()
            )?;
            for y in 0..surface.height() {
                file.write_all(surface.row(y))?;
            }
            file.flush()
        };
        write().map_err(|e| TestError::SurfaceWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
