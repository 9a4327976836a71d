//! Zoom clamp logging regression test
//!
//! Tests the warnings emitted for degenerate zoom factors:
//!   1. A pure zoom warns once per clamped axis
//!   2. A rotozoom warns once per clamped axis
//!   3. In-range factors stay silent
//!
//! Runs in its own binary since it installs a process-wide logger.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use rotozoom_test::{RegParams, fixtures};
use rotozoom_transform::{Smoothing, rotozoom_surface_xy, zoom_surface};

struct CaptureLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn {
            self.warnings
                .lock()
                .unwrap()
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    warnings: Mutex::new(Vec::new()),
};

fn clamp_warnings<T>(f: impl FnOnce() -> T) -> usize {
    LOGGER.warnings.lock().unwrap().clear();
    f();
    LOGGER
        .warnings
        .lock()
        .unwrap()
        .iter()
        .filter(|w| w.contains("clamped"))
        .count()
}

#[test]
fn clamp_log_reg() {
    log::set_logger(&LOGGER).expect("logger");
    log::set_max_level(LevelFilter::Warn);

    let mut rp = RegParams::new("clamp_log");
    let src = fixtures::gradient(6, 4).unwrap();

    // --- Test 1: pure zoom ---
    let n = clamp_warnings(|| zoom_surface(&src, 0.0, 1.0, Smoothing::Off).expect("zoom x"));
    rp.compare_values(1.0, n as f64, 0.0);
    let n = clamp_warnings(|| zoom_surface(&src, -0.0001, f64::NAN, Smoothing::On).expect("zoom xy"));
    rp.compare_values(2.0, n as f64, 0.0);

    // --- Test 2: rotozoom ---
    let n = clamp_warnings(|| {
        rotozoom_surface_xy(&src, 30.0, 0.0, 1.0, Smoothing::On).expect("rotozoom")
    });
    rp.compare_values(1.0, n as f64, 0.0);

    // --- Test 3: in range ---
    let n = clamp_warnings(|| zoom_surface(&src, 2.0, -0.5, Smoothing::On).expect("zoom"));
    rp.compare_values(0.0, n as f64, 0.0);

    assert!(rp.cleanup());
}
