//! bandcrop-test - Regression test framework for bandcrop
//!
//! Provides [`RegParams`], a check recorder in the style of a
//! regression driver, plus synthetic frame builders in [`synth`].
//!
//! # Usage
//!
//! ```ignore
//! use bandcrop_test::RegParams;
//!
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to write intermediate images to
//!   `tests/regout`

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load an image from the test data directory
pub fn load_test_image(name: &str) -> TestResult<bandcrop_core::Raster> {
    let path = test_data_path(name);
    bandcrop_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bandcrop-test is at crates/bandcrop-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
