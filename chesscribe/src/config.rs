//! Runtime configuration for the chesscribe CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable.

use std::path::PathBuf;

/// Default directory for generated dataset files.
const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts";

/// Get the directory generated datasets are written to.
///
/// Priority:
/// 1. `CHESSCRIBE_ARTIFACTS_DIR` env variable if set
/// 2. `./artifacts` as fallback
pub fn artifacts_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHESSCRIBE_ARTIFACTS_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_ARTIFACTS_DIR)
}
