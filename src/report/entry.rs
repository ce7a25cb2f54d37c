use serde::Serialize;
use std::path::PathBuf;

/// A (size, path) pair as reported by a size collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizedEntry {
    /// Cumulative size in bytes
    pub size: u64,

    /// Path of the file or directory
    pub path: PathBuf,
}

impl SizedEntry {
    pub fn new(size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}
