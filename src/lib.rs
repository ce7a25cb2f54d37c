//! Largest Dirs - list the largest files and directories under a path
//!
//! Sizes come from an external disk-usage program (`du -a`) or from an
//! in-process walk, are ranked largest first and printed as a table.

pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{LargestError, Result};
pub use report::SizedEntry;
