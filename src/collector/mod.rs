mod du;
mod native;
mod options;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::report::SizedEntry;

pub use du::DuCollector;
pub use native::{apparent_size, disk_usage, NativeCollector};
pub use options::{CollectOptions, DEFAULT_ARGS, DEFAULT_PROGRAM, LINUX_VIRTUAL_FS_PATHS};

/// Source of sized entries for a root path
pub trait SizeCollector {
    /// Get the name of this backend
    fn name(&self) -> &'static str;

    /// Collect one entry per file and directory under `root`
    fn collect(&self, root: &Path) -> Result<Vec<SizedEntry>>;
}

/// Available size collectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run an external disk-usage program
    #[default]
    Du,
    /// Walk the tree in-process
    Native,
}

impl Backend {
    /// Build the collector for this backend
    pub fn collector(self, options: CollectOptions) -> Box<dyn SizeCollector> {
        match self {
            Backend::Du => Box::new(DuCollector::new(options)),
            Backend::Native => Box::new(NativeCollector::new(options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selects_collector() {
        assert_eq!(Backend::Du.collector(CollectOptions::default()).name(), "du");
        assert_eq!(
            Backend::Native.collector(CollectOptions::default()).name(),
            "native"
        );
    }

    #[test]
    fn test_backend_default_is_du() {
        assert_eq!(Backend::default(), Backend::Du);
    }

    #[test]
    fn test_backend_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: Backend,
        }

        let w: Wrapper = toml::from_str("backend = \"native\"").unwrap();
        assert_eq!(w.backend, Backend::Native);
        assert!(toml::from_str::<Wrapper>("backend = \"ncdu\"").is_err());
    }
}
