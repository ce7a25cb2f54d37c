use std::path::Path;

use crate::report::PathMode;

/// Configuration options for collecting sizes.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Disk-usage program run by the du backend
    pub program: String,

    /// Arguments passed to the program before the root path
    pub args: Vec<String>,

    /// Run the program through `sudo`
    pub sudo: bool,

    /// How paths are read back from the program's output
    pub path_mode: PathMode,

    /// Report apparent sizes instead of allocated disk usage
    pub apparent_size: bool,

    /// Stay on the same filesystem (don't cross mount points)
    pub one_file_system: bool,

    /// Number of walker threads for the native backend (0 = auto)
    pub threads: usize,
}

/// Default disk-usage program
pub const DEFAULT_PROGRAM: &str = "du";

/// Default arguments: every entry, sizes in bytes
pub const DEFAULT_ARGS: &[&str] = &["-a", "--block-size=1"];

/// Linux virtual filesystem paths that should be excluded by default.
/// These can report incorrect/huge sizes and cause scanning issues.
pub const LINUX_VIRTUAL_FS_PATHS: &[&str] = &["/proc", "/dev", "/sys", "/run"];

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            sudo: false,
            path_mode: PathMode::default(),
            apparent_size: false,
            one_file_system: false,
            threads: 0,
        }
    }
}

impl CollectOptions {
    /// Check if a path lies under a Linux virtual filesystem
    pub fn is_linux_virtual_fs(path: &Path) -> bool {
        LINUX_VIRTUAL_FS_PATHS
            .iter()
            .any(|vfs| path.starts_with(vfs))
    }

    /// Create a new CollectOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the disk-usage program and its arguments
    pub fn with_command(mut self, program: impl Into<String>, args: Vec<String>) -> Self {
        self.program = program.into();
        self.args = args;
        self
    }

    /// Set whether to run the program through sudo
    pub fn with_sudo(mut self, sudo: bool) -> Self {
        self.sudo = sudo;
        self
    }

    /// Set how paths are parsed from the program output
    pub fn with_path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    /// Set whether to report apparent sizes
    pub fn with_apparent_size(mut self, enabled: bool) -> Self {
        self.apparent_size = enabled;
        self
    }

    /// Set whether to stay on the same filesystem
    pub fn with_one_file_system(mut self, enabled: bool) -> Self {
        self.one_file_system = enabled;
        self
    }

    /// Set number of walker threads
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}
