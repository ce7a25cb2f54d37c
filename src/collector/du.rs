use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::{LargestError, Result};
use crate::report::{parse_output, SizedEntry};

use super::options::CollectOptions;
use super::SizeCollector;

/// Collects sizes by running an external disk-usage program and parsing
/// its output.
pub struct DuCollector {
    options: CollectOptions,
}

impl DuCollector {
    pub fn new(options: CollectOptions) -> Self {
        Self { options }
    }

    /// Program and arguments that will be run for `root`
    pub fn command_line(&self, root: &Path) -> (String, Vec<OsString>) {
        let mut args: Vec<OsString> = Vec::new();

        let program = if self.options.sudo {
            args.push(self.options.program.clone().into());
            "sudo".to_string()
        } else {
            self.options.program.clone()
        };

        args.extend(self.options.args.iter().map(OsString::from));

        if self.options.apparent_size && !self.has_arg("--apparent-size") {
            args.push("--apparent-size".into());
        }
        if self.options.one_file_system && !self.has_arg("-x") {
            args.push("-x".into());
        }

        args.push(root.as_os_str().to_os_string());

        (program, args)
    }

    fn has_arg(&self, arg: &str) -> bool {
        self.options.args.iter().any(|a| a == arg)
    }

    /// Run the program and return its full standard output.
    pub fn capture(&self, root: &Path) -> Result<String> {
        let (program, args) = self.command_line(root);
        let command = display_command(&program, &args);

        tracing::debug!(%command, "Running disk-usage command");

        let output = Command::new(&program)
            .args(&args)
            .output()
            .map_err(|source| LargestError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LargestError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(bytes = output.stdout.len(), "Captured command output");

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SizeCollector for DuCollector {
    fn name(&self) -> &'static str {
        "du"
    }

    fn collect(&self, root: &Path) -> Result<Vec<SizedEntry>> {
        let text = self.capture(root)?;
        parse_output(&text, self.options.path_mode)
    }
}

fn display_command(program: &str, args: &[OsString]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
