use serde::{Deserialize, Serialize};

use crate::error::{LargestError, Result};

use super::entry::SizedEntry;

/// How the path is extracted from a `<size> <path>` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathMode {
    /// Everything after the size token, so paths with spaces survive
    #[default]
    Remainder,
    /// Only the token right after the size
    FirstToken,
}

/// Parse disk-usage output made of `<size><whitespace><path>` lines.
///
/// Empty lines and lines with fewer than two tokens are skipped. A size token
/// that is not a base-10 integer aborts the whole parse.
pub fn parse_output(text: &str, mode: PathMode) -> Result<Vec<SizedEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let Some((token, path)) = split_line(line, mode) else {
            if !line.trim().is_empty() {
                tracing::debug!(line = idx + 1, "Skipping malformed line");
            }
            continue;
        };

        let size = token.parse::<u64>().map_err(|source| LargestError::ParseSize {
            line: idx + 1,
            token: token.to_string(),
            source,
        })?;

        entries.push(SizedEntry::new(size, path));
    }

    Ok(entries)
}

/// Split a line into its size token and path, or `None` when it has fewer
/// than two tokens.
fn split_line(line: &str, mode: PathMode) -> Option<(&str, &str)> {
    let line = line.trim_start();

    match mode {
        PathMode::FirstToken => {
            let mut fields = line.split_whitespace();
            Some((fields.next()?, fields.next()?))
        }
        PathMode::Remainder => {
            let (token, rest) = line.split_once(char::is_whitespace)?;
            let path = rest.trim_start().trim_end_matches('\r');
            if path.trim().is_empty() {
                return None;
            }
            Some((token, path))
        }
    }
}
