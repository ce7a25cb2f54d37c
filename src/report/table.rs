use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ColumnConstraint, ContentArrangement, Table, Width};
use serde::Serialize;

use crate::error::Result;

use super::entry::SizedEntry;
use super::size::format_size;

/// Options for the ranked table
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Maximum number of rows to render
    pub limit: usize,
    /// Maximum width of the `#` column
    pub index_width: u16,
    /// Maximum width of the `Size` column
    pub size_width: u16,
    /// Maximum width of the `Path` column
    pub path_width: u16,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            index_width: 5,
            size_width: 20,
            path_width: 50,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_widths(mut self, index: u16, size: u16, path: u16) -> Self {
        self.index_width = index;
        self.size_width = size;
        self.path_width = path;
        self
    }
}

/// Line printed above the table
pub fn format_header(limit: usize) -> String {
    format!("Top {} largest directories:", limit)
}

/// Build the table for the first `options.limit` ranked entries
pub fn build_table(entries: &[SizedEntry], options: &TableOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["#", "Size", "Path"]);

    for (i, entry) in entries.iter().take(options.limit).enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(format_size(entry.size)),
            Cell::new(entry.path.display()),
        ]);
    }

    // Column widths include one space of padding on each side
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(options.index_width.saturating_add(2))),
        ColumnConstraint::UpperBoundary(Width::Fixed(options.size_width.saturating_add(2))),
        ColumnConstraint::UpperBoundary(Width::Fixed(options.path_width.saturating_add(2))),
    ]);

    table
}

/// Format ranked entries as a bordered table
pub fn format_table(entries: &[SizedEntry], options: &TableOptions) -> String {
    build_table(entries, options).to_string()
}

#[derive(Serialize)]
struct JsonRow {
    rank: usize,
    size: u64,
    human_size: String,
    /// Lossy, so non-UTF-8 names still serialize
    path: String,
}

/// Format the first `limit` ranked entries as a JSON array
pub fn format_json(entries: &[SizedEntry], limit: usize, pretty: bool) -> Result<String> {
    let rows: Vec<JsonRow> = entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(rank, entry)| JsonRow {
            rank,
            size: entry.size,
            human_size: format_size(entry.size),
            path: entry.path.to_string_lossy().into_owned(),
        })
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    Ok(json)
}
