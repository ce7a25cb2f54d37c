mod entry;
mod parser;
mod rank;
mod size;
mod table;

pub use entry::SizedEntry;
pub use parser::{parse_output, PathMode};
pub use rank::rank;
pub use size::format_size;
pub use table::{build_table, format_header, format_json, format_table, TableOptions};
