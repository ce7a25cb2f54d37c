const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];

/// Format size in human-readable format.
///
/// The value is always divided into kilobytes first, so anything below
/// 1024 bytes reads as `0 KB`. Division is integral.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes / 1024;
    let mut unit_idx = 0;

    while size >= 1024 && unit_idx < UNITS.len() - 1 {
        size /= 1024;
        unit_idx += 1;
    }

    format!("{} {}", size, UNITS[unit_idx])
}
