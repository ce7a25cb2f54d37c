use super::entry::SizedEntry;

/// Sort entries by size, largest first. Equal sizes keep their input order.
pub fn rank(entries: &mut [SizedEntry]) {
    entries.sort_by(|a, b| b.size.cmp(&a.size));
}
