use std::collections::HashMap;
use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{LargestError, Result};
use crate::report::SizedEntry;

use super::options::CollectOptions;
use super::SizeCollector;

/// Get apparent file size (content length)
pub fn apparent_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Get actual disk usage (blocks * block_size)
/// On most Linux systems, st_blocks is in 512-byte units
pub fn disk_usage(metadata: &Metadata) -> u64 {
    metadata.blocks() * 512
}

/// Collects cumulative sizes by walking the tree in-process.
///
/// Emits one entry per file and directory, children before their parent,
/// the same shape `du -a` prints. Symlinks are never followed.
pub struct NativeCollector {
    options: CollectOptions,
}

struct WalkContext {
    apparent_size: bool,
    root_dev: Option<u64>,
    /// Root as given and as resolved, so relative roots still hit the
    /// virtual filesystem filter
    root: PathBuf,
    resolved_root: PathBuf,
}

impl WalkContext {
    fn size_of(&self, metadata: &Metadata) -> u64 {
        if self.apparent_size {
            apparent_size(metadata)
        } else {
            disk_usage(metadata)
        }
    }

    fn crosses_device(&self, metadata: &Metadata) -> bool {
        self.root_dev.is_some_and(|dev| metadata.dev() != dev)
    }

    fn is_virtual_fs(&self, path: &Path) -> bool {
        match path.strip_prefix(&self.root) {
            Ok(rel) => CollectOptions::is_linux_virtual_fs(&self.resolved_root.join(rel)),
            Err(_) => CollectOptions::is_linux_virtual_fs(path),
        }
    }
}

impl NativeCollector {
    pub fn new(options: CollectOptions) -> Self {
        Self { options }
    }

    fn sequential(&self, root: &Path, ctx: &WalkContext) -> Vec<SizedEntry> {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .follow_root_links(false)
            .same_file_system(self.options.one_file_system)
            .contents_first(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !ctx.is_virtual_fs(e.path()));

        // Sizes of finished children, keyed by their parent directory
        let mut pending: HashMap<PathBuf, u64> = HashMap::new();
        let mut entries = Vec::new();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(err) => {
                    tracing::warn!("Cannot read metadata for {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            let path = entry.path();
            let total = ctx.size_of(&metadata) + pending.remove(path).unwrap_or(0);

            if entry.depth() > 0 {
                if let Some(parent) = path.parent() {
                    *pending.entry(parent.to_path_buf()).or_default() += total;
                }
            }

            entries.push(SizedEntry::new(total, path));
        }

        entries
    }
}

/// Walk `path` and return its cumulative size together with the entries of
/// its whole subtree.
fn walk_parallel(path: &Path, metadata: &Metadata, ctx: &WalkContext) -> (u64, Vec<SizedEntry>) {
    let own = ctx.size_of(metadata);

    if !metadata.is_dir() {
        return (own, vec![SizedEntry::new(own, path)]);
    }

    let read_dir = match fs::read_dir(path) {
        Ok(rd) => rd,
        Err(err) => {
            tracing::warn!("Cannot read directory {}: {}", path.display(), err);
            return (own, vec![SizedEntry::new(own, path)]);
        }
    };

    let children: Vec<PathBuf> = read_dir
        .filter_map(|e| match e {
            Ok(e) => Some(e.path()),
            Err(err) => {
                tracing::warn!("Skipping entry in {}: {}", path.display(), err);
                None
            }
        })
        .filter(|p| !ctx.is_virtual_fs(p))
        .collect();

    let results: Vec<(u64, Vec<SizedEntry>)> = children
        .par_iter()
        .filter_map(|child| {
            let meta = match fs::symlink_metadata(child) {
                Ok(m) => m,
                Err(err) => {
                    tracing::warn!("Cannot read metadata for {}: {}", child.display(), err);
                    return None;
                }
            };
            if ctx.crosses_device(&meta) {
                return None;
            }
            Some(walk_parallel(child, &meta, ctx))
        })
        .collect();

    let mut total = own;
    let mut entries = Vec::new();
    for (size, subtree) in results {
        total += size;
        entries.extend(subtree);
    }
    entries.push(SizedEntry::new(total, path));

    (total, entries)
}

impl SizeCollector for NativeCollector {
    fn name(&self) -> &'static str {
        "native"
    }

    fn collect(&self, root: &Path) -> Result<Vec<SizedEntry>> {
        let metadata = fs::symlink_metadata(root).map_err(|e| LargestError::Io {
            path: root.to_path_buf(),
            source: e,
        })?;

        let ctx = WalkContext {
            apparent_size: self.options.apparent_size,
            root_dev: self.options.one_file_system.then(|| metadata.dev()),
            root: root.to_path_buf(),
            resolved_root: root.canonicalize().unwrap_or_else(|_| root.to_path_buf()),
        };

        let entries = match self.options.threads {
            1 => self.sequential(root, &ctx),
            0 => walk_parallel(root, &metadata, &ctx).1,
            n => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| walk_parallel(root, &metadata, &ctx).1)
            }
        };

        tracing::debug!(count = entries.len(), "Walked directory tree");

        Ok(entries)
    }
}
