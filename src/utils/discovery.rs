//! Candidate file collection.
//!
//! Walks a root directory and gathers every file with the component
//! extension into a [`FileSet`]. Dependency directories (`node_modules` by
//! default) are pruned without being descended into. Symlinks are not
//! followed, so every collected path stays under the canonical root.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, trace};
use walkdir::WalkDir;

use crate::constants::{DEFAULT_EXTENSION, DEPENDENCY_DIR};
use crate::core::GraphError;
use crate::graph::FileSet;

/// What to collect and how to order it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File extension without the leading dot.
    pub extension: String,
    /// Directory names pruned anywhere below the root.
    pub exclude_dirs: Vec<String>,
    /// Sort entries by file name within each directory.
    pub sorted: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            exclude_dirs: vec![DEPENDENCY_DIR.to_string()],
            sorted: false,
        }
    }
}

impl ScanOptions {
    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|dir| dir == name)
    }
}

/// Collect every file under `root` whose name ends with `.<extension>`.
///
/// The order is the walk order: platform enumeration order by default, or
/// name order per directory when [`ScanOptions::sorted`] is set. Name
/// resolution is first-match-wins over this order.
///
/// # Errors
///
/// Fails with [`GraphError::RootDirectoryUnreadable`] when `root` does not
/// exist, is not a directory, or cannot be listed. Any error further down
/// the walk also aborts collection.
///
/// # Examples
///
/// ```rust,no_run
/// use vue_component_graph::utils::{ScanOptions, collect_source_files};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let files = collect_source_files(Path::new("."), &ScanOptions::default())?;
/// println!("{} components", files.len());
/// # Ok(())
/// # }
/// ```
pub fn collect_source_files(root: &Path, options: &ScanOptions) -> Result<FileSet> {
    let root = root.canonicalize().map_err(|e| GraphError::RootDirectoryUnreadable {
        path: root.display().to_string(),
        reason: e.to_string(),
    })?;

    if !root.is_dir() {
        return Err(GraphError::RootDirectoryUnreadable {
            path: root.display().to_string(),
            reason: "not a directory".to_string(),
        }
        .into());
    }

    let suffix = format!(".{}", options.extension);
    let mut walker = WalkDir::new(&root).follow_links(false);
    if options.sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = FileSet::new(options.extension.clone());

    let entries = walker.into_iter().filter_entry(|entry| {
        let prune = entry.depth() > 0
            && entry.file_type().is_dir()
            && options.is_excluded(&entry.file_name().to_string_lossy());
        if prune {
            debug!("Skipping {}", entry.path().display());
        }
        !prune
    });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(GraphError::RootDirectoryUnreadable {
                    path: root.display().to_string(),
                    reason: err.to_string(),
                }
                .into());
            }
            Err(err) => {
                let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
                return Err(err).with_context(|| format!("Failed to scan {path}"));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            trace!("Found {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    info!("Collected {} .{} files under {}", files.len(), options.extension, root.display());
    Ok(files)
}
