//! In-memory source loader.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::graph::{FileSet, SourceLoader};

/// A [`SourceLoader`] over a fixed set of in-memory files.
///
/// Paths are their own canonical form. A path that was never added does not
/// exist; a path added with [`with_unreadable`](Self::with_unreadable) exists
/// but fails to read. Every read attempt is counted.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    files: Vec<(PathBuf, Option<String>)>,
    reads: Mutex<HashMap<PathBuf, usize>>,
}

impl MemoryLoader {
    /// Create an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), Some(content.into())));
        self
    }

    /// Add a file that exists but cannot be read.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), None));
        self
    }

    /// All added files with the given extension, in insertion order.
    #[must_use]
    pub fn file_set(&self, extension: &str) -> FileSet {
        let suffix = format!(".{extension}");
        FileSet::from_paths(
            self.files
                .iter()
                .filter(|(path, _)| path.to_string_lossy().ends_with(&suffix))
                .map(|(path, _)| path.clone()),
            extension,
        )
    }

    /// Number of read attempts for `path`, failed ones included.
    #[must_use]
    pub fn read_count(&self, path: &Path) -> usize {
        self.reads.lock().map(|reads| reads.get(path).copied().unwrap_or(0)).unwrap_or(0)
    }

    fn entry(&self, path: &Path) -> Option<&Option<String>> {
        self.files.iter().find(|(p, _)| p == path).map(|(_, content)| content)
    }
}

impl SourceLoader for MemoryLoader {
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        match self.entry(path) {
            Some(_) => Ok(path.to_path_buf()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if let Ok(mut reads) = self.reads.lock() {
            *reads.entry(path.to_path_buf()).or_insert(0) += 1;
        }

        match self.entry(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable")),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}
