//! Access to component source text.
//!
//! [`GraphBuilder`](super::GraphBuilder) reads files only through
//! [`SourceLoader`], so the filesystem can be swapped for an in-memory tree
//! in tests.

use std::io;
use std::path::{Path, PathBuf};

/// Source of file identities and contents for graph construction.
#[allow(async_fn_in_trait)]
pub trait SourceLoader {
    /// Resolve `path` to the canonical form used as a graph key.
    ///
    /// An error means the file does not exist for the purposes of the graph.
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Read the full text of `path`.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Loader backed by the real filesystem via `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        tokio::fs::canonicalize(path).await
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}
