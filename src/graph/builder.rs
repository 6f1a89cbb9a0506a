//! Recursive, memoized dependency graph construction.
//!
//! Each visit follows the same steps:
//!
//! 1. canonicalize the path
//! 2. return if the canonical path is already a key in the graph
//! 3. read the file, returning silently on any failure (no key is inserted,
//!    and later references retry the read)
//! 4. insert an empty dependency list for the path
//! 5. resolve every imported name, then every used tag; for each hit, record
//!    the edge and visit the target
//!
//! Step 4 happens before any recursion. That ordering is what stops
//! self-references and reference cycles: by the time a cycle leads back to a
//! file, its key already exists and step 2 returns.
//!
//! Visits run one at a time, depth-first. Several entry files can share one
//! builder so common subtrees are read once.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::extractor::extract_references;
use super::loader::{FsLoader, SourceLoader};
use super::resolver::resolve_component;
use super::{DependencyGraph, FileSet};

/// Builds a [`DependencyGraph`] from one or more entry files.
///
/// # Examples
///
/// ```rust,no_run
/// use vue_component_graph::graph::{FileSet, GraphBuilder};
/// use std::path::Path;
///
/// # async fn example(files: FileSet) {
/// let mut builder = GraphBuilder::new(&files);
/// let root = builder.add_entry(Path::new("src/App.vue")).await;
/// let graph = builder.into_graph();
/// println!("{} depends on {} files", root.display(), graph.dependencies(&root).len());
/// # }
/// ```
pub struct GraphBuilder<'a, L = FsLoader> {
    files: &'a FileSet,
    loader: L,
    graph: DependencyGraph,
}

impl<'a> GraphBuilder<'a, FsLoader> {
    /// Create a builder that reads from the filesystem.
    #[must_use]
    pub fn new(files: &'a FileSet) -> Self {
        Self::with_loader(files, FsLoader)
    }
}

impl<'a, L: SourceLoader> GraphBuilder<'a, L> {
    /// Create a builder with a custom loader.
    pub fn with_loader(files: &'a FileSet, loader: L) -> Self {
        Self {
            files,
            loader,
            graph: DependencyGraph::new(),
        }
    }

    /// Visit an entry file and everything it transitively references.
    ///
    /// Returns the path under which the entry should be rendered: its
    /// canonical form, or its absolute form when it cannot be canonicalized
    /// (in which case it has no node in the graph).
    pub async fn add_entry(&mut self, entry: &Path) -> PathBuf {
        let root = match self.loader.canonicalize(entry).await {
            Ok(path) => path,
            Err(err) => {
                debug!("Entry {} is not readable: {}", entry.display(), err);
                std::path::absolute(entry).unwrap_or_else(|_| entry.to_path_buf())
            }
        };

        self.visit(&root).await;
        root
    }

    async fn visit(&mut self, path: &Path) {
        let node = match self.loader.canonicalize(path).await {
            Ok(node) => node,
            Err(err) => {
                debug!("Skipping {}: {}", path.display(), err);
                return;
            }
        };

        if self.graph.contains(&node) {
            trace!("Already visited {}", node.display());
            return;
        }

        let content = match self.loader.read_to_string(&node).await {
            Ok(content) => content,
            Err(err) => {
                debug!("Skipping unreadable {}: {}", node.display(), err);
                return;
            }
        };

        // Must precede recursion: the key is the cycle guard
        self.graph.mark_visited(node.clone());
        debug!("Visiting {}", node.display());

        let references = extract_references(&content);
        let files = self.files;

        for name in references.names() {
            let Some(target) = resolve_component(name, files) else {
                trace!("No file for '{}' referenced from {}", name, node.display());
                continue;
            };

            if self.graph.add_dependency(&node, target.to_path_buf()) {
                debug!("{} -> {} (via '{}')", node.display(), target.display(), name);
            }
            Box::pin(self.visit(target)).await;
        }
    }

    /// The graph built so far.
    #[must_use]
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Finish building and take the graph.
    #[must_use]
    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }
}

/// Build one shared graph for several entry files read from disk.
///
/// Returns the render roots, in entry order, alongside the graph.
pub async fn build_graph(entries: &[PathBuf], files: &FileSet) -> (Vec<PathBuf>, DependencyGraph) {
    let mut builder = GraphBuilder::new(files);
    let mut roots = Vec::with_capacity(entries.len());

    for entry in entries {
        roots.push(builder.add_entry(entry).await);
    }

    (roots, builder.into_graph())
}
