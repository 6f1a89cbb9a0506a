//! Component dependency graph.
//!
//! The graph is inferred from raw component text, not from a parsed AST:
//!
//! 1. [`extractor`] pulls named imports and custom tag usages out of a file
//! 2. [`resolver`] maps each name to a file in the collected [`FileSet`]
//! 3. [`builder`] walks outward from the entry files, memoizing every visited
//!    node in a shared [`DependencyGraph`]
//!
//! Files are read through the [`loader::SourceLoader`] seam so the builder can
//! run against the filesystem or an in-memory tree.

pub mod builder;
pub mod extractor;
pub mod loader;
pub mod resolver;

pub use builder::{GraphBuilder, build_graph};
pub use extractor::{References, extract_imported_names, extract_references, extract_used_tags};
pub use loader::{FsLoader, SourceLoader};
pub use resolver::{kebab_case, resolve_component};

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Ordered, deduplicated list of candidate component files.
///
/// Built once per run by the file collector and read-only afterwards. The
/// order is the collector's enumeration order, which decides which file wins
/// when several share a base name (see [`resolve_component`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
    extension: String,
}

impl FileSet {
    /// Create an empty set for files ending in `.<extension>`.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            seen: HashSet::new(),
            extension: extension.into(),
        }
    }

    /// Build a set from paths in the given order, dropping repeats.
    pub fn from_paths<I>(paths: I, extension: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut set = Self::new(extension);
        for path in paths {
            set.push(path);
        }
        set
    }

    /// Append a path unless it is already present. Returns `true` if added.
    pub fn push(&mut self, path: PathBuf) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.files.push(path);
        true
    }

    /// Iterate over the files in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the set holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Extension (without the dot) of the files in this set.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Lowercased base name of `path` with this set's extension stripped.
    ///
    /// `src/components/FooBar.vue` becomes `foobar`. A name without the
    /// extension is lowercased as is.
    #[must_use]
    pub fn component_stem(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        let suffix = format!(".{}", self.extension);
        let stem = name.strip_suffix(suffix.as_str()).unwrap_or(&name);
        Some(stem.to_lowercase())
    }
}

/// Mapping from a visited file to the files it directly depends on.
///
/// A key's presence means "visited"; that, not the emptiness of its list, is
/// the cycle guard used by [`GraphBuilder`]. Files that could not be read
/// never become keys, but they can still appear as dependencies of other
/// nodes. Each dependency list keeps first-discovery order without repeats.
///
/// Edges are recorded even when their target is already being visited, so a
/// self-referencing component has itself as a dependency. Anything walking the
/// graph recursively has to guard against revisiting its own ancestors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: HashMap<PathBuf, Vec<PathBuf>>,
}

impl DependencyGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` has been visited.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    /// Direct dependencies of `path` in discovery order.
    ///
    /// Unvisited or unreadable paths have no dependencies.
    #[must_use]
    pub fn dependencies(&self, path: &Path) -> &[PathBuf] {
        self.nodes.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Record `path` as visited with an empty dependency list.
    ///
    /// Returns `false` if it was already visited, leaving its list untouched.
    pub fn mark_visited(&mut self, path: PathBuf) -> bool {
        if self.nodes.contains_key(&path) {
            return false;
        }
        self.nodes.insert(path, Vec::new());
        true
    }

    /// Append `to` to the dependency list of the visited node `from`.
    ///
    /// Returns `true` if a new edge was added; repeats and edges from
    /// unvisited nodes are ignored.
    pub fn add_dependency(&mut self, from: &Path, to: PathBuf) -> bool {
        match self.nodes.get_mut(from) {
            Some(deps) if !deps.contains(&to) => {
                deps.push(to);
                true
            }
            _ => false,
        }
    }

    /// Number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
