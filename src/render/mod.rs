//! Rendering of a [`DependencyGraph`](crate::graph::DependencyGraph).
//!
//! Every renderer walks the graph depth-first from its roots and prints a
//! tree: a node shared by several parents appears once under each of them.
//! The graph itself may hold self-edges and back-edges, so renderers track
//! the current path and print a child that is already on it as a leaf.
//!
//! - [`ascii`] - box-drawing text tree, one per root
//! - [`html`] - self-contained interactive document
//! - [`json`] - nested machine-readable tree

pub mod ascii;
pub mod html;
pub mod json;

pub use ascii::render_ascii;
pub use html::render_html;
pub use json::render_json;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text tree per target
    #[default]
    Ascii,
    /// Interactive HTML document
    Html,
    /// Nested JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Options shared by all renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest level to print, counted in edges from the root. `None` is unlimited.
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    /// Whether nodes `depth` edges below a root are printed.
    #[must_use]
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

/// Display label of a node: its file name.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
