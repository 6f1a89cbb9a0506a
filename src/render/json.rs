//! Nested JSON tree.
//!
//! ```json
//! {
//!   "roots": [
//!     {
//!       "name": "App.vue",
//!       "path": "/project/src/App.vue",
//!       "dependencies": [
//!         { "name": "Header.vue", "path": "/project/src/Header.vue", "dependencies": [] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{RenderOptions, base_name};
use crate::graph::DependencyGraph;

/// One rendered node and its printed children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonNode {
    pub name: String,
    pub path: String,
    pub dependencies: Vec<JsonNode>,
}

#[derive(Serialize)]
struct JsonDocument {
    roots: Vec<JsonNode>,
}

/// Build the tree below `root` with the same cut rules as the text renderers.
#[must_use]
pub fn json_tree(root: &Path, graph: &DependencyGraph, options: &RenderOptions) -> JsonNode {
    let mut path = vec![root.to_path_buf()];
    build_node(graph, options, 0, &mut path)
}

fn build_node(
    graph: &DependencyGraph,
    options: &RenderOptions,
    depth: usize,
    path: &mut Vec<PathBuf>,
) -> JsonNode {
    let node = path.last().cloned().unwrap_or_default();
    let repeated = path.iter().filter(|p| **p == node).count() > 1;

    let mut dependencies = Vec::new();
    if !repeated && options.allows_depth(depth + 1) {
        for child in graph.dependencies(&node) {
            path.push(child.clone());
            dependencies.push(build_node(graph, options, depth + 1, path));
            path.pop();
        }
    }

    JsonNode {
        name: base_name(&node),
        path: node.display().to_string(),
        dependencies,
    }
}

/// Render all `roots` as one pretty-printed JSON document ending with a newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(roots: &[PathBuf], graph: &DependencyGraph, options: &RenderOptions) -> Result<String> {
    let document = JsonDocument {
        roots: roots.iter().map(|root| json_tree(root, graph, options)).collect(),
    };

    let mut json =
        serde_json::to_string_pretty(&document).context("Failed to serialize dependency tree")?;
    json.push('\n');
    Ok(json)
}
