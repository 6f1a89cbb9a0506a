//! Box-drawing text tree.
//!
//! ```text
//! App.vue
//! ├── Header.vue
//! │   └── Logo.vue
//! └── Footer.vue
//! ```

use std::path::{Path, PathBuf};

use super::{RenderOptions, base_name};
use crate::constants::{BRANCH_CORNER, BRANCH_TEE, INDENT_BAR, INDENT_BLANK};
use crate::graph::DependencyGraph;

/// Render the tree below `root`, one line per node, each ending in `\n`.
///
/// Children are printed in dependency order. A root with no node in the
/// graph prints as a single line.
#[must_use]
pub fn render_ascii(root: &Path, graph: &DependencyGraph, options: &RenderOptions) -> String {
    let mut out = base_name(root);
    out.push('\n');

    let mut path = vec![root.to_path_buf()];
    write_children(&mut out, graph, options, "", 1, &mut path);
    out
}

fn write_children(
    out: &mut String,
    graph: &DependencyGraph,
    options: &RenderOptions,
    prefix: &str,
    depth: usize,
    path: &mut Vec<PathBuf>,
) {
    if !options.allows_depth(depth) {
        return;
    }

    let Some(node) = path.last() else {
        return;
    };
    let children = graph.dependencies(node);

    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { BRANCH_CORNER } else { BRANCH_TEE };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&base_name(child));
        out.push('\n');

        // Already on the current path: a self-reference or a cycle
        if path.contains(child) {
            continue;
        }

        let child_prefix = format!("{prefix}{}", if is_last { INDENT_BLANK } else { INDENT_BAR });
        path.push(child.clone());
        write_children(out, graph, options, &child_prefix, depth + 1, path);
        path.pop();
    }
}
