//! Interactive HTML tree.
//!
//! The document is self-contained: styles and scripts are inlined by the
//! template in `templates/tree.html`. Each root becomes one
//! `<ul class="tree-root">`, and each node a list item shaped as
//!
//! ```html
//! <li>
//!   <div class="node parent">
//!     <span class="toggle"></span><span class="label">App.vue</span>
//!     <button class="hide-btn" title="Hide all 'App.vue'">×</button>
//!   </div>
//!   <ul>...</ul>
//! </li>
//! ```
//!
//! Only nodes whose children are actually printed get the `parent` class and
//! a nested list. In the browser, clicking a parent node collapses or expands
//! its list; with Shift held the same state is applied to every descendant.
//! The hide button removes every item whose label equals this one, so
//! distinct files sharing a name are hidden together.

use anyhow::Result;
use std::error::Error as _;
use std::fmt::{self, Write as _};
use std::path::PathBuf;
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use super::{RenderOptions, base_name};
use crate::constants::HTML_TITLE;
use crate::core::GraphError;
use crate::graph::DependencyGraph;

const TEMPLATE_NAME: &str = "tree.html";
const TEMPLATE: &str = include_str!("templates/tree.html");

/// Render all `roots` into one HTML document ending with a newline.
///
/// # Errors
///
/// Returns [`GraphError::TemplateError`] if the embedded template fails to
/// parse or render.
pub fn render_html(roots: &[PathBuf], graph: &DependencyGraph, options: &RenderOptions) -> Result<String> {
    let mut lists = String::new();
    for root in roots {
        lists.push_str("    <ul class=\"tree-root\">\n");
        let mut path = vec![root.clone()];
        write_item(&mut lists, graph, options, 0, &mut path)?;
        lists.push_str("    </ul>\n");
    }

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE).map_err(template_error)?;

    let mut context = TeraContext::new();
    context.insert("title", HTML_TITLE);
    context.insert("lists", &lists);

    let mut html = tera.render(TEMPLATE_NAME, &context).map_err(template_error)?;
    if !html.ends_with('\n') {
        html.push('\n');
    }

    debug!("Rendered HTML document with {} roots", roots.len());
    Ok(html)
}

fn write_item(
    out: &mut String,
    graph: &DependencyGraph,
    options: &RenderOptions,
    depth: usize,
    path: &mut Vec<PathBuf>,
) -> fmt::Result {
    let Some(node) = path.last().cloned() else {
        return Ok(());
    };

    // Children of a node repeated on its own path are never expanded
    let repeated = path[..path.len() - 1].contains(&node);
    let children = graph.dependencies(&node);
    let expand = !repeated && !children.is_empty() && options.allows_depth(depth + 1);

    let indent = "  ".repeat(depth * 2 + 3);
    let label = tera::escape_html(&base_name(&node));
    let class = if expand { "node parent" } else { "node" };

    writeln!(out, "{indent}<li>")?;
    writeln!(
        out,
        "{indent}  <div class=\"{class}\"><span class=\"toggle\"></span><span class=\"label\">{label}</span><button class=\"hide-btn\" title=\"Hide all '{label}'\">×</button></div>"
    )?;

    if expand {
        writeln!(out, "{indent}  <ul>")?;
        for child in children {
            path.push(child.clone());
            write_item(out, graph, options, depth + 1, path)?;
            path.pop();
        }
        writeln!(out, "{indent}  </ul>")?;
    }

    writeln!(out, "{indent}</li>")
}

fn template_error(error: tera::Error) -> anyhow::Error {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        reason.push_str(&format!(": {err}"));
        source = err.source();
    }
    GraphError::TemplateError {
        reason,
    }
    .into()
}
