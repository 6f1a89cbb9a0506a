//! The collect, build, render pipeline behind the command.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::core::GraphError;
use crate::graph::build_graph;
use crate::render::{OutputFormat, RenderOptions, render_ascii, render_html, render_json};
use crate::utils::{ScanOptions, collect_source_files};

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub targets: Vec<PathBuf>,
    pub root: PathBuf,
    pub output: OutputFormat,
    pub scan: ScanOptions,
    pub render: RenderOptions,
}

impl Settings {
    /// Validate and bundle run options.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidDepth`] if `max_depth` is zero.
    pub fn new(
        targets: Vec<PathBuf>,
        root: PathBuf,
        output: OutputFormat,
        scan: ScanOptions,
        max_depth: Option<usize>,
    ) -> Result<Self> {
        if max_depth == Some(0) {
            return Err(GraphError::InvalidDepth {
                depth: 0,
            }
            .into());
        }

        Ok(Self {
            targets,
            root,
            output,
            scan,
            render: RenderOptions {
                max_depth,
            },
        })
    }
}

/// Run the pipeline and return the rendered output.
///
/// ASCII output holds one tree per target in target order; HTML and JSON
/// output hold every target in a single document.
///
/// # Errors
///
/// Fails if the scan root cannot be listed or rendering fails. Unreadable
/// components and unresolved names only prune the graph.
pub async fn generate(settings: &Settings) -> Result<String> {
    let files = collect_source_files(&settings.root, &settings.scan)?;
    let (roots, graph) = build_graph(&settings.targets, &files).await;

    info!(
        "Built graph with {} nodes from {} targets, rendering as {}",
        graph.len(),
        roots.len(),
        settings.output
    );

    match settings.output {
        OutputFormat::Ascii => {
            Ok(roots.iter().map(|root| render_ascii(root, &graph, &settings.render)).collect())
        }
        OutputFormat::Html => render_html(&roots, &graph, &settings.render),
        OutputFormat::Json => render_json(&roots, &graph, &settings.render),
    }
}
