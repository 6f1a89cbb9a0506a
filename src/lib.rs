//! Vue component dependency graph
//!
//! Infers which components a component uses, directly and transitively, from
//! the raw text of `.vue` files, and renders the result as a text tree, an
//! interactive HTML page, or JSON.
//!
//! # How It Works
//!
//! 1. **Collect** every `.vue` file under a root directory, skipping
//!    `node_modules` ([`utils::collect_source_files`])
//! 2. **Extract** named imports and custom tags from an entry file
//!    ([`graph::extract_references`])
//! 3. **Resolve** each name to a collected file by base name
//!    ([`graph::resolve_component`])
//! 4. **Build** the graph depth-first from every entry, reading each file at
//!    most once ([`graph::GraphBuilder`])
//! 5. **Render** the tree below each entry ([`render`])
//!
//! Extraction is pattern matching, not parsing. It misses dynamically
//! registered components and can pick up tags inside comments.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line parsing and the collect, build, render pipeline
//! - [`config`] - Optional TOML configuration file
//! - [`constants`] - Defaults and tree-drawing glyphs
//! - [`core`] - Error types and user-facing error formatting
//! - [`graph`] - File set, dependency graph, extraction, resolution, building
//! - [`render`] - ASCII, HTML and JSON renderers
//! - [`utils`] - Filesystem scanning
//!
//! # Example
//!
//! ```rust,no_run
//! use vue_component_graph::graph::build_graph;
//! use vue_component_graph::render::{RenderOptions, render_ascii};
//! use vue_component_graph::utils::{ScanOptions, collect_source_files};
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let files = collect_source_files(Path::new("."), &ScanOptions::default())?;
//! let (roots, graph) = build_graph(&[PathBuf::from("src/App.vue")], &files).await;
//! print!("{}", render_ascii(&roots[0], &graph, &RenderOptions::default()));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod graph;
pub mod render;
pub mod utils;

// Test utilities (only compiled for tests)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
