//! Test utilities
//!
//! Helpers shared by unit tests and the integration suite:
//! - [`MemoryLoader`] - an in-memory [`SourceLoader`](crate::graph::SourceLoader)
//!   that counts reads
//! - [`TestProject`] - a temporary directory populated with component files
//! - [`ComponentFixture`] - canned component sources
//!
//! # Example
//!
//! ```rust,ignore
//! use vue_component_graph::test_utils::{ComponentFixture, TestProject};
//!
//! let project = TestProject::new().unwrap();
//! project.add_component("src/App.vue", &ComponentFixture::using(&["Header"]).content).unwrap();
//! project.add_component("src/Header.vue", &ComponentFixture::leaf().content).unwrap();
//! ```

pub mod environment;
pub mod fixtures;
pub mod loader;

pub use environment::TestProject;
pub use fixtures::ComponentFixture;
pub use loader::MemoryLoader;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=vue_component_graph=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
