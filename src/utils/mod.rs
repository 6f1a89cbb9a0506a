//! Filesystem helpers
//!
//! - [`discovery`] - recursive collection of candidate component files

pub mod discovery;

pub use discovery::{ScanOptions, collect_source_files};
