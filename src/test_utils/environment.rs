//! Temporary project directories for filesystem tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding component files.
///
/// The directory is removed when the value is dropped.
pub struct TestProject {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestProject {
    /// Create an empty project.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        // Canonical so paths compare equal to what the collector reports
        let root = temp_dir.path().canonicalize()?;

        Ok(Self {
            temp_dir,
            root,
        })
    }

    /// Write `content` to `relative_path`, creating parent directories.
    pub fn add_component(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Absolute path of `relative_path` inside the project.
    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
