//! Command-line interface.
//!
//! A single command: collect component files under a root, build the
//! dependency graph from one or more entry files, and print it.
//!
//! ```bash
//! # Text tree for one entry
//! vue-component-graph src/App.vue
//!
//! # Several entries in one HTML document, scanning only src/
//! vue-component-graph -r src -o html src/pages/Home.vue src/pages/About.vue > tree.html
//!
//! # Direct dependencies only, stable resolution order
//! vue-component-graph --depth 1 --sorted src/App.vue
//! ```
//!
//! Options not given on the command line fall back to the `--config` file,
//! then to built-in defaults. Logging goes to stderr and never mixes with the
//! rendered output on stdout.

mod generate;


pub use generate::{Settings, generate};

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GraphConfig;
use crate::render::OutputFormat;

/// Logging setup derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Install the stderr subscriber. `RUST_LOG` overrides the flag-derived
    /// level. A second call is a no-op.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&self.log_level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "vue-component-graph",
    about = "Show which components a Vue component transitively uses",
    version,
    long_about = "Scans a directory for .vue files, infers component dependencies from \
                  named imports and custom tags, and prints the tree below each target."
)]
pub struct Cli {
    /// Entry component files
    #[arg(required = true, num_args = 1.., value_name = "TARGETS")]
    targets: Vec<PathBuf>,

    /// Directory to scan for component files [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output format [default: ascii]
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    output: Option<OutputFormat>,

    /// Maximum depth to print (1 = direct dependencies only)
    #[arg(short, long, value_name = "N")]
    depth: Option<usize>,

    /// Walk directories in name order so same-named files resolve the same
    /// way on every platform
    #[arg(long)]
    sorted: bool,

    /// Read defaults from a TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Set up logging, then generate and print the graph.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Logging configuration for the `--verbose` and `--quiet` flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
        }
    }

    /// Generate and print the graph with logging already configured.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        tracing::debug!("Log level: {}", config.log_level);

        let file_config = match &self.config {
            Some(path) => GraphConfig::load_from(path).await?,
            None => GraphConfig::default(),
        };

        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let settings = self.settings(file_config, cwd)?;
        let output = generate(&settings).await?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes()).context("Failed to write output")?;
        stdout.flush().context("Failed to write output")?;
        Ok(())
    }

    /// Merge flags over `config`, falling back to `cwd` for the scan root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidDepth`](crate::core::GraphError::InvalidDepth)
    /// for a depth of zero from either source.
    pub fn settings(&self, config: GraphConfig, cwd: PathBuf) -> Result<Settings> {
        let mut scan = config.scan_options();
        scan.sorted |= self.sorted;

        Settings::new(
            self.targets.clone(),
            self.root.clone().or(config.root).unwrap_or(cwd),
            self.output.or(config.output).unwrap_or_default(),
            scan,
            self.depth.or(config.depth),
        )
    }
}
