//! Error handling for the component graph tool
//!
//! Two layers, as in most CLIs built on `anyhow`:
//! - [`GraphError`] - typed failures that callers can match on
//! - [`ErrorContext`] - a [`GraphError`] decorated with details and a suggestion
//!   for display on the terminal
//!
//! Only a handful of failures are fatal. Unreadable component files and names
//! that resolve to nothing are not errors at all: the graph builder treats them
//! as missing edges and never surfaces them here.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vue_component_graph::core::{GraphError, user_friendly_error};
//!
//! let err = anyhow::Error::from(GraphError::RootDirectoryUnreadable {
//!     path: "/missing".to_string(),
//!     reason: "No such file or directory".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for graph generation.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    /// The scan root could not be listed.
    ///
    /// Raised by the file collector before any graph work starts. This is
    /// the only filesystem failure that aborts a run.
    #[error("Cannot list root directory: {path}")]
    RootDirectoryUnreadable {
        /// The root directory that was requested
        path: String,
        /// The underlying I/O failure
        reason: String,
    },

    /// A configuration file passed with `--config` does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was given on the command line
        path: String,
    },

    /// A configuration file exists but is not valid TOML for this tool.
    #[error("Invalid configuration file {file}: {reason}")]
    ConfigParseError {
        /// The configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A depth limit of zero was requested.
    #[error("Invalid depth {depth}: depth must be at least 1")]
    InvalidDepth {
        /// The rejected value
        depth: usize,
    },

    /// The HTML template failed to render.
    #[error("Failed to render HTML document: {reason}")]
    TemplateError {
        /// Message reported by the template engine
        reason: String,
    },

    /// Anything else, usually a message collected from an error chain.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A [`GraphError`] with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: GraphError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: GraphError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Known [`GraphError`] variants get tailored suggestions, bare I/O errors
/// get filesystem hints, and everything else is reported with its full
/// `Caused by` chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(graph_error) = error.downcast_ref::<GraphError>() {
        return create_error_context(graph_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(GraphError::Other {
                    message: error_chain_message(&error),
                })
                .with_suggestion("Check the permissions of the scanned directory and its subdirectories")
                .with_details("Every directory below the scan root must be listable");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(GraphError::Other {
                    message: error_chain_message(&error),
                })
                .with_suggestion("Check that the path exists and is spelled correctly");
            }
            _ => {}
        }
    }

    ErrorContext::new(GraphError::Other {
        message: error_chain_message(&error),
    })
}

fn error_chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // the root message is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: GraphError) -> ErrorContext {
    match &error {
        GraphError::RootDirectoryUnreadable {
            path,
            reason,
        } => {
            let details = format!("Listing '{path}' failed: {reason}");
            ErrorContext::new(error)
                .with_suggestion(
                    "Pass an existing directory with --root, or run the command from your project directory",
                )
                .with_details(details)
        }
        GraphError::ConfigNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the path given to --config, or omit the flag to use defaults"),
        GraphError::ConfigParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion(
                "Check the TOML syntax. Known keys: root, output, extension, exclude, sorted, depth",
            )
            .with_details("output must be one of \"ascii\", \"html\" or \"json\""),
        GraphError::InvalidDepth {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use --depth 1 to show only direct dependencies, or omit it"),
        _ => ErrorContext::new(error),
    }
}
