//! Global constants used throughout the crate.
//!
//! Defaults for file collection and rendering live here so the CLI, the
//! configuration layer and the tests agree on the same values.

/// File extension (without the dot) of component source files.
pub const DEFAULT_EXTENSION: &str = "vue";

/// Directory name skipped while collecting source files.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Branch drawn before a child that has later siblings.
pub const BRANCH_TEE: &str = "├── ";

/// Branch drawn before the last child of a node.
pub const BRANCH_CORNER: &str = "└── ";

/// Indentation continued below a child that has later siblings.
pub const INDENT_BAR: &str = "│   ";

/// Indentation continued below the last child of a node.
pub const INDENT_BLANK: &str = "    ";

/// Title of the generated HTML document.
pub const HTML_TITLE: &str = "Component Tree";
