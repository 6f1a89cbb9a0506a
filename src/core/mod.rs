//! Core types shared across the crate.
//!
//! Currently this is the error layer: [`GraphError`] for typed failures and
//! [`ErrorContext`] / [`user_friendly_error`] for presenting them.

pub mod error;

pub use error::{ErrorContext, GraphError, user_friendly_error};
