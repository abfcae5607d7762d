//! Error types for Laminar operations.
//!
//! This module provides the main error type [`LaminarError`]. Problems that do
//! not stop a network from being built, such as two adjacent layers that have
//! no connector, are reported as [`Diagnostic`](crate::diagnostic::Diagnostic)s
//! instead.

use std::io;

use thiserror::Error;

/// The main error type for Laminar operations.
#[derive(Debug, Error)]
pub enum LaminarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LaminarError {
    /// Create a new `Config` error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
