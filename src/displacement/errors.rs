/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Error types for displacement analysis

use std::io;
use thiserror::Error;

/// Errors that can occur during displacement analysis
#[derive(Error, Debug)]
pub enum DisplacementError {
    #[error("element {0} absence")]
    ElementNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for displacement operations
pub type Result<T> = std::result::Result<T, DisplacementError>;
