/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Error types for structure parsing

use std::io;
use thiserror::Error;

/// Errors that can occur while parsing a POSCAR/CONTCAR file
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Missing line {0}: {1}")]
    MissingLine(usize, String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result type for structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
