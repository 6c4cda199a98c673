/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Input-file resolution
//!
//! Three strategies, resolved before any parsing happens:
//! - explicit paths supplied by the caller,
//! - the fixed default pair (`CONTCAR` and `CONTCAR (1)`) in the working
//!   directory (active default),
//! - discovery, scanning the working directory for file names starting
//!   with `POSCAR` or `CONTCAR` and taking the first two in name order.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default first structure file
pub const DEFAULT_FILE_1: &str = "CONTCAR";
/// Default second structure file
pub const DEFAULT_FILE_2: &str = "CONTCAR (1)";

/// File-name prefixes recognized by discovery
const DISCOVERY_PREFIXES: [&str; 2] = ["POSCAR", "CONTCAR"];

/// Errors that can occur while resolving input files
#[derive(Error, Debug)]
pub enum FilesError {
    #[error("error: two structure files needed (found {0} candidates)")]
    NotEnoughFiles(usize),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for file-resolution operations
pub type Result<T> = std::result::Result<T, FilesError>;

/// How the two input files are selected
#[derive(Debug, Clone)]
pub enum FileSelection {
    /// Use the two given paths as-is
    Explicit(PathBuf, PathBuf),
    /// Use the fixed default names inside the working directory
    Fixed,
    /// Scan the working directory for POSCAR/CONTCAR-prefixed files
    Discover,
}

/// Resolve the pair of structure files to compare
pub fn resolve(selection: &FileSelection, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let pair = match selection {
        FileSelection::Explicit(file1, file2) => (file1.clone(), file2.clone()),
        FileSelection::Fixed => (dir.join(DEFAULT_FILE_1), dir.join(DEFAULT_FILE_2)),
        FileSelection::Discover => discover_pair(dir)?,
    };
    debug!(
        "resolved structure files {} and {}",
        pair.0.display(),
        pair.1.display()
    );
    Ok(pair)
}

/// Scan `dir` for structure files and return the first two in name order
///
/// Names are sorted so repeated runs over the same directory pick the same
/// pair regardless of directory enumeration order.
pub fn discover_pair(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if DISCOVERY_PREFIXES.iter().any(|p| name.starts_with(p)) {
            candidates.push(entry.path());
        }
    }

    if candidates.len() < 2 {
        return Err(FilesError::NotEnoughFiles(candidates.len()));
    }

    candidates.sort();
    Ok((candidates[0].clone(), candidates[1].clone()))
}
