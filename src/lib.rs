/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! # posdiff
//!
//! Displacement analysis between two VASP POSCAR/CONTCAR structure snapshots.
//!
//! The tool parses two structure files describing the same periodic cell
//! (typically a geometry before and after a relaxation), pairs the atoms
//! positionally, and reports the minimum-image corrected displacement of
//! every atom of a chosen element, together with the average and maximum
//! displacement over that element.

pub mod cli;
pub mod displacement;
pub mod files;
pub mod structure;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
