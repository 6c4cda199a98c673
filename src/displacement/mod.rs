/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Displacement analysis between two parsed structures
//!
//! Pairs the atom lists of two structures positionally, applies the
//! in-plane minimum-image correction, and aggregates per-element
//! displacement statistics into a textual report.

pub mod calculator;
mod errors;
pub mod report;

pub use calculator::{
    apply_in_plane_pbc, compare, lattices_close, normalize_element, AtomDisplacement,
    DisplacementReport,
};
pub use errors::{DisplacementError, Result};
pub use report::{format_report, output_file_name, write_report};
