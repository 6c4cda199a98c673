/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Crystal structure parsing and representation
//!
//! This module reads VASP POSCAR/CONTCAR files into an in-memory
//! [`Structure`] holding the lattice, the element blocks, and the
//! fractional and cartesian coordinates of every atom.

mod errors;
mod model;
mod parser;

pub use errors::{Result, StructureError};
pub use model::{Atom, Structure};
pub use parser::{parse_poscar_file, parse_poscar_str};
