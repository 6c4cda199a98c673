/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! In-memory representation of a periodic crystal structure

use ndarray::{Array1, Array2};
use std::fmt;

/// A single atom inside a parsed structure
#[derive(Debug, Clone)]
pub struct Atom {
    /// Element symbol inherited from the atom's element block
    pub element: String,
    /// 1-based position within the full atom list (not per-element)
    pub index: usize,
    /// Fractional coordinates relative to the lattice
    pub frac_pos: Array1<f64>,
    /// Cartesian coordinates, `frac_pos · lattice * scale`
    pub cart_pos: Array1<f64>,
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} at ({:.6}, {:.6}, {:.6})",
            self.element, self.index, self.cart_pos[0], self.cart_pos[1], self.cart_pos[2]
        )
    }
}

/// A parsed POSCAR/CONTCAR structure
///
/// Atoms are stored in file order, grouped by element block exactly as they
/// appear on disk. Fractional coordinates are kept as read; no wrapping into
/// [0, 1) happens during parsing.
#[derive(Debug, Clone)]
pub struct Structure {
    /// Comment line at the top of the file
    pub title: String,
    /// Global scale factor applied to all cartesian-converted coordinates
    pub scale: f64,
    /// 3x3 lattice matrix; row i is lattice vector i in cartesian units (pre-scale)
    pub lattice: Array2<f64>,
    /// Element symbols in file order
    pub elements: Vec<String>,
    /// Atom counts, same order and length as `elements`
    pub counts: Vec<usize>,
    /// All atoms in file order
    pub atoms: Vec<Atom>,
}

impl Structure {
    /// Get the total number of atoms
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Check whether the structure declares the given element symbol
    pub fn has_element(&self, element: &str) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    /// The lattice matrix with the scale factor applied
    pub fn scaled_lattice(&self) -> Array2<f64> {
        &self.lattice * self.scale
    }

    /// Convert a fractional position to cartesian coordinates
    /// (row vector times lattice matrix, times scale)
    pub fn to_cartesian(&self, frac: &Array1<f64>) -> Array1<f64> {
        frac.dot(&self.lattice) * self.scale
    }
}
