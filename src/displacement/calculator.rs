/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Displacement computation between two structures
//!
//! Atoms are paired positionally: atom k of structure 1 is compared with
//! atom k of structure 2, and both files are trusted to enumerate identical
//! atoms in identical order. Only pairs whose structure-1 atom carries the
//! target element enter the result set.
//!
//! The minimum-image correction is applied to the two in-plane fractional
//! axes only; the out-of-plane axis (component 2) is never adjusted. This
//! asymmetry is deliberate for slab-style cells that are periodic in-plane
//! but not along the surface normal.

use super::errors::{DisplacementError, Result};
use crate::structure::Structure;

use log::{debug, warn};
use ndarray::{Array1, Array2};

// numpy.allclose defaults, used for the lattice consistency check
const LATTICE_RTOL: f64 = 1e-5;
const LATTICE_ATOL: f64 = 1e-8;

/// Displacement of one matched atom between the two structures
#[derive(Debug, Clone)]
pub struct AtomDisplacement {
    /// 1-based atom index shared by both structures
    pub index: usize,
    /// Cartesian displacement after the in-plane periodic correction
    pub delta_cart: Array1<f64>,
    /// Euclidean norm of `delta_cart`
    pub delta_total: f64,
    /// Absolute cartesian position in structure 1
    pub pos1: Array1<f64>,
    /// Absolute cartesian position in structure 2
    pub pos2: Array1<f64>,
    /// Raw fractional delta before any periodic correction
    pub delta_frac: Array1<f64>,
}

/// Result of comparing two structures for one element
#[derive(Debug, Clone)]
pub struct DisplacementReport {
    /// Target element symbol
    pub element: String,
    /// Per-atom displacements in atom-index order
    pub displacements: Vec<AtomDisplacement>,
    /// Whether the two lattices agreed within tolerance
    pub lattice_match: bool,
}

impl DisplacementReport {
    /// Arithmetic mean of the total displacements, `None` when no atoms matched
    pub fn average(&self) -> Option<f64> {
        if self.displacements.is_empty() {
            return None;
        }
        let sum: f64 = self.displacements.iter().map(|d| d.delta_total).sum();
        Some(sum / self.displacements.len() as f64)
    }

    /// Maximum total displacement, `None` when no atoms matched
    pub fn maximum(&self) -> Option<f64> {
        self.displacements
            .iter()
            .map(|d| d.delta_total)
            .fold(None, |max, d| Some(max.map_or(d, |m| f64::max(m, d))))
    }
}

/// Normalize a user-entered element symbol: first character uppercased,
/// the rest lowercased ("pt" -> "Pt", "PT" -> "Pt")
pub fn normalize_element(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Elementwise closeness check for two lattice matrices
/// (`|a - b| <= atol + rtol * |b|` for every component)
pub fn lattices_close(a: &Array2<f64>, b: &Array2<f64>) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - y).abs() <= LATTICE_ATOL + LATTICE_RTOL * y.abs())
}

/// Apply the minimum-image correction to the two in-plane components of a
/// fractional delta. Component 2 is left untouched.
pub fn apply_in_plane_pbc(delta_frac: &Array1<f64>) -> Array1<f64> {
    let mut corrected = delta_frac.clone();
    for k in 0..2 {
        if corrected[k] > 0.5 {
            corrected[k] -= 1.0;
        } else if corrected[k] < -0.5 {
            corrected[k] += 1.0;
        }
    }
    corrected
}

/// Compare two structures and collect displacements of every atom of the
/// target element
///
/// Structure 1's lattice and scale are always the reference frame for the
/// cartesian conversion. A lattice mismatch between the files is a warning,
/// not an error; the comparison proceeds on structure 1's frame.
pub fn compare(s1: &Structure, s2: &Structure, element: &str) -> Result<DisplacementReport> {
    if !s1.has_element(element) {
        return Err(DisplacementError::ElementNotFound(element.to_string()));
    }

    let lattice_match = lattices_close(&s1.lattice, &s2.lattice);
    if !lattice_match {
        warn!("lattice parameter difference between the two structures");
    }

    let reference_lattice = s1.scaled_lattice();

    let mut displacements = Vec::new();
    for (atom1, atom2) in s1.atoms.iter().zip(s2.atoms.iter()) {
        if atom1.element != element {
            continue;
        }

        let delta_frac = &atom2.frac_pos - &atom1.frac_pos;
        let delta_cart = apply_in_plane_pbc(&delta_frac).dot(&reference_lattice);
        let delta_total = delta_cart.dot(&delta_cart).sqrt();

        displacements.push(AtomDisplacement {
            index: atom1.index,
            delta_cart,
            delta_total,
            pos1: atom1.cart_pos.clone(),
            pos2: atom2.cart_pos.clone(),
            delta_frac,
        });
    }

    debug!(
        "matched {} atoms of element {}",
        displacements.len(),
        element
    );

    Ok(DisplacementReport {
        element: element.to_string(),
        displacements,
        lattice_match,
    })
}
