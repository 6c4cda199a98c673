/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Parser for the POSCAR/CONTCAR structure file format
//!
//! The format is fixed and line-based (0-indexed):
//!
//! ```text
//! line 0     comment / title
//! line 1     scale factor
//! lines 2-4  lattice vectors (three reals each)
//! line 5     element symbols
//! line 6     atom counts per element
//! line 7     "Selective dynamics" marker (optional) or coordinate type
//! following  one atom per line, first three tokens are fractional coordinates
//! ```
//!
//! When line 7 contains the marker, the coordinate-type line shifts down by
//! one and atom data starts at line 9 instead of line 8. The coordinate-type
//! line itself is skipped without interpretation; coordinates are always read
//! as fractional. Trailing tokens on atom lines (selective-dynamics flags)
//! are ignored.

use super::errors::{Result, StructureError};
use super::model::{Atom, Structure};

use log::debug;
use ndarray::{arr1, Array2};
use std::fs;
use std::path::Path;

/// Parse a POSCAR/CONTCAR file into a [`Structure`]
pub fn parse_poscar_file<P: AsRef<Path>>(path: P) -> Result<Structure> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("parsing structure file {}", path.display());
    parse_poscar_str(&content)
}

/// Parse POSCAR/CONTCAR content from a string
pub fn parse_poscar_str(content: &str) -> Result<Structure> {
    let lines: Vec<&str> = content.lines().collect();

    let title = line(&lines, 0, "title")?.trim().to_string();
    let scale = parse_real(line(&lines, 1, "scale factor")?.trim(), 1)?;

    let mut lattice = Array2::<f64>::zeros((3, 3));
    for i in 0..3 {
        let row = line(&lines, 2 + i, "lattice vector")?;
        let components: Vec<&str> = row.split_whitespace().take(3).collect();
        if components.len() < 3 {
            return Err(StructureError::ParseError(format!(
                "lattice vector on line {} has fewer than 3 components",
                2 + i
            )));
        }
        for (j, token) in components.iter().enumerate() {
            lattice[[i, j]] = parse_real(token, 2 + i)?;
        }
    }

    let elements: Vec<String> = line(&lines, 5, "element symbols")?
        .split_whitespace()
        .map(|s| s.to_string())
        .collect();
    if elements.is_empty() {
        return Err(StructureError::ParseError(
            "element symbol line (line 5) is empty".to_string(),
        ));
    }

    let mut counts = Vec::with_capacity(elements.len());
    for token in line(&lines, 6, "atom counts")?.split_whitespace() {
        let count: usize = token.parse().map_err(|_| {
            StructureError::ParseError(format!("invalid atom count '{}' on line 6", token))
        })?;
        counts.push(count);
    }

    // "Selective dynamics" pushes the coordinate block down by one line
    let marker = line(&lines, 7, "coordinate type")?;
    let coord_start = if marker.trim().contains("Selective") {
        9
    } else {
        8
    };

    let mut atoms = Vec::new();
    let mut index = 0usize;
    for (element, &count) in elements.iter().zip(counts.iter()) {
        for _ in 0..count {
            let row = line(&lines, coord_start + index, "atom coordinates")?;
            let tokens: Vec<&str> = row.split_whitespace().take(3).collect();
            if tokens.len() < 3 {
                return Err(StructureError::ParseError(format!(
                    "atom line {} has fewer than 3 coordinates",
                    coord_start + index
                )));
            }
            let frac_pos = arr1(&[
                parse_real(tokens[0], coord_start + index)?,
                parse_real(tokens[1], coord_start + index)?,
                parse_real(tokens[2], coord_start + index)?,
            ]);
            let cart_pos = frac_pos.dot(&lattice) * scale;

            index += 1;
            atoms.push(Atom {
                element: element.clone(),
                index,
                frac_pos,
                cart_pos,
            });
        }
    }

    let expected: usize = counts.iter().sum();
    if atoms.len() != expected {
        return Err(StructureError::InvalidStructure(format!(
            "expected {} atoms from counts, parsed {}",
            expected,
            atoms.len()
        )));
    }

    debug!(
        "parsed {} atoms across {} element blocks",
        atoms.len(),
        elements.len()
    );

    Ok(Structure {
        title,
        scale,
        lattice,
        elements,
        counts,
        atoms,
    })
}

fn line<'a>(lines: &[&'a str], idx: usize, what: &str) -> Result<&'a str> {
    lines
        .get(idx)
        .copied()
        .ok_or_else(|| StructureError::MissingLine(idx, what.to_string()))
}

fn parse_real(token: &str, line_number: usize) -> Result<f64> {
    token.parse().map_err(|_| {
        StructureError::ParseError(format!(
            "invalid real number '{}' on line {}",
            token, line_number
        ))
    })
}
