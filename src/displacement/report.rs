/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Textual report formatting and output file writing
//!
//! The report body is the same text on the console and in the output file;
//! the file additionally carries a header naming the two compared files.

use super::calculator::DisplacementReport;
use super::errors::Result;

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Format the report body: one table row per matched atom followed by the
/// collective statistics, all values to 6 decimal places
pub fn format_report(report: &DisplacementReport) -> String {
    let mut lines = Vec::new();
    lines.push("\n (Coordinates: Å):".to_string());
    lines.push("Num, X, Y, Z, displacement, 1_position(X,Y,Z), 2_position(X,Y,Z)".to_string());

    for d in &report.displacements {
        let pos1 = format!("{:.6}, {:.6}, {:.6}", d.pos1[0], d.pos1[1], d.pos1[2]);
        let pos2 = format!("{:.6}, {:.6}, {:.6}", d.pos2[0], d.pos2[1], d.pos2[2]);
        lines.push(format!(
            "{:4}, {:10.6}, {:10.6}, {:10.6}, {:10.6}, {}, {}",
            d.index, d.delta_cart[0], d.delta_cart[1], d.delta_cart[2], d.delta_total, pos1, pos2
        ));
    }

    match (report.average(), report.maximum()) {
        (Some(average), Some(maximum)) => {
            lines.push(format!("\ncollective - element {}:", report.element));
            lines.push(format!("average: {:.6} Å", average));
            lines.push(format!("maximum: {:.6} Å", maximum));
            lines.push("\nNote: periodic correction implied".to_string());
        }
        _ => {
            lines.push(format!("absence {} atoms", report.element));
        }
    }

    lines.join("\n")
}

/// Name of the output file for a given run index
pub fn output_file_name(run_index: usize) -> String {
    format!("{}output.txt", run_index)
}

/// Write the report to `{run_index}output.txt` inside `dir`, with a header
/// naming the two compared files, and return the path written
pub fn write_report(
    dir: &Path,
    run_index: usize,
    file1: &str,
    file2: &str,
    body: &str,
) -> Result<PathBuf> {
    let path = dir.join(output_file_name(run_index));
    let content = format!("compare: {} and {}\n{}", file1, file2, body);
    fs::write(&path, content)?;
    debug!("report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displacement::calculator::AtomDisplacement;
    use ndarray::arr1;

    fn report_with(displacements: Vec<AtomDisplacement>) -> DisplacementReport {
        DisplacementReport {
            element: "Pt".to_string(),
            displacements,
            lattice_match: true,
        }
    }

    fn single_displacement() -> AtomDisplacement {
        AtomDisplacement {
            index: 1,
            delta_cart: arr1(&[-0.4, 0.0, 0.0]),
            delta_total: 0.4,
            pos1: arr1(&[0.2, 5.0, 5.0]),
            pos2: arr1(&[9.8, 5.0, 5.0]),
            delta_frac: arr1(&[0.96, 0.0, 0.0]),
        }
    }

    #[test]
    fn test_body_contains_table_and_statistics() {
        let body = format_report(&report_with(vec![single_displacement()]));
        assert!(body.contains("Num, X, Y, Z, displacement"));
        assert!(body.contains("-0.400000"));
        assert!(body.contains("average: 0.400000 Å"));
        assert!(body.contains("maximum: 0.400000 Å"));
        assert!(body.contains("periodic correction implied"));
    }

    #[test]
    fn test_empty_report_states_absence() {
        let body = format_report(&report_with(Vec::new()));
        assert!(body.contains("absence Pt atoms"));
        assert!(!body.contains("average:"));
        assert!(!body.contains("maximum:"));
    }

    #[test]
    fn test_positions_use_six_decimals() {
        let body = format_report(&report_with(vec![single_displacement()]));
        assert!(body.contains("0.200000, 5.000000, 5.000000"));
        assert!(body.contains("9.800000, 5.000000, 5.000000"));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(0), "0output.txt");
        assert_eq!(output_file_name(3), "3output.txt");
    }

    #[test]
    fn test_write_report_includes_header() {
        let dir = tempfile::tempdir().unwrap();
        let body = format_report(&report_with(vec![single_displacement()]));
        let path = write_report(dir.path(), 0, "CONTCAR", "CONTCAR (1)", &body).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.starts_with("compare: CONTCAR and CONTCAR (1)\n"));
        assert!(written.ends_with(&body));
    }
}
