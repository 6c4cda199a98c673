use approx::assert_relative_eq;
use posdiff::displacement::{compare, DisplacementError};
use posdiff::structure::parse_poscar_str;

fn cubic_cell(positions: &str) -> String {
    format!(
        "\
Pt in cubic cell
1.0
10.0 0.0 0.0
0.0 10.0 0.0
0.0 0.0 10.0
Pt
1
Direct
{}
",
        positions
    )
}

#[test]
fn test_wrap_around_displacement() {
    // atom crossing the x boundary: raw fractional delta 0.96 wraps to -0.04
    let s1 = parse_poscar_str(&cubic_cell("0.02 0.5 0.5")).unwrap();
    let s2 = parse_poscar_str(&cubic_cell("0.98 0.5 0.5")).unwrap();

    let report = compare(&s1, &s2, "Pt").unwrap();
    assert_eq!(report.displacements.len(), 1);

    let d = &report.displacements[0];
    assert_relative_eq!(d.delta_frac[0], 0.96, epsilon = 1e-9);
    assert_relative_eq!(d.delta_cart[0], -0.4, epsilon = 1e-9);
    assert_relative_eq!(d.delta_cart[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(d.delta_cart[2], 0.0, epsilon = 1e-9);
    assert_relative_eq!(d.delta_total, 0.4, epsilon = 1e-9);
    assert_relative_eq!(report.average().unwrap(), 0.4, epsilon = 1e-9);
    assert_relative_eq!(report.maximum().unwrap(), 0.4, epsilon = 1e-9);
}

#[test]
fn test_out_of_plane_axis_never_corrected() {
    // the same boundary crossing along z stays uncorrected: 0.96 * 10 = 9.6
    let s1 = parse_poscar_str(&cubic_cell("0.5 0.5 0.02")).unwrap();
    let s2 = parse_poscar_str(&cubic_cell("0.5 0.5 0.98")).unwrap();

    let report = compare(&s1, &s2, "Pt").unwrap();
    let d = &report.displacements[0];
    assert_relative_eq!(d.delta_cart[2], 9.6, epsilon = 1e-9);
    assert_relative_eq!(d.delta_total, 9.6, epsilon = 1e-9);
}

#[test]
fn test_forward_and_reverse_are_negatives() {
    let s1 = parse_poscar_str(&cubic_cell("0.10 0.20 0.30")).unwrap();
    let s2 = parse_poscar_str(&cubic_cell("0.85 0.35 0.45")).unwrap();

    let forward = compare(&s1, &s2, "Pt").unwrap();
    let reverse = compare(&s2, &s1, "Pt").unwrap();

    let f = &forward.displacements[0];
    let r = &reverse.displacements[0];
    for k in 0..3 {
        assert_relative_eq!(f.delta_cart[k], -r.delta_cart[k], epsilon = 1e-9);
    }
    assert_relative_eq!(f.delta_total, r.delta_total, epsilon = 1e-9);
}

#[test]
fn test_multi_atom_statistics() {
    let two_atoms = "\
Pt pair
1.0
10.0 0.0 0.0
0.0 10.0 0.0
0.0 0.0 10.0
Pt
2
Direct
0.0 0.0 0.0
0.5 0.5 0.5
";
    let moved = "\
Pt pair
1.0
10.0 0.0 0.0
0.0 10.0 0.0
0.0 0.0 10.0
Pt
2
Direct
0.1 0.0 0.0
0.5 0.5 0.5
";
    let s1 = parse_poscar_str(two_atoms).unwrap();
    let s2 = parse_poscar_str(moved).unwrap();

    let report = compare(&s1, &s2, "Pt").unwrap();
    assert_eq!(report.displacements.len(), 2);
    // one atom moved 1 Å, the other did not
    assert_relative_eq!(report.maximum().unwrap(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(report.average().unwrap(), 0.5, epsilon = 1e-9);
}

#[test]
fn test_element_missing_from_first_structure() {
    let s = parse_poscar_str(&cubic_cell("0.5 0.5 0.5")).unwrap();
    let result = compare(&s, &s, "Xx");
    assert!(matches!(result, Err(DisplacementError::ElementNotFound(_))));
}

#[test]
fn test_declared_element_with_zero_atoms() {
    let content = "\
Pt with empty O block
1.0
10.0 0.0 0.0
0.0 10.0 0.0
0.0 0.0 10.0
Pt O
1 0
Direct
0.5 0.5 0.5
";
    let s = parse_poscar_str(content).unwrap();
    let report = compare(&s, &s, "O").unwrap();
    assert!(report.displacements.is_empty());
    assert!(report.average().is_none());
    assert!(report.maximum().is_none());
}
