//! End-to-end checks of the CLI handlers through the library surface.

use std::str::FromStr;
use terrane::cli::render_cmd;
use terrane::composition::tally::{tally, MineralEntry};
use terrane::{classify, Composition, FieldId, TAXONOMY};

#[test]
fn render_writes_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.svg");

    let composition = Composition::from_str("5,10,85").unwrap();
    render_cmd::run(&composition, Some(path.as_path()), 320.0).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("UNDISSECTED ARC"));
}

#[test]
fn render_rejects_tiny_viewport() {
    let composition = Composition::from_str("40,30,30").unwrap();
    assert!(render_cmd::run(&composition, None, 10.0).is_err());
}

#[test]
fn tally_feeds_classification() {
    let minerals = vec![
        MineralEntry {
            name: "Quartz".into(),
            percentage: 65.0,
        },
        MineralEntry {
            name: "Chert".into(),
            percentage: 30.0,
        },
        MineralEntry {
            name: "Biotite".into(),
            percentage: 5.0,
        },
    ];
    let result = tally(&minerals);
    assert_eq!(result.unmatched, vec!["Biotite".to_string()]);
    assert_eq!(
        classify(&result.composition),
        Some(FieldId::CratonInterior)
    );
}

#[test]
fn taxonomy_is_valid_at_startup() {
    TAXONOMY.validate().unwrap();
}
