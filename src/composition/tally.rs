//! Derive a QFL composition from a point-counted mineral list.
//!
//! Minerals are bucketed by exact (case-insensitive) name into the quartz,
//! feldspar and lithic groups used on the ternary plot. Anything outside the
//! three groups (micas, cement, accessories) contributes nothing to QFL and
//! is reported back so the caller can see what was left out.

use crate::composition::Composition;
use serde::{Deserialize, Serialize};

/// One row of a point-count: mineral name plus modal percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralEntry {
    pub name: String,
    pub percentage: f64,
}

/// QFL bucket for a mineral name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MineralGroup {
    Quartz,
    Feldspar,
    Lithic,
}

/// Quartzose grains, including cryptocrystalline silica.
const QUARTZ_GROUP: &[&str] = &[
    "Quartz",
    "Monocrystalline Quartz",
    "Polycrystalline Quartz",
    "Chert",
    "Chalcedony",
];

const FELDSPAR_GROUP: &[&str] = &[
    "Plagioclase",
    "K-Feldspar",
    "Orthoclase",
    "Microcline",
    "Sanidine",
    "Albite",
    "Anorthite",
];

const LITHIC_GROUP: &[&str] = &["Volcanic Lithic", "Metamorphic Lithic", "Sedimentary Lithic"];

/// Bucket a mineral name, or `None` if it does not count toward QFL.
pub fn group_of(name: &str) -> Option<MineralGroup> {
    let matches = |group: &[&str]| group.iter().any(|g| g.eq_ignore_ascii_case(name));
    if matches(QUARTZ_GROUP) {
        Some(MineralGroup::Quartz)
    } else if matches(FELDSPAR_GROUP) {
        Some(MineralGroup::Feldspar)
    } else if matches(LITHIC_GROUP) {
        Some(MineralGroup::Lithic)
    } else {
        None
    }
}

/// Result of tallying a mineral list into QFL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tally {
    pub composition: Composition,
    /// Mineral names that fell outside all three QFL groups.
    pub unmatched: Vec<String>,
}

/// Sum a point-counted mineral list into a QFL composition.
pub fn tally(minerals: &[MineralEntry]) -> Tally {
    let mut composition = Composition::default();
    let mut unmatched = Vec::new();

    for entry in minerals {
        match group_of(&entry.name) {
            Some(MineralGroup::Quartz) => composition.q += entry.percentage,
            Some(MineralGroup::Feldspar) => composition.f += entry.percentage,
            Some(MineralGroup::Lithic) => composition.l += entry.percentage,
            None => unmatched.push(entry.name.clone()),
        }
    }

    Tally {
        composition,
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, percentage: f64) -> MineralEntry {
        MineralEntry {
            name: name.to_string(),
            percentage,
        }
    }

    #[test]
    fn test_tally_groups_minerals() {
        let list = vec![
            entry("Quartz", 40.0),
            entry("Chert", 5.0),
            entry("Plagioclase", 20.0),
            entry("K-Feldspar", 10.0),
            entry("Volcanic Lithic", 15.0),
        ];
        let t = tally(&list);
        assert_eq!(t.composition, Composition::new(45.0, 30.0, 15.0));
        assert!(t.unmatched.is_empty());
    }

    #[test]
    fn test_tally_is_case_insensitive() {
        let t = tally(&[entry("quartz", 10.0), entry("MICROCLINE", 5.0)]);
        assert_eq!(t.composition, Composition::new(10.0, 5.0, 0.0));
    }

    #[test]
    fn test_non_framework_minerals_are_reported() {
        let t = tally(&[entry("Quartz", 60.0), entry("Biotite", 8.0), entry("Calcite", 4.0)]);
        assert_eq!(t.composition, Composition::new(60.0, 0.0, 0.0));
        assert_eq!(t.unmatched, vec!["Biotite".to_string(), "Calcite".to_string()]);
    }

    #[test]
    fn test_empty_list_yields_empty_composition() {
        let t = tally(&[]);
        assert!(t.composition.is_empty());
    }
}
