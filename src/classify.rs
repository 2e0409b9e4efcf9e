//! Ordered threshold rules resolving a composition to a provenance field.
//!
//! Classification is an ordered sequence of threshold tests on the
//! normalized shares, first match wins. It is deliberately NOT a
//! point-in-polygon test against the drawn outlines in [`crate::taxonomy`]:
//! the two are maintained independently and may disagree right at field
//! edges. Keep it that way.

use crate::composition::{Composition, Normalized};
use crate::taxonomy::{BlockId, FieldId};
use serde::Serialize;

/// Resolve a composition to its provenance field.
///
/// Pure, deterministic and scale-invariant. Returns `None` only for the
/// empty (zero-total) composition, which has no defined classification.
pub fn classify(composition: &Composition) -> Option<FieldId> {
    composition.normalized().map(classify_normalized)
}

/// The threshold rules over normalized shares. First match wins.
pub fn classify_normalized(n: Normalized) -> FieldId {
    if n.q >= 92.0 {
        FieldId::CratonInterior
    } else if n.q >= 75.0 && n.f > n.l {
        FieldId::TransitionalContinent
    } else if n.f >= 50.0 && n.q < 60.0 && n.f > n.l {
        FieldId::BasementUplift
    } else if n.l >= 75.0 && n.q < 15.0 {
        FieldId::UndissectedArc
    } else if n.l >= 50.0 && n.q < 25.0 {
        FieldId::TransitionalArc
    } else if n.f > 40.0 && n.q < 40.0 {
        FieldId::DissectedArc
    } else {
        FieldId::RecycledOrogen
    }
}

/// Full classification report for a non-empty composition.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub normalized: Normalized,
    pub field: FieldId,
    pub field_name: &'static str,
    pub block: BlockId,
    pub block_name: &'static str,
    pub description: &'static str,
    pub technical_note: &'static str,
}

impl Classification {
    /// Classify and bundle the field/block metadata for display.
    pub fn of(composition: &Composition) -> Option<Self> {
        let normalized = composition.normalized()?;
        let field_id = classify_normalized(normalized);
        let field = field_id.field();
        let block = field.block.block();
        Some(Self {
            normalized,
            field: field_id,
            field_name: field.name,
            block: field.block,
            block_name: block.name,
            description: field.description,
            technical_note: field.technical_note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field_of(q: f64, f: f64, l: f64) -> Option<FieldId> {
        classify(&Composition::new(q, f, l))
    }

    #[test]
    fn test_empty_composition_is_undefined() {
        assert_eq!(field_of(0.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_pure_quartz_is_craton() {
        assert_eq!(field_of(100.0, 0.0, 0.0), Some(FieldId::CratonInterior));
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // Also satisfies the transitional-continent thresholds (nq >= 75,
        // nf > nl); the craton rule comes first and must win.
        assert_eq!(field_of(95.0, 3.0, 2.0), Some(FieldId::CratonInterior));
    }

    #[test]
    fn test_feldspathic_is_basement_uplift() {
        assert_eq!(field_of(20.0, 70.0, 10.0), Some(FieldId::BasementUplift));
    }

    #[test]
    fn test_lithic_rich_is_undissected_arc() {
        assert_eq!(field_of(5.0, 10.0, 85.0), Some(FieldId::UndissectedArc));
    }

    #[test]
    fn test_lithic_with_quartz_falls_through_to_orogen() {
        // nl = 50 meets rule 5's lithic threshold but nq = 30 fails its
        // quartz cap; rule 6 fails on feldspar; lands on the fallback.
        assert_eq!(field_of(30.0, 20.0, 50.0), Some(FieldId::RecycledOrogen));
    }

    #[test]
    fn test_interior_point_hits_fallback() {
        assert_eq!(field_of(40.0, 30.0, 30.0), Some(FieldId::RecycledOrogen));
    }

    #[test]
    fn test_transitional_continent_and_arc() {
        assert_eq!(field_of(80.0, 15.0, 5.0), Some(FieldId::TransitionalContinent));
        assert_eq!(field_of(10.0, 30.0, 60.0), Some(FieldId::TransitionalArc));
        assert_eq!(field_of(20.0, 50.0, 30.0), Some(FieldId::BasementUplift));
        assert_eq!(field_of(25.0, 45.0, 30.0), Some(FieldId::DissectedArc));
    }

    #[test]
    fn test_classification_report_carries_block() {
        let report = Classification::of(&Composition::new(5.0, 10.0, 85.0)).unwrap();
        assert_eq!(report.field, FieldId::UndissectedArc);
        assert_eq!(report.block, BlockId::Arc);
        assert_eq!(report.block_name, "Magmatic Arc");
        assert!((report.normalized.l - 85.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_classification_is_total_and_scale_invariant(
            q in 0.0f64..100.0,
            f in 0.0f64..100.0,
            l in 0.0f64..100.0,
            k in 0.001f64..1000.0,
        ) {
            prop_assume!(q + f + l > 0.0);
            let base = field_of(q, f, l);
            prop_assert!(base.is_some());
            prop_assert_eq!(base, field_of(q * k, f * k, l * k));
        }
    }
}
