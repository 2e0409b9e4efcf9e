//! Static Dickinson field and block definitions for the QFL triangle.
//!
//! The taxonomy is hand-authored configuration data, constructed once and
//! immutable for the process lifetime: 7 provenance fields partitioning the
//! triangle, grouped under 3 coarse tectonic blocks. Outlines and label
//! anchors are stored as raw (q, f, l) triples and projected through the
//! same [`crate::geometry::TriangleFrame`] as the live sample point.
//!
//! Note the deliberate duality: the drawn outlines here and the ordered
//! threshold rules in [`crate::classify`] are maintained independently and
//! can disagree at field edges. Do not replace the threshold rules with
//! point-in-polygon tests against these outlines.

use crate::error::TerraneError;
use crate::geometry::{Point, TriangleFrame};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the seven provenance fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldId {
    #[serde(rename = "craton")]
    CratonInterior,
    #[serde(rename = "trans-continent")]
    TransitionalContinent,
    #[serde(rename = "basement")]
    BasementUplift,
    #[serde(rename = "dissected-arc")]
    DissectedArc,
    #[serde(rename = "trans-arc")]
    TransitionalArc,
    #[serde(rename = "undissected-arc")]
    UndissectedArc,
    #[serde(rename = "recycled-orogen")]
    RecycledOrogen,
}

impl FieldId {
    /// All fields in legend order.
    pub const ALL: [FieldId; 7] = [
        FieldId::CratonInterior,
        FieldId::TransitionalContinent,
        FieldId::BasementUplift,
        FieldId::DissectedArc,
        FieldId::TransitionalArc,
        FieldId::UndissectedArc,
        FieldId::RecycledOrogen,
    ];

    /// Stable kebab-case identifier, matching the serde form.
    pub fn slug(&self) -> &'static str {
        match self {
            FieldId::CratonInterior => "craton",
            FieldId::TransitionalContinent => "trans-continent",
            FieldId::BasementUplift => "basement",
            FieldId::DissectedArc => "dissected-arc",
            FieldId::TransitionalArc => "trans-arc",
            FieldId::UndissectedArc => "undissected-arc",
            FieldId::RecycledOrogen => "recycled-orogen",
        }
    }

    /// Full field definition from the taxonomy.
    pub fn field(&self) -> &'static ProvenanceField {
        TAXONOMY.field(*self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str(self.slug())
    }
}

/// Parse a field slug (case-insensitive).
impl FromStr for FieldId {
    type Err = TerraneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TerraneError::UnknownField {
                input: s.to_string(),
            })
    }
}

/// Coarse tectonic grouping of provenance fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockId {
    Continental,
    Arc,
    Orogen,
}

impl BlockId {
    pub const ALL: [BlockId; 3] = [BlockId::Continental, BlockId::Arc, BlockId::Orogen];

    /// Full block definition from the taxonomy.
    pub fn block(&self) -> &'static Block {
        TAXONOMY.block(*self)
    }
}

/// A named sub-region of the QFL triangle with its interpretation.
#[derive(Debug, Serialize)]
pub struct ProvenanceField {
    pub id: FieldId,
    pub name: &'static str,
    pub description: &'static str,
    pub technical_note: &'static str,
    pub block: BlockId,
    /// Boundary polygon as raw (q, f, l) triples in drawing order.
    pub outline: &'static [[f64; 3]],
    /// Label anchor as a raw (q, f, l) triple.
    pub label_anchor: [f64; 3],
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// A coarse overlay polygon grouping 2–3 fields; purely a visual/legend
/// aggregation, never computed independently of its member fields.
#[derive(Debug, Serialize)]
pub struct Block {
    pub id: BlockId,
    pub name: &'static str,
    pub outline: &'static [[f64; 3]],
    pub label_anchor: [f64; 3],
    pub color: &'static str,
}

/// The full immutable field/block configuration.
#[derive(Debug)]
pub struct Taxonomy {
    fields: &'static [ProvenanceField; 7],
    blocks: &'static [Block; 3],
}

static FIELDS: [ProvenanceField; 7] = [
    ProvenanceField {
        id: FieldId::CratonInterior,
        name: "Cratonic Interior",
        description: "Mature, stable craton interiors with low relief and extreme weathering.",
        technical_note: "Dominated by monocrystalline quartz (>95%) derived from deeply \
            weathered shields or platforms. Minimal feldspar or lithics remain due to \
            chemical maturation.",
        block: BlockId::Continental,
        outline: &[
            [100.0, 0.0, 0.0],
            [92.0, 8.0, 0.0],
            [88.0, 6.0, 6.0],
            [96.0, 0.0, 4.0],
        ],
        label_anchor: [96.0, 2.0, 2.0],
        fill: "#bae6fd",
        stroke: "#0369a1",
    },
    ProvenanceField {
        id: FieldId::TransitionalContinent,
        name: "Transitional Continent",
        description: "Stable shelves or continental margins with moderate tectonic activity.",
        technical_note: "Reflects moderate quartz and feldspar content. Sourced from \
            crystalline rocks and sedimentary cover of stable platforms undergoing minor \
            uplift.",
        block: BlockId::Continental,
        outline: &[
            [92.0, 8.0, 0.0],
            [75.0, 25.0, 0.0],
            [70.0, 15.0, 15.0],
            [88.0, 6.0, 6.0],
        ],
        label_anchor: [82.0, 12.0, 6.0],
        fill: "#7dd3fc",
        stroke: "#075985",
    },
    ProvenanceField {
        id: FieldId::BasementUplift,
        name: "Basement Uplift",
        description: "Fault-bounded uplifts of crystalline basement in rift or transform settings.",
        technical_note: "High feldspar content reflects erosion of unweathered \
            plutonic/metamorphic basement. Common in Laramide-style uplifts or rift \
            shoulders.",
        block: BlockId::Continental,
        outline: &[
            [75.0, 25.0, 0.0],
            [35.0, 65.0, 0.0],
            [35.0, 50.0, 15.0],
            [70.0, 15.0, 15.0],
        ],
        label_anchor: [55.0, 35.0, 10.0],
        fill: "#38bdf8",
        stroke: "#0c4a6e",
    },
    ProvenanceField {
        id: FieldId::DissectedArc,
        name: "Dissected Arc",
        description: "Deeply eroded magmatic arcs revealing their plutonic granitoid cores.",
        technical_note: "Moderate quartz and high feldspar (mostly K-feldspar and \
            plagioclase) from granitic batholiths. Represents advanced stages of arc \
            evolution.",
        block: BlockId::Arc,
        outline: &[
            [35.0, 65.0, 0.0],
            [0.0, 100.0, 0.0],
            [0.0, 70.0, 30.0],
            [20.0, 40.0, 40.0],
            [35.0, 50.0, 15.0],
        ],
        label_anchor: [15.0, 70.0, 15.0],
        fill: "#fca5a5",
        stroke: "#991b1b",
    },
    ProvenanceField {
        id: FieldId::TransitionalArc,
        name: "Transitional Arc",
        description: "Partially eroded arcs with mixed volcanic and plutonic sediment sources.",
        technical_note: "Contains a balanced mix of volcanic lithic fragments and \
            feldspars. Typical of arcs with intermediate levels of erosional incision.",
        block: BlockId::Arc,
        outline: &[
            [0.0, 70.0, 30.0],
            [0.0, 40.0, 60.0],
            [15.0, 25.0, 60.0],
            [20.0, 40.0, 40.0],
        ],
        label_anchor: [10.0, 45.0, 45.0],
        fill: "#f87171",
        stroke: "#7f1d1d",
    },
    ProvenanceField {
        id: FieldId::UndissectedArc,
        name: "Undissected Arc",
        description: "Active volcanic chains where erosion has not yet reached deeper levels.",
        technical_note: "Sediments are dominated by volcanic lithic fragments (Lvm) and \
            plagioclase. Quartz is rare, typically volcanic in origin (beta-quartz).",
        block: BlockId::Arc,
        outline: &[
            [0.0, 40.0, 60.0],
            [0.0, 0.0, 100.0],
            [10.0, 0.0, 90.0],
            [15.0, 25.0, 60.0],
        ],
        label_anchor: [2.0, 18.0, 80.0],
        fill: "#ef4444",
        stroke: "#450a0a",
    },
    ProvenanceField {
        id: FieldId::RecycledOrogen,
        name: "Recycled Orogeny",
        description: "Tectonic settings where older strata are uplifted and re-eroded.",
        technical_note: "Characterized by high Quartz and Lithics (sedimentary and \
            metamorphic). Derived from fold-thrust belts during continental collisions.",
        block: BlockId::Orogen,
        outline: &[
            [100.0, 0.0, 0.0],
            [96.0, 0.0, 4.0],
            [10.0, 0.0, 90.0],
            [0.0, 0.0, 100.0],
            [20.0, 40.0, 40.0],
            [35.0, 50.0, 15.0],
            [70.0, 15.0, 15.0],
            [88.0, 6.0, 6.0],
        ],
        label_anchor: [45.0, 5.0, 50.0],
        fill: "#6ee7b7",
        stroke: "#064e3b",
    },
];

static BLOCKS: [Block; 3] = [
    Block {
        id: BlockId::Continental,
        name: "Continental Block",
        outline: &[
            [100.0, 0.0, 0.0],
            [35.0, 65.0, 0.0],
            [35.0, 50.0, 15.0],
            [70.0, 15.0, 15.0],
            [88.0, 6.0, 6.0],
        ],
        label_anchor: [80.0, 16.0, 4.0],
        color: "#3b82f6",
    },
    Block {
        id: BlockId::Arc,
        name: "Magmatic Arc",
        outline: &[
            [0.0, 100.0, 0.0],
            [0.0, 0.0, 100.0],
            [20.0, 40.0, 40.0],
            [35.0, 50.0, 15.0],
            [35.0, 65.0, 0.0],
        ],
        label_anchor: [10.0, 50.0, 40.0],
        color: "#ef4444",
    },
    Block {
        id: BlockId::Orogen,
        name: "Recycled Orogen",
        outline: &[
            [100.0, 0.0, 0.0],
            [88.0, 6.0, 6.0],
            [70.0, 15.0, 15.0],
            [35.0, 50.0, 15.0],
            [20.0, 40.0, 40.0],
            [0.0, 0.0, 100.0],
        ],
        label_anchor: [50.0, 2.0, 48.0],
        color: "#10b981",
    },
];

/// The process-wide taxonomy. Read-only after construction, safe to share by
/// reference across any number of diagram instances.
pub static TAXONOMY: Taxonomy = Taxonomy {
    fields: &FIELDS,
    blocks: &BLOCKS,
};

impl Taxonomy {
    /// All fields in legend order.
    pub fn fields(&self) -> &'static [ProvenanceField] {
        self.fields
    }

    /// All blocks in legend order.
    pub fn blocks(&self) -> &'static [Block] {
        self.blocks
    }

    /// Definition for one field.
    pub fn field(&self, id: FieldId) -> &'static ProvenanceField {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .unwrap_or_else(|| unreachable!("taxonomy covers every FieldId"))
    }

    /// Definition for one block.
    pub fn block(&self, id: BlockId) -> &'static Block {
        self.blocks
            .iter()
            .find(|block| block.id == id)
            .unwrap_or_else(|| unreachable!("taxonomy covers every BlockId"))
    }

    /// Fields belonging to one block, in legend order.
    pub fn fields_in(&self, block: BlockId) -> impl Iterator<Item = &'static ProvenanceField> {
        self.fields.iter().filter(move |field| field.block == block)
    }

    /// Check that every outline is usable for rendering: at least three
    /// vertices, no negative components, and a simple (non-self-intersecting)
    /// boundary in drawing order. Full gap/overlap tiling of the triangle is
    /// not asserted.
    pub fn validate(&self) -> Result<(), TerraneError> {
        let frame = TriangleFrame::new(320.0);
        for field in self.fields {
            validate_outline(field.name, field.outline, &frame)?;
        }
        for block in self.blocks {
            validate_outline(block.name, block.outline, &frame)?;
        }
        Ok(())
    }
}

fn validate_outline(
    name: &'static str,
    outline: &[[f64; 3]],
    frame: &TriangleFrame,
) -> Result<(), TerraneError> {
    if outline.len() < 3 {
        return Err(TerraneError::DegenerateOutline {
            name,
            count: outline.len(),
        });
    }
    for (index, vertex) in outline.iter().enumerate() {
        if vertex.iter().any(|component| *component < 0.0) {
            return Err(TerraneError::NegativeVertex { name, index });
        }
    }

    // Project to Cartesian and reject proper crossings between non-adjacent
    // edges. Shared endpoints and collinear touches along the triangle edges
    // are fine in the hand-authored data.
    let points: Vec<_> = outline
        .iter()
        .map(|[q, f, l]| frame.project(*q, *f, *l))
        .collect();
    let n = points.len();
    for a in 0..n {
        for b in (a + 1)..n {
            // Skip adjacent edges (including the closing wrap-around pair).
            if b == a + 1 || (a == 0 && b == n - 1) {
                continue;
            }
            let (p1, p2) = (points[a], points[(a + 1) % n]);
            let (p3, p4) = (points[b], points[(b + 1) % n]);
            if segments_cross(p1, p2, p3, p4) {
                return Err(TerraneError::SelfIntersectingOutline {
                    name,
                    edge_a: a,
                    edge_b: b,
                });
            }
        }
    }
    Ok(())
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True when segments (p1,p2) and (p3,p4) properly cross (strict interior
/// intersection; touching endpoints do not count).
fn segments_cross(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);
    (d1 * d2 < 0.0) && (d3 * d4 < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_validates() {
        TAXONOMY.validate().expect("hand-authored outlines are simple polygons");
    }

    #[test]
    fn test_seven_fields_three_blocks() {
        assert_eq!(TAXONOMY.fields().len(), 7);
        assert_eq!(TAXONOMY.blocks().len(), 3);
    }

    #[test]
    fn test_every_field_resolves() {
        for id in FieldId::ALL {
            let field = TAXONOMY.field(id);
            assert_eq!(field.id, id);
            assert!(!field.name.is_empty());
            assert!(field.outline.len() >= 3);
        }
    }

    #[test]
    fn test_block_membership_counts() {
        assert_eq!(TAXONOMY.fields_in(BlockId::Continental).count(), 3);
        assert_eq!(TAXONOMY.fields_in(BlockId::Arc).count(), 3);
        assert_eq!(TAXONOMY.fields_in(BlockId::Orogen).count(), 1);
    }

    #[test]
    fn test_field_slug_round_trip() {
        for id in FieldId::ALL {
            let parsed: FieldId = id.slug().parse().unwrap();
            assert_eq!(parsed, id);
        }
        assert!("granite".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_self_intersection_is_rejected() {
        // A bow-tie in composition space: the two diagonals cross.
        let frame = TriangleFrame::new(320.0);
        let bow_tie: &[[f64; 3]] = &[
            [80.0, 10.0, 10.0],
            [10.0, 80.0, 10.0],
            [80.0, 5.0, 15.0],
            [10.0, 10.0, 80.0],
        ];
        assert!(validate_outline("bow-tie", bow_tie, &frame).is_err());
    }
}
