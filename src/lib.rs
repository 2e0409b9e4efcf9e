//! terrane — QFL ternary provenance classification.
//!
//! Maps a modal (quartz, feldspar, lithics) composition onto the Dickinson
//! QFL diagram: a plotting position inside the equilateral triangle, a
//! classified provenance field among seven named regions, and the coarse
//! tectonic block (Continental / Arc / Orogen) that field belongs to.
//!
//! The pieces:
//! - [`composition`] — raw QFL triples, normalization, mineral-list tally.
//! - [`geometry`] — the single barycentric-to-Cartesian projection shared by
//!   the live point and every drawn boundary.
//! - [`taxonomy`] — the immutable hand-authored field/block configuration.
//! - [`classify`] — ordered threshold rules, first match wins.
//! - [`highlight`] — the hover/active state machine for one diagram.
//! - [`render`] — standalone SVG output.

pub mod classify;
pub mod cli;
pub mod composition;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod render;
pub mod taxonomy;

pub use classify::{classify, Classification};
pub use composition::Composition;
pub use error::TerraneError;
pub use highlight::{HighlightState, HighlightTracker};
pub use taxonomy::{BlockId, FieldId, TAXONOMY};
