//! Typed errors for the terrane library.

use thiserror::Error;

/// Errors surfaced by the library. CLI code wraps these in `anyhow`.
#[derive(Debug, Error)]
pub enum TerraneError {
    /// A composition string or triple could not be interpreted.
    #[error("invalid composition '{input}': {reason}")]
    InvalidComposition { input: String, reason: String },

    /// A field identifier string did not match any known field.
    #[error("unknown field id '{input}'")]
    UnknownField { input: String },

    /// A taxonomy outline has fewer than three vertices.
    #[error("outline for '{name}' has {count} vertices, need at least 3")]
    DegenerateOutline { name: &'static str, count: usize },

    /// A taxonomy outline vertex carries a negative component.
    #[error("outline for '{name}' has a negative component at vertex {index}")]
    NegativeVertex { name: &'static str, index: usize },

    /// Two non-adjacent edges of a taxonomy outline cross each other.
    #[error("outline for '{name}' self-intersects (edges {edge_a} and {edge_b} cross)")]
    SelfIntersectingOutline {
        name: &'static str,
        edge_a: usize,
        edge_b: usize,
    },

    /// A mineral list could not be deserialized.
    #[error("unreadable mineral list: {0}")]
    MineralList(#[from] serde_json::Error),
}
