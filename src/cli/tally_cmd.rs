//! CLI handler for `terrane tally <minerals.json>`.
//!
//! Reads a point-counted mineral list (array of `{ "name", "percentage" }`
//! objects), buckets it into QFL, and classifies the result.

use crate::classify::Classification;
use crate::cli::output::{self, Styled};
use crate::composition::tally::{tally, MineralEntry};
use crate::error::TerraneError;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Tally a mineral list file and classify the resulting composition.
pub fn run(path: &Path) -> Result<()> {
    let s = Styled::new();

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let minerals: Vec<MineralEntry> = serde_json::from_str(&raw)
        .map_err(TerraneError::MineralList)
        .with_context(|| format!("parsing {}", path.display()))?;

    let result = tally(&minerals);
    for name in &result.unmatched {
        warn!("mineral '{name}' is outside the QFL framework, ignored");
    }

    let report = Classification::of(&result.composition);

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "composition": result.composition,
            "unmatched": result.unmatched,
            "classified": report.is_some(),
            "classification": report,
        }));
        return Ok(());
    }

    let c = result.composition;
    println!();
    println!(
        "  {} Q={} F={} L={}",
        s.dim("tally:"),
        c.q,
        c.f,
        c.l
    );
    if !result.unmatched.is_empty() {
        println!(
            "  {} outside QFL framework: {}",
            s.warn_sym(),
            s.dim(&result.unmatched.join(", "))
        );
    }
    match report {
        Some(report) => {
            println!(
                "  {} {} {}",
                s.dim("field:"),
                s.bold(report.field_name),
                s.dim(&format!("({})", report.block_name))
            );
        }
        None => {
            println!(
                "  {} No framework grains counted — nothing to classify.",
                s.warn_sym()
            );
        }
    }
    Ok(())
}
