//! CLI handler for `terrane classify <Q,F,L>`.

use crate::classify::Classification;
use crate::cli::output::{self, Styled};
use crate::composition::Composition;
use anyhow::Result;

/// Classify a composition and print the detail panel.
pub fn run(composition: &Composition) -> Result<()> {
    let s = Styled::new();

    let Some(report) = Classification::of(composition) else {
        // An all-zero composition is a defined "no data" state, not an error.
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "classified": false,
                "reason": "composition total is zero",
            }));
        } else {
            println!(
                "  {} Nothing to classify — all three components are zero.",
                s.warn_sym()
            );
        }
        return Ok(());
    };

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "classified": true,
            "classification": report,
        }));
        return Ok(());
    }

    let n = report.normalized;
    println!();
    println!("  {}", s.bold(report.field_name));
    println!(
        "  {} {}",
        s.dim("block:"),
        s.cyan(report.block_name)
    );
    println!(
        "  {} {:.0}%Q · {:.0}%F · {:.0}%L",
        s.dim("modal:"),
        n.q,
        n.f,
        n.l
    );
    println!();
    println!("  {}", report.description);
    println!("  {}", s.dim(report.technical_note));
    Ok(())
}
