//! CLI handler for `terrane fields` — the provenance legend.

use crate::cli::output::{self, Styled};
use crate::taxonomy::TAXONOMY;
use anyhow::Result;

/// Print the block/field legend with descriptions.
pub fn run() -> Result<()> {
    if output::is_json() {
        let blocks: Vec<serde_json::Value> = TAXONOMY
            .blocks()
            .iter()
            .map(|block| {
                let fields: Vec<serde_json::Value> = TAXONOMY
                    .fields_in(block.id)
                    .map(|field| {
                        serde_json::json!({
                            "id": field.id,
                            "name": field.name,
                            "description": field.description,
                            "technical_note": field.technical_note,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "id": block.id,
                    "name": block.name,
                    "fields": fields,
                })
            })
            .collect();
        output::print_json(&serde_json::json!({ "blocks": blocks }));
        return Ok(());
    }

    let s = Styled::new();
    println!();
    for block in TAXONOMY.blocks() {
        println!("  {}", s.bold(&block.name.to_uppercase()));
        for field in TAXONOMY.fields_in(block.id) {
            println!(
                "    {} {}",
                s.cyan(&format!("{:<24}", field.name)),
                s.dim(&format!("[{}]", field.id))
            );
            println!("      {}", field.description);
        }
        println!();
    }
    Ok(())
}
