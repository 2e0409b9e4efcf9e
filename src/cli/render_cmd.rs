//! CLI handler for `terrane render <Q,F,L>`.

use crate::cli::output::{self, Styled};
use crate::composition::Composition;
use crate::render::{self, SvgOptions};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// Smallest viewport that leaves room for the triangle inside its padding.
const MIN_SIZE: f64 = 160.0;

/// Render the diagram to an SVG file or stdout.
pub fn run(composition: &Composition, out: Option<&Path>, size: f64) -> Result<()> {
    let s = Styled::new();

    if !size.is_finite() || size < MIN_SIZE {
        bail!("--size must be at least {MIN_SIZE} pixels");
    }

    let svg = render::render(composition, &SvgOptions { size });
    let active = render::active_field_name(composition);

    match out {
        Some(path) => {
            std::fs::write(path, &svg)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} bytes to {}", svg.len(), path.display());
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": svg.len(),
                    "active_field": active,
                }));
            } else {
                match active {
                    Some(name) => println!(
                        "  Wrote {} ({} highlighted)",
                        s.bold(&path.display().to_string()),
                        s.green(name)
                    ),
                    None => println!(
                        "  Wrote {} {}",
                        s.bold(&path.display().to_string()),
                        s.dim("(no data point)")
                    ),
                }
            }
        }
        None => {
            // Raw SVG to stdout so it can be piped; no decoration.
            print!("{svg}");
        }
    }
    Ok(())
}
