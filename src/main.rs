//! terrane binary entry point.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use terrane::{Composition, TAXONOMY};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "terrane",
    version,
    about = "QFL ternary provenance classifier (Dickinson scheme)",
    long_about = "Plot a modal quartz/feldspar/lithics composition on the Dickinson QFL \
        diagram, resolve its provenance field and tectonic block, and render the diagram \
        as SVG. Run without a subcommand for an interactive session."
)]
struct Cli {
    /// Emit machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a composition into its provenance field.
    Classify {
        /// Composition as "Q,F,L" (raw modal percentages, any scale).
        composition: Composition,
    },
    /// Render the diagram for a composition as SVG.
    Render {
        /// Composition as "Q,F,L" (raw modal percentages, any scale).
        composition: Composition,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Viewport edge length in pixels (scale only).
        #[arg(long, default_value_t = terrane::render::DEFAULT_SIZE)]
        size: f64,
    },
    /// List the provenance fields and their tectonic blocks.
    Fields,
    /// Tally a point-counted mineral list (JSON) into QFL and classify it.
    Tally {
        /// Path to a JSON array of { "name", "percentage" } objects.
        file: PathBuf,
    },
    /// Start the interactive session.
    Repl,
    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json {
        std::env::set_var("TERRANE_JSON", "1");
    }
    if cli.no_color {
        std::env::set_var("TERRANE_NO_COLOR", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TERRANE_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The taxonomy is static data, but its outlines are hand-authored;
    // fail fast if an edit broke them.
    TAXONOMY.validate().context("taxonomy configuration is invalid")?;

    match cli.command {
        Some(Command::Classify { composition }) => terrane::cli::classify_cmd::run(&composition),
        Some(Command::Render {
            composition,
            out,
            size,
        }) => terrane::cli::render_cmd::run(&composition, out.as_deref(), size),
        Some(Command::Fields) => terrane::cli::fields_cmd::run(),
        Some(Command::Tally { file }) => terrane::cli::tally_cmd::run(&file),
        Some(Command::Repl) | None => terrane::cli::repl::run(),
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "terrane", &mut std::io::stdout());
            Ok(())
        }
    }
}
