//! CLI subcommand implementations for the terrane binary.

pub mod classify_cmd;
pub mod fields_cmd;
pub mod output;
pub mod render_cmd;
pub mod repl;
pub mod tally_cmd;
