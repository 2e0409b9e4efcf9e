//! Interactive session driving one diagram instance.
//!
//! The REPL stands in for the pointer: `inspect` and `clear` are the
//! pointer-enter / pointer-leave analogues, `set` feeds a new composition,
//! and `show` prints what the detail panel would display under the
//! hover-over-classification precedence rule.

use crate::classify::Classification;
use crate::cli::output::Styled;
use crate::composition::Composition;
use crate::highlight::{HighlightState, HighlightTracker};
use crate::taxonomy::{FieldId, TAXONOMY};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Session state for one REPL run.
struct ReplState {
    composition: Composition,
    tracker: HighlightTracker,
}

/// Run the interactive session.
pub fn run() -> Result<()> {
    let s = Styled::new();

    eprintln!();
    eprintln!(
        "  {} {}",
        s.bold(&format!("terrane v{}", env!("CARGO_PKG_VERSION"))),
        s.dim("— QFL provenance diagram")
    );
    eprintln!(
        "    Type {} for commands, {} to leave.",
        s.cyan("help"),
        s.dim("quit")
    );
    eprintln!();

    let mut editor = DefaultEditor::new()?;
    let mut state = ReplState {
        composition: Composition::default(),
        tracker: HighlightTracker::new(),
    };

    loop {
        match editor.readline("terrane> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                if execute(&line, &mut state, &s) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  read error: {err}");
                break;
            }
        }
    }
    Ok(())
}

/// Parse and execute one command line. Returns `true` to exit.
fn execute(line: &str, state: &mut ReplState, s: &Styled) -> bool {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let rest: Vec<&str> = parts.collect();

    match command {
        "quit" | "exit" => return true,
        "help" => print_help(s),
        "set" => {
            // Accept both "set 40,30,30" and "set 40 30 30".
            let joined = rest.join(",").replace(",,", ",");
            match joined.parse::<Composition>() {
                Ok(composition) => {
                    state.composition = composition;
                    state.tracker.set_composition(&composition);
                    print_panel(state, s);
                }
                Err(err) => eprintln!("  {} {err}", s.warn_sym()),
            }
        }
        "inspect" => match rest.first() {
            Some(slug) => match slug.parse::<FieldId>() {
                Ok(field) => {
                    state.tracker.pointer_enter(field);
                    print_panel(state, s);
                }
                Err(_) => {
                    eprintln!(
                        "  {} unknown field '{slug}'; try one of: {}",
                        s.warn_sym(),
                        FieldId::ALL.map(|id| id.slug()).join(", ")
                    );
                }
            },
            None => eprintln!("  usage: inspect <field-id>"),
        },
        "clear" => {
            state.tracker.pointer_leave();
            print_panel(state, s);
        }
        "show" => print_panel(state, s),
        "fields" => {
            for block in TAXONOMY.blocks() {
                eprintln!("  {}", s.bold(block.name));
                for field in TAXONOMY.fields_in(block.id) {
                    eprintln!("    {:<24} {}", field.name, s.dim(field.id.slug()));
                }
            }
        }
        other => eprintln!("  unknown command '{other}'; try 'help'"),
    }
    false
}

fn print_help(s: &Styled) {
    eprintln!("  {}", s.bold("commands"));
    eprintln!("    set <Q,F,L>        update the live composition");
    eprintln!("    inspect <field>    hover a field (panel shows it)");
    eprintln!("    clear              stop hovering");
    eprintln!("    show               print the detail panel");
    eprintln!("    fields             list field ids");
    eprintln!("    quit               leave the session");
}

/// Print what the detail panel displays for the current state.
fn print_panel(state: &ReplState, s: &Styled) {
    match state.tracker.displayed() {
        None => {
            eprintln!("  {}", s.dim("(no data — set a composition or inspect a field)"));
        }
        Some(id) => {
            let field = id.field();
            let live = state.tracker.live() == Some(id);
            let hovering = matches!(state.tracker.state(), HighlightState::Hovering { .. });

            let mut tags = Vec::new();
            if hovering {
                tags.push(s.cyan("hover"));
            }
            if live {
                tags.push(s.green("live detection"));
            }
            eprintln!();
            eprintln!("  {} {}", s.bold(field.name), s.dim(&tags.join(" · ")));
            eprintln!("  {}", field.description);
            eprintln!("  {}", s.dim(field.technical_note));
            if let Some(report) = Classification::of(&state.composition) {
                let n = report.normalized;
                eprintln!(
                    "  {} {:.0}Q : {:.0}F : {:.0}L → {}",
                    s.dim("sample:"),
                    n.q,
                    n.f,
                    n.l,
                    report.field_name
                );
            }
            eprintln!();
        }
    }
}
