//! Line-mode front end and headless script runner
//!
//! Reads one command per line and prints the grid back after every change.
//! Works on any stream, so it runs on terminals without raw mode and in tests.

use crate::core::error::{Result, RobotError};
use crate::robot::command::RobotCommand;
use crate::robot::session::RobotSession;
use crate::ui::view;
use clap::ValueEnum;
use std::io::{BufRead, Write};

/// How the headless runner reports the final state
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

const HELP: &str = "\
Commands:
  forward / f     - Move one cell in the faced direction
  left / l        - Rotate counter-clockwise
  right / r       - Rotate clockwise
  status / s      - Show position, heading and debug info
  json            - Print the state as JSON
  reset           - Return to the starting cell
  help / h        - Show this help
  quit / q        - Exit";

/// Run the read-eval-print loop until `quit` or end of input
pub fn run_console<R: BufRead, W: Write>(
    session: &mut RobotSession,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    writeln!(out)?;
    print_state(session, out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        // Handle empty input
        if line.is_empty() {
            continue;
        }

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "h" | "?" => writeln!(out, "{}", HELP)?,
            "status" | "s" => {
                writeln!(out, "{}", view::status_line(&session.state()))?;
                for debug in view::debug_lines(&session.state()) {
                    writeln!(out, "  {}", debug)?;
                }
            }
            "json" => writeln!(out, "{}", serde_json::to_string(&session.state())?)?,
            "reset" => {
                session.reset();
                print_state(session, out)?;
            }
            other => match other.parse::<RobotCommand>() {
                Ok(command) => {
                    let transition = session.dispatch(command);
                    if transition.blocked() {
                        writeln!(out, "Blocked: already at the {} edge.", transition.after.direction())?;
                    }
                    print_state(session, out)?;
                }
                Err(RobotError::UnknownCommand(text)) => {
                    writeln!(out, "Unknown command: {} (type 'help')", text)?;
                }
                Err(err) => return Err(err),
            },
        }
    }

    tracing::info!(commands = session.commands_applied(), "Console closed");
    Ok(())
}

/// Apply `commands` in order and print the final state
pub fn run_script<W: Write>(
    session: &mut RobotSession,
    commands: &[RobotCommand],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for command in commands {
        session.dispatch(*command);
    }
    tracing::info!(
        commands = commands.len(),
        state = %session.state(),
        "Script finished"
    );

    match format {
        OutputFormat::Text => print_state(session, out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&session.state())?)?,
    }
    Ok(())
}

fn print_state<W: Write>(session: &RobotSession, out: &mut W) -> Result<()> {
    write!(out, "{}", view::render_ascii(&session.state()))?;
    writeln!(out, "{}", view::status_line(&session.state()))?;
    Ok(())
}
