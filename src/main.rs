//! Grid Robot - Entry Point
//!
//! Sets up logging and configuration, then hands the session to the chosen
//! front end: the interactive terminal grid, the line-mode console, or a
//! headless script run.

use clap::{Parser, ValueEnum};
use grid_robot::core::config::RobotConfig;
use grid_robot::core::error::Result;
use grid_robot::robot::{parse_script, RobotSession};
use grid_robot::ui::console::{self, OutputFormat};
use grid_robot::ui::terminal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Drive a robot around a 5x5 grid
#[derive(Parser, Debug)]
#[command(name = "grid-robot")]
#[command(about = "Drive a robot around a 5x5 grid: forward, rotate left, rotate right")]
struct Args {
    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Front end to run
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// Run these commands headlessly and print the final state, e.g. "f,r,f"
    #[arg(long)]
    script: Option<String>,

    /// Output format for --script
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write logs to this file (the terminal UI discards logs otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Interactive grid with buttons
    Tui,
    /// One command per line on stdin
    Plain,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = match &args.config {
        Some(path) => RobotConfig::load_from_toml(path)?,
        None => RobotConfig::default(),
    };

    if let Some(script) = &args.script {
        let commands = parse_script(script)?;
        let mut session = RobotSession::new(config.initial_state());
        return console::run_script(&mut session, &commands, args.format, &mut io::stdout());
    }

    match args.mode {
        Mode::Tui => terminal::run(&config),
        Mode::Plain => {
            let mut session = RobotSession::new(config.initial_state());
            console::run_console(&mut session, io::stdin().lock(), &mut io::stdout())
        }
    }
}

/// Route logs to the log file if given, else to stderr outside the TUI
fn init_tracing(args: &Args) -> Result<()> {
    let writer = match &args.log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None if args.mode == Mode::Tui && args.script.is_none() => BoxMakeWriter::new(io::sink),
        None => BoxMakeWriter::new(io::stderr),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grid_robot=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(args.log_file.is_none())
        .init();

    tracing::info!("Grid Robot starting...");
    Ok(())
}
