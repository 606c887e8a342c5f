//! # Miner Main Entry Point
//!
//! Terminal driver: reads one command per line from stdin or a script file,
//! runs it against a game session and prints what happened.

use clap::Parser;
use log::info;
use miner::{help_text, GameMode, GameSession, InputHandler, MinerResult, Outcome, PlayerInput};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Command line arguments for the miner game.
#[derive(Parser, Debug)]
#[command(name = "miner")]
#[command(about = "Dig for minerals, find the ring, make $20000")]
#[command(version)]
struct Args {
    /// Random seed for mine generation and every later draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print events and status as JSON lines
    #[arg(long)]
    json: bool,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> MinerResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Starting miner v{} with seed {}", miner::VERSION, seed);

    let mut session = GameSession::new(seed)?;
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    run(&args, &mut session, input)
}

/// Initializes env_logger, preferring RUST_LOG over the command line level.
fn initialize_logging(log_level: &str) {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.parse_filters(log_level),
    };
    builder.format_target(false).init();
}

/// Main command loop.
fn run(args: &Args, session: &mut GameSession, input: Box<dyn BufRead>) -> MinerResult<()> {
    let handler = InputHandler::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let interactive = args.script.is_none() && !args.json;

    if !args.json {
        writeln!(out, "Miner v{}. Type 'help' for commands.", miner::VERSION)?;
        print_status(&mut out, session, false)?;
    }
    if interactive {
        write!(out, "[{:?}] > ", session.mode())?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let Some(command) = handler.parse_line(&line, session.mode()) else {
            if !line.trim().is_empty() && !args.json {
                writeln!(out, "Unknown command '{}'. Type 'help'.", line.trim())?;
            }
            continue;
        };

        match command {
            PlayerInput::Quit => break,
            PlayerInput::Help => {
                if !args.json {
                    writeln!(out, "{}", help_text(session.mode()))?;
                }
            }
            PlayerInput::Status => print_status(&mut out, session, args.json)?,
            other => {
                if let Some(outcome) = handler.apply(other, session) {
                    print_outcome(&mut out, &outcome, args.json)?;
                }
            }
        }

        if interactive {
            write!(out, "[{:?}] > ", session.mode())?;
            out.flush()?;
        }
    }

    info!("Session ended: {:?}", session.statistics);
    Ok(())
}

fn print_outcome(out: &mut impl Write, outcome: &Outcome, json: bool) -> MinerResult<()> {
    match (outcome, json) {
        (Ok(events), true) => {
            for event in events {
                writeln!(out, "{}", serde_json::to_string(event)?)?;
            }
        }
        (Ok(events), false) => {
            for event in events {
                writeln!(out, "{}", event.message())?;
            }
        }
        (Err(refusal), true) => {
            let line = serde_json::json!({ "refused": refusal, "message": refusal.to_string() });
            writeln!(out, "{}", line)?;
        }
        (Err(refusal), false) => writeln!(out, "{}.", refusal)?,
    }
    Ok(())
}

fn print_status(out: &mut impl Write, session: &GameSession, json: bool) -> MinerResult<()> {
    let snapshot = session.snapshot();
    if json {
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:?} | ${} | HP {}/{} | at {} | ring: {}",
        snapshot.mode,
        snapshot.money,
        snapshot.health,
        snapshot.max_health,
        snapshot.position,
        if snapshot.has_ring { "yes" } else { "no" }
    )?;
    let minerals = &snapshot.minerals;
    writeln!(
        out,
        "silver {} | gold {} | platinum {} | diamonds {}",
        minerals.silver, minerals.gold, minerals.platinum, minerals.diamonds
    )?;
    if !snapshot.equipment.is_empty() {
        let names: Vec<&str> = snapshot.equipment.iter().map(|item| item.name()).collect();
        writeln!(out, "tools: {}", names.join(", "))?;
    }
    if snapshot.mode == GameMode::Mine {
        print_view(out, session)?;
    }
    Ok(())
}

/// Draws the camera window, the player as `@`.
fn print_view(out: &mut impl Write, session: &GameSession) -> MinerResult<()> {
    let player = session.player.position;
    for y in session.visible_rows() {
        let row: String = (0..session.mine.width as i32)
            .map(|x| {
                if (x, y) == (player.x, player.y) {
                    '@'
                } else {
                    session.visible_tile(x, y).glyph()
                }
            })
            .collect();
        writeln!(out, "{:>4} |{}|", y, row)?;
    }
    Ok(())
}
