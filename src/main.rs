//! `shiftboard`: drive the scheduling board from the terminal.

mod config;
mod demo;
mod error;
mod report;
mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use board::filter::SlotFilter;
use clap::{Args, Parser, Subcommand};

use crate::config::{PolicyArg, build_engine, load_roster_config};
use crate::error::CliError;
use crate::script::{Emit, read_script, replay};

#[derive(Parser, Debug)]
#[command(name = "shiftboard", about = "Drag-and-drop scheduling board driver")]
struct Cli {
    /// Roster JSON file. Defaults to the built-in roster.
    #[arg(long, env = "SHIFTBOARD_ROSTER")]
    roster: Option<PathBuf>,

    /// What happens when dropping onto a filled slot.
    #[arg(long, value_enum, env = "SHIFTBOARD_POLICY", default_value_t = PolicyArg::Replace)]
    policy: PolicyArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through drag, drop, cancel and reset, printing the board.
    Demo,
    /// Apply a JSON-lines intent script and print snapshots.
    Replay(ReplayArgs),
    /// Print the slots, then the items waiting to be placed.
    Roster,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Script path, or `-` for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Print only the final snapshot.
    #[arg(long)]
    final_only: bool,
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>, CliError> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(input).map_err(|source| CliError::Read { path: input.to_owned(), source })?;
    Ok(Box::new(BufReader::new(file)))
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let roster = load_roster_config(cli.roster.as_deref())?;
    let mut engine = build_engine(&roster, cli.policy)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Demo => demo::run_demo(&mut engine, &mut out)?,
        Command::Replay(args) => {
            let script = read_script(open_input(&args.input)?)?;
            tracing::info!(steps = script.len(), input = %args.input, "replaying script");
            let emit = if args.final_only { Emit::Final } else { Emit::Steps };
            replay(&mut engine, &script, &mut out, emit)?;
        }
        Command::Roster => {
            let snapshot = engine.snapshot();
            for slot in &snapshot.slots {
                writeln!(out, "slot\t{}\t{}\t{},{}", slot.id, slot.label, slot.rect.x, slot.rect.y)?;
            }
            for item in snapshot.items_in(&SlotFilter::Unassigned) {
                writeln!(out, "item\t{}\t{}\t{}\t{}", item.id, item.label, item.badge, item.note)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
