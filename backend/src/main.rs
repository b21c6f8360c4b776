use anyhow::Result;

use cricket_dashboard::cli::Command;
use cricket_dashboard::{handle_rank, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, sources } => handle_serve(*port, sources),
        Command::Rank { board, count, sources } => handle_rank(*board, *count, sources),
    }
}
