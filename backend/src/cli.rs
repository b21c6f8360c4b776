use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "cricket statistics dashboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard server
    Serve {
        /// Port number (optional, defaults to 8080)
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Print a ranking board to stdout
    Rank {
        /// Board to print
        #[arg(value_enum)]
        board: Board,

        /// Number of rows (optional, defaults to 10)
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SourceArgs {
    /// Team data file
    #[arg(long, env = "TEAMS_PATH", default_value = "team.json")]
    pub teams: PathBuf,

    /// Player data file
    #[arg(long, env = "PLAYERS_PATH", default_value = "player.json")]
    pub players: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Wickets,
    Runs,
    Value,
    Points,
}
