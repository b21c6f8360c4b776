pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod ranking;
pub mod services;
pub mod views;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Board, Command, SourceArgs};
use crate::config::settings::AppConfig;
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub use dataset::Dataset;
pub use errors::LoadError;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, sources: &SourceArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = config_for(sources);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_rank(board: Board, count: usize, sources: &SourceArgs) -> Result<()> {
    let config = config_for(sources).with_top_n(count);
    let service = ReportService::new(config);
    service.run(board)
}

fn config_for(sources: &SourceArgs) -> AppConfig {
    AppConfig::new().with_data_paths(sources.teams.clone(), sources.players.clone())
}
