use anyhow::{Context, Result};
use std::fmt::Write as _;

use crate::api::models::{player_rows, team_rows, PlayerRow, TeamRow};
use crate::cli::Board;
use crate::config::settings::AppConfig;
use crate::dataset::Dataset;

/// Renders a single ranking board as plain text for the terminal
pub struct ReportService {
    config: AppConfig,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, board: Board) -> Result<()> {
        let data = &self.config.data;
        let dataset = Dataset::load(&data.teams_path, &data.players_path)
            .context("Failed to load dashboard data")?;

        print!("{}", self.render(&dataset, board));
        Ok(())
    }

    pub fn render(&self, dataset: &Dataset, board: Board) -> String {
        let n = self.config.dashboard.top_n;
        match board {
            Board::Wickets => format_players(&player_rows(&dataset.top_players_by_wickets(n))),
            Board::Runs => format_players(&player_rows(&dataset.top_players_by_runs(n))),
            Board::Value => format_players(&player_rows(&dataset.top_players_by_value(n))),
            Board::Points => format_teams(&team_rows(&dataset.top_teams_by_points(n))),
        }
    }
}

fn format_players(rows: &[PlayerRow]) -> String {
    let mut out = format!(
        "{:>3}  {:<24} {:>7} {:>6} {:>7} {:>4} {:>6}\n",
        "#", "Name", "Wickets", "Runs", "Catches", "MoM", "Value"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<24} {:>7} {:>6} {:>7} {:>4} {:>6}",
            row.rank, row.name, row.wickets, row.runs, row.catches, row.man_of_match_awards, row.value
        );
    }
    out
}

fn format_teams(rows: &[TeamRow]) -> String {
    let mut out = format!(
        "{:>3}  {:<24} {:>6} {:>4} {:>6} {:>6}\n",
        "#", "Name", "Played", "Won", "Lost", "Points"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<24} {:>6} {:>4} {:>6} {:>6}",
            row.rank, row.name, row.matches_played, row.wins, row.losses, row.points
        );
    }
    out
}
