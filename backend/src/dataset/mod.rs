pub mod loader;

use std::path::Path;

use crate::domain::{Player, Team};
use crate::errors::LoadError;
use crate::ranking;

/// Every team and player known to the process.
///
/// Built once at startup and only read afterwards; ranking borrows from it
/// and never reorders the backing collections.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    teams: Vec<Team>,
    players: Vec<Player>,
}

impl Dataset {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        Self { teams, players }
    }

    /// Load the dataset from the team and player source files
    pub fn load<P: AsRef<Path>>(team_path: P, player_path: P) -> Result<Self, LoadError> {
        loader::load_files(team_path.as_ref(), player_path.as_ref())
    }

    /// Build the dataset from raw team and player documents
    pub fn from_slices(team_bytes: &[u8], player_bytes: &[u8]) -> Result<Self, LoadError> {
        loader::parse_sources(team_bytes, player_bytes)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn top_players_by_wickets(&self, n: usize) -> Vec<&Player> {
        ranking::top_players_by_wickets(&self.players, n)
    }

    pub fn top_players_by_runs(&self, n: usize) -> Vec<&Player> {
        ranking::top_players_by_runs(&self.players, n)
    }

    pub fn top_players_by_value(&self, n: usize) -> Vec<&Player> {
        ranking::top_players_by_value(&self.players, n)
    }

    pub fn top_teams_by_points(&self, n: usize) -> Vec<&Team> {
        ranking::top_teams_by_points(&self.teams, n)
    }
}
