use crate::domain::{Player, Team};
use crate::ranking::{value_score, Score};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub rank: usize,
    pub name: String,
    pub wickets: i64,
    pub runs: i64,
    pub catches: i64,
    pub man_of_match_awards: i64,
    pub value: Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRow {
    pub rank: usize,
    pub name: String,
    pub matches_played: i64,
    pub wins: i64,
    pub losses: i64,
    pub points: i64,
}

impl PlayerRow {
    pub fn from_player(rank: usize, player: &Player) -> Self {
        Self {
            rank,
            name: player.name.clone(),
            wickets: player.wickets,
            runs: player.runs,
            catches: player.catches,
            man_of_match_awards: player.man_of_match_awards,
            value: value_score(player),
        }
    }
}

impl TeamRow {
    pub fn from_team(rank: usize, team: &Team) -> Self {
        Self {
            rank,
            name: team.name.clone(),
            matches_played: team.matches_played,
            wins: team.wins,
            losses: team.losses,
            points: team.points,
        }
    }
}

/// Number ranked players starting at 1
pub fn player_rows(players: &[&Player]) -> Vec<PlayerRow> {
    players
        .iter()
        .enumerate()
        .map(|(i, player)| PlayerRow::from_player(i + 1, player))
        .collect()
}

/// Number ranked teams starting at 1
pub fn team_rows(teams: &[&Team]) -> Vec<TeamRow> {
    teams
        .iter()
        .enumerate()
        .map(|(i, team)| TeamRow::from_team(i + 1, team))
        .collect()
}
