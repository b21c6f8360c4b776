use crate::domain::{Player, Team};

use super::value::value_score;

/// Ranking key; wide enough for the value score of any `i64` stats
pub type Score = i128;

/// Metric a player board is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMetric {
    Wickets,
    Runs,
    Value,
}

impl PlayerMetric {
    pub fn score(&self, player: &Player) -> Score {
        match self {
            PlayerMetric::Wickets => Score::from(player.wickets),
            PlayerMetric::Runs => Score::from(player.runs),
            PlayerMetric::Value => value_score(player),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayerMetric::Wickets => "wickets",
            PlayerMetric::Runs => "runs",
            PlayerMetric::Value => "value",
        }
    }
}

pub fn team_points(team: &Team) -> Score {
    Score::from(team.points)
}
