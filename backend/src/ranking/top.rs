use crate::domain::{Player, Team};

use super::types::{team_points, PlayerMetric};

/// Top `n` items by `key`, highest first.
///
/// Works on a fresh vector of references so the backing slice is never
/// reordered. `n` is clamped to the slice length. The sort is stable, so
/// items with equal keys keep their source order.
pub fn top_n<T, K, F>(items: &[T], n: usize, key: F) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(n.min(items.len()));
    ranked
}

pub fn top_players_by(players: &[Player], metric: PlayerMetric, n: usize) -> Vec<&Player> {
    top_n(players, n, |p| metric.score(p))
}

pub fn top_players_by_wickets(players: &[Player], n: usize) -> Vec<&Player> {
    top_players_by(players, PlayerMetric::Wickets, n)
}

pub fn top_players_by_runs(players: &[Player], n: usize) -> Vec<&Player> {
    top_players_by(players, PlayerMetric::Runs, n)
}

pub fn top_players_by_value(players: &[Player], n: usize) -> Vec<&Player> {
    top_players_by(players, PlayerMetric::Value, n)
}

pub fn top_teams_by_points(teams: &[Team], n: usize) -> Vec<&Team> {
    top_n(teams, n, team_points)
}
