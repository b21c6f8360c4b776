use axum::{extract::State, response::Html};
use log::debug;
use std::sync::Arc;

use crate::api::models::player_rows;
use crate::ranking::PlayerMetric;
use crate::views;

use super::AppState;

pub async fn get_top_players_by_wickets(State(state): State<Arc<AppState>>) -> Html<String> {
    render_board(&state, PlayerMetric::Wickets)
}

pub async fn get_top_players_by_runs(State(state): State<Arc<AppState>>) -> Html<String> {
    render_board(&state, PlayerMetric::Runs)
}

pub async fn get_top_players_by_value(State(state): State<Arc<AppState>>) -> Html<String> {
    render_board(&state, PlayerMetric::Value)
}

fn render_board(state: &AppState, metric: PlayerMetric) -> Html<String> {
    let top_n = state.top_n();
    let ranked = match metric {
        PlayerMetric::Wickets => state.dataset.top_players_by_wickets(top_n),
        PlayerMetric::Runs => state.dataset.top_players_by_runs(top_n),
        PlayerMetric::Value => state.dataset.top_players_by_value(top_n),
    };
    debug!("Ranked {} players by {}", ranked.len(), metric.as_str());

    Html(views::players_page(board_title(metric), &player_rows(&ranked)))
}

fn board_title(metric: PlayerMetric) -> &'static str {
    match metric {
        PlayerMetric::Wickets => "Top Wicket Takers",
        PlayerMetric::Runs => "Top Run Scorers",
        PlayerMetric::Value => "Most Valuable Players",
    }
}
