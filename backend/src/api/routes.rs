use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    dashboard::{get_dashboard, redirect_to_dashboard},
    players::{get_top_players_by_runs, get_top_players_by_value, get_top_players_by_wickets},
    teams::get_teams,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(redirect_to_dashboard))
        .route("/dashboard", get(get_dashboard))
        .route("/top-players-by-wickets", get(get_top_players_by_wickets))
        .route("/top-players-by-runs", get(get_top_players_by_runs))
        .route("/top-players-by-value", get(get_top_players_by_value))
        .route("/teams", get(get_teams))
        .with_state(state)
}
