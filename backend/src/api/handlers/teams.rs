use axum::{extract::State, response::Html};
use log::debug;
use std::sync::Arc;

use crate::api::models::team_rows;
use crate::views;

use super::AppState;

pub async fn get_teams(State(state): State<Arc<AppState>>) -> Html<String> {
    let ranked = state.dataset.top_teams_by_points(state.top_n());
    debug!("Ranked {} teams by points", ranked.len());

    Html(views::teams_page(&team_rows(&ranked)))
}
