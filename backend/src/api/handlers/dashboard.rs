use axum::response::{Html, Redirect};

use crate::views;

pub async fn get_dashboard() -> Html<String> {
    Html(views::dashboard_page())
}

pub async fn redirect_to_dashboard() -> Redirect {
    Redirect::permanent("/dashboard")
}
