use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use scraper::{Html, Selector};
use std::sync::Arc;
use tower::ServiceExt;

use cricket_dashboard::api::{create_router, AppState};
use cricket_dashboard::config::AppConfig;
use cricket_dashboard::Dataset;

const TEAMS: &str = r#"{"teams":[
    {"Name":"Mumbai","MatchesPlayed":14,"Wins":8,"Losses":6,"Points":16},
    {"Name":"Chennai","MatchesPlayed":14,"Wins":10,"Losses":4,"Points":20},
    {"Name":"Kolkata","MatchesPlayed":14,"Wins":6,"Losses":8,"Points":12}
]}"#;

const PLAYERS: &str = r#"{"players":[
    {"Name":"Bowler","Wickets":25,"Runs":40,"Catches":3,"ManOfMatchesAwards":1},
    {"Name":"Opener","Wickets":0,"Runs":600,"Catches":5,"ManOfMatchesAwards":3},
    {"Name":"Allrounder","Wickets":14,"Runs":300,"Catches":8,"ManOfMatchesAwards":2},
    {"Name":"Keeper & <Co>","Wickets":0,"Runs":250,"Catches":20,"ManOfMatchesAwards":0}
]}"#;

fn app() -> Router {
    let dataset = Dataset::from_slices(TEAMS.as_bytes(), PLAYERS.as_bytes()).unwrap();
    create_router(Arc::new(AppState::new(dataset, AppConfig::new())))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Second cell (name) of every body row of the page's table
fn ranked_names(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let rows = Selector::parse("tbody tr").unwrap();
    let cells = Selector::parse("td").unwrap();
    document
        .select(&rows)
        .filter_map(|row| row.select(&cells).nth(1))
        .map(|cell| cell.text().collect::<String>())
        .collect()
}

#[tokio::test]
async fn test_dashboard_renders_landing_page() {
    let (status, body) = get(app(), "/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Cricket Dashboard</title>"));
    assert!(ranked_names(&body).is_empty());
}

#[tokio::test]
async fn test_root_redirects_to_dashboard() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/dashboard");
}

#[tokio::test]
async fn test_top_players_by_wickets() {
    let (status, body) = get(app(), "/top-players-by-wickets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ranked_names(&body),
        vec!["Bowler", "Allrounder", "Opener", "Keeper & <Co>"]
    );
}

#[tokio::test]
async fn test_top_players_by_runs() {
    let (_, body) = get(app(), "/top-players-by-runs").await;

    assert_eq!(
        ranked_names(&body),
        vec!["Opener", "Allrounder", "Keeper & <Co>", "Bowler"]
    );
}

#[tokio::test]
async fn test_top_players_by_value() {
    let (_, body) = get(app(), "/top-players-by-value").await;

    // Opener 925, Allrounder 820, Bowler 655, Keeper 350
    assert_eq!(
        ranked_names(&body),
        vec!["Opener", "Allrounder", "Bowler", "Keeper & <Co>"]
    );
    assert!(body.contains("<td>925</td>"));
}

#[tokio::test]
async fn test_teams_by_points() {
    let (status, body) = get(app(), "/teams").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranked_names(&body), vec!["Chennai", "Mumbai", "Kolkata"]);
}

#[tokio::test]
async fn test_player_names_are_escaped_in_pages() {
    let (_, body) = get(app(), "/top-players-by-runs").await;

    assert!(body.contains("Keeper &amp; &lt;Co&gt;"));
    assert!(!body.contains("<Co>"));
}

#[tokio::test]
async fn test_pages_are_capped_at_top_n() {
    let dataset = Dataset::from_slices(TEAMS.as_bytes(), PLAYERS.as_bytes()).unwrap();
    let state = Arc::new(AppState::new(dataset, AppConfig::new().with_top_n(2)));

    let (_, body) = get(create_router(state), "/top-players-by-wickets").await;

    assert_eq!(ranked_names(&body), vec!["Bowler", "Allrounder"]);
}

#[tokio::test]
async fn test_empty_dataset_renders_empty_tables() {
    let dataset = Dataset::from_slices(b"{\"teams\":[]}", b"{\"players\":[]}").unwrap();
    let state = Arc::new(AppState::new(dataset, AppConfig::new()));

    let (status, body) = get(create_router(state), "/teams").await;

    assert_eq!(status, StatusCode::OK);
    assert!(ranked_names(&body).is_empty());
}

#[tokio::test]
async fn test_value_page_with_huge_stats() {
    let players = r#"{"players":[
        {"Name":"Steady","Wickets":0,"Runs":9000000000000000000},
        {"Name":"Big","Wickets":1000000000000000000,"Runs":1}
    ]}"#;
    let dataset = Dataset::from_slices(TEAMS.as_bytes(), players.as_bytes()).unwrap();
    let state = Arc::new(AppState::new(dataset, AppConfig::new()));

    let (status, body) = get(create_router(state), "/top-players-by-value").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranked_names(&body), vec!["Big", "Steady"]);
    assert!(body.contains("<td>20000000000000000001</td>"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(app(), "/players").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_for_different_metrics() {
    let app = app();
    let mut tasks = Vec::new();

    for i in 0..40 {
        let app = app.clone();
        let uri = if i % 2 == 0 {
            "/top-players-by-wickets"
        } else {
            "/top-players-by-runs"
        };
        tasks.push(tokio::spawn(async move { (uri, get(app, uri).await.1) }));
    }

    for task in tasks {
        let (uri, body) = task.await.unwrap();
        let expected = if uri == "/top-players-by-wickets" {
            vec!["Bowler", "Allrounder", "Opener", "Keeper & <Co>"]
        } else {
            vec!["Opener", "Allrounder", "Keeper & <Co>", "Bowler"]
        };
        assert_eq!(ranked_names(&body), expected);
    }
}
