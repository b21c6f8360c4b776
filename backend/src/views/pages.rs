use std::fmt::Write as _;

use crate::api::models::{PlayerRow, TeamRow};

use super::layout::{escape, page};

pub fn dashboard_page() -> String {
    let body = "<p>Season statistics for every team and player.</p>\n\
<ul>\n\
<li><a href=\"/top-players-by-wickets\">Top players by wickets</a></li>\n\
<li><a href=\"/top-players-by-runs\">Top players by runs</a></li>\n\
<li><a href=\"/top-players-by-value\">Top players by value</a></li>\n\
<li><a href=\"/teams\">Teams by points</a></li>\n\
</ul>\n";
    page("Cricket Dashboard", body)
}

pub fn players_page(title: &str, rows: &[PlayerRow]) -> String {
    let mut body = String::from(
        "<table id=\"players\">\n<thead><tr><th>#</th><th>Name</th><th>Wickets</th>\
<th>Runs</th><th>Catches</th><th>Man of the Match</th><th>Value</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.rank,
            escape(&row.name),
            row.wickets,
            row.runs,
            row.catches,
            row.man_of_match_awards,
            row.value
        );
    }
    body.push_str("</tbody>\n</table>\n");
    if rows.is_empty() {
        body.push_str("<p>No players to show.</p>\n");
    }
    page(title, &body)
}

pub fn teams_page(rows: &[TeamRow]) -> String {
    let mut body = String::from(
        "<table id=\"teams\">\n<thead><tr><th>#</th><th>Name</th><th>Played</th>\
<th>Won</th><th>Lost</th><th>Points</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.rank,
            escape(&row.name),
            row.matches_played,
            row.wins,
            row.losses,
            row.points
        );
    }
    body.push_str("</tbody>\n</table>\n");
    if rows.is_empty() {
        body.push_str("<p>No teams to show.</p>\n");
    }
    page("Team Standings", &body)
}
