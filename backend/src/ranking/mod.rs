pub mod top;
pub mod types;
pub mod value;

pub use top::{
    top_n, top_players_by, top_players_by_runs, top_players_by_value, top_players_by_wickets,
    top_teams_by_points,
};
pub use types::{team_points, PlayerMetric, Score};
pub use value::value_score;
