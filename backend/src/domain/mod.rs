pub mod models;

pub use models::{Player, PlayerDocument, Team, TeamDocument};
