use serde::{Deserialize, Deserializer};

/// Cumulative statistics of a single player
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Player {
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Wickets", deserialize_with = "null_as_default")]
    pub wickets: i64,
    #[serde(rename = "Runs", deserialize_with = "null_as_default")]
    pub runs: i64,
    #[serde(rename = "Catches", deserialize_with = "null_as_default")]
    pub catches: i64,
    #[serde(rename = "ManOfMatchesAwards", deserialize_with = "null_as_default")]
    pub man_of_match_awards: i64,
}

/// Season record of a single team
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "MatchesPlayed", deserialize_with = "null_as_default")]
    pub matches_played: i64,
    #[serde(rename = "Wins", deserialize_with = "null_as_default")]
    pub wins: i64,
    #[serde(rename = "Losses", deserialize_with = "null_as_default")]
    pub losses: i64,
    #[serde(rename = "Points", deserialize_with = "null_as_default")]
    pub points: i64,
}

// --- Source Document Structures ---

/// Root of the team source file
#[derive(Debug, Default, Deserialize)]
pub struct TeamDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
}

/// Root of the player source file
#[derive(Debug, Default, Deserialize)]
pub struct PlayerDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
