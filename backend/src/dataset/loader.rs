use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::domain::{PlayerDocument, TeamDocument};
use crate::errors::LoadError;

use super::Dataset;

pub const TEAM_SOURCE: &str = "team";
pub const PLAYER_SOURCE: &str = "player";

/// Read both source files and parse them into a dataset
pub fn load_files(team_path: &Path, player_path: &Path) -> Result<Dataset, LoadError> {
    let team_bytes = read_source(TEAM_SOURCE, team_path)?;
    let player_bytes = read_source(PLAYER_SOURCE, player_path)?;
    parse_sources(&team_bytes, &player_bytes)
}

/// Parse already obtained team and player documents
pub fn parse_sources(team_bytes: &[u8], player_bytes: &[u8]) -> Result<Dataset, LoadError> {
    let team_doc: TeamDocument = parse_document(TEAM_SOURCE, team_bytes)?;
    let player_doc: PlayerDocument = parse_document(PLAYER_SOURCE, player_bytes)?;

    info!(
        "Loaded {} teams and {} players",
        team_doc.teams.len(),
        player_doc.players.len()
    );

    Ok(Dataset::new(team_doc.teams, player_doc.players))
}

// --- Helper Methods ---

fn read_source(source_name: &'static str, path: &Path) -> Result<Vec<u8>, LoadError> {
    debug!("Reading {} data from {}", source_name, path.display());
    fs::read(path).map_err(|source| LoadError::SourceUnavailable {
        source_name,
        path: path.to_path_buf(),
        source,
    })
}

fn parse_document<T: DeserializeOwned>(
    source_name: &'static str,
    bytes: &[u8],
) -> Result<T, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::MalformedData { source_name, source })
}
