//! Player and the qualifying leaderboard types.

use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// A player registered to one tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub tournament_id: TournamentId,
}

impl Player {
    /// Create a new player with a fresh id. The name is stored trimmed.
    pub fn new(name: impl Into<String>, tournament_id: TournamentId) -> Self {
        let name: String = name.into();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            tournament_id,
        }
    }
}

/// A player's best qualifying time, as returned by the store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifyingTime {
    pub player_id: PlayerId,
    pub player_name: String,
    pub signup_date: DateTime<Utc>,
    /// Lower is better.
    pub best_time: u32,
}

/// One row of the ranked qualifying list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifyingPlayer {
    pub player_id: PlayerId,
    pub name: String,
    /// Competition rank: tied times share a position.
    pub position: u32,
    pub signup_date: DateTime<Utc>,
    pub time: u32,
}

/// Ranked qualifying list for a tournament, ordered by `position`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualifying {
    pub tournament_id: TournamentId,
    pub players: Vec<QualifyingPlayer>,
}
