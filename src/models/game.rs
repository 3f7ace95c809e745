//! Group, GameMatch and Placement: the sub-bracket shapes of a round.
//!
//! Rounds are built with no groups; nothing in this crate seeds players into
//! groups or records match placements yet.

use crate::models::player::PlayerId;
use crate::models::tournament::RoundId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A subdivision of a round's players that compete together.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub round_id: RoundId,
    pub matches: Vec<GameMatch>,
}

/// A single match played inside a group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    pub group_id: GroupId,
    pub map_name: String,
    pub placements: Vec<Placement>,
}

/// A player's finishing position in one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: Uuid,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub placement: u32,
}
