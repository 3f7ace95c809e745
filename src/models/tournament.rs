//! Tournament, Round and TournamentStatus.

use crate::models::error::TournamentError;
use crate::models::game::Group;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for a round.
pub type RoundId = Uuid;

/// Lifecycle status of a tournament.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    /// Being set up; every tournament starts here.
    #[default]
    Draft,
    /// Running. Structural mutations are locked.
    Active,
    Completed,
    Cancelled,
}

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 4] = [
        TournamentStatus::Draft,
        TournamentStatus::Active,
        TournamentStatus::Completed,
        TournamentStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentStatus::Draft => "DRAFT",
            TournamentStatus::Active => "ACTIVE",
            TournamentStatus::Completed => "COMPLETED",
            TournamentStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentStatus {
    type Err = TournamentError;

    /// Exact, case-sensitive match on the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TournamentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TournamentError::invalid_parameter("invalid status"))
    }
}

/// One stage of the tournament. Its players are split into `group_count` groups of `group_size`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: RoundId,
    pub name: String,
    pub tournament_id: TournamentId,
    pub match_count: u32,
    /// `group_count * group_size`, fixed when the round is built.
    pub player_count: u64,
    /// Players leaving each group for the next round.
    pub player_advancement_count: u32,
    pub group_size: u32,
    pub group_count: u32,
    /// Scheduling hint only.
    pub concurrent_group_count: u32,
    /// Empty until players are seeded into the round.
    pub groups: Vec<Group>,
}

/// Full tournament aggregate: settings plus its ordered rounds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub description: String,
    /// Opaque; never parsed as a date.
    pub start_date: String,
    pub end_date: String,
    pub status: TournamentStatus,
    pub allow_underfilled_groups: bool,
    /// Declared number of entrants.
    pub player_count: u32,
    /// Round `i` feeds round `i + 1`.
    pub rounds: Vec<Round>,
}

impl Tournament {
    pub fn is_active(&self) -> bool {
        self.status == TournamentStatus::Active
    }

    pub fn summary(&self) -> TournamentSummary {
        TournamentSummary::from_tournament(self)
    }
}

/// Listing view of a tournament (no rounds).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: TournamentStatus,
}

impl TournamentSummary {
    pub fn from_tournament(t: &Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            description: t.description.clone(),
            start_date: t.start_date.clone(),
            end_date: t.end_date.clone(),
            status: t.status,
        }
    }
}
