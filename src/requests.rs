//! Inbound request bodies and their shape rules.
//!
//! Shape rules (lengths, minimums) are checked here; whether the rounds fit
//! together is decided later by [`crate::logic::validate_bracket`].

use crate::models::{PlayerId, TournamentError, TournamentResult, TournamentStatus};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed length (in characters) for tournament, round and player names.
pub const NAME_LENGTH: RangeInclusive<usize> = 3..=255;

const INVALID_REQUEST: &str = "Invalid request parameters";

fn check(ok: bool) -> TournamentResult<()> {
    if ok {
        Ok(())
    } else {
        Err(TournamentError::invalid_parameter(INVALID_REQUEST))
    }
}

fn name_ok(name: &str) -> bool {
    NAME_LENGTH.contains(&name.trim().chars().count())
}

/// Description of one round as submitted by the client.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSpec {
    pub name: String,
    pub match_count: u32,
    pub player_advancement_count: u32,
    pub group_size: u32,
    pub group_count: u32,
    pub concurrent_group_count: u32,
}

impl RoundSpec {
    /// Players needed to fill every group of this round.
    pub fn players_in_round(&self) -> u64 {
        u64::from(self.group_count) * u64::from(self.group_size)
    }

    /// Players this round sends on to the next.
    pub fn advancing_players(&self) -> u64 {
        u64::from(self.player_advancement_count) * u64::from(self.group_count)
    }

    pub fn validate_shape(&self) -> TournamentResult<()> {
        check(name_ok(&self.name))?;
        check(self.match_count >= 1)?;
        check(self.group_size >= 2)?;
        check(self.group_count >= 1)?;
        check(self.concurrent_group_count >= 1)
    }
}

/// Body of `POST /api/tournaments`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub allow_underfilled_groups: bool,
    pub player_count: u32,
    #[serde(default)]
    pub rounds: Vec<RoundSpec>,
}

impl CreateTournamentRequest {
    /// Field-level checks only; round-to-round consistency is not looked at here.
    pub fn validate_shape(&self) -> TournamentResult<()> {
        check(name_ok(&self.name))?;
        check(name_ok(&self.description))?;
        check(!self.start_date.trim().is_empty())?;
        check(!self.end_date.trim().is_empty())?;
        check(self.player_count >= 1)?;
        self.rounds.iter().try_for_each(RoundSpec::validate_shape)
    }
}

/// Body of `PATCH /api/tournaments/{id}/status`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UpdateTournamentStatusRequest {
    pub status: String,
}

impl UpdateTournamentStatusRequest {
    /// Fails with "invalid status" for anything but the four wire names.
    pub fn parse_status(&self) -> TournamentResult<TournamentStatus> {
        self.status.parse()
    }
}

/// Body of `POST /api/tournaments/{id}/players` and `PATCH .../players/{player_id}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerNameRequest {
    pub name: String,
}

impl PlayerNameRequest {
    pub fn validate_shape(&self) -> TournamentResult<()> {
        check(name_ok(&self.name))
    }
}

/// Body of `POST /api/tournaments/{id}/qualifying`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQualifyingTimeRequest {
    pub player_id: PlayerId,
    pub time: u32,
}

impl RecordQualifyingTimeRequest {
    pub fn validate_shape(&self) -> TournamentResult<()> {
        check(self.time >= 1)
    }
}
