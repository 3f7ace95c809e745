//! Bracket validation and construction.
//!
//! A tournament's rounds form a chain: every player leaving round `i` must
//! land in a seat of round `i + 1`. [`validate_bracket`] checks the chain and
//! hands back a [`ValidatedBracket`], the only input [`build_tournament`]
//! accepts, so an unchecked bracket can never be built.

use crate::models::{Round, Tournament, TournamentError, TournamentStatus};
use crate::requests::{CreateTournamentRequest, RoundSpec};
use uuid::Uuid;

pub const FIRST_ROUND_MISMATCH: &str =
    "Number of players in first round must be equal to total players in tournament";
pub const ROUND_MISMATCH: &str =
    "Number of players in round must be equal to total advancing players of previous round";
pub const GROUP_SIZE_ZERO: &str = "Group size must be greater than 0";
pub const GROUP_COUNT_ZERO: &str = "Group count must be greater than 0";
pub const ADVANCEMENT_EXCEEDS_GROUP: &str =
    "Player advancement count cannot exceed total players in group";

/// Check a chain of rounds against each other and against the tournament's player count.
///
/// Rounds are walked in order and the first violation is returned:
/// 1. unless `allow_underfilled_groups`, the first round must seat exactly
///    `player_count` players and every later round exactly the players
///    advancing from the round before it;
/// 2. group size and group count must be non-zero;
/// 3. a group cannot advance more players than it holds.
///
/// An empty chain is valid.
pub fn validate_rounds(
    player_count: u32,
    allow_underfilled_groups: bool,
    rounds: &[RoundSpec],
) -> Result<(), TournamentError> {
    let mut previous: Option<&RoundSpec> = None;

    for round in rounds {
        if !allow_underfilled_groups {
            let players_in_round = round.players_in_round();
            match previous {
                None if players_in_round != u64::from(player_count) => {
                    return Err(TournamentError::invalid_parameter(FIRST_ROUND_MISMATCH));
                }
                Some(prev) if players_in_round != prev.advancing_players() => {
                    return Err(TournamentError::invalid_parameter(ROUND_MISMATCH));
                }
                _ => {}
            }
        }

        if round.group_size == 0 {
            return Err(TournamentError::invalid_parameter(GROUP_SIZE_ZERO));
        }
        if round.group_count == 0 {
            return Err(TournamentError::invalid_parameter(GROUP_COUNT_ZERO));
        }
        if round.player_advancement_count > round.group_size {
            return Err(TournamentError::invalid_parameter(ADVANCEMENT_EXCEEDS_GROUP));
        }

        previous = Some(round);
    }

    Ok(())
}

/// A create request whose rounds passed [`validate_rounds`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatedBracket {
    request: CreateTournamentRequest,
}

/// Validate the request's round chain. Does not re-check field shapes.
pub fn validate_bracket(request: CreateTournamentRequest) -> Result<ValidatedBracket, TournamentError> {
    validate_rounds(
        request.player_count,
        request.allow_underfilled_groups,
        &request.rounds,
    )?;
    Ok(ValidatedBracket { request })
}

/// Build the tournament aggregate for a validated bracket.
///
/// Fresh ids are generated for the tournament and each round; the status is
/// always DRAFT and every round starts with no groups. No I/O.
pub fn build_tournament(bracket: &ValidatedBracket) -> Tournament {
    let req = &bracket.request;
    let tournament_id = Uuid::new_v4();
    let rounds = req
        .rounds
        .iter()
        .map(|spec| build_round(spec, tournament_id))
        .collect();

    Tournament {
        id: tournament_id,
        name: req.name.trim().to_string(),
        description: req.description.trim().to_string(),
        start_date: req.start_date.clone(),
        end_date: req.end_date.clone(),
        status: TournamentStatus::Draft,
        allow_underfilled_groups: req.allow_underfilled_groups,
        player_count: req.player_count,
        rounds,
    }
}

fn build_round(spec: &RoundSpec, tournament_id: Uuid) -> Round {
    Round {
        id: Uuid::new_v4(),
        name: spec.name.trim().to_string(),
        tournament_id,
        match_count: spec.match_count,
        player_count: spec.players_in_round(),
        player_advancement_count: spec.player_advancement_count,
        group_size: spec.group_size,
        group_count: spec.group_count,
        concurrent_group_count: spec.concurrent_group_count,
        groups: Vec::new(),
    }
}
