//! Lifecycle guard: which mutations a tournament's status allows.

use crate::models::{Tournament, TournamentError, TournamentStatus};

/// Message returned whenever a locked tournament is mutated.
pub const TOURNAMENT_ACTIVE: &str = "Tournament is active.";

/// Fail with `NotAllowed` if the tournament is ACTIVE.
///
/// Guards player create/rename/delete and tournament deletion. DRAFT,
/// COMPLETED and CANCELLED tournaments are all mutable.
pub fn check_mutable(tournament: &Tournament) -> Result<(), TournamentError> {
    if tournament.is_active() {
        return Err(TournamentError::not_allowed(TOURNAMENT_ACTIVE));
    }
    Ok(())
}

/// Overwrite the tournament's status and return the previous one.
///
/// Any status may follow any other (COMPLETED -> DRAFT included).
pub fn transition(tournament: &mut Tournament, new_status: TournamentStatus) -> TournamentStatus {
    std::mem::replace(&mut tournament.status, new_status)
}
