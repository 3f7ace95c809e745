//! TournamentService: the operations the API exposes.
//!
//! Each operation loads what it needs from the repository, applies the pure
//! logic from [`crate::logic`] and writes the result back. Errors from either
//! side are returned unchanged.

use crate::logic::{build_tournament, check_mutable, rank_qualifying, transition, validate_bracket};
use crate::models::{
    Player, PlayerId, Qualifying, QualifyingTime, Tournament, TournamentId, TournamentResult,
    TournamentStatus, TournamentSummary,
};
use crate::requests::{CreateTournamentRequest, PlayerNameRequest, RecordQualifyingTimeRequest};
use crate::store::TournamentRepository;
use log::{debug, info, warn};
use std::sync::Arc;

#[derive(Clone)]
pub struct TournamentService {
    repo: Arc<dyn TournamentRepository>,
}

impl TournamentService {
    pub fn new(repo: Arc<dyn TournamentRepository>) -> Self {
        Self { repo }
    }

    /// Validate the bracket, build the aggregate (status DRAFT) and store it.
    pub fn create_tournament(&self, request: CreateTournamentRequest) -> TournamentResult<Tournament> {
        request.validate_shape()?;
        let bracket = validate_bracket(request).inspect_err(|e| {
            debug!("Rejected bracket: {}", e);
        })?;
        let tournament = self.repo.insert_tournament(build_tournament(&bracket))?;
        info!(
            "Created tournament {} ({} rounds, {} players)",
            tournament.id,
            tournament.rounds.len(),
            tournament.player_count
        );
        Ok(tournament)
    }

    pub fn get_tournament(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.repo.find_tournament_by_id(id)
    }

    pub fn list_tournaments(&self) -> TournamentResult<Vec<TournamentSummary>> {
        self.repo.list_tournaments()
    }

    /// Set any status; no source/target pair is rejected.
    pub fn change_status(&self, id: TournamentId, status: TournamentStatus) -> TournamentResult<Tournament> {
        let mut tournament = self.repo.find_tournament_by_id(id)?;
        let previous = transition(&mut tournament, status);
        let tournament = self.repo.update_tournament_status(id, tournament.status)?;
        info!("Tournament {} status {} -> {}", id, previous, tournament.status);
        Ok(tournament)
    }

    pub fn delete_tournament(&self, id: TournamentId) -> TournamentResult<()> {
        self.repo.delete_tournament(id, &mutable_guard)?;
        info!("Deleted tournament {}", id);
        Ok(())
    }

    pub fn list_players(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Player>> {
        let tournament = self.repo.find_tournament_by_id(tournament_id)?;
        self.repo.list_players(tournament.id)
    }

    pub fn get_player(&self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<Player> {
        let tournament = self.repo.find_tournament_by_id(tournament_id)?;
        self.repo.find_player(tournament.id, player_id)
    }

    pub fn add_player(&self, tournament_id: TournamentId, request: PlayerNameRequest) -> TournamentResult<Player> {
        request.validate_shape()?;
        let player = self
            .repo
            .insert_player(Player::new(request.name, tournament_id), &mutable_guard)?;
        info!("Added player {} ({}) to tournament {}", player.id, player.name, tournament_id);
        Ok(player)
    }

    /// Guarded like add/remove: an ACTIVE tournament's roster is frozen.
    pub fn rename_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        request: PlayerNameRequest,
    ) -> TournamentResult<Player> {
        request.validate_shape()?;
        let player = self.repo.rename_player(
            tournament_id,
            player_id,
            request.name.trim(),
            &mutable_guard,
        )?;
        info!("Renamed player {} to {}", player.id, player.name);
        Ok(player)
    }

    pub fn remove_player(&self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<()> {
        self.repo
            .delete_player(tournament_id, player_id, &mutable_guard)?;
        info!("Removed player {} from tournament {}", player_id, tournament_id);
        Ok(())
    }

    pub fn qualifying(&self, tournament_id: TournamentId) -> TournamentResult<Qualifying> {
        let tournament = self.repo.find_tournament_by_id(tournament_id)?;
        let times = self.repo.query_qualifying_times(tournament.id)?;
        Ok(rank_qualifying(tournament.id, times))
    }

    pub fn record_qualifying_time(
        &self,
        tournament_id: TournamentId,
        request: RecordQualifyingTimeRequest,
    ) -> TournamentResult<QualifyingTime> {
        request.validate_shape()?;
        let tournament = self.repo.find_tournament_by_id(tournament_id)?;
        let best = self
            .repo
            .record_qualifying_time(tournament.id, request.player_id, request.time)?;
        debug!(
            "Qualifying time {} for player {} (best {})",
            request.time, best.player_id, best.best_time
        );
        Ok(best)
    }

    pub fn clear_qualifying(&self, tournament_id: TournamentId) -> TournamentResult<()> {
        let tournament = self.repo.find_tournament_by_id(tournament_id)?;
        self.repo.delete_qualifying(tournament.id)?;
        info!("Cleared qualifying for tournament {}", tournament.id);
        Ok(())
    }
}

/// Lifecycle guard handed to the store, which runs it under the write lock so a
/// concurrent status change cannot slip between check and write.
fn mutable_guard(tournament: &Tournament) -> TournamentResult<()> {
    check_mutable(tournament).inspect_err(|_| {
        warn!("Rejected mutation of active tournament {}", tournament.id);
    })
}
