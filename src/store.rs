//! Persistence: the repository the service writes through, and an in-memory implementation.

use crate::models::{
    Player, PlayerId, QualifyingTime, Tournament, TournamentError, TournamentId,
    TournamentResult, TournamentStatus, TournamentSummary,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const TOURNAMENT_NOT_FOUND: &str = "tournament not found";
pub const PLAYER_NOT_FOUND: &str = "player not found";
pub const QUALIFYING_NOT_FOUND: &str = "qualifying not found";

/// Check run against the owning tournament, under the same lock as the write it guards.
pub type Guard<'a> = &'a dyn Fn(&Tournament) -> TournamentResult<()>;

/// Storage used by [`crate::service::TournamentService`].
///
/// Absent entities are reported as `TournamentError::NotFound`, never as
/// another kind. Players are scoped to a tournament: a player id that exists
/// under another tournament is not found.
///
/// Structural writes take a [`Guard`]. It sees the tournament as stored at the
/// moment of the write; if it fails nothing is written and its error is returned.
pub trait TournamentRepository: Send + Sync {
    fn find_tournament_by_id(&self, id: TournamentId) -> TournamentResult<Tournament>;

    fn list_tournaments(&self) -> TournamentResult<Vec<TournamentSummary>>;

    /// Store the tournament together with all of its rounds, or nothing.
    fn insert_tournament(&self, tournament: Tournament) -> TournamentResult<Tournament>;

    fn update_tournament_status(
        &self,
        id: TournamentId,
        status: TournamentStatus,
    ) -> TournamentResult<Tournament>;

    /// Removes the tournament with its players and qualifying times.
    fn delete_tournament(&self, id: TournamentId, guard: Guard<'_>) -> TournamentResult<()>;

    fn list_players(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Player>>;

    fn find_player(&self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<Player>;

    fn insert_player(&self, player: Player, guard: Guard<'_>) -> TournamentResult<Player>;

    fn delete_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        guard: Guard<'_>,
    ) -> TournamentResult<()>;

    fn rename_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        name: &str,
        guard: Guard<'_>,
    ) -> TournamentResult<Player>;

    /// Best time of every player that has one. Order is unspecified.
    fn query_qualifying_times(&self, tournament_id: TournamentId) -> TournamentResult<Vec<QualifyingTime>>;

    /// Record a time; only an improvement replaces the stored best.
    fn record_qualifying_time(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        time: u32,
    ) -> TournamentResult<QualifyingTime>;

    fn delete_qualifying(&self, tournament_id: TournamentId) -> TournamentResult<()>;
}

#[derive(Clone, Copy, Debug)]
struct QualifyingEntry {
    signup_date: DateTime<Utc>,
    best_time: u32,
}

#[derive(Debug, Default)]
struct StoreState {
    tournaments: HashMap<TournamentId, Tournament>,
    /// Insertion order, for listing.
    order: Vec<TournamentId>,
    players: HashMap<TournamentId, Vec<Player>>,
    qualifying: HashMap<TournamentId, HashMap<PlayerId, QualifyingEntry>>,
}

impl StoreState {
    fn tournament_mut(&mut self, id: TournamentId) -> TournamentResult<&mut Tournament> {
        self.tournaments
            .get_mut(&id)
            .ok_or_else(|| TournamentError::not_found(TOURNAMENT_NOT_FOUND))
    }

    fn check(&self, id: TournamentId, guard: Guard<'_>) -> TournamentResult<()> {
        let tournament = self
            .tournaments
            .get(&id)
            .ok_or_else(|| TournamentError::not_found(TOURNAMENT_NOT_FOUND))?;
        guard(tournament)
    }

    fn player(&self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<&Player> {
        self.players
            .get(&tournament_id)
            .and_then(|players| players.iter().find(|p| p.id == player_id))
            .ok_or_else(|| TournamentError::not_found(PLAYER_NOT_FOUND))
    }

    fn player_mut(&mut self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<&mut Player> {
        self.players
            .get_mut(&tournament_id)
            .and_then(|players| players.iter_mut().find(|p| p.id == player_id))
            .ok_or_else(|| TournamentError::not_found(PLAYER_NOT_FOUND))
    }
}

/// All state in one `RwLock`: every call takes the lock exactly once, so each
/// write is atomic with respect to every other call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TournamentResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| TournamentError::internal("lock error"))
    }

    fn write(&self) -> TournamentResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| TournamentError::internal("lock error"))
    }
}

impl TournamentRepository for MemoryStore {
    fn find_tournament_by_id(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.read()?
            .tournaments
            .get(&id)
            .cloned()
            .ok_or_else(|| TournamentError::not_found(TOURNAMENT_NOT_FOUND))
    }

    fn list_tournaments(&self) -> TournamentResult<Vec<TournamentSummary>> {
        let g = self.read()?;
        Ok(g.order
            .iter()
            .filter_map(|id| g.tournaments.get(id))
            .map(Tournament::summary)
            .collect())
    }

    fn insert_tournament(&self, tournament: Tournament) -> TournamentResult<Tournament> {
        let mut g = self.write()?;
        if g.tournaments.contains_key(&tournament.id) {
            return Err(TournamentError::internal("tournament already exists"));
        }
        g.order.push(tournament.id);
        g.players.insert(tournament.id, Vec::new());
        g.tournaments.insert(tournament.id, tournament.clone());
        Ok(tournament)
    }

    fn update_tournament_status(
        &self,
        id: TournamentId,
        status: TournamentStatus,
    ) -> TournamentResult<Tournament> {
        let mut g = self.write()?;
        let t = g.tournament_mut(id)?;
        t.status = status;
        Ok(t.clone())
    }

    fn delete_tournament(&self, id: TournamentId, guard: Guard<'_>) -> TournamentResult<()> {
        let mut g = self.write()?;
        g.check(id, guard)?;
        g.tournaments.remove(&id);
        g.order.retain(|x| *x != id);
        g.players.remove(&id);
        g.qualifying.remove(&id);
        Ok(())
    }

    fn list_players(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Player>> {
        self.read()?
            .players
            .get(&tournament_id)
            .cloned()
            .ok_or_else(|| TournamentError::not_found(TOURNAMENT_NOT_FOUND))
    }

    fn find_player(&self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<Player> {
        self.read()?.player(tournament_id, player_id).cloned()
    }

    fn insert_player(&self, player: Player, guard: Guard<'_>) -> TournamentResult<Player> {
        let mut g = self.write()?;
        g.check(player.tournament_id, guard)?;
        let players = g
            .players
            .get_mut(&player.tournament_id)
            .ok_or_else(|| TournamentError::not_found(TOURNAMENT_NOT_FOUND))?;
        players.push(player.clone());
        Ok(player)
    }

    fn delete_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        guard: Guard<'_>,
    ) -> TournamentResult<()> {
        let mut g = self.write()?;
        g.check(tournament_id, guard)?;
        let players = g
            .players
            .get_mut(&tournament_id)
            .ok_or_else(|| TournamentError::not_found(PLAYER_NOT_FOUND))?;
        let idx = players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::not_found(PLAYER_NOT_FOUND))?;
        players.remove(idx);
        if let Some(times) = g.qualifying.get_mut(&tournament_id) {
            times.remove(&player_id);
        }
        Ok(())
    }

    fn rename_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        name: &str,
        guard: Guard<'_>,
    ) -> TournamentResult<Player> {
        let mut g = self.write()?;
        g.check(tournament_id, guard)?;
        let player = g.player_mut(tournament_id, player_id)?;
        player.name = name.to_string();
        Ok(player.clone())
    }

    fn query_qualifying_times(&self, tournament_id: TournamentId) -> TournamentResult<Vec<QualifyingTime>> {
        let g = self.read()?;
        let Some(times) = g.qualifying.get(&tournament_id) else {
            return Ok(Vec::new());
        };
        let rows = g
            .players
            .get(&tournament_id)
            .into_iter()
            .flatten()
            .filter_map(|p| {
                times.get(&p.id).map(|entry| QualifyingTime {
                    player_id: p.id,
                    player_name: p.name.clone(),
                    signup_date: entry.signup_date,
                    best_time: entry.best_time,
                })
            })
            .collect();
        Ok(rows)
    }

    fn record_qualifying_time(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        time: u32,
    ) -> TournamentResult<QualifyingTime> {
        let mut g = self.write()?;
        let player_name = g.player(tournament_id, player_id)?.name.clone();
        let entry = g
            .qualifying
            .entry(tournament_id)
            .or_default()
            .entry(player_id)
            .or_insert(QualifyingEntry {
                signup_date: Utc::now(),
                best_time: time,
            });
        entry.best_time = entry.best_time.min(time);
        Ok(QualifyingTime {
            player_id,
            player_name,
            signup_date: entry.signup_date,
            best_time: entry.best_time,
        })
    }

    fn delete_qualifying(&self, tournament_id: TournamentId) -> TournamentResult<()> {
        let mut g = self.write()?;
        match g.qualifying.remove(&tournament_id) {
            Some(times) if !times.is_empty() => Ok(()),
            _ => Err(TournamentError::not_found(QUALIFYING_NOT_FOUND)),
        }
    }
}
