//! Data structures for round-based tournaments: tournaments, rounds, players, qualifying.

mod error;
mod game;
mod player;
mod tournament;

pub use error::{TournamentError, TournamentResult};
pub use game::{GameMatch, Group, GroupId, MatchId, Placement};
pub use player::{Player, PlayerId, Qualifying, QualifyingPlayer, QualifyingTime};
pub use tournament::{
    Round, RoundId, Tournament, TournamentId, TournamentStatus, TournamentSummary,
};
