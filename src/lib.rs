//! Round-based tournament organizer: library with models, business logic and the HTTP API.

pub mod config;
pub mod logic;
pub mod models;
pub mod requests;
pub mod service;
pub mod store;
pub mod web;

pub use config::Config;
pub use logic::{
    build_tournament, check_mutable, rank_qualifying, transition, validate_bracket,
    validate_rounds, ValidatedBracket,
};
pub use models::{
    GameMatch, Group, Placement, Player, PlayerId, Qualifying, QualifyingPlayer, QualifyingTime,
    Round, Tournament, TournamentError, TournamentId, TournamentResult, TournamentStatus,
    TournamentSummary,
};
pub use requests::{
    CreateTournamentRequest, PlayerNameRequest, RecordQualifyingTimeRequest, RoundSpec,
    UpdateTournamentStatusRequest,
};
pub use service::TournamentService;
pub use store::{MemoryStore, TournamentRepository};
