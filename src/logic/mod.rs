//! Tournament business logic: bracket validation/building, lifecycle guard, qualifying.

mod bracket;
mod qualifying;
mod status;

pub use bracket::{
    build_tournament, validate_bracket, validate_rounds, ValidatedBracket,
    ADVANCEMENT_EXCEEDS_GROUP, FIRST_ROUND_MISMATCH, GROUP_COUNT_ZERO, GROUP_SIZE_ZERO,
    ROUND_MISMATCH,
};
pub use qualifying::rank_qualifying;
pub use status::{check_mutable, transition, TOURNAMENT_ACTIVE};
