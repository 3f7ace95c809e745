//! Qualifying leaderboard: rank players by best time.

use crate::models::{Qualifying, QualifyingPlayer, QualifyingTime, TournamentId};

/// Rank best times, fastest first, with standard competition ranking.
///
/// Equal times share a position and the next distinct time skips ahead:
/// times `[10, 10, 20]` rank `1, 1, 3`. Ties are listed by earlier signup
/// first, then in input order. Empty input gives an empty list.
pub fn rank_qualifying(tournament_id: TournamentId, mut times: Vec<QualifyingTime>) -> Qualifying {
    times.sort_by_key(|t| (t.best_time, t.signup_date));

    let mut players: Vec<QualifyingPlayer> = Vec::with_capacity(times.len());
    for (idx, entry) in times.into_iter().enumerate() {
        let position = match players.last() {
            Some(prev) if prev.time == entry.best_time => prev.position,
            _ => position_at(idx),
        };
        players.push(QualifyingPlayer {
            player_id: entry.player_id,
            name: entry.player_name,
            position,
            signup_date: entry.signup_date,
            time: entry.best_time,
        });
    }

    Qualifying {
        tournament_id,
        players,
    }
}

/// One-based position of the row at `idx`, saturating at `u32::MAX`.
fn position_at(idx: usize) -> u32 {
    u32::try_from(idx.saturating_add(1)).unwrap_or(u32::MAX)
}
