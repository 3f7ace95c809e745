//! Integration tests for the qualifying ranking.

use chrono::{Duration, TimeZone, Utc};
use tournament_rounds::{rank_qualifying, QualifyingTime};
use uuid::Uuid;

fn time(name: &str, best_time: u32, signup_offset_secs: i64) -> QualifyingTime {
    QualifyingTime {
        player_id: Uuid::new_v4(),
        player_name: name.to_string(),
        signup_date: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
            + Duration::seconds(signup_offset_secs),
        best_time,
    }
}

fn positions(times: Vec<QualifyingTime>) -> Vec<(String, u32)> {
    rank_qualifying(Uuid::new_v4(), times)
        .players
        .into_iter()
        .map(|p| (p.name, p.position))
        .collect()
}

#[test]
fn tied_times_share_position_and_next_skips() {
    let ranked = positions(vec![time("C", 20, 0), time("A", 10, 0), time("B", 10, 1)]);
    assert_eq!(
        ranked,
        vec![("A".to_string(), 1), ("B".to_string(), 1), ("C".to_string(), 3)]
    );
}

#[test]
fn tie_in_the_middle() {
    let ranked = positions(vec![
        time("A", 5, 0),
        time("B", 7, 0),
        time("C", 7, 1),
        time("D", 7, 2),
        time("E", 9, 0),
    ]);
    let pos: Vec<u32> = ranked.iter().map(|(_, p)| *p).collect();
    assert_eq!(pos, vec![1, 2, 2, 2, 5]);
}

#[test]
fn ties_list_earlier_signup_first() {
    let ranked = positions(vec![time("late", 10, 60), time("early", 10, 0)]);
    assert_eq!(ranked[0].0, "early");
    assert_eq!(ranked[1].0, "late");
}

#[test]
fn empty_input_gives_empty_list() {
    let id = Uuid::new_v4();
    let q = rank_qualifying(id, Vec::new());
    assert_eq!(q.tournament_id, id);
    assert!(q.players.is_empty());
}

#[test]
fn ranked_rows_carry_time_and_signup() {
    let row = time("Solo", 42, 5);
    let expected_signup = row.signup_date;
    let q = rank_qualifying(Uuid::new_v4(), vec![row]);
    assert_eq!(q.players[0].position, 1);
    assert_eq!(q.players[0].time, 42);
    assert_eq!(q.players[0].signup_date, expected_signup);
}
