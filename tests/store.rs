//! MemoryStore: guarded writes see the tournament as stored at write time.

use tournament_rounds::logic::TOURNAMENT_ACTIVE;
use tournament_rounds::store::{PLAYER_NOT_FOUND, TOURNAMENT_NOT_FOUND};
use tournament_rounds::{
    build_tournament, check_mutable, validate_bracket, CreateTournamentRequest, MemoryStore,
    Player, RoundSpec, Tournament, TournamentError, TournamentRepository, TournamentResult,
    TournamentStatus,
};
use uuid::Uuid;

fn tournament() -> Tournament {
    let request = CreateTournamentRequest {
        name: "Winter Series".to_string(),
        description: "Single stage".to_string(),
        start_date: "2025-01-10".to_string(),
        end_date: "2025-01-11".to_string(),
        allow_underfilled_groups: false,
        player_count: 8,
        rounds: vec![RoundSpec {
            name: "Pool".to_string(),
            match_count: 3,
            player_advancement_count: 1,
            group_size: 4,
            group_count: 2,
            concurrent_group_count: 2,
        }],
    };
    build_tournament(&validate_bracket(request).unwrap())
}

fn active() -> TournamentError {
    TournamentError::NotAllowed(TOURNAMENT_ACTIVE.to_string())
}

fn allow(_: &Tournament) -> TournamentResult<()> {
    Ok(())
}

#[test]
fn guard_sees_status_written_by_an_earlier_call() {
    let store = MemoryStore::new();
    let t = store.insert_tournament(tournament()).unwrap();
    let player = store.insert_player(Player::new("Anna".to_string(), t.id), &check_mutable).unwrap();

    store.update_tournament_status(t.id, TournamentStatus::Active).unwrap();

    assert_eq!(store.delete_tournament(t.id, &check_mutable), Err(active()));
    assert_eq!(
        store.insert_player(Player::new("Bert".to_string(), t.id), &check_mutable),
        Err(active())
    );
    assert_eq!(store.rename_player(t.id, player.id, "Anne", &check_mutable), Err(active()));
    assert_eq!(store.delete_player(t.id, player.id, &check_mutable), Err(active()));

    assert_eq!(store.find_tournament_by_id(t.id).unwrap().status, TournamentStatus::Active);
    assert_eq!(store.list_players(t.id).unwrap(), vec![player]);
}

#[test]
fn failed_guard_writes_nothing() {
    let store = MemoryStore::new();
    let t = store.insert_tournament(tournament()).unwrap();
    let deny = |_: &Tournament| -> TournamentResult<()> { Err(TournamentError::invalid_parameter("denied")) };

    assert!(store.insert_player(Player::new("Carl".to_string(), t.id), &deny).is_err());
    assert!(store.list_players(t.id).unwrap().is_empty());
    assert!(store.delete_tournament(t.id, &deny).is_err());
    assert_eq!(store.list_tournaments().unwrap().len(), 1);
}

#[test]
fn guard_is_not_consulted_for_missing_tournament() {
    let store = MemoryStore::new();
    let missing = Uuid::new_v4();
    let never = |_: &Tournament| -> TournamentResult<()> { panic!("guard ran without a tournament") };

    assert_eq!(
        store.delete_tournament(missing, &never),
        Err(TournamentError::not_found(TOURNAMENT_NOT_FOUND))
    );
    assert_eq!(
        store.insert_player(Player::new("Dora".to_string(), missing), &never),
        Err(TournamentError::not_found(TOURNAMENT_NOT_FOUND))
    );
}

#[test]
fn delete_tournament_drops_players_and_times() {
    let store = MemoryStore::new();
    let t = store.insert_tournament(tournament()).unwrap();
    let p = store.insert_player(Player::new("Emil".to_string(), t.id), &allow).unwrap();
    store.record_qualifying_time(t.id, p.id, 42).unwrap();

    store.delete_tournament(t.id, &allow).unwrap();

    assert!(store.find_tournament_by_id(t.id).is_err());
    assert!(store.list_tournaments().unwrap().is_empty());
    assert_eq!(store.find_player(t.id, p.id), Err(TournamentError::not_found(PLAYER_NOT_FOUND)));
    assert!(store.query_qualifying_times(t.id).unwrap().is_empty());
}
