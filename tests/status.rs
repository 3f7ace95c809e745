//! Integration tests for the lifecycle guard and status parsing.

use tournament_rounds::logic::TOURNAMENT_ACTIVE;
use tournament_rounds::{
    build_tournament, check_mutable, transition, validate_bracket, CreateTournamentRequest,
    Tournament, TournamentError, TournamentStatus, UpdateTournamentStatusRequest,
};

fn draft_tournament() -> Tournament {
    let req = CreateTournamentRequest {
        name: "Night Series".to_string(),
        description: "Weekly".to_string(),
        start_date: "mon".to_string(),
        end_date: "tue".to_string(),
        allow_underfilled_groups: false,
        player_count: 8,
        rounds: Vec::new(),
    };
    build_tournament(&validate_bracket(req).unwrap())
}

#[test]
fn only_active_tournaments_are_locked() {
    let mut t = draft_tournament();
    for status in TournamentStatus::ALL {
        transition(&mut t, status);
        let result = check_mutable(&t);
        if status == TournamentStatus::Active {
            assert_eq!(result, Err(TournamentError::NotAllowed(TOURNAMENT_ACTIVE.to_string())));
        } else {
            assert_eq!(result, Ok(()), "{status} should be mutable");
        }
    }
}

#[test]
fn transition_accepts_any_pair_and_returns_previous() {
    let mut t = draft_tournament();
    assert_eq!(transition(&mut t, TournamentStatus::Completed), TournamentStatus::Draft);
    assert_eq!(transition(&mut t, TournamentStatus::Draft), TournamentStatus::Completed);
    assert_eq!(t.status, TournamentStatus::Draft);
}

#[test]
fn status_parses_only_wire_names() {
    for status in TournamentStatus::ALL {
        assert_eq!(status.as_str().parse::<TournamentStatus>(), Ok(status));
    }
    let bad = UpdateTournamentStatusRequest {
        status: "active".to_string(),
    };
    assert_eq!(
        bad.parse_status(),
        Err(TournamentError::InvalidParameter("invalid status".to_string()))
    );
}

#[test]
fn status_serializes_in_upper_case() {
    let json = serde_json::to_string(&TournamentStatus::Cancelled).unwrap();
    assert_eq!(json, "\"CANCELLED\"");
}
