use scoring_core::{ExecutionOutcome, MatchEngine, MatchState, PlayerFields, ScoringConfig, Side};

#[test]
fn match_state_survives_json() {
    let config = ScoringConfig::default();
    let mut state = MatchState::with_names("X", "Y");
    state.set_server(Some(Side::B));
    MatchEngine::new(&mut state, &config).award_point(Side::A);

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: MatchState = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, state);
}

#[test]
fn outcome_round_trips_with_change_mask() {
    let config = ScoringConfig::default();
    let mut state = MatchState::new();

    let outcome = MatchEngine::new(&mut state, &config).award_game(Side::B);
    let json = serde_json::to_string(&outcome).expect("serialize");
    let restored: ExecutionOutcome = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.delta.player_b, PlayerFields::GAMES);
    assert_eq!(restored, outcome);
}

#[test]
fn serving_side_is_written_by_name() {
    let mut state = MatchState::new();
    state.set_server(Some(Side::A));

    let json = serde_json::to_value(&state).expect("serialize");

    assert_eq!(json["server"], "A");
}
