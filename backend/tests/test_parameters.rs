//! Tests for TrialParameters validation and serialization

use monty_hall_core::{
    simulate, RngManager, SimulationError, Strategy, TrialParameters, MAX_DOORS, MIN_DOORS,
};

#[test]
fn test_fewer_than_three_doors_rejected() {
    for doors in 0..MIN_DOORS {
        let result = TrialParameters::new(10, doors, 0, Strategy::Stay);
        assert!(
            matches!(result, Err(SimulationError::InvalidParameters(_))),
            "{} doors should be rejected",
            doors
        );
    }
}

#[test]
fn test_huge_door_count_rejected_before_simulation() {
    let result = TrialParameters::new(1, usize::MAX, 0, Strategy::Stay);
    assert!(matches!(result, Err(SimulationError::InvalidParameters(_))));

    let json = format!(
        r#"{{"trial_count": 1, "total_doors": {}, "open_doors": 0, "strategy": "stay"}}"#,
        MAX_DOORS + 1
    );
    assert!(serde_json::from_str::<TrialParameters>(&json).is_err());
}

#[test]
fn test_largest_game_runs() {
    let params = TrialParameters::new(2, MAX_DOORS, MAX_DOORS - 2, Strategy::Switch).unwrap();
    let result = simulate(&params, &mut RngManager::new(5));
    assert_eq!(result.trials(), 2);
}

#[test]
fn test_open_doors_upper_bound() {
    // 10 doors: host may open up to 8
    assert!(TrialParameters::new(10, 10, 8, Strategy::Switch).is_ok());
    assert!(TrialParameters::new(10, 10, 9, Strategy::Switch).is_err());
    assert!(TrialParameters::new(10, 10, 10, Strategy::Switch).is_err());
}

#[test]
fn test_zero_open_doors_allowed() {
    let params = TrialParameters::new(10, 3, 0, Strategy::Switch).unwrap();
    assert_eq!(params.open_doors(), 0);
    assert_eq!(params.closed_doors(), 3);
}

#[test]
fn test_zero_trials_allowed() {
    assert!(TrialParameters::new(0, 3, 1, Strategy::Stay).is_ok());
}

#[test]
fn test_error_message_names_limit() {
    let err = TrialParameters::new(1, 5, 4, Strategy::Stay).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("at most 3"), "unexpected message: {}", message);
}

#[test]
fn test_json_roundtrip() {
    let params = TrialParameters::new(1_000, 4, 2, Strategy::Switch).unwrap();
    let json = serde_json::to_string(&params).unwrap();

    assert!(json.contains("\"strategy\":\"switch\""));
    let parsed: TrialParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, params);
}

#[test]
fn test_invalid_json_rejected_by_validation() {
    let json = r#"{"trial_count": 10, "total_doors": 3, "open_doors": 2, "strategy": "stay"}"#;
    let err = serde_json::from_str::<TrialParameters>(json).unwrap_err();
    assert!(err.to_string().contains("open_doors"), "unexpected error: {}", err);
}

#[test]
fn test_unknown_strategy_rejected() {
    let json = r#"{"trial_count": 10, "total_doors": 3, "open_doors": 1, "strategy": "maybe"}"#;
    assert!(serde_json::from_str::<TrialParameters>(json).is_err());
}
