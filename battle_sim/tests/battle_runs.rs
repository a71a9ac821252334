//! Integration test: Config -> Recruit -> Fight rounds -> Outcome

use army_core::{ArmyEvent, ArmyState};
use battle_sim::{parse_battle_config, Battle, BattleOutcome, Side};
use std::sync::{Arc, Mutex};

#[test]
fn test_seeded_battle_runs_to_decision() {
    let config = parse_battle_config(
        r#"
first_size = 120
second_size = 80
seed = 42
max_rounds = 500
"#,
    )
    .unwrap();

    let mut battle = Battle::from_config(&config).unwrap();
    assert_eq!(battle.first().soldier_count(), 120);
    assert_eq!(battle.second().soldier_count(), 80);

    let outcome = battle.run().unwrap();
    assert!(outcome.rounds() >= 1);

    // Every unit deals at least one lethal share, so nobody stalls
    match outcome {
        BattleOutcome::Victory { side, .. } => {
            let loser = match side {
                Side::First => battle.second(),
                Side::Second => battle.first(),
            };
            assert!(loser.is_defeated());
            assert_eq!(loser.state(), ArmyState::Defeated);
            assert!(!battle.army(side).is_defeated());
        }
        other => panic!("expected a victory, got {:?}", other),
    }
}

#[test]
fn test_same_seed_same_outcome() {
    let config = parse_battle_config("first_size = 60\nsecond_size = 60\nseed = 7\n").unwrap();

    let outcome_a = Battle::from_config(&config).unwrap().run().unwrap();
    let outcome_b = Battle::from_config(&config).unwrap().run().unwrap();
    assert_eq!(outcome_a, outcome_b);
}

#[test]
fn test_casualties_reach_sinks() {
    let config = parse_battle_config("first_size = 20\nsecond_size = 20\nseed = 3\n").unwrap();
    let events = Arc::new(Mutex::new(Vec::new()));
    let first_log = Arc::clone(&events);
    let second_log = Arc::clone(&events);

    let mut battle = Battle::from_config_with_sinks(
        &config,
        move |e: ArmyEvent| first_log.lock().unwrap().push(e),
        move |e: ArmyEvent| second_log.lock().unwrap().push(e),
    )
    .unwrap();
    battle.run().unwrap();

    let (first, second) = battle.reports();
    let events = events.lock().unwrap();
    let lost = events
        .iter()
        .filter(|e| matches!(e, ArmyEvent::UnitLost { .. }))
        .count();
    assert_eq!(lost, first.casualties() + second.casualties());
    assert!(events
        .iter()
        .any(|e| matches!(e, ArmyEvent::LowStrength { .. })));
}

#[test]
fn test_reports_serialize() {
    let config = parse_battle_config("first_size = 5\nsecond_size = 5\nseed = 1\n").unwrap();
    let mut battle = Battle::from_config(&config).unwrap();
    let outcome = battle.run().unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert!(json.get("result").is_some());
    let (first, _) = battle.reports();
    let json = serde_json::to_value(&first).unwrap();
    assert_eq!(json["soldier_count"].as_u64().unwrap() as usize, first.soldier_count);
}
