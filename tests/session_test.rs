//! Integration test: play session, balance config and batch simulation
//!
//! Covers the outer surfaces: moving items between inventory, equipment and
//! dungeon slots, entering a dungeon from a slot, loading balance overrides
//! from JSON, and running seeded batches.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sigil_delve::core::{ConfigError, SessionError};
use sigil_delve::simulator::{run_batch, SimConfig, Strategy};
use sigil_delve::{BalanceConfig, GameState, Player, Signature};

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn first_item_id(state: &GameState) -> uuid::Uuid {
    state.inventory.iter().next().map(|item| item.id).unwrap()
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_new_session_layout() {
    let config = BalanceConfig::default();
    let state = GameState::new("Hero", &config, &mut create_test_rng());

    assert_eq!(state.player.name, "Hero");
    assert_eq!(state.inventory.len(), config.starter_item_count);
    assert_eq!(state.dungeon_slots.len(), config.dungeon_slots);
    assert!(state.is_slot_unlocked(0));
    assert!(!state.is_slot_unlocked(1));
}

#[test]
fn test_enter_dungeon_consumes_seed_and_banks_loot() {
    let config = BalanceConfig::default();
    let mut rng = create_test_rng();
    let mut state = GameState::new("Hero", &config, &mut rng);
    let seed_id = first_item_id(&state);
    state.assign_to_slot(0, seed_id).unwrap();
    let before = state.inventory.len();

    let (dungeon, result) = state.enter_dungeon(0, &config, &mut rng).unwrap();

    assert!(state.slot_item(0).is_none());
    assert!(state.inventory.get(seed_id).is_none());
    assert!(result.loot.is_empty());
    assert!(!dungeon.name.is_empty());
    if result.success() {
        assert!(state.inventory.len() > before);
        assert!(state.is_slot_unlocked(1));
        assert!(result.log.contains("Dungeon slot 2 unlocked!"));
    }
    assert!(result.log.lines().iter().any(|line| line.starts_with("Entered dungeon")));
}

#[test]
fn test_slot_errors() {
    let config = BalanceConfig::default();
    let mut rng = create_test_rng();
    let mut state = GameState::new("Hero", &config, &mut rng);
    let item_id = first_item_id(&state);

    assert_eq!(
        state.assign_to_slot(1, item_id),
        Err(SessionError::SlotLocked(1))
    );
    assert_eq!(
        state.assign_to_slot(9, item_id),
        Err(SessionError::SlotOutOfRange(9))
    );
    assert!(matches!(
        state.enter_dungeon(0, &config, &mut rng),
        Err(SessionError::SlotEmpty(0))
    ));
    assert_eq!(
        state.assign_to_slot(0, uuid::Uuid::nil()),
        Err(SessionError::ItemNotFound(uuid::Uuid::nil()))
    );
}

#[test]
fn test_equip_and_unequip_round_trip_through_inventory() {
    let config = BalanceConfig::default();
    let mut state = GameState::new("Hero", &config, &mut create_test_rng());
    let item_id = first_item_id(&state);
    let slot = state.inventory.get(item_id).unwrap().slot;
    let starting = state.inventory.len();

    state.equip_from_inventory(item_id).unwrap();
    assert_eq!(state.inventory.len(), starting - 1);
    assert_eq!(state.player.equipment.get(slot).map(|i| i.id), Some(item_id));

    state.unequip_to_inventory(slot).unwrap();
    assert_eq!(state.inventory.len(), starting);
    assert!(state.player.equipment.get(slot).is_none());
}

#[test]
fn test_session_survives_json_round_trip() {
    let config = BalanceConfig::default();
    let state = GameState::new("Hero", &config, &mut create_test_rng());

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}

// =============================================================================
// Balance config
// =============================================================================

#[test]
fn test_partial_json_overrides_keep_defaults() {
    let config = BalanceConfig::from_json_str(r#"{ "max_combat_rounds": 7, "map_width": 12 }"#)
        .unwrap();
    assert_eq!(config.max_combat_rounds, 7);
    assert_eq!(config.map_width, 12);
    assert_eq!(config.map_height, BalanceConfig::default().map_height);
}

#[test]
fn test_config_json_round_trip() {
    let config = BalanceConfig {
        enemy_loot_drop_chance: 0.75,
        ..BalanceConfig::default()
    };
    let json = config.to_json_string().unwrap();
    assert_eq!(BalanceConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = BalanceConfig::from_json_str(r#"{ "min_loot_count": 4, "max_loot_count": 4 }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = BalanceConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = BalanceConfig::load("/nonexistent/balance.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_smaller_map_from_config_drives_generation() {
    let config = BalanceConfig::from_json_str(r#"{ "map_width": 8, "map_height": 6 }"#).unwrap();
    let mut rng = create_test_rng();
    let dungeon = sigil_delve::generate_dungeon(&Signature::neutral(), &config, &mut rng);
    assert_eq!(dungeon.width(), 8);
    assert_eq!(dungeon.height(), 6);
}

// =============================================================================
// Batch simulation
// =============================================================================

#[test]
fn test_seeded_batches_match() {
    let balance = BalanceConfig::default();
    let player = Player::new("Tester");
    let sim = SimConfig {
        runs: 20,
        seed: Some(42),
        strategy: Strategy::Explore,
    };

    let a = run_batch(&player, &Signature::neutral(), &sim, &balance);
    let b = run_batch(&player, &Signature::neutral(), &sim, &balance);

    assert_eq!(a.runs, b.runs);
    assert_eq!(a.cleared + a.defeated + a.retreated, 20);
    assert!((0.0..=1.0).contains(&a.success_rate));
}

#[test]
fn test_quick_config_report_renders() {
    let balance = BalanceConfig::default();
    let player = Player::new("Tester");
    let sim = SimConfig {
        runs: 10,
        ..SimConfig::quick(Strategy::List)
    };

    let report = run_batch(&player, &Signature::neutral(), &sim, &balance);
    assert_eq!(report.num_runs, 10);
    assert!(report.to_text().contains("SIMULATION REPORT"));
    assert!(report.to_json().contains("\"num_runs\": 10"));
}
