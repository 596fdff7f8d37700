//! Balance configuration passed into generation and run resolution.
//!
//! Every tunable lives here as a named field whose default comes from
//! [`crate::core::constants`]. Callers build one `BalanceConfig` (usually
//! `Default::default()` or a JSON override file) and thread it through
//! `generate_dungeon`, `explore_dungeon` and `simulate_dungeon_run`.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    // Player
    pub base_player_health: f64,
    pub base_player_attack: f64,
    pub base_player_defense: f64,
    pub base_player_speed: f64,

    // Combat
    /// Fraction of max health restored between list-based fights
    pub player_recovery_percent: f64,
    /// Fraction of max health restored after each exploration move
    pub passive_recovery_percent: f64,
    pub affinity_attack_bonus: f64,
    pub affinity_defense_bonus: f64,
    pub affinity_speed_bonus: f64,
    pub player_speed_advantage_factor: f64,
    pub enemy_defense_factor: f64,
    pub player_defense_factor: f64,
    pub low_health_threshold: f64,
    pub max_combat_rounds: u32,

    // Dungeon
    pub map_width: usize,
    pub map_height: usize,
    pub max_exploration_steps: u32,
    pub dungeon_signature_variance: f64,
    pub tile_noise_scale: f64,
    pub path_drift_chance: f64,
    pub enemy_signature_variance: f64,
    pub base_enemy_count: u32,
    pub enemies_per_difficulty: u32,
    pub enemy_loot_drop_chance: f64,

    // Signatures and items
    pub signature_high_threshold: f64,
    pub signature_low_threshold: f64,
    pub default_item_variance: f64,
    /// Inclusive lower bound of the base loot roll
    pub min_loot_count: u32,
    /// Exclusive upper bound of the base loot roll
    pub max_loot_count: u32,

    // Session
    pub inventory_capacity: usize,
    pub dungeon_slots: usize,
    pub initial_unlocked_slots: usize,
    pub starter_item_count: usize,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            base_player_health: BASE_PLAYER_HEALTH,
            base_player_attack: BASE_PLAYER_ATTACK,
            base_player_defense: BASE_PLAYER_DEFENSE,
            base_player_speed: BASE_PLAYER_SPEED,
            player_recovery_percent: PLAYER_RECOVERY_PERCENT,
            passive_recovery_percent: PASSIVE_RECOVERY_PERCENT,
            affinity_attack_bonus: AFFINITY_ATTACK_BONUS,
            affinity_defense_bonus: AFFINITY_DEFENSE_BONUS,
            affinity_speed_bonus: AFFINITY_SPEED_BONUS,
            player_speed_advantage_factor: PLAYER_SPEED_ADVANTAGE_FACTOR,
            enemy_defense_factor: ENEMY_DEFENSE_FACTOR,
            player_defense_factor: PLAYER_DEFENSE_FACTOR,
            low_health_threshold: LOW_HEALTH_THRESHOLD,
            max_combat_rounds: MAX_COMBAT_ROUNDS,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            max_exploration_steps: MAX_EXPLORATION_STEPS,
            dungeon_signature_variance: DUNGEON_SIGNATURE_VARIANCE,
            tile_noise_scale: TILE_NOISE_SCALE,
            path_drift_chance: PATH_DRIFT_CHANCE,
            enemy_signature_variance: ENEMY_SIGNATURE_VARIANCE,
            base_enemy_count: BASE_ENEMY_COUNT,
            enemies_per_difficulty: ENEMIES_PER_DIFFICULTY,
            enemy_loot_drop_chance: ENEMY_LOOT_DROP_CHANCE,
            signature_high_threshold: SIGNATURE_HIGH_THRESHOLD,
            signature_low_threshold: SIGNATURE_LOW_THRESHOLD,
            default_item_variance: DEFAULT_ITEM_VARIANCE,
            min_loot_count: MIN_LOOT_COUNT,
            max_loot_count: MAX_LOOT_COUNT,
            inventory_capacity: DEFAULT_INVENTORY_CAPACITY,
            dungeon_slots: DEFAULT_DUNGEON_SLOTS,
            initial_unlocked_slots: INITIAL_UNLOCKED_DUNGEON_SLOTS,
            starter_item_count: STARTER_ITEM_COUNT,
        }
    }
}

impl BalanceConfig {
    /// Parses a (possibly partial) JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON balance file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded balance config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the relationships between fields that generation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < 3 {
            return Err(invalid(format!(
                "map_width must be at least 3, got {}",
                self.map_width
            )));
        }
        if self.map_height == 0 {
            return Err(invalid("map_height must be at least 1".to_string()));
        }
        if self.min_loot_count >= self.max_loot_count {
            return Err(invalid(format!(
                "min_loot_count ({}) must be below max_loot_count ({})",
                self.min_loot_count, self.max_loot_count
            )));
        }
        if self.max_combat_rounds == 0 {
            return Err(invalid("max_combat_rounds must be at least 1".to_string()));
        }
        if self.max_exploration_steps == 0 {
            return Err(invalid(
                "max_exploration_steps must be at least 1".to_string(),
            ));
        }
        if self.signature_low_threshold >= self.signature_high_threshold {
            return Err(invalid(
                "signature_low_threshold must be below signature_high_threshold".to_string(),
            ));
        }
        if self.initial_unlocked_slots > self.dungeon_slots {
            return Err(invalid(format!(
                "initial_unlocked_slots ({}) exceeds dungeon_slots ({})",
                self.initial_unlocked_slots, self.dungeon_slots
            )));
        }

        let fractions = [
            ("player_recovery_percent", self.player_recovery_percent),
            ("passive_recovery_percent", self.passive_recovery_percent),
            ("low_health_threshold", self.low_health_threshold),
            ("path_drift_chance", self.path_drift_chance),
            ("enemy_loot_drop_chance", self.enemy_loot_drop_chance),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }

        let variances = [
            ("dungeon_signature_variance", self.dungeon_signature_variance),
            ("tile_noise_scale", self.tile_noise_scale),
            ("enemy_signature_variance", self.enemy_signature_variance),
            ("default_item_variance", self.default_item_variance),
        ];
        for (name, value) in variances {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}
