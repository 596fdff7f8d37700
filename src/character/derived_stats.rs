use crate::core::config::BalanceConfig;
use crate::items::Equipment;
use serde::{Deserialize, Serialize};

/// Combat stats derived from base values plus equipped items.
///
/// Never stored on the player: recompute with
/// [`PlayerStats::calculate`] whenever equipment may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub max_health: f64,
    pub remaining_health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
}

impl PlayerStats {
    /// Base stats with no equipment, at full health.
    pub fn base(config: &BalanceConfig) -> Self {
        Self {
            max_health: config.base_player_health,
            remaining_health: config.base_player_health,
            attack: config.base_player_attack,
            defense: config.base_player_defense,
            speed: config.base_player_speed,
        }
    }

    /// Base stats plus every equipped item's stat bonus.
    pub fn calculate(equipment: &Equipment, config: &BalanceConfig) -> Self {
        let mut stats = Self::base(config);
        for item in equipment.iter_equipped() {
            let bonus = item.stat_bonus(config);
            stats.attack += bonus.attack;
            stats.defense += bonus.defense;
            stats.speed += bonus.speed;
        }
        stats
    }

    /// Scales attack, defense and speed by the affinity bonus.
    /// Health is untouched.
    pub fn with_affinity(mut self, bonus: f64, config: &BalanceConfig) -> Self {
        self.attack *= 1.0 + bonus * config.affinity_attack_bonus;
        self.defense *= 1.0 + bonus * config.affinity_defense_bonus;
        self.speed *= 1.0 + bonus * config.affinity_speed_bonus;
        self
    }

    /// Remaining health as a fraction of max health (0 when max is 0).
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            self.remaining_health / self.max_health
        }
    }
}
