use crate::character::PlayerStats;
use crate::items::Item;
use crate::signature::Signature;
use serde::{Deserialize, Serialize};

/// Enemy archetypes with their unscaled health and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Skeleton,
    Slime,
    Troll,
    Ghost,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Goblin,
        EnemyKind::Skeleton,
        EnemyKind::Slime,
        EnemyKind::Troll,
        EnemyKind::Ghost,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Skeleton => "Skeleton",
            EnemyKind::Slime => "Slime",
            EnemyKind::Troll => "Troll",
            EnemyKind::Ghost => "Ghost",
        }
    }

    pub fn base_health(&self) -> f64 {
        match self {
            EnemyKind::Goblin => 20.0,
            EnemyKind::Skeleton => 15.0,
            EnemyKind::Slime => 30.0,
            EnemyKind::Troll => 50.0,
            EnemyKind::Ghost => 25.0,
        }
    }

    pub fn base_damage(&self) -> f64 {
        match self {
            EnemyKind::Goblin => 5.0,
            EnemyKind::Skeleton => 7.0,
            EnemyKind::Slime => 3.0,
            EnemyKind::Troll => 8.0,
            EnemyKind::Ghost => 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    pub health: f64,
    pub damage: f64,
    pub signature: Signature,
    /// Grid cell `(x, y)`.
    pub position: (usize, usize),
}

impl Enemy {
    pub fn new(
        name: impl Into<String>,
        kind: EnemyKind,
        health: f64,
        damage: f64,
        signature: Signature,
        position: (usize, usize),
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            health,
            damage,
            signature,
            position,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.health -= amount;
    }
}

/// Ordered, human-readable narrative of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatLog {
    lines: Vec<String>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Result of one fight between the player and a single enemy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FightOutcome {
    pub enemy_defeated: bool,
    pub player_defeated: bool,
    /// Round cap reached with both sides standing.
    pub timed_out: bool,
    pub rounds: u32,
    pub damage_dealt: f64,
    pub damage_taken: f64,
}

/// Aggregate numbers for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatStats {
    pub enemies_defeated: u32,
    pub total_enemies: u32,
    pub damage_dealt: f64,
    pub damage_taken: f64,
}

impl CombatStats {
    pub fn record(&mut self, fight: &FightOutcome) {
        self.damage_dealt += fight.damage_dealt;
        self.damage_taken += fight.damage_taken;
        if fight.enemy_defeated {
            self.enemies_defeated += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every enemy dealt with.
    Cleared,
    /// Player health reached zero.
    Defeated,
    /// Step budget ran out with enemies still alive.
    Retreated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunDuration {
    Minutes(u32),
    Steps(u32),
}

impl RunDuration {
    pub fn amount(&self) -> u32 {
        match self {
            RunDuration::Minutes(n) | RunDuration::Steps(n) => *n,
        }
    }
}

/// Everything a finished run hands back to the caller.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DungeonResult {
    pub outcome: RunOutcome,
    /// Succeeded, but with remaining health under the low-health threshold.
    pub casualties: bool,
    pub duration: RunDuration,
    pub loot: Vec<Item>,
    pub log: CombatLog,
    pub player_stats: PlayerStats,
    pub stats: CombatStats,
}

impl DungeonResult {
    pub fn success(&self) -> bool {
        self.outcome == RunOutcome::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_kind_table() {
        assert_eq!(EnemyKind::Goblin.base_health(), 20.0);
        assert_eq!(EnemyKind::Goblin.base_damage(), 5.0);
        assert_eq!(EnemyKind::Troll.base_health(), 50.0);
        assert_eq!(EnemyKind::Slime.base_damage(), 3.0);
        assert_eq!(EnemyKind::ALL.len(), 5);
    }

    #[test]
    fn test_enemy_take_damage() {
        let mut enemy = Enemy::new(
            "Goblin",
            EnemyKind::Goblin,
            10.0,
            5.0,
            Signature::neutral(),
            (0, 0),
        );
        assert!(enemy.is_alive());
        enemy.take_damage(4.0);
        assert_eq!(enemy.health, 6.0);
        enemy.take_damage(6.0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_combat_log_is_ordered() {
        let mut log = CombatLog::new();
        assert!(log.is_empty());
        log.push("first");
        log.push(String::from("second"));
        assert_eq!(log.lines(), ["first", "second"]);
        assert!(log.contains("sec"));
        assert!(!log.contains("third"));
    }

    #[test]
    fn test_combat_stats_record() {
        let mut stats = CombatStats::default();
        stats.record(&FightOutcome {
            enemy_defeated: true,
            damage_dealt: 12.0,
            damage_taken: 3.0,
            rounds: 2,
            ..Default::default()
        });
        stats.record(&FightOutcome {
            timed_out: true,
            damage_dealt: 5.0,
            ..Default::default()
        });
        assert_eq!(stats.enemies_defeated, 1);
        assert_eq!(stats.damage_dealt, 17.0);
        assert_eq!(stats.damage_taken, 3.0);
    }

    #[test]
    fn test_run_duration_amount() {
        assert_eq!(RunDuration::Minutes(4).amount(), 4);
        assert_eq!(RunDuration::Steps(37).amount(), 37);
    }
}
