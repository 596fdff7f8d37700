//! Grid-based auto-exploration: walk toward the nearest enemy, fight on
//! arrival, recover a little after every move.

use super::types::Dungeon;
use crate::character::{Player, PlayerStats};
use crate::combat::{
    affinity_bonus, resolve_fight, CombatLog, CombatStats, DungeonResult, RunDuration, RunOutcome,
};
use crate::core::config::BalanceConfig;
use crate::items::generate_themed_item;
use rand::seq::SliceRandom;
use rand::Rng;

const CARDINAL_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Result of trying to take one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    Moved,
    /// Already standing on the target enemy.
    Holding,
    Stuck,
    /// No engageable enemies left to walk toward.
    NoTargets,
}

/// Runs the explorer until the dungeon is cleared, the player dies, or the
/// step budget runs out.
///
/// An enemy that survives a full round-capped fight is abandoned: the
/// explorer never fights it again and walks on to the next target. When only
/// abandoned enemies are left the run ends as a retreat.
///
/// Affinity comes from equipped items only. Loot collected from enemies is
/// moved out of `dungeon.collected_loot` into the result; a defeat forfeits
/// it, a retreat keeps it, and a clear adds one legendary item on top.
pub fn explore_dungeon(
    dungeon: &mut Dungeon,
    player: &Player,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> DungeonResult {
    let mut log = CombatLog::new();
    let mut combat_stats = CombatStats {
        total_enemies: dungeon.enemies.len() as u32,
        ..CombatStats::default()
    };

    dungeon.place_player_at_start();

    let bonus = affinity_bonus(player.equipped_items(), &dungeon.signature);
    let stats = player.stats(config).with_affinity(bonus, config);
    let mut health = stats.max_health;

    log.push(format!("Affinity bonus: {:.0}%", bonus * 100.0));
    log.push(format!(
        "Entered dungeon with {} enemies!",
        dungeon.enemies.len()
    ));
    log.push(format!(
        "Player stats - HP: {}, ATK: {}, DEF: {}, SPD: {}",
        stats.max_health as i64, stats.attack as i64, stats.defense as i64, stats.speed as i64
    ));

    let mut steps = 0;
    let mut outcome = None;

    while steps < config.max_exploration_steps {
        steps += 1;

        let (x, y) = dungeon.player_position;
        if let Some(index) = dungeon.engageable_enemy_at(x, y) {
            let fight = resolve_fight(
                &stats,
                &mut health,
                &mut dungeon.enemies[index],
                config,
                &mut log,
                rng,
            );
            combat_stats.record(&fight);

            if fight.player_defeated {
                log.push("PLAYER DEFEATED! Dungeon run failed!");
                outcome = Some(RunOutcome::Defeated);
                break;
            }

            if fight.enemy_defeated {
                collect_enemy_loot(dungeon, index, config, &mut log, rng);
                if dungeon.all_enemies_defeated() {
                    log.push("All enemies defeated! Dungeon cleared!");
                    outcome = Some(RunOutcome::Cleared);
                    break;
                }
            } else {
                dungeon.mark_abandoned(index);
                log.push(format!("Leaving {} behind.", dungeon.enemies[index].name));
            }
        }

        match step_toward_nearest_enemy(dungeon, rng) {
            StepMove::NoTargets if dungeon.all_enemies_defeated() => {
                outcome = Some(RunOutcome::Cleared);
                break;
            }
            StepMove::NoTargets => {
                log.push("Only abandoned enemies remain. Retreating from the dungeon.");
                outcome = Some(RunOutcome::Retreated);
                break;
            }
            StepMove::Moved => {
                let (x, y) = dungeon.player_position;
                if let Some(tile) = dungeon.tile(x, y) {
                    log.push(format!(
                        "Moved to {} tile at ({}, {})",
                        tile.kind.name(),
                        x,
                        y
                    ));
                }
            }
            StepMove::Holding => {
                log.push("Holding position to fight.");
            }
            StepMove::Stuck => {
                log.push("Player is stuck! Cannot move to any adjacent tile.");
            }
        }

        health = (health + stats.max_health * config.passive_recovery_percent)
            .min(stats.max_health);
    }

    let outcome = outcome.unwrap_or_else(|| {
        log.push(format!(
            "Ran out of time after {steps} steps. Retreating from the dungeon."
        ));
        RunOutcome::Retreated
    });

    let mut loot = std::mem::take(&mut dungeon.collected_loot);
    let mut casualties = false;

    match outcome {
        RunOutcome::Cleared => {
            log.push(format!(
                "DUNGEON CLEARED! Defeated {}/{} enemies.",
                dungeon.defeated_count(),
                dungeon.enemies.len()
            ));
            casualties = health / stats.max_health < config.low_health_threshold;
            if casualties {
                log.push("Barely survived with heavy injuries!");
            }
            let treasure = generate_themed_item(&dungeon.signature, config, rng).into_legendary();
            log.push(format!("Found a legendary treasure: {}!", treasure.name));
            loot.push(treasure);
        }
        RunOutcome::Defeated => {
            if !loot.is_empty() {
                log.push(format!("Lost {} items while fleeing.", loot.len()));
            }
            loot.clear();
        }
        RunOutcome::Retreated => {}
    }

    log.push(format!(
        "Total damage dealt: {}, Total damage taken: {}",
        combat_stats.damage_dealt as i64, combat_stats.damage_taken as i64
    ));

    tracing::debug!(
        dungeon = %dungeon.name,
        ?outcome,
        steps,
        defeated = combat_stats.enemies_defeated,
        loot = loot.len(),
        "exploration finished"
    );

    DungeonResult {
        outcome,
        casualties,
        duration: RunDuration::Steps(steps),
        loot,
        log,
        player_stats: PlayerStats {
            remaining_health: health.max(0.0),
            ..stats
        },
        stats: combat_stats,
    }
}

/// Marks the enemy defeated and rolls its loot drop.
fn collect_enemy_loot(
    dungeon: &mut Dungeon,
    index: usize,
    config: &BalanceConfig,
    log: &mut CombatLog,
    rng: &mut impl Rng,
) {
    dungeon.mark_defeated(index);
    let enemy = &dungeon.enemies[index];

    if rng.gen::<f64>() < config.enemy_loot_drop_chance {
        let item = generate_themed_item(&enemy.signature, config, rng);
        log.push(format!("Found {} from defeated {}!", item.name, enemy.name));
        dungeon.collected_loot.push(item);
    } else {
        log.push(format!("No loot found from defeated {}.", enemy.name));
    }
}

/// Moves one cell toward the nearest engageable enemy (Manhattan distance, ties
/// go to the earliest enemy). Tries the x axis, then the y axis, then the
/// four cardinal directions in random order.
pub fn step_toward_nearest_enemy(dungeon: &mut Dungeon, rng: &mut impl Rng) -> StepMove {
    let (px, py) = dungeon.player_position;
    let Some(target) = dungeon
        .engageable_enemies()
        .map(|(_, enemy)| enemy.position)
        .min_by_key(|&(ex, ey)| ex.abs_diff(px) + ey.abs_diff(py))
    else {
        return StepMove::NoTargets;
    };

    if target == (px, py) {
        return StepMove::Holding;
    }

    let dx = direction(px, target.0);
    let dy = direction(py, target.1);

    if dx != 0 && dungeon.move_player(dx, 0) {
        return StepMove::Moved;
    }
    if dy != 0 && dungeon.move_player(0, dy) {
        return StepMove::Moved;
    }

    let mut directions = CARDINAL_DIRECTIONS;
    directions.shuffle(rng);
    for (dx, dy) in directions {
        if dungeon.move_player(dx, dy) {
            return StepMove::Moved;
        }
    }

    StepMove::Stuck
}

fn direction(from: usize, to: usize) -> i32 {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}
