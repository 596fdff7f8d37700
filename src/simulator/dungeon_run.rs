//! List-based run resolution: fight every enemy of a dungeon in order,
//! ignoring the grid.

use crate::character::{Player, PlayerStats};
use crate::combat::{
    affinity_bonus, resolve_fight, CombatLog, CombatStats, DungeonResult, RunDuration, RunOutcome,
};
use crate::core::config::BalanceConfig;
use crate::core::constants::CLEAN_RUN_LOOT_BONUS;
use crate::dungeon::Dungeon;
use crate::items::{generate_themed_item, Item};
use crate::signature::Signature;
use rand::Rng;

/// Resolves a whole dungeon as a sequence of fights.
///
/// The player survives the run unless their health reaches zero, in which
/// case no further enemies are engaged and no loot is awarded. Enemies that
/// outlast the round cap are marked abandoned, stay undefeated and are not
/// fought again. Between a win and the next fight the player recovers a share
/// of max health.
pub fn simulate_dungeon_run(
    player: &Player,
    dungeon: &mut Dungeon,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> DungeonResult {
    let mut log = CombatLog::new();
    let mut stats = CombatStats {
        total_enemies: dungeon.enemies.len() as u32,
        ..CombatStats::default()
    };

    let bonus = affinity_bonus(player.equipped_items(), &dungeon.signature);
    let player_stats = player.stats(config).with_affinity(bonus, config);
    let mut health = player_stats.max_health;

    log.push(format!(
        "Entered dungeon with {} enemies!",
        dungeon.enemies.len()
    ));
    log.push(format!(
        "Player stats - HP: {}, ATK: {}, DEF: {}, SPD: {}",
        player_stats.max_health as i64,
        player_stats.attack as i64,
        player_stats.defense as i64,
        player_stats.speed as i64
    ));

    let mut player_defeated = false;
    let enemy_count = dungeon.enemies.len();

    for index in 0..enemy_count {
        if dungeon.is_defeated(index) || dungeon.is_abandoned(index) {
            continue;
        }

        let fight = resolve_fight(
            &player_stats,
            &mut health,
            &mut dungeon.enemies[index],
            config,
            &mut log,
            rng,
        );
        stats.record(&fight);

        if fight.player_defeated {
            log.push("PLAYER DEFEATED! Dungeon run failed!");
            player_defeated = true;
            break;
        }

        if fight.timed_out {
            dungeon.mark_abandoned(index);
        }

        if fight.enemy_defeated {
            dungeon.mark_defeated(index);
            if index + 1 < enemy_count {
                let recovered = recover(&mut health, &player_stats, config.player_recovery_percent);
                log.push(format!(
                    "Recovered {} HP. Current HP: {}",
                    recovered as i64, health as i64
                ));
            }
        }
    }

    let outcome = if player_defeated {
        RunOutcome::Defeated
    } else {
        RunOutcome::Cleared
    };
    let casualties =
        !player_defeated && health / player_stats.max_health < config.low_health_threshold;

    let loot = if player_defeated {
        Vec::new()
    } else {
        log.push(format!(
            "DUNGEON CLEARED! Defeated {}/{} enemies.",
            stats.enemies_defeated, stats.total_enemies
        ));
        if casualties {
            log.push("Barely survived with heavy injuries!");
        }
        let loot = roll_run_loot(&dungeon.signature, casualties, config, rng);
        log.push(format!("Found {} items!", loot.len()));
        loot
    };

    log.push(format!(
        "Total damage dealt: {}, Total damage taken: {}",
        stats.damage_dealt as i64, stats.damage_taken as i64
    ));

    tracing::debug!(
        dungeon = %dungeon.name,
        ?outcome,
        defeated = stats.enemies_defeated,
        loot = loot.len(),
        "dungeon run simulated"
    );

    DungeonResult {
        outcome,
        casualties,
        duration: RunDuration::Minutes(dungeon.duration_minutes),
        loot,
        log,
        player_stats: PlayerStats {
            remaining_health: health.max(0.0),
            ..player_stats
        },
        stats,
    }
}

/// `min..max` items themed on the dungeon, plus a bonus for a clean run.
/// A range with `max <= min` always yields `min`.
pub fn roll_run_loot(
    signature: &Signature,
    casualties: bool,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> Vec<Item> {
    let max = config.max_loot_count.max(config.min_loot_count + 1);
    let mut count = rng.gen_range(config.min_loot_count..max);
    if !casualties {
        count += CLEAN_RUN_LOOT_BONUS;
    }
    (0..count)
        .map(|_| generate_themed_item(signature, config, rng))
        .collect()
}

/// Heals a percentage of max health, capped at max. Returns the amount healed.
fn recover(health: &mut f64, stats: &PlayerStats, percent: f64) -> f64 {
    let before = *health;
    *health = (*health + stats.max_health * percent).min(stats.max_health);
    *health - before
}
