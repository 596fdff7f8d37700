use super::types::{CombatLog, Enemy, FightOutcome};
use crate::character::PlayerStats;
use crate::core::config::BalanceConfig;
use crate::core::constants::*;
use rand::Rng;

/// Player strikes first when fast enough relative to the enemy's damage.
pub fn player_acts_first(stats: &PlayerStats, enemy: &Enemy, config: &BalanceConfig) -> bool {
    stats.speed >= enemy.damage * config.player_speed_advantage_factor
}

/// One player hit: attack reduced by the enemy's damage, at least 1, then
/// 80-120% variance, rounded.
pub fn roll_player_damage(
    stats: &PlayerStats,
    enemy: &Enemy,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> f64 {
    let base = (stats.attack - enemy.damage * config.enemy_defense_factor).max(MIN_HIT_DAMAGE);
    let variance = rng.gen_range(PLAYER_DAMAGE_VARIANCE_MIN..PLAYER_DAMAGE_VARIANCE_MAX);
    (base * variance).round()
}

/// One enemy hit: damage reduced by player defense, at least 1, then
/// 90-110% variance, rounded.
pub fn roll_enemy_damage(
    stats: &PlayerStats,
    enemy: &Enemy,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> f64 {
    let base = (enemy.damage - stats.defense * config.player_defense_factor).max(MIN_HIT_DAMAGE);
    let variance = rng.gen_range(ENEMY_DAMAGE_VARIANCE_MIN..ENEMY_DAMAGE_VARIANCE_MAX);
    (base * variance).round()
}

/// Fights `enemy` for at most `max_combat_rounds` rounds.
///
/// Each round the faster side strikes first; a round stops as soon as either
/// side drops to zero health. The player always gets one strike per round
/// unless they fall first. `health` is the player's current health and
/// `enemy.health` is reduced in place, so a timed-out enemy stays wounded.
pub fn resolve_fight(
    stats: &PlayerStats,
    health: &mut f64,
    enemy: &mut Enemy,
    config: &BalanceConfig,
    log: &mut CombatLog,
    rng: &mut impl Rng,
) -> FightOutcome {
    log.push(format!(
        "Encountered {}! (HP: {}, DMG: {})",
        enemy.name, enemy.health as i64, enemy.damage as i64
    ));

    let player_first = player_acts_first(stats, enemy, config);
    let mut outcome = FightOutcome::default();

    while outcome.rounds < config.max_combat_rounds {
        outcome.rounds += 1;

        if player_first && player_strike(stats, enemy, config, log, &mut outcome, rng) {
            break;
        }

        let damage = roll_enemy_damage(stats, enemy, config, rng);
        *health -= damage;
        outcome.damage_taken += damage;
        log.push(format!(
            "- {} attacks for {} damage! Player has {} HP left.",
            enemy.name,
            damage as i64,
            health.max(0.0) as i64
        ));
        if *health <= 0.0 {
            outcome.player_defeated = true;
            break;
        }

        if !player_first && player_strike(stats, enemy, config, log, &mut outcome, rng) {
            break;
        }
    }

    if !outcome.enemy_defeated && !outcome.player_defeated {
        outcome.timed_out = true;
        log.push("- Combat taking too long, moving on...");
    }

    tracing::trace!(
        enemy = %enemy.name,
        rounds = outcome.rounds,
        enemy_defeated = outcome.enemy_defeated,
        player_defeated = outcome.player_defeated,
        "fight resolved"
    );

    outcome
}

/// Returns true when the strike defeats the enemy.
fn player_strike(
    stats: &PlayerStats,
    enemy: &mut Enemy,
    config: &BalanceConfig,
    log: &mut CombatLog,
    outcome: &mut FightOutcome,
    rng: &mut impl Rng,
) -> bool {
    let damage = roll_player_damage(stats, enemy, config, rng);
    enemy.take_damage(damage);
    outcome.damage_dealt += damage;
    log.push(format!(
        "- Player attacks for {} damage! {} has {} HP left.",
        damage as i64,
        enemy.name,
        enemy.health.max(0.0) as i64
    ));
    if enemy.is_alive() {
        return false;
    }
    outcome.enemy_defeated = true;
    log.push(format!("- {} was defeated!", enemy.name));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::EnemyKind;
    use crate::signature::Signature;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn create_test_enemy(health: f64, damage: f64) -> Enemy {
        Enemy::new(
            "Test Goblin",
            EnemyKind::Goblin,
            health,
            damage,
            Signature::neutral(),
            (0, 0),
        )
    }

    #[test]
    fn test_player_damage_bounds() {
        let config = BalanceConfig::default();
        let stats = PlayerStats::base(&config);
        let enemy = create_test_enemy(20.0, 5.0);
        let mut rng = create_test_rng();
        // attack 10 - 5 * 0.2 = 9, times 0.8..1.2
        for _ in 0..500 {
            let damage = roll_player_damage(&stats, &enemy, &config, &mut rng);
            assert!((7.0..=11.0).contains(&damage));
            assert_eq!(damage, damage.round());
        }
    }

    #[test]
    fn test_enemy_damage_floor() {
        let config = BalanceConfig::default();
        let mut stats = PlayerStats::base(&config);
        stats.defense = 1000.0;
        let enemy = create_test_enemy(20.0, 5.0);
        let mut rng = create_test_rng();
        for _ in 0..100 {
            assert_eq!(roll_enemy_damage(&stats, &enemy, &config, &mut rng), 1.0);
        }
    }

    #[test]
    fn test_initiative() {
        let config = BalanceConfig::default();
        let stats = PlayerStats::base(&config);
        assert!(player_acts_first(&stats, &create_test_enemy(1.0, 20.0), &config));
        assert!(!player_acts_first(&stats, &create_test_enemy(1.0, 21.0), &config));
    }

    #[test]
    fn test_strong_player_wins() {
        let config = BalanceConfig::default();
        let stats = PlayerStats::base(&config);
        let mut health = stats.max_health;
        let mut enemy = create_test_enemy(20.0, 5.0);
        let mut log = CombatLog::new();

        let outcome = resolve_fight(
            &stats,
            &mut health,
            &mut enemy,
            &config,
            &mut log,
            &mut create_test_rng(),
        );

        assert!(outcome.enemy_defeated);
        assert!(!outcome.player_defeated);
        assert!(!outcome.timed_out);
        assert!(health > 0.0);
        assert!(!enemy.is_alive());
        assert!(outcome.damage_dealt >= 20.0);
        assert_eq!(outcome.damage_taken, stats.max_health - health);
        assert!(log.lines()[0].starts_with("Encountered Test Goblin!"));
        assert!(log.contains("Test Goblin was defeated!"));
    }

    #[test]
    fn test_overwhelming_enemy_strikes_first_and_wins() {
        let config = BalanceConfig::default();
        let stats = PlayerStats::base(&config);
        let mut health = stats.max_health;
        let mut enemy = create_test_enemy(1000.0, 500.0);
        let mut log = CombatLog::new();

        let outcome = resolve_fight(
            &stats,
            &mut health,
            &mut enemy,
            &config,
            &mut log,
            &mut create_test_rng(),
        );

        assert!(outcome.player_defeated);
        assert!(!outcome.enemy_defeated);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.damage_dealt, 0.0);
        assert!(health <= 0.0);
        assert!(log.contains("Player has 0 HP left."));
    }

    #[test]
    fn test_round_cap_times_out() {
        let config = BalanceConfig::default();
        let stats = PlayerStats::base(&config);
        let mut health = stats.max_health;
        let mut enemy = create_test_enemy(1_000_000.0, 1.0);
        let mut log = CombatLog::new();

        let outcome = resolve_fight(
            &stats,
            &mut health,
            &mut enemy,
            &config,
            &mut log,
            &mut create_test_rng(),
        );

        assert!(outcome.timed_out);
        assert!(!outcome.enemy_defeated);
        assert!(!outcome.player_defeated);
        assert_eq!(outcome.rounds, config.max_combat_rounds);
        assert!(enemy.health < 1_000_000.0);
        assert_eq!(log.lines().last().unwrap(), "- Combat taking too long, moving on...");
    }

    #[test]
    fn test_custom_round_cap_respected() {
        let config = BalanceConfig {
            max_combat_rounds: 3,
            ..BalanceConfig::default()
        };
        let stats = PlayerStats::base(&config);
        let mut health = stats.max_health;
        let mut enemy = create_test_enemy(1_000_000.0, 1.0);
        let outcome = resolve_fight(
            &stats,
            &mut health,
            &mut enemy,
            &config,
            &mut CombatLog::new(),
            &mut create_test_rng(),
        );
        assert_eq!(outcome.rounds, 3);
        assert!(outcome.timed_out);
    }
}
