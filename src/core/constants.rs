// Game constants. Values that have a `BalanceConfig` field are only the
// defaults for that field and are read through the config. The rest (damage
// variance, per-power item stat rates, difficulty and duration ranges, enemy
// scaling, clean-run loot bonus, legendary prefix) are fixed rules read
// directly where they apply.

// Player base stats
pub const BASE_PLAYER_HEALTH: f64 = 100.0;
pub const BASE_PLAYER_ATTACK: f64 = 10.0;
pub const BASE_PLAYER_DEFENSE: f64 = 5.0;
pub const BASE_PLAYER_SPEED: f64 = 10.0;

// Item stat contributions (fractions of item power)
pub const ITEM_ATTACK_PER_POWER: f64 = 0.6;
pub const ITEM_DEFENSE_PER_POWER: f64 = 0.4;
pub const ITEM_HOT_ATTACK_PER_POWER: f64 = 0.2;
pub const ITEM_COLD_DEFENSE_PER_POWER: f64 = 0.2;
pub const ITEM_HARD_DEFENSE_PER_POWER: f64 = 0.3;
pub const ITEM_SOFT_SPEED_PER_POWER: f64 = 0.3;

// Recovery
pub const PLAYER_RECOVERY_PERCENT: f64 = 0.15;
pub const PASSIVE_RECOVERY_PERCENT: f64 = 0.05;

// Affinity multipliers: stat *= 1 + bonus * scale
pub const AFFINITY_ATTACK_BONUS: f64 = 0.5;
pub const AFFINITY_DEFENSE_BONUS: f64 = 0.3;
pub const AFFINITY_SPEED_BONUS: f64 = 0.2;

// Round resolution
pub const PLAYER_SPEED_ADVANTAGE_FACTOR: f64 = 0.5;
pub const ENEMY_DEFENSE_FACTOR: f64 = 0.2;
pub const PLAYER_DEFENSE_FACTOR: f64 = 0.5;
pub const PLAYER_DAMAGE_VARIANCE_MIN: f64 = 0.8;
pub const PLAYER_DAMAGE_VARIANCE_MAX: f64 = 1.2;
pub const ENEMY_DAMAGE_VARIANCE_MIN: f64 = 0.9;
pub const ENEMY_DAMAGE_VARIANCE_MAX: f64 = 1.1;
pub const MIN_HIT_DAMAGE: f64 = 1.0;
pub const LOW_HEALTH_THRESHOLD: f64 = 0.3;
pub const MAX_COMBAT_ROUNDS: u32 = 20;

// Dungeon layout
pub const DEFAULT_MAP_WIDTH: usize = 20;
pub const DEFAULT_MAP_HEIGHT: usize = 15;
pub const MAX_EXPLORATION_STEPS: u32 = 100;
pub const DUNGEON_MIN_DIFFICULTY: u8 = 1;
pub const DUNGEON_MAX_DIFFICULTY: u8 = 3;
pub const DUNGEON_MIN_DURATION_MINUTES: u32 = 3;
pub const DUNGEON_MAX_DURATION_MINUTES: u32 = 5;

// Dungeon generation
pub const DUNGEON_SIGNATURE_VARIANCE: f64 = 0.2;
pub const TILE_NOISE_SCALE: f64 = 0.4;
pub const PATH_DRIFT_CHANCE: f64 = 0.4;
pub const ENEMY_SIGNATURE_VARIANCE: f64 = 0.3;
pub const BASE_ENEMY_COUNT: u32 = 3;
pub const ENEMIES_PER_DIFFICULTY: u32 = 2;
pub const ENEMY_LOOT_DROP_CHANCE: f64 = 0.5;

// Enemy theme scaling: multiplier = BASE + SPAN * (1 - distance / DIVISOR)
pub const ENEMY_SCALING_BASE: f64 = 0.8;
pub const ENEMY_SCALING_SPAN: f64 = 0.4;
pub const ENEMY_SCALING_DISTANCE_DIVISOR: f64 = 4.0;

// Signature descriptors
pub const SIGNATURE_HIGH_THRESHOLD: f64 = 0.5;
pub const SIGNATURE_LOW_THRESHOLD: f64 = -0.5;
pub const DEFAULT_ITEM_VARIANCE: f64 = 0.2;

// Loot (max is exclusive)
pub const MIN_LOOT_COUNT: u32 = 1;
pub const MAX_LOOT_COUNT: u32 = 4;
pub const CLEAN_RUN_LOOT_BONUS: u32 = 2;
pub const LEGENDARY_PREFIX: &str = "Legendary";

// Session
pub const DEFAULT_INVENTORY_CAPACITY: usize = 20;
pub const DEFAULT_DUNGEON_SLOTS: usize = 3;
pub const INITIAL_UNLOCKED_DUNGEON_SLOTS: usize = 1;
pub const STARTER_ITEM_COUNT: usize = 3;
