//! Procedural dungeon generation from a seed signature.

use super::types::{dungeon_name, Dungeon, Tile, TileType};
use crate::combat::{Enemy, EnemyKind};
use crate::core::config::BalanceConfig;
use crate::core::constants::*;
use crate::signature::Signature;
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds a complete dungeon themed on `seed`.
///
/// The dungeon's own signature is a close variant of the seed. Tiles are
/// classified from smoothed noise, a top-to-bottom path is forced open, and
/// enemies are scattered over passable cells.
pub fn generate_dungeon(seed: &Signature, config: &BalanceConfig, rng: &mut impl Rng) -> Dungeon {
    let signature = seed.similar(config.dungeon_signature_variance, rng);
    let difficulty = rng.gen_range(DUNGEON_MIN_DIFFICULTY..=DUNGEON_MAX_DIFFICULTY);
    let duration_minutes =
        rng.gen_range(DUNGEON_MIN_DURATION_MINUTES..=DUNGEON_MAX_DURATION_MINUTES);

    let noise = generate_noise(config.map_width, config.map_height, rng);
    let mut grid = build_tiles(&signature, &noise, config);
    carve_path(&mut grid, config.path_drift_chance, rng);

    let name = dungeon_name(
        &signature,
        config.signature_high_threshold,
        config.signature_low_threshold,
    );
    let mut dungeon = Dungeon::new(name, signature, difficulty, duration_minutes, grid, Vec::new());
    populate_enemies(&mut dungeon, config, rng);

    tracing::debug!(
        name = %dungeon.name,
        difficulty,
        enemies = dungeon.enemies.len(),
        passable = dungeon.passable_count(),
        "generated dungeon"
    );

    dungeon
}

/// Uniform `[-1, 1]` noise smoothed with a 3x3 box blur. Border cells
/// average only the neighbours that exist.
pub fn generate_noise(width: usize, height: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    let raw: Vec<Vec<f64>> = (0..height)
        .map(|_| (0..width).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect())
        .collect();
    box_blur(&raw)
}

fn box_blur(raw: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let height = raw.len();
    let width = raw.first().map_or(0, Vec::len);
    let mut smoothed = vec![vec![0.0; width]; height];

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            let mut count = 0;
            for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                    sum += raw[ny][nx];
                    count += 1;
                }
            }
            smoothed[y][x] = sum / count as f64;
        }
    }

    smoothed
}

/// Ordered classification; the first matching rule wins.
pub fn classify_tile(signature: &Signature) -> TileType {
    let temperature = signature.temperature();
    let wetness = signature.wetness();
    let resonance = signature.resonance();

    if temperature > 0.5 && wetness < -0.3 {
        TileType::Lava
    } else if temperature < -0.5 && wetness > 0.3 {
        TileType::Ice
    } else if wetness > 0.5 {
        TileType::Water
    } else if temperature > 0.0 && wetness > 0.0 {
        TileType::Grass
    } else if temperature > 0.3 && wetness < 0.0 {
        TileType::Sand
    } else if resonance > 0.5 {
        TileType::Crystal
    } else if resonance < -0.5 {
        TileType::Wood
    } else {
        TileType::Stone
    }
}

fn build_tiles(
    signature: &Signature,
    noise: &[Vec<f64>],
    config: &BalanceConfig,
) -> Vec<Vec<Tile>> {
    noise
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, value)| {
                    let tile_signature = signature.shifted(value * config.tile_noise_scale);
                    Tile::new(classify_tile(&tile_signature), tile_signature, x, y)
                })
                .collect()
        })
        .collect()
}

/// Forces a walkable column from the top row to the bottom row, starting at
/// the centre and drifting sideways. The path never touches the outer
/// columns when the grid is at least three wide.
pub fn carve_path(grid: &mut [Vec<Tile>], drift_chance: f64, rng: &mut impl Rng) {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if width == 0 {
        return;
    }

    let mut column = width / 2;
    for (y, row) in grid.iter_mut().enumerate() {
        let tile = &mut row[column];
        tile.kind = TileType::Stone;
        tile.passable = true;

        if y + 1 < height && rng.gen::<f64>() < drift_chance {
            let shift: isize = rng.gen_range(-1..=1);
            column = drift_column(column, shift, width);
        }
    }
}

fn drift_column(column: usize, shift: isize, width: usize) -> usize {
    if width < 3 {
        return column;
    }
    column.saturating_add_signed(shift).clamp(1, width - 2)
}

/// Places `base + per_difficulty * difficulty` enemies on shuffled passable
/// cells, or as many as there is room for.
fn populate_enemies(dungeon: &mut Dungeon, config: &BalanceConfig, rng: &mut impl Rng) {
    let wanted = (config.base_enemy_count
        + config.enemies_per_difficulty * u32::from(dungeon.difficulty)) as usize;

    let mut open: Vec<(usize, usize)> = dungeon
        .grid
        .iter()
        .flatten()
        .filter(|tile| tile.passable)
        .map(|tile| (tile.x, tile.y))
        .collect();
    open.shuffle(rng);

    let enemies: Vec<Enemy> = open
        .into_iter()
        .take(wanted)
        .map(|(x, y)| {
            let tile = &dungeon.grid[y][x];
            generate_enemy_for_tile(tile, &dungeon.signature, config, rng)
        })
        .collect();
    dungeon.enemies = enemies;
}

/// Rolls an enemy that lives on `tile`.
///
/// The enemy's signature stays close to the tile's. Its name takes the first
/// strong descriptor of that signature, and its stats scale from 80% to 120%
/// of the archetype as its signature approaches the dungeon's.
pub fn generate_enemy_for_tile(
    tile: &Tile,
    dungeon_signature: &Signature,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> Enemy {
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    let signature = tile.signature.similar(config.enemy_signature_variance, rng);

    let name = match signature.first_descriptor(
        config.signature_high_threshold,
        config.signature_low_threshold,
    ) {
        Some(adjective) => format!("{adjective} {}", kind.name()),
        None => kind.name().to_string(),
    };

    let scale = enemy_stat_scale(&signature, dungeon_signature);
    Enemy::new(
        name,
        kind,
        kind.base_health() * scale,
        kind.base_damage() * scale,
        signature,
        (tile.x, tile.y),
    )
}

/// `0.8 + 0.4 * (1 - distance / 4)`.
pub fn enemy_stat_scale(enemy: &Signature, dungeon: &Signature) -> f64 {
    let closeness = 1.0 - enemy.distance(dungeon) / ENEMY_SCALING_DISTANCE_DIVISOR;
    ENEMY_SCALING_BASE + ENEMY_SCALING_SPAN * closeness
}
