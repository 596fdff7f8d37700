//! Dungeon data structures: tiles, the grid and run-time exploration state.

use crate::combat::Enemy;
use crate::core::constants::{SIGNATURE_HIGH_THRESHOLD, SIGNATURE_LOW_THRESHOLD};
use crate::items::Item;
use crate::signature::Signature;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Terrain of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Stone,
    Water,
    Lava,
    Ice,
    Grass,
    Sand,
    Crystal,
    Wood,
}

impl TileType {
    pub const ALL: [TileType; 8] = [
        TileType::Stone,
        TileType::Water,
        TileType::Lava,
        TileType::Ice,
        TileType::Grass,
        TileType::Sand,
        TileType::Crystal,
        TileType::Wood,
    ];

    /// Lava is the only terrain the player cannot enter.
    pub fn is_passable(&self) -> bool {
        !matches!(self, TileType::Lava)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileType::Stone => "Stone",
            TileType::Water => "Water",
            TileType::Lava => "Lava",
            TileType::Ice => "Ice",
            TileType::Grass => "Grass",
            TileType::Sand => "Sand",
            TileType::Crystal => "Crystal",
            TileType::Wood => "Wood",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            TileType::Stone => '.',
            TileType::Water => '~',
            TileType::Lava => '^',
            TileType::Ice => '*',
            TileType::Grass => '"',
            TileType::Sand => ':',
            TileType::Crystal => '+',
            TileType::Wood => '#',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileType,
    pub signature: Signature,
    pub x: usize,
    pub y: usize,
    pub passable: bool,
}

impl Tile {
    pub fn new(kind: TileType, signature: Signature, x: usize, y: usize) -> Self {
        Self {
            kind,
            signature,
            x,
            y,
            passable: kind.is_passable(),
        }
    }
}

/// A generated dungeon plus the state of the run exploring it.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub name: String,
    pub signature: Signature,
    /// 1-3
    pub difficulty: u8,
    pub duration_minutes: u32,
    /// Indexed `[y][x]`.
    pub grid: Vec<Vec<Tile>>,
    pub enemies: Vec<Enemy>,
    pub player_position: (usize, usize),
    /// Indices into `enemies`.
    pub defeated: BTreeSet<usize>,
    /// Enemies left behind after a fight hit the round cap.
    pub abandoned: BTreeSet<usize>,
    pub collected_loot: Vec<Item>,
}

impl Dungeon {
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        difficulty: u8,
        duration_minutes: u32,
        grid: Vec<Vec<Tile>>,
        enemies: Vec<Enemy>,
    ) -> Self {
        Self {
            name: name.into(),
            signature,
            difficulty,
            duration_minutes,
            grid,
            enemies,
            player_position: (0, 0),
            defeated: BTreeSet::new(),
            abandoned: BTreeSet::new(),
            collected_loot: Vec::new(),
        }
    }

    /// All-stone room sharing the dungeon's signature, named with the
    /// default descriptor thresholds. Handy for hand-built scenarios.
    pub fn open_floor(width: usize, height: usize, signature: Signature) -> Self {
        let grid = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| Tile::new(TileType::Stone, signature, x, y))
                    .collect()
            })
            .collect();
        let name = dungeon_name(&signature, SIGNATURE_HIGH_THRESHOLD, SIGNATURE_LOW_THRESHOLD);
        Self::new(name, signature, 1, 3, grid, Vec::new())
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.grid.get(y)?.get(x)
    }

    /// False outside the grid.
    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.tile(x, y).is_some_and(|tile| tile.passable)
    }

    pub fn passable_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|tile| tile.passable)
            .count()
    }

    pub fn is_defeated(&self, index: usize) -> bool {
        self.defeated.contains(&index)
    }

    pub fn mark_defeated(&mut self, index: usize) {
        self.defeated.insert(index);
    }

    pub fn is_abandoned(&self, index: usize) -> bool {
        self.abandoned.contains(&index)
    }

    pub fn mark_abandoned(&mut self, index: usize) {
        self.abandoned.insert(index);
    }

    /// Index of the undefeated enemy standing on `(x, y)`.
    pub fn living_enemy_at(&self, x: usize, y: usize) -> Option<usize> {
        self.living_enemies()
            .find(|(_, enemy)| enemy.position == (x, y))
            .map(|(index, _)| index)
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.defeated.contains(index))
    }

    /// Living enemies that have not been abandoned.
    pub fn engageable_enemies(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.living_enemies().filter(|(index, _)| !self.abandoned.contains(index))
    }

    pub fn engageable_enemy_at(&self, x: usize, y: usize) -> Option<usize> {
        self.engageable_enemies()
            .find(|(_, enemy)| enemy.position == (x, y))
            .map(|(index, _)| index)
    }

    pub fn defeated_count(&self) -> usize {
        self.defeated.len()
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.defeated.len() >= self.enemies.len()
    }

    /// Steps the player by `(dx, dy)` if the target cell is passable.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        let (x, y) = self.player_position;
        let Some(nx) = x.checked_add_signed(dx as isize) else {
            return false;
        };
        let Some(ny) = y.checked_add_signed(dy as isize) else {
            return false;
        };
        if !self.is_passable(nx, ny) {
            return false;
        }
        self.player_position = (nx, ny);
        true
    }

    /// First passable, enemy-free cell scanning rows top to bottom, then
    /// columns left to right. Falls back to the top-centre cell.
    pub fn place_player_at_start(&mut self) {
        let start = (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
            .find(|&(x, y)| self.is_passable(x, y) && self.living_enemy_at(x, y).is_none());
        self.player_position = start.unwrap_or((self.width() / 2, 0));
    }

    /// Debug map: `@` player, `E` living enemy, tile glyphs elsewhere.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for (y, row) in self.grid.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let glyph = if self.player_position == (x, y) {
                    '@'
                } else if self.living_enemy_at(x, y).is_some() {
                    'E'
                } else {
                    tile.kind.glyph()
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

/// "<Dominant descriptor> Dungeon", or plain "Dungeon" for a bland signature.
pub fn dungeon_name(signature: &Signature, high: f64, low: f64) -> String {
    match signature.dominant_descriptor(high, low) {
        Some(descriptor) => format!("{descriptor} Dungeon"),
        None => "Dungeon".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::EnemyKind;
    use crate::signature::DIMENSIONS;

    fn create_test_enemy(position: (usize, usize)) -> Enemy {
        Enemy::new(
            "Goblin",
            EnemyKind::Goblin,
            20.0,
            5.0,
            Signature::neutral(),
            position,
        )
    }

    #[test]
    fn test_only_lava_blocks() {
        for kind in TileType::ALL {
            assert_eq!(kind.is_passable(), kind != TileType::Lava);
        }
    }

    #[test]
    fn test_open_floor_dimensions() {
        let dungeon = Dungeon::open_floor(5, 4, Signature::neutral());
        assert_eq!(dungeon.width(), 5);
        assert_eq!(dungeon.height(), 4);
        assert_eq!(dungeon.passable_count(), 20);
        let tile = dungeon.tile(4, 3).unwrap();
        assert_eq!((tile.x, tile.y), (4, 3));
        assert!(dungeon.tile(5, 0).is_none());
        assert!(!dungeon.is_passable(0, 4));
    }

    #[test]
    fn test_move_player_respects_bounds_and_lava() {
        let mut dungeon = Dungeon::open_floor(3, 3, Signature::neutral());
        dungeon.grid[0][1] = Tile::new(TileType::Lava, Signature::neutral(), 1, 0);

        assert!(!dungeon.move_player(-1, 0));
        assert!(!dungeon.move_player(0, -1));
        assert!(!dungeon.move_player(1, 0));
        assert_eq!(dungeon.player_position, (0, 0));

        assert!(dungeon.move_player(0, 1));
        assert!(dungeon.move_player(1, 0));
        assert_eq!(dungeon.player_position, (1, 1));
    }

    #[test]
    fn test_defeated_enemies_are_not_living() {
        let mut dungeon = Dungeon::open_floor(3, 3, Signature::neutral());
        dungeon.enemies.push(create_test_enemy((1, 1)));
        dungeon.enemies.push(create_test_enemy((2, 2)));

        assert_eq!(dungeon.living_enemy_at(1, 1), Some(0));
        assert!(!dungeon.all_enemies_defeated());

        dungeon.mark_defeated(0);
        assert_eq!(dungeon.living_enemy_at(1, 1), None);
        assert_eq!(dungeon.living_enemies().count(), 1);

        dungeon.mark_defeated(1);
        assert!(dungeon.all_enemies_defeated());
        assert_eq!(dungeon.defeated_count(), 2);
    }

    #[test]
    fn test_abandoned_enemies_are_living_but_not_engageable() {
        let mut dungeon = Dungeon::open_floor(3, 3, Signature::neutral());
        dungeon.enemies.push(create_test_enemy((1, 1)));
        dungeon.enemies.push(create_test_enemy((2, 2)));

        dungeon.mark_abandoned(0);
        assert!(dungeon.is_abandoned(0));
        assert_eq!(dungeon.living_enemy_at(1, 1), Some(0));
        assert_eq!(dungeon.engageable_enemy_at(1, 1), None);
        assert_eq!(dungeon.engageable_enemies().count(), 1);
        assert!(!dungeon.all_enemies_defeated());
    }

    #[test]
    fn test_empty_dungeon_is_already_cleared() {
        let dungeon = Dungeon::open_floor(2, 2, Signature::neutral());
        assert!(dungeon.all_enemies_defeated());
    }

    #[test]
    fn test_start_skips_lava_and_enemies() {
        let mut dungeon = Dungeon::open_floor(3, 2, Signature::neutral());
        dungeon.grid[0][0] = Tile::new(TileType::Lava, Signature::neutral(), 0, 0);
        dungeon.enemies.push(create_test_enemy((1, 0)));
        dungeon.place_player_at_start();
        assert_eq!(dungeon.player_position, (2, 0));
    }

    #[test]
    fn test_start_falls_back_to_top_centre() {
        let mut dungeon = Dungeon::open_floor(4, 1, Signature::neutral());
        for x in 0..4 {
            dungeon.grid[0][x] = Tile::new(TileType::Lava, Signature::neutral(), x, 0);
        }
        dungeon.place_player_at_start();
        assert_eq!(dungeon.player_position, (2, 0));
    }

    #[test]
    fn test_render_ascii() {
        let mut dungeon = Dungeon::open_floor(3, 2, Signature::neutral());
        dungeon.grid[1][2] = Tile::new(TileType::Water, Signature::neutral(), 2, 1);
        dungeon.enemies.push(create_test_enemy((1, 1)));
        assert_eq!(dungeon.render_ascii(), "@..\n.E~\n");
    }

    #[test]
    fn test_dungeon_name_from_dominant_descriptor() {
        let mut values = [0.1; DIMENSIONS];
        values[2] = 0.9;
        values[0] = -0.6;
        let signature = Signature::from_array(values);
        assert_eq!(dungeon_name(&signature, 0.5, -0.5), "Wet Dungeon");
        assert_eq!(dungeon_name(&Signature::neutral(), 0.5, -0.5), "Dungeon");
    }
}
