//! The play session: a player, their inventory and the dungeon slots items
//! are placed in to open dungeons.

use super::config::BalanceConfig;
use super::error::SessionError;
use crate::character::Player;
use crate::combat::DungeonResult;
use crate::dungeon::{explore_dungeon, generate_dungeon, Dungeon};
use crate::items::{generate_random_item, EquipmentSlot, Inventory, Item};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Main game state: everything the player owns between dungeon runs.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub inventory: Inventory,
    /// An item placed in a slot seeds the next dungeon opened from it.
    pub dungeon_slots: Vec<Option<Item>>,
    /// Slots `0..unlocked_slots` accept items.
    pub unlocked_slots: usize,
}

impl GameState {
    /// Fresh session with a handful of random starter items in the inventory.
    pub fn new(name: impl Into<String>, config: &BalanceConfig, rng: &mut impl Rng) -> Self {
        let mut inventory = Inventory::new(config.inventory_capacity);
        for _ in 0..config.starter_item_count {
            if inventory.add(generate_random_item(config, rng)).is_err() {
                break;
            }
        }

        Self {
            player: Player::new(name),
            inventory,
            dungeon_slots: (0..config.dungeon_slots).map(|_| None).collect(),
            unlocked_slots: config.initial_unlocked_slots.min(config.dungeon_slots),
        }
    }

    pub fn slot_item(&self, slot: usize) -> Option<&Item> {
        self.dungeon_slots.get(slot)?.as_ref()
    }

    pub fn is_slot_unlocked(&self, slot: usize) -> bool {
        slot < self.unlocked_slots
    }

    /// Unlocks one more slot, if any are left. Returns whether one was unlocked.
    pub fn unlock_next_slot(&mut self) -> bool {
        if self.unlocked_slots >= self.dungeon_slots.len() {
            return false;
        }
        self.unlocked_slots += 1;
        true
    }

    /// Moves an inventory item into an unlocked slot. Whatever occupied the
    /// slot takes the item's place in the inventory.
    pub fn assign_to_slot(&mut self, slot: usize, item_id: Uuid) -> Result<(), SessionError> {
        self.check_slot(slot)?;
        let item = match self.dungeon_slots[slot].take() {
            Some(previous) => self.inventory.swap(item_id, previous).map_err(|previous| {
                self.dungeon_slots[slot] = Some(previous);
                SessionError::ItemNotFound(item_id)
            })?,
            None => self
                .inventory
                .remove(item_id)
                .ok_or(SessionError::ItemNotFound(item_id))?,
        };
        self.dungeon_slots[slot] = Some(item);
        Ok(())
    }

    /// Returns a slot's item to the inventory. On a full inventory the item
    /// stays in the slot.
    pub fn clear_slot(&mut self, slot: usize) -> Result<(), SessionError> {
        if slot >= self.dungeon_slots.len() {
            return Err(SessionError::SlotOutOfRange(slot));
        }
        let item = self.dungeon_slots[slot]
            .take()
            .ok_or(SessionError::SlotEmpty(slot))?;
        self.inventory.add(item).map_err(|item| {
            self.dungeon_slots[slot] = Some(item);
            SessionError::InventoryFull
        })
    }

    /// Equips an inventory item; the item it displaces takes its place in
    /// the inventory.
    pub fn equip_from_inventory(&mut self, item_id: Uuid) -> Result<(), SessionError> {
        let slot = self
            .inventory
            .get(item_id)
            .ok_or(SessionError::ItemNotFound(item_id))?
            .slot;

        let item = match self.player.unequip(slot) {
            Some(displaced) => self.inventory.swap(item_id, displaced).map_err(|displaced| {
                self.player.equip(displaced);
                SessionError::ItemNotFound(item_id)
            })?,
            None => self
                .inventory
                .remove(item_id)
                .ok_or(SessionError::ItemNotFound(item_id))?,
        };
        self.player.equip(item);
        Ok(())
    }

    /// Moves an equipped item to the inventory. On a full inventory the item
    /// stays equipped.
    pub fn unequip_to_inventory(&mut self, slot: EquipmentSlot) -> Result<(), SessionError> {
        let Some(item) = self.player.unequip(slot) else {
            return Ok(());
        };
        self.inventory.add(item).map_err(|item| {
            self.player.equip(item);
            SessionError::InventoryFull
        })
    }

    /// Consumes the item in `slot`, generates a dungeon from its signature and
    /// explores it.
    ///
    /// Loot moves into the inventory; `result.loot` is empty afterwards and the
    /// log records where each item went. Items that do not fit are dropped.
    /// A successful run unlocks the next slot.
    pub fn enter_dungeon(
        &mut self,
        slot: usize,
        config: &BalanceConfig,
        rng: &mut impl Rng,
    ) -> Result<(Dungeon, DungeonResult), SessionError> {
        self.check_slot(slot)?;
        let seed_item = self.dungeon_slots[slot]
            .take()
            .ok_or(SessionError::SlotEmpty(slot))?;

        let mut dungeon = generate_dungeon(&seed_item.signature, config, rng);
        let mut result = explore_dungeon(&mut dungeon, &self.player, config, rng);

        for item in result.loot.drain(..) {
            let name = item.name.clone();
            match self.inventory.add(item) {
                Ok(()) => result.log.push(format!("Added {name} to inventory.")),
                Err(_) => result
                    .log
                    .push(format!("Inventory full! {name} was left behind.")),
            }
        }

        if result.success() && self.unlock_next_slot() {
            result
                .log
                .push(format!("Dungeon slot {} unlocked!", self.unlocked_slots));
        }

        tracing::info!(
            slot,
            seed_item = %seed_item.name,
            dungeon = %dungeon.name,
            outcome = ?result.outcome,
            inventory = self.inventory.len(),
            "dungeon run finished"
        );

        Ok((dungeon, result))
    }

    fn check_slot(&self, slot: usize) -> Result<(), SessionError> {
        if slot >= self.dungeon_slots.len() {
            return Err(SessionError::SlotOutOfRange(slot));
        }
        if !self.is_slot_unlocked(slot) {
            return Err(SessionError::SlotLocked(slot));
        }
        Ok(())
    }
}
