use super::derived_stats::PlayerStats;
use crate::core::config::BalanceConfig;
use crate::items::{EquipmentSlot, Equipment, Item};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub equipment: Equipment,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            equipment: Equipment::new(),
        }
    }

    /// Equips `item`, returning the item it displaced.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.equipment.equip(item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.equipment.unequip(slot)
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.equipment.iter_equipped()
    }

    pub fn stats(&self, config: &BalanceConfig) -> PlayerStats {
        PlayerStats::calculate(&self.equipment, config)
    }
}
