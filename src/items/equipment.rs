use super::types::{EquipmentSlot, Item};
use serde::{Deserialize, Serialize};

/// Player equipment slots. At most one item per slot.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub shield: Option<Item>,
    pub helmet: Option<Item>,
    pub armor: Option<Item>,
    pub amulet: Option<Item>,
    pub ring: Option<Item>,
    pub boots: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.slot_ref(slot).as_ref()
    }

    /// Puts `item` into its own slot, returning whatever was there before.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.slot_mut(item.slot).replace(item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [
            &self.weapon,
            &self.shield,
            &self.helmet,
            &self.armor,
            &self.amulet,
            &self.ring,
            &self.boots,
        ]
        .into_iter()
        .filter_map(|item| item.as_ref())
    }

    pub fn equipped_count(&self) -> usize {
        self.iter_equipped().count()
    }

    fn slot_ref(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Shield => &self.shield,
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Amulet => &self.amulet,
            EquipmentSlot::Ring => &self.ring,
            EquipmentSlot::Boots => &self.boots,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Amulet => &mut self.amulet,
            EquipmentSlot::Ring => &mut self.ring,
            EquipmentSlot::Boots => &mut self.boots,
        }
    }
}
