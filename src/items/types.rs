use crate::core::config::BalanceConfig;
use crate::core::constants::{
    ITEM_ATTACK_PER_POWER, ITEM_COLD_DEFENSE_PER_POWER, ITEM_DEFENSE_PER_POWER,
    ITEM_HARD_DEFENSE_PER_POWER, ITEM_HOT_ATTACK_PER_POWER, ITEM_SOFT_SPEED_PER_POWER,
    LEGENDARY_PREFIX,
};
use crate::signature::Signature;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Helmet,
    Armor,
    Amulet,
    Ring,
    Boots,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Shield,
        EquipmentSlot::Helmet,
        EquipmentSlot::Armor,
        EquipmentSlot::Amulet,
        EquipmentSlot::Ring,
        EquipmentSlot::Boots,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Shield => "Shield",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Amulet => "Amulet",
            EquipmentSlot::Ring => "Ring",
            EquipmentSlot::Boots => "Boots",
        }
    }
}

/// Item archetype. Base power and slot are fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Sword,
    Shield,
    Helmet,
    Armor,
    Amulet,
    Ring,
    Boots,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Sword,
        ItemKind::Shield,
        ItemKind::Helmet,
        ItemKind::Armor,
        ItemKind::Amulet,
        ItemKind::Ring,
        ItemKind::Boots,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Sword => "Sword",
            ItemKind::Shield => "Shield",
            ItemKind::Helmet => "Helmet",
            ItemKind::Armor => "Armor",
            ItemKind::Amulet => "Amulet",
            ItemKind::Ring => "Ring",
            ItemKind::Boots => "Boots",
        }
    }

    pub fn base_power(&self) -> u32 {
        match self {
            ItemKind::Sword => 10,
            ItemKind::Shield => 8,
            ItemKind::Helmet => 6,
            ItemKind::Armor => 12,
            ItemKind::Amulet => 5,
            ItemKind::Ring => 4,
            ItemKind::Boots => 7,
        }
    }

    pub fn slot(&self) -> EquipmentSlot {
        match self {
            ItemKind::Sword => EquipmentSlot::Weapon,
            ItemKind::Shield => EquipmentSlot::Shield,
            ItemKind::Helmet => EquipmentSlot::Helmet,
            ItemKind::Armor => EquipmentSlot::Armor,
            ItemKind::Amulet => EquipmentSlot::Amulet,
            ItemKind::Ring => EquipmentSlot::Ring,
            ItemKind::Boots => EquipmentSlot::Boots,
        }
    }
}

/// Flat stat contributions an equipped item adds to the player.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBonus {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
}

/// A piece of equipment or loot.
///
/// Items are deliberately not `Clone`: each one lives in exactly one
/// container (inventory, equipment slot, dungeon slot, loot list) and moves
/// between them.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub kind: ItemKind,
    pub slot: EquipmentSlot,
    pub power: u32,
    pub signature: Signature,
}

impl Item {
    /// Item of `kind` with its default slot and an explicit power. Generators
    /// derive `power` from the signature; this constructor is for callers
    /// that already know it.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        kind: ItemKind,
        power: u32,
        signature: Signature,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            slot: kind.slot(),
            power,
            signature,
        }
    }

    /// Attack/defense/speed this item adds when equipped.
    ///
    /// Every item adds a share of its power to attack and defense; strongly
    /// hot or cold items lean further into attack or defense, hard items add
    /// defense and soft items add speed.
    pub fn stat_bonus(&self, config: &BalanceConfig) -> StatBonus {
        let power = self.power as f64;
        let high = config.signature_high_threshold;
        let low = config.signature_low_threshold;

        let mut bonus = StatBonus {
            attack: power * ITEM_ATTACK_PER_POWER,
            defense: power * ITEM_DEFENSE_PER_POWER,
            speed: 0.0,
        };

        let temperature = self.signature.temperature();
        if temperature > high {
            bonus.attack += power * ITEM_HOT_ATTACK_PER_POWER;
        }
        if temperature < low {
            bonus.defense += power * ITEM_COLD_DEFENSE_PER_POWER;
        }

        let hardness = self.signature.hardness();
        if hardness > high {
            bonus.defense += power * ITEM_HARD_DEFENSE_PER_POWER;
        }
        if hardness < low {
            bonus.speed += power * ITEM_SOFT_SPEED_PER_POWER;
        }

        bonus
    }

    /// Marks this item as a dungeon-clear reward.
    pub fn into_legendary(mut self) -> Self {
        self.name = format!("{LEGENDARY_PREFIX} {}", self.name);
        self
    }

    pub fn is_legendary(&self) -> bool {
        self.name.starts_with(LEGENDARY_PREFIX)
    }
}
