use super::names::generate_item_name;
use super::types::{Item, ItemKind};
use crate::core::config::BalanceConfig;
use crate::signature::Signature;
use rand::Rng;
use uuid::Uuid;

/// Item with a uniformly random kind and a fully random signature.
pub fn generate_random_item(config: &BalanceConfig, rng: &mut impl Rng) -> Item {
    let kind = roll_item_kind(rng);
    let signature = Signature::random(rng);
    build_item(kind, signature, config, rng)
}

/// Item whose signature clusters around `base` within `variance`.
pub fn generate_item_with_signature(
    base: &Signature,
    variance: f64,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> Item {
    let kind = roll_item_kind(rng);
    let signature = base.similar(variance, rng);
    build_item(kind, signature, config, rng)
}

/// Loot themed on `base` using the configured default item variance.
pub fn generate_themed_item(base: &Signature, config: &BalanceConfig, rng: &mut impl Rng) -> Item {
    generate_item_with_signature(base, config.default_item_variance, config, rng)
}

pub fn roll_item_kind(rng: &mut impl Rng) -> ItemKind {
    ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())]
}

/// Power scales the kind's base power by `1 + intensity`, truncated.
pub fn item_power(kind: ItemKind, signature: &Signature) -> u32 {
    (kind.base_power() as f64 * (1.0 + signature.intensity())) as u32
}

/// Random (version 4) id drawn from `rng`, so seeded runs replay identically.
pub fn roll_item_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn build_item(
    kind: ItemKind,
    signature: Signature,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> Item {
    let name = generate_item_name(kind, &signature, config, rng);
    let power = item_power(kind, &signature);
    Item::new(roll_item_id(rng), name, kind, power, signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::DIMENSIONS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_item_power_bounds() {
        // Intensity 0 keeps base power, intensity 1 doubles it
        assert_eq!(item_power(ItemKind::Sword, &Signature::neutral()), 10);
        assert_eq!(
            item_power(ItemKind::Sword, &Signature::from_array([1.0; DIMENSIONS])),
            20
        );
        assert_eq!(
            item_power(ItemKind::Armor, &Signature::from_array([-0.5; DIMENSIONS])),
            18
        );
    }

    #[test]
    fn test_random_item_is_consistent() {
        let config = BalanceConfig::default();
        let mut rng = create_test_rng();
        for _ in 0..200 {
            let item = generate_random_item(&config, &mut rng);
            assert_eq!(item.slot, item.kind.slot());
            assert!(item.power >= item.kind.base_power());
            assert!(item.power <= item.kind.base_power() * 2);
            assert!(item.name.ends_with(item.kind.name()));
        }
    }

    #[test]
    fn test_themed_items_cluster_around_base() {
        let config = BalanceConfig::default();
        let mut rng = create_test_rng();
        let base = Signature::random(&mut rng);
        let bound = config.default_item_variance * (DIMENSIONS as f64).sqrt() + 1e-9;
        for _ in 0..100 {
            let item = generate_themed_item(&base, &config, &mut rng);
            assert!(item.signature.distance(&base) <= bound);
        }
    }

    #[test]
    fn test_item_ids_unique() {
        let config = BalanceConfig::default();
        let mut rng = create_test_rng();
        let ids: HashSet<Uuid> = (0..500)
            .map(|_| generate_random_item(&config, &mut rng).id)
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = BalanceConfig::default();
        let a = generate_random_item(&config, &mut create_test_rng());
        let b = generate_random_item(&config, &mut create_test_rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_kind_is_rolled() {
        let mut rng = create_test_rng();
        let kinds: HashSet<ItemKind> = (0..500).map(|_| roll_item_kind(&mut rng)).collect();
        assert_eq!(kinds.len(), ItemKind::ALL.len());
    }
}
