use super::types::ItemKind;
use crate::core::config::BalanceConfig;
use crate::signature::Signature;
use rand::seq::SliceRandom;
use rand::Rng;

/// Most descriptor words an item name carries.
const MAX_NAME_ADJECTIVES: usize = 2;

/// Builds an item name from its kind and signature: one or two of the
/// signature's descriptor words (in random order) before the kind name, or
/// the bare kind name when no component crosses a threshold.
pub fn generate_item_name(
    kind: ItemKind,
    signature: &Signature,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> String {
    let mut adjectives =
        signature.descriptors(config.signature_high_threshold, config.signature_low_threshold);

    if adjectives.is_empty() {
        return kind.name().to_string();
    }

    let count = adjectives.len().min(rng.gen_range(1..=MAX_NAME_ADJECTIVES));
    adjectives.shuffle(rng);
    adjectives.truncate(count);

    format!("{} {}", adjectives.join(" "), kind.name())
}
