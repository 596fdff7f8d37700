use crate::items::Item;
use crate::signature::Signature;

/// Mean similarity between the given items and a dungeon's signature.
/// Zero when there are no items.
pub fn affinity_bonus<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    dungeon_signature: &Signature,
) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for item in items {
        total += item.signature.similarity(dungeon_signature);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;
    use crate::signature::DIMENSIONS;
    use uuid::Uuid;

    fn create_test_item(signature: Signature) -> Item {
        Item::new(Uuid::new_v4(), "Sword", ItemKind::Sword, 10, signature)
    }

    #[test]
    fn test_no_items_no_bonus() {
        let items: Vec<Item> = Vec::new();
        assert_eq!(affinity_bonus(&items, &Signature::neutral()), 0.0);
    }

    #[test]
    fn test_matching_item_full_bonus() {
        let items = vec![create_test_item(Signature::neutral())];
        assert!((affinity_bonus(&items, &Signature::neutral()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bonus_is_mean_similarity() {
        let far = Signature::from_array([1.0; DIMENSIONS]);
        let near = Signature::from_array([-1.0; DIMENSIONS]);
        let items = vec![create_test_item(far), create_test_item(near)];
        // One identical, one opposite corner
        assert!((affinity_bonus(&items, &near) - 0.5).abs() < 1e-12);
    }
}
