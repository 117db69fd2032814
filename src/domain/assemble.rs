//! Builds the complete post-update item from a stored item and a patch.

use super::item::{Item, ItemDetails};
use super::patch::{ItemPatch, Patch};
use super::tag_set::dedup_tags;

fn required<T: Clone>(patch: &Patch<T>, current: &T) -> T {
    patch.as_set().unwrap_or(current).clone()
}

fn optional(patch: &Patch<String>, current: &Option<String>) -> Option<String> {
    match patch {
        Patch::Keep => current.clone(),
        Patch::Set(value) => Some(value.clone()),
        Patch::Clear => None,
    }
}

/// Merges `patch` over `current`, producing the full replacement item.
///
/// `Keep` inherits the stored value (quantity included), `Clear` empties an
/// optional column or the tag set. The id always comes from `current`.
/// A `Clear` on a required column keeps the stored value; such patches are
/// rejected by [`ItemPatch::validate`] before they get here.
pub fn merge(current: &Item, patch: &ItemPatch) -> Item {
    let stored = current.details();
    let details = ItemDetails {
        name: required(&patch.name, &stored.name),
        description: optional(&patch.description, &stored.description),
        date_stored: required(&patch.date_stored, &stored.date_stored),
        quantity: required(&patch.quantity, &stored.quantity),
        storage_location: required(&patch.storage_location, &stored.storage_location),
        item_location: required(&patch.item_location, &stored.item_location),
        category: optional(&patch.category, &stored.category),
    };

    let tags = match &patch.tags {
        Patch::Keep => current.tags().to_vec(),
        Patch::Set(tags) => dedup_tags(tags.iter().cloned()),
        Patch::Clear => Vec::new(),
    };

    Item::new(current.id(), details, tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, Tag, TagId, detect};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn current() -> Item {
        Item::builder(
            ItemId::new(7),
            "Stock",
            4.0,
            "Upright",
            "Drawer 1",
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
        )
        .description("chicken stock")
        .category("soup")
        .tags(vec![Tag::new(TagId::new(1), "soup")])
        .build()
    }

    #[test]
    fn empty_patch_reproduces_current() {
        assert_eq!(merge(&current(), &ItemPatch::default()), current());
    }

    #[test]
    fn keep_on_quantity_inherits_stored_value() {
        let patch = ItemPatch {
            name: Patch::Set("Beef stock".into()),
            ..Default::default()
        };
        let merged = merge(&current(), &patch);
        assert_eq!(merged.quantity(), 4.0);
        assert_eq!(merged.name(), "Beef stock");
    }

    #[test]
    fn set_values_replace_stored_ones() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let patch = ItemPatch {
            date_stored: Patch::Set(date),
            quantity: Patch::Set(0.5),
            storage_location: Patch::Set("Chest".into()),
            item_location: Patch::Set("Basket".into()),
            ..Default::default()
        };
        let merged = merge(&current(), &patch);
        let details = merged.details();
        assert_eq!(details.date_stored, date);
        assert_eq!(details.quantity, 0.5);
        assert_eq!(details.storage_location, "Chest");
        assert_eq!(details.item_location, "Basket");
        assert_eq!(details.description.as_deref(), Some("chicken stock"));
    }

    #[test]
    fn clear_empties_optional_columns_and_tags() {
        let patch = ItemPatch {
            description: Patch::Clear,
            category: Patch::Clear,
            tags: Patch::Clear,
            ..Default::default()
        };
        let merged = merge(&current(), &patch);
        assert!(merged.details().description.is_none());
        assert!(merged.details().category.is_none());
        assert!(merged.tags().is_empty());
        assert_eq!(merged.id(), ItemId::new(7));
    }

    #[test]
    fn tags_are_rebuilt_without_duplicates() {
        let frozen = Tag::new(TagId::new(3), "frozen");
        let patch = ItemPatch {
            tags: Patch::Set(vec![frozen.clone(), frozen.clone()]),
            ..Default::default()
        };
        assert_eq!(merge(&current(), &patch).tags(), &[frozen]);
    }

    #[test]
    fn merged_item_agrees_with_detector() {
        let patch = ItemPatch {
            quantity: Patch::Set(2.0),
            ..Default::default()
        };
        let merged = merge(&current(), &patch);
        assert!(detect(&merged, &patch).is_empty());
    }
}
