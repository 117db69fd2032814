//! Inventory items and their scalar columns.

use super::ids::ItemId;
use super::tag::Tag;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar columns of an item.
///
/// Everything about an item except its identity and tag associations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub name: String,
    pub description: Option<String>,
    pub date_stored: NaiveDate,
    pub quantity: f64,
    pub storage_location: String,
    pub item_location: String,
    pub category: Option<String>,
}

/// Names one scalar column of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Name,
    Description,
    DateStored,
    Quantity,
    StorageLocation,
    ItemLocation,
    Category,
}

impl ItemField {
    /// Returns the column name.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Description => "description",
            ItemField::DateStored => "date_stored",
            ItemField::Quantity => "quantity",
            ItemField::StorageLocation => "storage_location",
            ItemField::ItemLocation => "item_location",
            ItemField::Category => "category",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored item with its tags attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    #[serde(flatten)]
    details: ItemDetails,
    tags: Vec<Tag>,
}

impl Item {
    /// Creates an item from its parts.
    pub fn new(id: ItemId, details: ItemDetails, tags: Vec<Tag>) -> Self {
        Self { id, details, tags }
    }

    /// Creates a builder with the required columns set.
    pub fn builder(
        id: ItemId,
        name: impl Into<String>,
        quantity: f64,
        storage_location: impl Into<String>,
        item_location: impl Into<String>,
        date_stored: NaiveDate,
    ) -> ItemBuilder {
        ItemBuilder {
            id,
            details: ItemDetails {
                name: name.into(),
                description: None,
                date_stored,
                quantity,
                storage_location: storage_location.into(),
                item_location: item_location.into(),
                category: None,
            },
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn quantity(&self) -> f64 {
        self.details.quantity
    }

    /// Splits the item into its parts.
    pub fn into_parts(self) -> (ItemId, ItemDetails, Vec<Tag>) {
        (self.id, self.details, self.tags)
    }
}

/// Builder for constructing an [`Item`].
pub struct ItemBuilder {
    id: ItemId,
    details: ItemDetails,
    tags: Vec<Tag>,
}

impl ItemBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.details.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.details.category = Some(category.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn build(self) -> Item {
        Item {
            id: self.id,
            details: self.details,
            tags: self.tags,
        }
    }
}

/// An item that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub details: ItemDetails,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagId;
    use pretty_assertions::assert_eq;

    fn stored() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn builder_sets_required_and_optional_columns() {
        let item = Item::builder(ItemId::new(1), "Peas", 2.0, "Chest", "Top shelf", stored())
            .description("garden peas")
            .category("veg")
            .tags(vec![Tag::new(TagId::new(4), "veg")])
            .build();

        assert_eq!(item.id(), ItemId::new(1));
        assert_eq!(item.name(), "Peas");
        assert_eq!(item.quantity(), 2.0);
        assert_eq!(item.details().storage_location, "Chest");
        assert_eq!(item.details().item_location, "Top shelf");
        assert_eq!(item.details().description.as_deref(), Some("garden peas"));
        assert_eq!(item.details().category.as_deref(), Some("veg"));
        assert_eq!(item.tags().len(), 1);
    }

    #[test]
    fn builder_defaults_optional_columns_to_none() {
        let item = Item::builder(ItemId::new(1), "Peas", 2.0, "Chest", "Top", stored()).build();
        assert!(item.details().description.is_none());
        assert!(item.details().category.is_none());
        assert!(item.tags().is_empty());
    }

    #[test]
    fn serializes_flat_with_tags() {
        let item = Item::builder(ItemId::new(9), "Soup", 1.5, "Upright", "Drawer 2", stored())
            .tags(vec![Tag::uncategorised()])
            .build();
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], 9);
        assert_eq!(value["name"], "Soup");
        assert_eq!(value["date_stored"], "2024-03-01");
        assert_eq!(value["tags"][0]["name"], "uncategorised");
    }

    #[test]
    fn field_names_match_columns() {
        assert_eq!(ItemField::StorageLocation.as_str(), "storage_location");
        assert_eq!(ItemField::DateStored.to_string(), "date_stored");
    }
}
