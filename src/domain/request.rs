//! Input for creating items.

use super::patch::{PatchError, check_quantity};
use super::tag::Tag;
use chrono::NaiveDate;

/// A request to create an item.
///
/// Required columns are plain fields; the optional ones fall back to defaults
/// when the item is created (today's date, the uncategorised tag).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
    pub name: String,
    pub quantity: f64,
    pub storage_location: String,
    pub item_location: String,
    pub description: Option<String>,
    pub date_stored: Option<NaiveDate>,
    pub category: Option<String>,
    pub tags: Vec<Tag>,
}

impl CreateRequest {
    /// Creates a request with the required columns and no optional ones.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        storage_location: impl Into<String>,
        item_location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            storage_location: storage_location.into(),
            item_location: item_location.into(),
            description: None,
            date_stored: None,
            category: None,
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date_stored(mut self, date: NaiveDate) -> Self {
        self.date_stored = Some(date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Rejects values no stored item can hold.
    pub fn validate(&self) -> Result<(), PatchError> {
        check_quantity(self.quantity)
    }
}
