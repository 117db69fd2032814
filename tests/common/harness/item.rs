//! Builder for test items with sensible defaults.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use chrono::NaiveDate;
use larder::domain::{CreateRequest, Tag};

/// Builder for creating test items with sensible defaults.
///
/// Every item lives in the "Chest" freezer, in the "Top basket", and was
/// stored on 2024-01-15 unless told otherwise.
#[derive(Debug, Clone)]
pub struct TestItem {
    request: CreateRequest,
}

impl TestItem {
    /// Creates a new test item with the given name and a quantity of one.
    pub fn new(name: impl Into<String>) -> Self {
        let stored = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        Self {
            request: CreateRequest::new(name, 1.0, "Chest", "Top basket").date_stored(stored),
        }
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.request.quantity = quantity;
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.request.storage_location = storage.into();
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.request = self.request.description(desc);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.request = self.request.category(category);
        self
    }

    /// Adds an existing tag to the item.
    pub fn tag(mut self, tag: &Tag) -> Self {
        self.request.tags.push(tag.clone());
        self
    }

    /// Converts this TestItem to a create request.
    pub fn to_request(&self) -> CreateRequest {
        self.request.clone()
    }
}
