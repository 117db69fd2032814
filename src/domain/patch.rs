//! Partial updates: one tri-state [`Patch`] per updatable field.

use super::item::ItemField;
use super::tag::Tag;
use chrono::NaiveDate;
use std::fmt;

/// A requested change to a single field.
///
/// `Keep` means the caller has no opinion and the stored value stays. `Clear`
/// empties an optional field or the tag set.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Returns the value for `Set`, `None` otherwise.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Keep,
        }
    }
}

/// Error returned when a patch or request asks for something no item can hold.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchError {
    field: ItemField,
    reason: &'static str,
}

impl PatchError {
    pub fn field(&self) -> ItemField {
        self.field
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for PatchError {}

/// A partial update to an item. Every field defaults to [`Patch::Keep`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemPatch {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub date_stored: Patch<NaiveDate>,
    pub quantity: Patch<f64>,
    pub storage_location: Patch<String>,
    pub item_location: Patch<String>,
    pub category: Patch<String>,
    pub tags: Patch<Vec<Tag>>,
}

impl ItemPatch {
    /// Returns true when every field is `Keep`.
    pub fn is_empty(&self) -> bool {
        self.name.is_keep()
            && self.description.is_keep()
            && self.date_stored.is_keep()
            && self.quantity.is_keep()
            && self.storage_location.is_keep()
            && self.item_location.is_keep()
            && self.category.is_keep()
            && self.tags.is_keep()
    }

    /// Rejects clears of required columns and non-finite quantities.
    pub fn validate(&self) -> Result<(), PatchError> {
        let required = [
            (ItemField::Name, matches!(self.name, Patch::Clear)),
            (ItemField::DateStored, matches!(self.date_stored, Patch::Clear)),
            (ItemField::Quantity, matches!(self.quantity, Patch::Clear)),
            (
                ItemField::StorageLocation,
                matches!(self.storage_location, Patch::Clear),
            ),
            (
                ItemField::ItemLocation,
                matches!(self.item_location, Patch::Clear),
            ),
        ];
        if let Some((field, _)) = required.into_iter().find(|(_, cleared)| *cleared) {
            return Err(PatchError {
                field,
                reason: "cannot be cleared",
            });
        }

        if let Patch::Set(quantity) = self.quantity {
            check_quantity(quantity)?;
        }

        Ok(())
    }
}

/// Quantities are stored as REAL and must be finite.
pub(super) fn check_quantity(quantity: f64) -> Result<(), PatchError> {
    if quantity.is_finite() {
        Ok(())
    } else {
        Err(PatchError {
            field: ItemField::Quantity,
            reason: "must be a finite number",
        })
    }
}
