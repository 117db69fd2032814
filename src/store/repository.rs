//! InventoryRepository trait and error types.

use crate::domain::{ChangeKind, Item, ItemId, NewItem, PatchError, Tag, TagId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item row exists with this id.
    #[error("item not found: {id}")]
    ItemNotFound { id: ItemId },

    /// No tag row exists with this id.
    #[error("tag not found: {id}")]
    TagNotFound { id: TagId },

    /// The partial update cannot be applied to any item.
    #[error(transparent)]
    InvalidPatch(#[from] PatchError),

    /// A tag name was empty after trimming.
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// Another tag already uses this name.
    #[error("tag already exists: {name}")]
    DuplicateTag { name: String },

    /// The sentinel tag is required by item creation and cannot be deleted.
    #[error("tag {id} is the default tag and cannot be deleted")]
    ProtectedTag { id: TagId },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("corrupt row: {0}")]
    CorruptRow(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns true for the not-found conditions callers are expected to handle.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ItemNotFound { .. } | StoreError::TagNotFound { .. }
        )
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage primitives for items, tags and the item-tag association.
///
/// Multi-statement writes (`insert_item`, `write_update`, `delete_item`,
/// `delete_tag`) are atomic: on error nothing they did is observable.
pub trait InventoryRepository {
    /// Lists every item with its tags, ordered by name.
    fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Retrieves a single item with its tags.
    fn get_item(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Finds items whose name contains `query`, ignoring case.
    fn find_items_by_name(&self, query: &str) -> StoreResult<Vec<Item>>;

    /// Inserts the item row and one association row per tag.
    fn insert_item(&mut self, item: &NewItem) -> StoreResult<ItemId>;

    /// Writes the parts of `item` selected by `kind`.
    ///
    /// `NoChange` touches nothing. Tag writes replace the full association
    /// set: all existing rows are deleted before the new ones are inserted.
    fn write_update(&mut self, kind: ChangeKind, item: &Item) -> StoreResult<()>;

    /// Deletes the item and its associations. Returns false if it did not exist.
    fn delete_item(&mut self, id: ItemId) -> StoreResult<bool>;

    /// Lists every tag, ordered by name.
    fn list_tags(&self) -> StoreResult<Vec<Tag>>;

    /// Retrieves a single tag.
    fn get_tag(&self, id: TagId) -> StoreResult<Option<Tag>>;

    /// Inserts a tag and returns its generated id.
    fn insert_tag(&mut self, name: &str) -> StoreResult<TagId>;

    /// Renames a tag. Returns false if it did not exist.
    fn rename_tag(&mut self, id: TagId, name: &str) -> StoreResult<bool>;

    /// Deletes a tag and every association referencing it. Returns false if
    /// it did not exist.
    fn delete_tag(&mut self, id: TagId) -> StoreResult<bool>;
}
