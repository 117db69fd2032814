//! Inventory service: item and tag operations on top of a repository.
//!
//! Updates are differential. The stored item is loaded, compared with the
//! patch, and only the parts that differ are written, in one transaction.
//! Concurrent updates to the same item are last-writer-wins: there is no
//! version check between the read and the write.

use crate::domain::{
    ChangeKind, CreateRequest, Item, ItemDetails, ItemField, ItemId, ItemPatch, NewItem, Tag,
    TagId, dedup_tags, detect, merge,
};
use crate::store::{InventoryRepository, StoreError, StoreResult};
use chrono::{Local, NaiveDate};
use log::debug;

/// Result of [`Inventory::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The item as stored after the call.
    pub item: Item,
    /// The write path that was taken.
    pub kind: ChangeKind,
    /// Scalar columns that were rewritten with new values.
    pub changed_fields: Vec<ItemField>,
}

/// Item and tag operations over an [`InventoryRepository`].
pub struct Inventory<R> {
    repo: R,
}

impl<R: InventoryRepository> Inventory<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    // ===========================================
    // Items
    // ===========================================

    pub fn items(&self) -> StoreResult<Vec<Item>> {
        self.repo.list_items()
    }

    pub fn item(&self, id: ItemId) -> StoreResult<Item> {
        self.repo
            .get_item(id)?
            .ok_or(StoreError::ItemNotFound { id })
    }

    /// Items whose name contains `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> StoreResult<Vec<Item>> {
        self.repo.find_items_by_name(query)
    }

    /// Creates an item, defaulting the date to today and the tags to the
    /// uncategorised tag.
    pub fn create(&mut self, request: CreateRequest) -> StoreResult<Item> {
        self.create_on(request, Local::now().date_naive())
    }

    pub(crate) fn create_on(&mut self, request: CreateRequest, today: NaiveDate) -> StoreResult<Item> {
        request.validate()?;

        let tags = if request.tags.is_empty() {
            vec![Tag::uncategorised()]
        } else {
            dedup_tags(request.tags)
        };

        let new_item = NewItem {
            details: ItemDetails {
                name: request.name,
                description: request.description,
                date_stored: request.date_stored.unwrap_or(today),
                quantity: request.quantity,
                storage_location: request.storage_location,
                item_location: request.item_location,
                category: request.category,
            },
            tags,
        };

        let id = self.repo.insert_item(&new_item)?;
        self.item(id)
    }

    /// Applies a partial update, writing only what differs from the stored item.
    ///
    /// A patch that changes nothing returns the stored item without any write.
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> StoreResult<UpdateOutcome> {
        patch.validate()?;

        let current = self.item(id)?;
        let changes = detect(&current, patch);
        let kind = changes.kind();
        if kind == ChangeKind::NoChange {
            debug!("item {id}: update changes nothing");
            return Ok(UpdateOutcome {
                item: current,
                kind,
                changed_fields: Vec::new(),
            });
        }

        let merged = merge(&current, patch);
        self.repo.write_update(kind, &merged)?;

        Ok(UpdateOutcome {
            item: self.item(id)?,
            kind,
            changed_fields: changes.changed_fields().iter().copied().collect(),
        })
    }

    pub fn delete(&mut self, id: ItemId) -> StoreResult<()> {
        if self.repo.delete_item(id)? {
            Ok(())
        } else {
            Err(StoreError::ItemNotFound { id })
        }
    }

    // ===========================================
    // Tags
    // ===========================================

    pub fn tags(&self) -> StoreResult<Vec<Tag>> {
        self.repo.list_tags()
    }

    pub fn tags_for_item(&self, id: ItemId) -> StoreResult<Vec<Tag>> {
        Ok(self.item(id)?.tags().to_vec())
    }

    pub fn tag(&self, id: TagId) -> StoreResult<Tag> {
        self.repo.get_tag(id)?.ok_or(StoreError::TagNotFound { id })
    }

    pub fn create_tag(&mut self, name: &str) -> StoreResult<Tag> {
        let name = valid_tag_name(name)?;
        let id = self.repo.insert_tag(name)?;
        Ok(Tag::new(id, name))
    }

    pub fn rename_tag(&mut self, id: TagId, name: &str) -> StoreResult<Tag> {
        let name = valid_tag_name(name)?;
        if self.repo.rename_tag(id, name)? {
            Ok(Tag::new(id, name))
        } else {
            Err(StoreError::TagNotFound { id })
        }
    }

    /// Deletes a tag and detaches it from every item.
    ///
    /// The uncategorised tag cannot be deleted.
    pub fn delete_tag(&mut self, id: TagId) -> StoreResult<()> {
        if Tag::uncategorised().id() == id {
            return Err(StoreError::ProtectedTag { id });
        }
        if self.repo.delete_tag(id)? {
            Ok(())
        } else {
            Err(StoreError::TagNotFound { id })
        }
    }
}

fn valid_tag_name(name: &str) -> StoreResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidTagName(name.to_string()));
    }
    Ok(trimmed)
}
