//! Write statements shared by the create, update and delete paths.
//!
//! Every function here runs inside a caller-owned [`Transaction`]; none of
//! them commits.

use super::rows::format_date;
use super::transaction::Transaction;
use crate::domain::{ChangeKind, Item, ItemDetails, ItemId, Tag, TagId};
use crate::store::{StoreError, StoreResult};
use log::debug;

pub(super) fn insert_details(tx: &Transaction<'_>, details: &ItemDetails) -> StoreResult<ItemId> {
    tx.execute(
        "INSERT INTO items (name, description, date_stored, quantity, storage_location, item_location, category)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            details.name,
            details.description,
            format_date(details.date_stored),
            details.quantity,
            details.storage_location,
            details.item_location,
            details.category,
        ],
    )?;
    Ok(ItemId::new(tx.last_insert_rowid()))
}

/// Overwrites every scalar column of an existing item row.
pub(super) fn update_details(
    tx: &Transaction<'_>,
    id: ItemId,
    details: &ItemDetails,
) -> StoreResult<()> {
    let rows = tx.execute(
        "UPDATE items
         SET name = ?1,
             description = ?2,
             date_stored = ?3,
             quantity = ?4,
             storage_location = ?5,
             item_location = ?6,
             category = ?7
         WHERE id = ?8",
        rusqlite::params![
            details.name,
            details.description,
            format_date(details.date_stored),
            details.quantity,
            details.storage_location,
            details.item_location,
            details.category,
            id.get(),
        ],
    )?;
    if rows == 0 {
        return Err(StoreError::ItemNotFound { id });
    }
    Ok(())
}

pub(super) fn delete_associations(tx: &Transaction<'_>, id: ItemId) -> StoreResult<usize> {
    tx.execute("DELETE FROM item_tags WHERE item_id = ?", [id.get()])
}

pub(super) fn insert_associations(
    tx: &Transaction<'_>,
    id: ItemId,
    tags: &[Tag],
) -> StoreResult<()> {
    for tag in tags {
        tx.execute(
            "INSERT INTO item_tags (item_id, tag_id) VALUES (?1, ?2)",
            [id.get(), tag.id().get()],
        )?;
    }
    Ok(())
}

/// Replaces the full association set: delete all, then insert all.
///
/// Costs one insert per new tag no matter how much the old and new sets
/// overlap.
pub(super) fn replace_associations(
    tx: &Transaction<'_>,
    id: ItemId,
    tags: &[Tag],
) -> StoreResult<()> {
    let removed = delete_associations(tx, id)?;
    insert_associations(tx, id, tags)?;
    debug!(
        "item {id}: replaced {removed} tag association(s) with {}",
        tags.len()
    );
    Ok(())
}

/// Applies the writes selected by `kind`. The caller handles `NoChange`.
pub(super) fn apply_update(tx: &Transaction<'_>, kind: ChangeKind, item: &Item) -> StoreResult<()> {
    if kind.writes_scalars() {
        update_details(tx, item.id(), item.details())?;
    }
    if kind.writes_tags() {
        replace_associations(tx, item.id(), item.tags())?;
    }
    Ok(())
}

pub(super) fn delete_item_rows(tx: &Transaction<'_>, id: ItemId) -> StoreResult<bool> {
    delete_associations(tx, id)?;
    let rows = tx.execute("DELETE FROM items WHERE id = ?", [id.get()])?;
    Ok(rows > 0)
}

pub(super) fn delete_tag_rows(tx: &Transaction<'_>, id: TagId) -> StoreResult<bool> {
    let unlinked = tx.execute("DELETE FROM item_tags WHERE tag_id = ?", [id.get()])?;
    let rows = tx.execute("DELETE FROM tags WHERE id = ?", [id.get()])?;
    if rows > 0 {
        debug!("tag {id}: removed from {unlinked} item(s)");
    }
    Ok(rows > 0)
}
