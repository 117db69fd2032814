//! InventoryRepository trait implementation for SqliteStore.

use super::SqliteStore;
use super::rows::{ITEM_COLUMNS, ItemRow, tag_from_row, tags_by_item, tags_for_item};
use super::writer;
use crate::domain::{ChangeKind, Item, ItemId, NewItem, Tag, TagId};
use crate::store::{InventoryRepository, StoreError, StoreResult};
use log::{debug, info};

fn is_constraint_violation(err: &StoreError) -> bool {
    matches!(
        err,
        StoreError::Database(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn duplicate_tag_or(err: StoreError, name: &str) -> StoreError {
    if is_constraint_violation(&err) {
        StoreError::DuplicateTag {
            name: name.to_string(),
        }
    } else {
        err
    }
}

impl InventoryRepository for SqliteStore {
    fn list_items(&self) -> StoreResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY name, id"
        ))?;
        let rows = stmt
            .query_map([], ItemRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut tags = tags_by_item(&self.conn)?;
        rows.into_iter()
            .map(|row| {
                let item_tags = tags.remove(&row.id()).unwrap_or_default();
                row.into_item(item_tags)
            })
            .collect()
    }

    fn get_item(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let row = self.conn.query_row(
            &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?"),
            [id.get()],
            ItemRow::from_row,
        );
        let row = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        let tags = tags_for_item(&self.conn, id.get())?;
        row.into_item(tags).map(Some)
    }

    fn find_items_by_name(&self, query: &str) -> StoreResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM items
             WHERE instr(lower(name), lower(?1)) > 0
             ORDER BY name, id"
        ))?;
        let rows = stmt
            .query_map([query], ItemRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|row| {
                let tags = tags_for_item(&self.conn, row.id())?;
                row.into_item(tags)
            })
            .collect()
    }

    fn insert_item(&mut self, item: &NewItem) -> StoreResult<ItemId> {
        let id = self.with_transaction(|tx| {
            let id = writer::insert_details(tx, &item.details)?;
            writer::insert_associations(tx, id, &item.tags)?;
            Ok(id)
        })?;
        info!(
            "created item {id} '{}' with {} tag(s)",
            item.details.name,
            item.tags.len()
        );
        Ok(id)
    }

    fn write_update(&mut self, kind: ChangeKind, item: &Item) -> StoreResult<()> {
        if kind == ChangeKind::NoChange {
            debug!("item {}: nothing to write", item.id());
            return Ok(());
        }
        debug!("item {}: writing {kind}", item.id());
        self.with_transaction(|tx| writer::apply_update(tx, kind, item))
    }

    fn delete_item(&mut self, id: ItemId) -> StoreResult<bool> {
        let deleted = self.with_transaction(|tx| writer::delete_item_rows(tx, id))?;
        if deleted {
            info!("deleted item {id}");
        }
        Ok(deleted)
    }

    fn list_tags(&self) -> StoreResult<Vec<Tag>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM tags ORDER BY name, id")?;
        let tags = stmt
            .query_map([], tag_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }

    fn get_tag(&self, id: TagId) -> StoreResult<Option<Tag>> {
        match self.conn.query_row(
            "SELECT id, name FROM tags WHERE id = ?",
            [id.get()],
            tag_from_row,
        ) {
            Ok(tag) => Ok(Some(tag)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn insert_tag(&mut self, name: &str) -> StoreResult<TagId> {
        let id = self
            .with_transaction(|tx| {
                tx.execute("INSERT INTO tags (name) VALUES (?)", [name])?;
                Ok(TagId::new(tx.last_insert_rowid()))
            })
            .map_err(|e| duplicate_tag_or(e, name))?;
        info!("created tag {id} '{name}'");
        Ok(id)
    }

    fn rename_tag(&mut self, id: TagId, name: &str) -> StoreResult<bool> {
        let rows = self
            .conn
            .execute(
                "UPDATE tags SET name = ?1 WHERE id = ?2",
                rusqlite::params![name, id.get()],
            )
            .map_err(|e| duplicate_tag_or(StoreError::Database(e), name))?;
        Ok(rows > 0)
    }

    fn delete_tag(&mut self, id: TagId) -> StoreResult<bool> {
        let deleted = self.with_transaction(|tx| writer::delete_tag_rows(tx, id))?;
        if deleted {
            info!("deleted tag {id}");
        }
        Ok(deleted)
    }
}
