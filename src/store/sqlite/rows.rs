//! Row decoding for items and tags.

use crate::domain::{Item, ItemDetails, ItemId, Tag, TagId};
use crate::store::{StoreError, StoreResult};
use chrono::NaiveDate;
use rusqlite::{Connection, Row};
use std::collections::HashMap;

pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns selected for every item query, in `ItemRow::from_row` order.
pub(super) const ITEM_COLUMNS: &str =
    "id, name, description, date_stored, quantity, storage_location, item_location, category";

/// An item row before its date has been parsed.
pub(super) struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    date_stored: String,
    quantity: f64,
    storage_location: String,
    item_location: String,
    category: Option<String>,
}

impl ItemRow {
    pub(super) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            date_stored: row.get(3)?,
            quantity: row.get(4)?,
            storage_location: row.get(5)?,
            item_location: row.get(6)?,
            category: row.get(7)?,
        })
    }

    pub(super) fn id(&self) -> i64 {
        self.id
    }

    pub(super) fn into_item(self, tags: Vec<Tag>) -> StoreResult<Item> {
        let date_stored = NaiveDate::parse_from_str(&self.date_stored, DATE_FORMAT)
            .map_err(|e| {
                StoreError::CorruptRow(format!(
                    "item {} has invalid date_stored '{}': {}",
                    self.id, self.date_stored, e
                ))
            })?;

        let details = ItemDetails {
            name: self.name,
            description: self.description,
            date_stored,
            quantity: self.quantity,
            storage_location: self.storage_location,
            item_location: self.item_location,
            category: self.category,
        };
        Ok(Item::new(ItemId::new(self.id), details, tags))
    }
}

pub(super) fn tag_from_row(row: &Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag::new(TagId::new(row.get(0)?), row.get::<_, String>(1)?))
}

/// Loads the tags attached to one item.
pub(super) fn tags_for_item(conn: &Connection, id: i64) -> StoreResult<Vec<Tag>> {
    let mut stmt = conn.prepare(
        "SELECT t.id, t.name FROM tags t
         JOIN item_tags it ON t.id = it.tag_id
         WHERE it.item_id = ?
         ORDER BY t.name, t.id",
    )?;
    let tags = stmt
        .query_map([id], tag_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tags)
}

/// Loads every association, grouped by item id.
pub(super) fn tags_by_item(conn: &Connection) -> StoreResult<HashMap<i64, Vec<Tag>>> {
    let mut stmt = conn.prepare(
        "SELECT it.item_id, t.id, t.name FROM item_tags it
         JOIN tags t ON t.id = it.tag_id
         ORDER BY t.name, t.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            Tag::new(TagId::new(row.get(1)?), row.get::<_, String>(2)?),
        ))
    })?;

    let mut grouped: HashMap<i64, Vec<Tag>> = HashMap::new();
    for row in rows {
        let (item_id, tag) = row?;
        grouped.entry(item_id).or_default().push(tag);
    }
    Ok(grouped)
}

pub(super) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
