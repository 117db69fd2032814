//! Entity store: repository trait, schema and the SQLite implementation.

mod repository;
mod schema;
mod sqlite;

pub use repository::{InventoryRepository, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::{SqliteStore, Transaction};
