//! Isolated test environment with temp directory.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::{LarderCommand, TestItem};
use larder::domain::{Item, Tag};
use larder::inventory::Inventory;
use larder::store::SqliteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding items and tags through the library.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("larder.db")
    }

    /// Opens the environment's database through the library.
    pub fn inventory(&self) -> Inventory<SqliteStore> {
        let store = SqliteStore::open(&self.db_path()).expect("Failed to open database");
        Inventory::new(store)
    }

    /// Creates a tag and returns it.
    pub fn add_tag(&self, name: &str) -> Tag {
        self.inventory()
            .create_tag(name)
            .expect("Failed to create tag")
    }

    /// Adds an item and returns it as stored.
    pub fn add_item(&self, item: &TestItem) -> Item {
        self.inventory()
            .create(item.to_request())
            .expect("Failed to create item")
    }

    /// Reads an item back from the database.
    pub fn item(&self, id: i64) -> Item {
        self.inventory()
            .item(larder::domain::ItemId::new(id))
            .expect("Item should exist")
    }

    /// Creates a LarderCommand configured for this test environment.
    pub fn cmd(&self) -> LarderCommand {
        LarderCommand::new()
            .config_home(&self.root)
            .db(&self.db_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_seeds_items() {
        let env = TestEnv::new();
        let veg = env.add_tag("veg");
        let item = env.add_item(&TestItem::new("Peas").tag(&veg));

        assert!(env.db_path().exists());
        assert_eq!(env.item(item.id().get()).tags(), &[veg]);
    }

    #[test]
    fn test_env_is_isolated() {
        let first = TestEnv::new();
        let second = TestEnv::new();
        first.add_item(&TestItem::new("Peas"));

        assert_ne!(first.db_path(), second.db_path());
        assert!(second.inventory().items().unwrap().is_empty());
    }
}
