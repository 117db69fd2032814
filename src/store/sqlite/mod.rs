//! SQLite-backed inventory store.

mod connection;
mod repo_impl;
mod rows;
mod transaction;
mod writer;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed inventory store.
///
/// Holds one connection for the lifetime of the value; every multi-statement
/// write runs in its own transaction that ends before the call returns.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
