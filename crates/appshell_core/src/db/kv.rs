//! Durable key-value storage over SQLite.
//!
//! # Responsibility
//! - Implement the `KeyValueStorage` surface on one SQLite connection.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Writes are single-row upserts; last write wins.
//! - Reads return at most one value per key.

use super::open::{open_store, open_store_in_memory};
use super::DbResult;
use crate::model::now_epoch_ms;
use crate::platform::{KeyValueStorage, PlatformResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite-backed implementation of the durable storage surface.
pub struct SqliteKeyValueStorage {
    conn: Connection,
}

impl SqliteKeyValueStorage {
    /// Wraps an already-bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens file-backed storage at `path` with migrations applied.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_store(path)?))
    }

    /// Opens in-memory storage with migrations applied.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_store_in_memory()?))
    }

    fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value, now_epoch_ms()],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", params![key])?;
        Ok(())
    }
}

impl KeyValueStorage for SqliteKeyValueStorage {
    fn read(&self, key: &str) -> PlatformResult<Option<String>> {
        self.get(key).map_err(Into::into)
    }

    fn write(&self, key: &str, value: &str) -> PlatformResult<()> {
        self.put(key, value).map_err(Into::into)
    }

    fn remove(&self, key: &str) -> PlatformResult<()> {
        self.delete(key).map_err(Into::into)
    }
}
