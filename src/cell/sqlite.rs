use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};
use tracing::{error, warn};

use super::{Cell, CellError, CellIter};
use crate::config::CellConfig;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS cells (
    key   TEXT PRIMARY KEY,
    value BLOB NOT NULL
);";

/// Cell persisted in a SQLite file, shared through a connection pool.
#[derive(Clone)]
pub struct SqliteCell {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteCell {
    /// Opens the database at `config.path`. For `:memory:` the pool holds a
    /// single connection for the life of the cell, so every caller sees the
    /// same database.
    pub fn open(config: &CellConfig) -> Result<Self, CellError> {
        let pool = if config.is_in_memory() {
            if config.pool_size > 1 {
                warn!(
                    "in-memory cell ignores pool size {}, using one connection",
                    config.pool_size
                );
            }
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .build(SqliteConnectionManager::memory())?
        } else {
            Pool::builder()
                .max_size(config.pool_size)
                .build(SqliteConnectionManager::file(&config.path))?
        };
        pool.get()?.execute_batch(SCHEMA)?;
        Ok(SqliteCell { pool })
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(Vec<u8>, Vec<u8>)>, CellError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT key, value FROM cells
             WHERE substr(key, 1, length(?1)) = ?1
             ORDER BY key",
        )?;
        let rows = stmt
            .query_map(params![prefix], |row| {
                let key: String = row.get(0)?;
                let value: Vec<u8> = row.get(1)?;
                Ok((key.into_bytes(), value))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl Cell for SqliteCell {
    fn get(&self, key: &str) -> Result<Vec<u8>, CellError> {
        let conn = self.pool.get()?;
        conn.query_row(
            "SELECT value FROM cells WHERE key = ?1",
            params![key],
            |row| row.get::<_, Vec<u8>>(0),
        )
        .optional()?
        .ok_or_else(|| CellError::NotFound(key.to_string()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), CellError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO cells (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn iter_prefix(&self, prefix: &str) -> CellIter<'_> {
        match self.scan_prefix(prefix) {
            Ok(rows) => Box::new(rows.into_iter()),
            Err(err) => {
                error!("prefix scan {:?} aborted: {}", prefix, err);
                Box::new(std::iter::empty())
            }
        }
    }
}
