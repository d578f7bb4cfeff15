//! Key-value cell the handler reads balances from and writes them to.

use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryCell;
pub use sqlite::SqliteCell;

/// Forward-only pass over `(key, value)` pairs in ascending key order.
pub type CellIter<'a> = Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>;

#[derive(Debug, Error)]
pub enum CellError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("write rejected for {key}: {reason}")]
    Rejected { key: String, reason: String },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Pool(#[from] r2d2::Error),
}

pub trait Cell {
    fn get(&self, key: &str) -> Result<Vec<u8>, CellError>;

    fn put(&self, key: &str, value: &[u8]) -> Result<(), CellError>;

    /// Every entry whose key starts with `prefix`. A fresh call restarts the
    /// pass from the first matching key.
    fn iter_prefix(&self, prefix: &str) -> CellIter<'_>;
}
