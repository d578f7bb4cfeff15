use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DB_PATH_VAR: &str = "ICODE_DB_PATH";
pub const POOL_SIZE_VAR: &str = "ICODE_POOL_SIZE";

const DEFAULT_DB_PATH: &str = "icode.db";
const MEMORY_PATH: &str = ":memory:";
const DEFAULT_POOL_SIZE: u32 = 4;

/// Where the SQLite cell lives and how many connections it may hold open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellConfig {
    pub path: PathBuf,
    pub pool_size: u32,
}

impl Default for CellConfig {
    fn default() -> Self {
        CellConfig {
            path: PathBuf::from(DEFAULT_DB_PATH),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl CellConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CellConfig {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }

    /// SQLite's `:memory:` path: every connection opened on it gets a
    /// separate, empty database.
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == MEMORY_PATH
    }

    /// Defaults overridden by `ICODE_DB_PATH` and `ICODE_POOL_SIZE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(DB_PATH_VAR) {
            config.path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(POOL_SIZE_VAR) {
            match raw.parse::<u32>() {
                Ok(size) if size > 0 => config.pool_size = size,
                _ => warn!(
                    "ignoring {}={:?}, using pool size {}",
                    POOL_SIZE_VAR, raw, config.pool_size
                ),
            }
        }
        config
    }
}
