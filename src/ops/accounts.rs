use std::collections::BTreeMap;

use tracing::debug;

use super::OpResult;
use crate::cell::Cell;

/// `accounts()`: every entry stored under `<prefix>`, keyed with the prefix
/// removed, as a JSON object of strings. Later entries overwrite earlier ones
/// that strip to the same key.
pub fn accounts(cell: &dyn Cell, prefix: &str) -> OpResult {
    let mut result = BTreeMap::new();
    for (key, value) in cell.iter_prefix(prefix) {
        let key = String::from_utf8_lossy(&key);
        let value = String::from_utf8_lossy(&value).into_owned();
        debug!("query - accounts {}/{}", key, value);
        let account = key.strip_prefix(prefix).unwrap_or(key.as_ref()).to_string();
        result.insert(account, value);
    }
    Ok(Some(serde_json::to_vec(&result)?))
}

/// Listing prefix for a handler named `name`.
pub fn prefix_for(name: &str) -> String {
    format!("{}_", name)
}
