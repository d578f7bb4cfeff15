use std::collections::BTreeMap;

use tracing::debug;

use super::{arg, OpResult};
use crate::cell::Cell;
use crate::error::HandlerError;
use crate::rpc::Request;

/// `balance(key)`: `{"<key>": "<stored value>"}` as JSON. Read failures are
/// passed through as the store reported them.
pub fn balance(cell: &dyn Cell, request: &Request) -> OpResult {
    let key = arg(request, "balance", 0)?;
    let raw = cell.get(key)?;
    debug!("query - balance {}/{}", key, String::from_utf8_lossy(&raw));
    if raw.is_empty() {
        return Err(HandlerError::NoData);
    }

    let mut result = BTreeMap::new();
    result.insert(key, String::from_utf8_lossy(&raw).into_owned());
    Ok(Some(serde_json::to_vec(&result)?))
}
