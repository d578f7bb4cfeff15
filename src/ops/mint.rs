use tracing::debug;

use super::{arg, OpResult};
use crate::cell::Cell;
use crate::rpc::Request;

/// `mint(key, value)`: stores `value` at `key` exactly as given, replacing
/// whatever was there. The value is not checked to be a number.
pub fn mint(cell: &dyn Cell, request: &Request) -> OpResult {
    let key = arg(request, "mint", 0)?;
    let value = arg(request, "mint", 1)?;
    debug!("invoke - mint {}/{}", key, value);
    cell.put(key, value.as_bytes())?;
    Ok(None)
}
