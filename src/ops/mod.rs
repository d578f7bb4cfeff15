//! The four named operations a handler routes requests to.

pub mod accounts;
pub mod balance;
pub mod mint;
pub mod transfer;

use crate::cell::Cell;
use crate::error::{HandlerError, HandlerResult};
use crate::rpc::Request;

/// Successful operations hand back an optional payload for `Response::data`.
pub type OpResult = HandlerResult<Option<Vec<u8>>>;

fn arg<'a>(request: &'a Request, function: &'static str, index: usize) -> HandlerResult<&'a str> {
    request
        .arg(index)
        .ok_or(HandlerError::MissingArgument { function, index })
}

/// Stored balance at `key`. An empty value counts as absent.
fn read_balance(cell: &dyn Cell, key: &str) -> HandlerResult<i64> {
    let raw = cell.get(key)?;
    if raw.is_empty() {
        return Err(HandlerError::NoData);
    }
    crate::balance::decode(&raw).map_err(|source| HandlerError::InvalidBalance {
        key: key.to_string(),
        source,
    })
}
