//! Routes a request to an operation by its type, then its function name.

use tracing::{debug, warn};

use crate::cell::Cell;
use crate::error::HandlerError;
use crate::ops::{self, OpResult};
use crate::rpc::{Request, RequestKind};

pub fn dispatch(cell: &dyn Cell, request: &Request, listing_prefix: &str) -> OpResult {
    debug!(
        "request {} type={} function={}",
        request.uuid, request.kind, request.function_name
    );
    match request.request_kind() {
        Some(RequestKind::Invoke) => invoke(cell, request),
        Some(RequestKind::Query) => query(cell, request, listing_prefix),
        None => {
            warn!("unknown request type {:?}", request.kind);
            Err(HandlerError::UnknownRequestType)
        }
    }
}

fn invoke(cell: &dyn Cell, request: &Request) -> OpResult {
    match request.function_name.as_str() {
        "mint" => ops::mint::mint(cell, request),
        "transfer" => ops::transfer::transfer(cell, request),
        other => {
            warn!("unknown invoke method {:?}", other);
            Err(HandlerError::UnknownInvokeMethod)
        }
    }
}

fn query(cell: &dyn Cell, request: &Request, listing_prefix: &str) -> OpResult {
    match request.function_name.as_str() {
        "accounts" => ops::accounts::accounts(cell, listing_prefix),
        "balance" => ops::balance::balance(cell, request),
        other => {
            warn!("unknown query method {:?}", other);
            Err(HandlerError::UnknownQueryMethod)
        }
    }
}
