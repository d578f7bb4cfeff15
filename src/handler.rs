use tracing::debug;

use crate::cell::Cell;
use crate::dispatch::dispatch;
use crate::ops::accounts::prefix_for;
use crate::rpc::{Request, Response};

/// What a host needs from a contract: an identity, the protocol versions it
/// speaks, and a request entry point that always answers.
pub trait Handler {
    fn name(&self) -> &str;

    fn versions(&self) -> Vec<String>;

    fn handle(&self, request: &Request, cell: &dyn Cell) -> Response;
}

/// Token ledger with `mint`/`transfer` invokes and `balance`/`accounts` queries.
#[derive(Debug, Clone)]
pub struct SampleHandler {
    listing_prefix: String,
}

impl SampleHandler {
    pub const NAME: &'static str = "sample";
    pub const VERSIONS: [&'static str; 2] = ["1.0", "1.2"];

    pub fn new() -> Self {
        SampleHandler {
            listing_prefix: prefix_for(Self::NAME),
        }
    }
}

impl Default for SampleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for SampleHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn versions(&self) -> Vec<String> {
        Self::VERSIONS.iter().map(|v| v.to_string()).collect()
    }

    fn handle(&self, request: &Request, cell: &dyn Cell) -> Response {
        match dispatch(cell, request, &self.listing_prefix) {
            Ok(data) => Response::success(request, data),
            Err(err) => {
                debug!("request {} failed: {}", request.uuid, err);
                Response::error(request, err)
            }
        }
    }
}
