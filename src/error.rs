use thiserror::Error;

use crate::balance;
use crate::cell::CellError;

/// Everything that turns a request into an error response. The `Display`
/// text is what the host sees in `Response::error`.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("unknown request type")]
    UnknownRequestType,
    #[error("unknown invoke method")]
    UnknownInvokeMethod,
    #[error("unknown query method")]
    UnknownQueryMethod,
    #[error("{function}: missing argument {index}")]
    MissingArgument { function: &'static str, index: usize },
    #[error("invalid amount: {0}")]
    InvalidAmount(#[source] std::num::ParseIntError),
    #[error("invalid balance at {key}: {source}")]
    InvalidBalance {
        key: String,
        #[source]
        source: balance::DecodeError,
    },
    #[error("no data err")]
    NoData,
    #[error("balance overflow moving {amount} from {from} to {to}")]
    BalanceOverflow { from: String, to: String, amount: i64 },
    #[error(transparent)]
    Cell(#[from] CellError),
    #[error("serialize failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type HandlerResult<T> = Result<T, HandlerError>;
