//! Request handler for the `sample` ledger contract.
//!
//! A host hands each [`rpc::Request`] to [`SampleHandler::handle`] together
//! with the [`cell::Cell`] holding account balances and gets a
//! [`rpc::Response`] back, never a panic or an error value.

pub mod balance;
pub mod cell;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod ops;
pub mod rpc;

pub use cell::{Cell, CellError, MemoryCell, SqliteCell};
pub use config::CellConfig;
pub use error::{HandlerError, HandlerResult};
pub use handler::{Handler, SampleHandler};
pub use rpc::{Request, RequestKind, Response};
