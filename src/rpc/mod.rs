pub mod codec;
pub mod model;

pub use model::{Request, RequestKind, Response};
