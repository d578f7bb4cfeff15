//! MessagePack bodies for requests and responses.
//!
//! Each call encodes or decodes exactly one message. Framing several of them
//! on a stream is left to the host.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::model::{Request, Response};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("decode failed: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>, CodecError> {
    Ok(rmp_serde::to_vec_named(message)?)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(rmp_serde::from_slice(bytes)?)
}

pub fn encode_request(request: &Request) -> Result<Vec<u8>, CodecError> {
    encode(request)
}

pub fn decode_request(bytes: &[u8]) -> Result<Request, CodecError> {
    decode(bytes)
}

pub fn encode_response(response: &Response) -> Result<Vec<u8>, CodecError> {
    encode(response)
}

pub fn decode_response(bytes: &[u8]) -> Result<Response, CodecError> {
    decode(bytes)
}
