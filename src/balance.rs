//! Decimal text encoding of account balances.
//!
//! A balance is stored as the UTF-8 digits of a signed 64-bit integer, with
//! an optional leading `+` or `-` accepted on decode. Anything else (empty
//! input, whitespace, fractions, non-UTF-8 bytes) fails to decode.

use std::num::ParseIntError;
use std::str;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("balance is not utf-8: {0}")]
    Utf8(#[from] str::Utf8Error),
    #[error(transparent)]
    Int(#[from] ParseIntError),
}

pub fn decode(raw: &[u8]) -> Result<i64, DecodeError> {
    Ok(parse(str::from_utf8(raw)?)?)
}

pub fn parse(text: &str) -> Result<i64, ParseIntError> {
    text.parse::<i64>()
}

pub fn encode(balance: i64) -> Vec<u8> {
    balance.to_string().into_bytes()
}
