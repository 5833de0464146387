//! HTTP request decoding for the log server.
//!
//! Bodies are decoded as JSON regardless of the `Content-Type` header.
//! Only the first JSON value in the body is read; anything after it is
//! ignored. Object keys are matched case-insensitively, so `"Record"` and
//! `"record"` name the same field, and a top-level `null` decodes as an
//! empty request.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::json;
use crate::Error;
use crate::model::{Offset, Record};

fn invalid_json(e: impl std::fmt::Display) -> Error {
    Error::InvalidInput(format!("Invalid JSON: {}", e))
}

/// Lowercase every object key so field lookup ignores case.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

fn from_json<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, Error> {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| invalid_json("EOF while parsing a value"))?
        .map_err(invalid_json)?;

    let request = Option::<T>::deserialize(fold_keys(value)).map_err(invalid_json)?;
    Ok(request.unwrap_or_default())
}

/// Decoded append request.
#[derive(Debug)]
pub struct AppendRequest {
    /// Record to append. Its offset is overwritten by the log.
    pub record: Record,
}

impl AppendRequest {
    /// Parse an append request from the raw body.
    pub fn from_body(body: &[u8]) -> Result<Self, Error> {
        let request: json::ProduceRequest = from_json(body)?;
        Ok(Self {
            record: request.record.into(),
        })
    }
}

/// Decoded read request.
#[derive(Debug)]
pub struct ReadRequest {
    /// Offset of the record to read.
    pub offset: Offset,
}

impl ReadRequest {
    /// Parse a read request from the raw body.
    pub fn from_body(body: &[u8]) -> Result<Self, Error> {
        let request: json::ConsumeRequest = from_json(body)?;
        Ok(Self {
            offset: request.offset,
        })
    }
}
