//! JSON message definitions for the log server HTTP API.
//!
//! Record values travel as standard base64 strings. Decoding is lenient:
//! unknown fields are ignored, and missing or `null` fields take their zero
//! value. Field names are matched case-insensitively by
//! [`request`](super::request) before these types see them.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, base64::Base64, serde_as};

/// Record as it appears on the wire.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde_as(as = "Option<Base64>")]
    pub value: Option<Bytes>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub offset: u64,
}

impl From<crate::Record> for Record {
    fn from(record: crate::Record) -> Self {
        Self {
            value: Some(record.value),
            offset: record.offset,
        }
    }
}

impl From<Record> for crate::Record {
    fn from(record: Record) -> Self {
        Self {
            value: record.value.unwrap_or_default(),
            offset: record.offset,
        }
    }
}

/// ProduceRequest is the request body for POST /.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProduceRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub record: Record,
}

/// ProduceResponse is the response for POST /.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduceResponse {
    pub offset: u64,
}

/// ConsumeRequest is the request body for GET /.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumeRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub offset: u64,
}

/// ConsumeResponse is the response for GET /.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumeResponse {
    pub record: Record,
}
