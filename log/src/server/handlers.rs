//! HTTP route handlers for the log server.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::error::ApiError;
use super::json::{ConsumeResponse, ProduceResponse};
use super::request::{AppendRequest, ReadRequest};
use crate::{Log, LogRead};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Log>,
}

/// Handle POST /
///
/// Appends the record in the body and returns the offset it was stored at.
/// Any offset supplied by the client is ignored.
pub async fn handle_produce(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProduceResponse>, ApiError> {
    let request = AppendRequest::from_body(&body)?;
    let size = request.record.value.len();

    let offset = state.log.append(request.record);
    tracing::debug!(offset, size, "appended record");

    Ok(Json(ProduceResponse { offset }))
}

/// Handle GET /
///
/// Returns the record stored at the offset given in the body.
pub async fn handle_consume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConsumeResponse>, ApiError> {
    let request = ReadRequest::from_body(&body)?;

    let record = state.log.read(request.offset)?;
    tracing::debug!(offset = record.offset, "read record");

    Ok(Json(ConsumeResponse {
        record: record.into(),
    }))
}
