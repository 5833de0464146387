//! HTTP server for proglog.
//!
//! Exposes a single resource at `/`:
//! - `POST /` appends the record in the JSON body and returns its offset.
//! - `GET /` reads the record at the offset given in the JSON body.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod json;
pub mod middleware;
pub mod request;

pub use config::{CliArgs, LogServerConfig};
pub use http::{LogServer, build_router};
