//! proglog - An in-memory, append-only log served over HTTP.
//!
//! The log is an ordered sequence of records. Every append is assigned the
//! next offset, starting from zero, and records are read back by offset.
//! Nothing is persisted; the log lives exactly as long as the process.
//!
//! # Key Concepts
//!
//! - **Log**: The main entry point providing both append and read operations.
//! - **LogReader**: A read-only view of a shared log, useful for consumers that
//!   should not have write access.
//! - **Offsets**: Each record is assigned an offset at append time. Offsets are
//!   contiguous, start at zero and never change once assigned.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use proglog::{Log, LogRead, Record};
//!
//! let log = Log::new();
//! let offset = log.append(Record::new(Bytes::from("abc")));
//! assert_eq!(offset, 0);
//!
//! let record = log.read(offset).unwrap();
//! assert_eq!(record.value, Bytes::from("abc"));
//! ```

mod config;
mod error;
mod log;
mod model;
mod reader;
#[cfg(feature = "http-server")]
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use log::Log;
pub use model::{Offset, Record};
pub use reader::{LogRead, LogReader};
