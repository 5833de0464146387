//! Read-only log access and the [`LogRead`] trait.
//!
//! This module provides:
//! - [`LogRead`]: The trait defining read operations on the log.
//! - [`LogReader`]: A read-only view of a shared log that implements `LogRead`.

use std::sync::Arc;

use crate::error::Result;
use crate::log::Log;
use crate::model::{Offset, Record};

/// Trait for read operations on the log.
///
/// # Implementors
///
/// - [`Log`]: The main log interface with both append and read access.
/// - [`LogReader`]: A read-only view of the log.
///
/// # Example
///
/// ```
/// use proglog::{LogRead, Record, Result};
///
/// fn last_record(reader: &impl LogRead) -> Result<Option<Record>> {
///     match reader.len() {
///         0 => Ok(None),
///         len => reader.read(len - 1).map(Some),
///     }
/// }
/// ```
pub trait LogRead {
    /// Returns a copy of the record stored at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetNotFound`](crate::Error::OffsetNotFound) if
    /// `offset` is greater than or equal to the current length of the log.
    fn read(&self, offset: Offset) -> Result<Record>;

    /// Returns the number of records in the log, which is also the offset
    /// the next append will be assigned.
    fn len(&self) -> u64;

    /// Returns `true` if nothing has been appended yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A read-only view of a shared [`Log`].
///
/// Cloning a reader is cheap; all clones observe the same log, including
/// records appended after the reader was created.
#[derive(Debug, Clone)]
pub struct LogReader {
    log: Arc<Log>,
}

impl LogReader {
    pub(crate) fn new(log: Arc<Log>) -> Self {
        Self { log }
    }
}

impl LogRead for LogReader {
    fn read(&self, offset: Offset) -> Result<Record> {
        self.log.read(offset)
    }

    fn len(&self) -> u64 {
        self.log.len()
    }
}
