//! Core data types for proglog.

use bytes::Bytes;

/// Position of a record within the log.
///
/// Offsets are zero-based and contiguous: the n-th appended record is
/// stored at offset `n - 1`.
pub type Offset = u64;

/// A record stored in the log.
///
/// The `offset` is owned by the log. Whatever a caller puts there before
/// calling [`Log::append`](crate::Log::append) is overwritten with the
/// offset the record is actually stored at.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use proglog::Record;
///
/// let record = Record::new(Bytes::from(r#"{"id": "123"}"#));
/// assert_eq!(record.offset, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// The record payload. The log does not interpret or validate it.
    pub value: Bytes,

    /// The offset assigned at append time.
    pub offset: Offset,
}

impl Record {
    /// Creates a record with the given value and an unassigned offset.
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self {
            value: value.into(),
            offset: 0,
        }
    }
}
