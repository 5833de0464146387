//! Core Log implementation.
//!
//! This module provides the [`Log`] struct, the primary entry point for
//! interacting with proglog. It exposes the write operation ([`Log::append`])
//! directly and read operations via the [`LogRead`] trait.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Offset, Record};
use crate::reader::{LogRead, LogReader};

/// The main log interface providing append and read operations.
///
/// # Thread Safety
///
/// `Log` is designed to be shared across threads, typically as an
/// `Arc<Log>`. All methods take `&self`. A single mutex guards the record
/// sequence, and every operation holds it for its full duration, so the
/// length check and the access it guards are atomic with respect to other
/// operations on the same log. Offsets are assigned in lock acquisition
/// order.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use proglog::{Error, Log, LogRead, Record};
///
/// let log = Log::new();
/// assert_eq!(log.append(Record::new(Bytes::from("abc"))), 0);
/// assert_eq!(log.append(Record::new(Bytes::from("def"))), 1);
///
/// assert_eq!(log.read(0).unwrap().value, Bytes::from("abc"));
/// assert!(matches!(log.read(5), Err(Error::OffsetNotFound { offset: 5 })));
/// ```
#[derive(Debug, Default)]
pub struct Log {
    records: Mutex<Vec<Record>>,
}

impl Log {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty log with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            records: Mutex::new(Vec::with_capacity(config.initial_capacity)),
        }
    }

    /// Appends a record to the end of the log and returns its offset.
    ///
    /// The record's `offset` field is overwritten with the assigned offset,
    /// which is the length of the log before the append. Appending never
    /// fails, and appending the same value twice stores two records.
    pub fn append(&self, mut record: Record) -> Offset {
        let mut records = self.records.lock();
        let offset = records.len() as Offset;
        record.offset = offset;
        records.push(record);
        offset
    }

    /// Returns a read-only handle to this log.
    pub fn reader(self: &Arc<Self>) -> LogReader {
        LogReader::new(Arc::clone(self))
    }
}

impl LogRead for Log {
    fn read(&self, offset: Offset) -> Result<Record> {
        let records = self.records.lock();
        usize::try_from(offset)
            .ok()
            .and_then(|index| records.get(index))
            .cloned()
            .ok_or(Error::OffsetNotFound { offset })
    }

    fn len(&self) -> u64 {
        self.records.lock().len() as u64
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::thread;

    use bytes::Bytes;

    use super::*;

    fn record(value: &'static str) -> Record {
        Record::new(Bytes::from_static(value.as_bytes()))
    }

    #[test]
    fn should_assign_contiguous_offsets_from_zero() {
        // given
        let log = Log::new();

        // when
        let first = log.append(record("abc"));
        let second = log.append(record("def"));

        // then
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn should_read_appended_record_with_assigned_offset() {
        // given
        let log = Log::new();
        log.append(record("abc"));
        log.append(record("def"));

        // when
        let read = log.read(0).unwrap();

        // then
        assert_eq!(
            read,
            Record {
                value: Bytes::from("abc"),
                offset: 0
            }
        );
    }

    #[test]
    fn should_fail_with_offset_not_found_past_end() {
        // given
        let log = Log::new();
        log.append(record("abc"));
        log.append(record("def"));

        // when
        let result = log.read(5);

        // then
        assert!(matches!(result, Err(Error::OffsetNotFound { offset: 5 })));
    }

    #[test]
    fn should_fail_with_offset_not_found_at_length() {
        // given
        let log = Log::new();
        log.append(record("abc"));

        // when
        let result = log.read(1);

        // then
        assert!(matches!(result, Err(Error::OffsetNotFound { offset: 1 })));
    }

    #[test]
    fn should_fail_to_read_from_empty_log() {
        // given
        let log = Log::new();

        // when/then
        assert!(log.is_empty());
        assert!(matches!(
            log.read(0),
            Err(Error::OffsetNotFound { offset: 0 })
        ));
        assert!(matches!(
            log.read(u64::MAX),
            Err(Error::OffsetNotFound { offset: u64::MAX })
        ));
    }

    #[test]
    fn should_return_identical_record_on_repeated_reads() {
        // given
        let log = Log::new();
        log.append(record("abc"));

        // when
        let first = log.read(0).unwrap();
        let second = log.read(0).unwrap();

        // then
        assert_eq!(first, second);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn should_store_duplicate_values_at_distinct_offsets() {
        // given
        let log = Log::new();

        // when
        let first = log.append(record("same"));
        let second = log.append(record("same"));

        // then
        assert_ne!(first, second);
        assert_eq!(log.read(first).unwrap().value, log.read(second).unwrap().value);
    }

    #[test]
    fn should_ignore_caller_supplied_offset() {
        // given
        let log = Log::new();
        let record = Record {
            value: Bytes::from("abc"),
            offset: 42,
        };

        // when
        let offset = log.append(record);

        // then
        assert_eq!(offset, 0);
        assert_eq!(log.read(0).unwrap().offset, 0);
        assert!(log.read(42).is_err());
    }

    #[test]
    fn should_not_expose_storage_through_returned_record() {
        // given
        let log = Log::new();
        log.append(record("abc"));

        // when
        let mut read = log.read(0).unwrap();
        read.value = Bytes::from("changed");
        read.offset = 7;

        // then
        assert_eq!(log.read(0).unwrap(), Record::new(Bytes::from("abc")));
    }

    #[test]
    fn should_treat_initial_capacity_as_hint_only() {
        // given
        let log = Log::with_config(Config {
            initial_capacity: 1,
        });

        // when
        for _ in 0..10 {
            log.append(record("v"));
        }

        // then
        assert_eq!(log.len(), 10);
    }

    #[test]
    fn should_assign_unique_gapless_offsets_under_concurrent_appends() {
        // given
        let log = Log::new();
        let threads = 8;
        let per_thread = 250;

        // when
        let offsets: Vec<Offset> = thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let log = &log;
                    scope.spawn(move || {
                        (0..per_thread)
                            .map(|i| log.append(Record::new(format!("{}-{}", t, i))))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        // then
        let total = (threads * per_thread) as u64;
        let unique: BTreeSet<Offset> = offsets.iter().copied().collect();
        assert_eq!(offsets.len() as u64, total);
        assert_eq!(unique, (0..total).collect::<BTreeSet<_>>());
        for offset in 0..total {
            assert_eq!(log.read(offset).unwrap().offset, offset);
        }
    }

    #[test]
    fn should_preserve_per_writer_order_under_concurrent_appends() {
        // given
        let log = Log::new();

        // when
        thread::scope(|scope| {
            for t in 0..4 {
                let log = &log;
                scope.spawn(move || {
                    for i in 0..100 {
                        log.append(Record::new(format!("{}-{}", t, i)));
                    }
                });
            }
        });

        // then
        let mut last_seen = [None::<u32>; 4];
        for offset in 0..log.len() {
            let value = log.read(offset).unwrap().value;
            let text = std::str::from_utf8(&value).unwrap();
            let (t, i) = text.split_once('-').unwrap();
            let (t, i): (usize, u32) = (t.parse().unwrap(), i.parse().unwrap());
            assert!(last_seen[t].is_none_or(|prev| prev < i));
            last_seen[t] = Some(i);
        }
    }
}
