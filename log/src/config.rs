//! Configuration options for creating a [`Log`](crate::Log).

/// Configuration for creating a [`Log`](crate::Log).
///
/// # Example
///
/// ```
/// use proglog::{Config, Log};
///
/// let log = Log::with_config(Config {
///     initial_capacity: 1024,
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of records to reserve space for up front.
    ///
    /// This is only a sizing hint. The log grows past it as needed and
    /// never rejects an append. Defaults to `0`.
    pub initial_capacity: usize,
}
