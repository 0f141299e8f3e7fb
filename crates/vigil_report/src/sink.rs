//! Thread-safe check record accumulator shared between runs.

use crate::record::CheckRecord;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A thread-safe accumulator for check records.
///
/// Several concurrently running benches can emit into one sink via
/// [`emit`](Self::emit). The failure count is tracked atomically so
/// `has_failures` never takes the lock.
#[derive(Debug)]
pub struct ReportSink {
    records: Mutex<Vec<CheckRecord>>,
    failure_count: AtomicUsize,
}

impl ReportSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure_count: AtomicUsize::new(0),
        }
    }

    /// Emits a record into the sink.
    ///
    /// Failing outcomes increment the failure count atomically.
    pub fn emit(&self, record: CheckRecord) {
        if record.outcome.is_failure() {
            self.failure_count.fetch_add(1, Ordering::Relaxed);
        }
        self.lock().push(record);
    }

    /// Returns `true` if any failing record has been emitted.
    pub fn has_failures(&self) -> bool {
        self.failure_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of failing records emitted so far.
    pub fn failure_count(&self) -> usize {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated records, leaving the sink empty.
    pub fn take_all(&self) -> Vec<CheckRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a snapshot of all accumulated records without draining.
    pub fn records(&self) -> Vec<CheckRecord> {
        self.lock().clone()
    }

    /// Returns a snapshot of the records emitted for one bench.
    pub fn records_for(&self, bench: &str) -> Vec<CheckRecord> {
        self.lock()
            .iter()
            .filter(|r| r.bench == bench)
            .cloned()
            .collect()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec, so the
    // poisoned data is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<CheckRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ReportSink {
    fn default() -> Self {
        Self::new()
    }
}
