//! Ordered recording of hook invocations.
//!
//! Pipeline hooks are `'static` closures, so tests cannot borrow a local
//! vector from inside them. A [`CallLog`] is a cheaply cloned handle to one
//! shared log: hand a clone to every closure and assert on the combined
//! order afterwards.
//!
//! # Examples
//!
//! ```
//! use test_helpers::recorder::CallLog;
//!
//! let log = CallLog::new();
//! let hook = {
//!     let log = log.clone();
//!     move || log.record("hook")
//! };
//! hook();
//! log.record("after");
//! assert_eq!(log.calls(), ["hook", "after"]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared, ordered log of call labels.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label` to the log.
    pub fn record(&self, label: impl Into<String>) {
        self.calls.lock().push(label.into());
    }

    /// Snapshot of every label recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Returns `true` when `label` has been recorded at least once.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.calls.lock().iter().any(|call| call == label)
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CallLog;

    #[test]
    fn clones_share_one_log() {
        let log = CallLog::new();
        let other = log.clone();
        log.record("first");
        other.record("second");
        assert_eq!(log.calls(), ["first", "second"]);
        assert_eq!(other.len(), 2);
        assert!(log.contains("second"));
        assert!(!log.contains("third"));
    }

    #[test]
    fn new_log_is_empty() {
        assert!(CallLog::new().is_empty());
    }
}
