use std::sync::{Mutex, PoisonError};

use crate::checker::{ScanNotice, Violation};

#[derive(Default)]
struct Collected {
    violations: Vec<Violation>,
    notices: Vec<ScanNotice>,
    files_scanned: usize,
}

/// Everything gathered during a scan, in deterministic order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CollectedScan {
    pub violations: Vec<Violation>,
    pub notices: Vec<ScanNotice>,
    pub files_scanned: usize,
}

/// Append-only sink shared by scan workers.
///
/// Workers only ever append; ordering is restored once, when the scan is
/// finished, so the result does not depend on thread scheduling.
#[derive(Default)]
pub struct ViolationCollector {
    inner: Mutex<Collected>,
}

impl ViolationCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the violations of one successfully scanned file.
    pub fn record(&self, violations: Vec<Violation>) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.violations.extend(violations);
        inner.files_scanned += 1;
    }

    /// Record a file that could not be scanned.
    pub fn notice(&self, notice: ScanNotice) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notices
            .push(notice);
    }

    /// Consume the collector, sorting violations by path, line and rule and
    /// notices by path.
    #[must_use]
    pub fn finish(self) -> CollectedScan {
        let Collected {
            mut violations,
            mut notices,
            files_scanned,
        } = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);

        violations.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        notices.sort_by(|a, b| a.path.cmp(&b.path));

        CollectedScan {
            violations,
            notices,
            files_scanned,
        }
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
