//! Concurrent, deduplicating collection of problems and usages.

use crossbeam_skiplist::SkipSet;

use crate::problems::{ApiUsage, CompatibilityProblem};

/// The sink every verifier reports into.
///
/// Both channels are append-only concurrent sets ordered by the records' `Ord`:
/// inserting from many worker threads needs no locking, and a problem produced
/// twice - the same broken reference in two methods compiles to value-equal
/// records only when every field matches, so "twice" really means the same
/// finding - collapses to one entry. Snapshots are sorted, which is what makes
/// repeated runs comparable.
#[derive(Debug, Default)]
pub struct ProblemReporter {
    problems: SkipSet<CompatibilityProblem>,
    usages: SkipSet<ApiUsage>,
}

impl ProblemReporter {
    /// An empty reporter.
    #[must_use]
    pub fn new() -> Self {
        ProblemReporter {
            problems: SkipSet::new(),
            usages: SkipSet::new(),
        }
    }

    /// Record a compatibility problem. Duplicates collapse by value equality.
    pub fn report(&self, problem: CompatibilityProblem) {
        log::debug!("compatibility problem: {problem}");
        self.problems.insert(problem);
    }

    /// Record a deprecated/experimental API usage. Duplicates collapse by
    /// value equality.
    pub fn report_usage(&self, usage: ApiUsage) {
        log::debug!("api usage: {usage}");
        self.usages.insert(usage);
    }

    /// Snapshot of all problems recorded so far, in `Ord` order.
    #[must_use]
    pub fn problems(&self) -> Vec<CompatibilityProblem> {
        self.problems.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Snapshot of all usages recorded so far, in `Ord` order.
    #[must_use]
    pub fn usages(&self) -> Vec<ApiUsage> {
        self.usages.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Number of distinct problems recorded.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }

    /// Number of distinct usages recorded.
    #[must_use]
    pub fn usage_count(&self) -> usize {
        self.usages.len()
    }

    /// True when neither problems nor usages were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty() && self.usages.is_empty()
    }
}
