//! Expansion and enqueue budgets for search routines.
//!
//! The collect search keeps no cross-branch visited set, so a pathological
//! pawn spread can make its frontier very large before a solution pops. A
//! misconfigured or adversarial caller should hit a budget error rather
//! than chew through memory; the tracker counts node expansions and
//! frontier pushes and fails past the configured caps.

use crate::search::SearchError;

#[derive(Debug, Clone, Copy)]
/// Search budgets. The defaults cover any realistic 8×8 scenario.
///
/// `max_expansions` bounds dequeued nodes (runtime); `max_enqueued` bounds
/// pushed branches, which dominate memory in the collect search.
pub struct SearchLimits {
    pub max_expansions: u64,
    pub max_enqueued: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
            max_enqueued: 5_000_000,
        }
    }
}

#[derive(Debug, Clone)]
/// Tracks counters against a [`SearchLimits`] budget.
pub struct ResourceTracker {
    limits: SearchLimits,
    expansions: u64,
    enqueued: u64,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            expansions: 0,
            enqueued: 0,
        }
    }

    #[inline]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued
    }

    /// Counts one node expansion, failing once the budget is exceeded.
    #[inline]
    pub fn bump_expansions(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.expansions += 1;
        if self.expansions > self.limits.max_expansions {
            return Err(SearchError::LimitExceeded {
                stage,
                limit: self.limits.max_expansions,
                observed: self.expansions,
            });
        }
        Ok(())
    }

    /// Counts one frontier push, failing once the budget is exceeded.
    #[inline]
    pub fn bump_enqueued(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.enqueued += 1;
        if self.enqueued > self.limits.max_enqueued {
            return Err(SearchError::LimitExceeded {
                stage,
                limit: self.limits.max_enqueued,
                observed: self.enqueued,
            });
        }
        Ok(())
    }
}
