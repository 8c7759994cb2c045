//! Graph searches over the board: single-target shortest paths and
//! collect-all pawn pursuit.

pub mod collect;
pub mod resources;
pub mod target;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// The frontier emptied before the goal condition was satisfied.
    ///
    /// This is a logical dead end, not a crash; it is never conflated with
    /// a zero-move result.
    Unreachable { stage: &'static str },
    /// The configured expansion budget was exceeded.
    LimitExceeded {
        stage: &'static str,
        limit: u64,
        observed: u64,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Unreachable { stage } => {
                write!(f, "goal unreachable at {stage}: frontier exhausted")
            }
            SearchError::LimitExceeded {
                stage,
                limit,
                observed,
            } => write!(
                f,
                "limit exceeded at {stage}: expansions (limit={limit}, observed={observed})"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
