//! Report construction failures.
use thiserror::Error;

use crate::resources::ResourceKind;

/// Invariant violations surfaced while reading a malformed snapshot.
///
/// These are programmer errors in the engine collaborator, not expected
/// runtime conditions. Nothing here is retried or coerced; either a full
/// report is produced or the call fails atomically.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The engine reported more budget remaining than it started with.
    #[error("budget remaining {remaining} exceeds initial {initial}")]
    BudgetOverflow { initial: u32, remaining: u32 },
    /// The collected-resource tally listed the same kind twice.
    #[error("duplicate resource kind {0} in collected tally")]
    DuplicateResource(ResourceKind),
    /// The rendered document could not be stringified.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
