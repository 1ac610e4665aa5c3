//! Islerun Session Report
//!
//! End-of-session report builder for the islerun island-exploration
//! simulation. Reduces a finished or in-progress session into a flat,
//! serializable summary: collected resources, visited and scanned cells,
//! declared objectives, remaining budget, a pass/fail verdict, and a
//! flattened event log. The simulation engine itself is an external
//! collaborator reached only through the read-only [`SessionSnapshot`]
//! trait; this crate never mutates it.

pub mod error;
pub mod metrics;
pub mod report;
pub mod resources;
pub mod snapshot;
pub mod stats;
pub mod tally;
pub mod verdict;

// Re-export commonly used types
pub use error::ReportError;
pub use metrics::SessionMetrics;
pub use report::SessionReport;
pub use resources::ResourceKind;
pub use snapshot::{Budget, CellId, MemorySession, Objective, SessionSnapshot};
pub use stats::{EventCategory, EventRecord, flatten_stats};
pub use tally::{ResourceTallyEntry, build_tally};
pub use verdict::{Verdict, verdict};
