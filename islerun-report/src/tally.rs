//! Collected-resource tally reduction.
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::resources::ResourceKind;

/// One collected resource kind with its accumulated amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTallyEntry {
    pub kind: ResourceKind,
    pub amount: u32,
}

/// Reduce the engine's collected-resource pairs into tally entries.
///
/// Entries preserve the source iteration order verbatim; callers must not
/// assume any numeric or alphabetic sort. An empty source yields an empty
/// list.
///
/// # Errors
///
/// Fails when the source lists the same kind twice, which a well-formed
/// engine session never produces.
pub fn build_tally(
    source: &[(ResourceKind, u32)],
) -> Result<Vec<ResourceTallyEntry>, ReportError> {
    let mut entries: Vec<ResourceTallyEntry> = Vec::with_capacity(source.len());
    for &(kind, amount) in source {
        if entries.iter().any(|entry| entry.kind == kind) {
            return Err(ReportError::DuplicateResource(kind));
        }
        trace!("tally {kind}: {amount}");
        entries.push(ResourceTallyEntry { kind, amount });
    }
    Ok(entries)
}
