//! Session report assembly and JSON rendering.
use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use serde_json::{Value, json};

use crate::error::ReportError;
use crate::metrics::SessionMetrics;
use crate::snapshot::SessionSnapshot;
use crate::stats::flatten_stats;
use crate::tally::{ResourceTallyEntry, build_tally};
use crate::verdict::{Verdict, verdict};

/// End-of-session summary over a borrowed snapshot.
///
/// The collected tally and the flattened event log are materialized once at
/// construction; every other accessor reads the live snapshot on each call.
/// A report meant to be fully consistent should therefore be built after the
/// run has finished. One report serves one snapshot; build a new one for a
/// new run.
pub struct SessionReport<'a, S: SessionSnapshot> {
    session: &'a S,
    collected: Vec<ResourceTallyEntry>,
    stats: BTreeMap<String, String>,
    elapsed: Option<Duration>,
}

impl<'a, S: SessionSnapshot> SessionReport<'a, S> {
    /// Build a report over `session`, eagerly capturing the resource tally
    /// and the flattened event log.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot violates the tally or budget invariants.
    pub fn new(session: &'a S) -> Result<Self, ReportError> {
        let collected = build_tally(session.collected_resources())?;
        let stats = flatten_stats(session.stats_log());
        let report = Self {
            session,
            collected,
            stats,
            elapsed: None,
        };
        report.metrics().budget()?;
        Ok(report)
    }

    const fn metrics(&self) -> SessionMetrics<'a, S> {
        SessionMetrics::new(self.session)
    }

    /// Collected-resource tally, frozen at construction time.
    #[must_use]
    pub fn collected(&self) -> &[ResourceTallyEntry] {
        &self.collected
    }

    /// Flattened event log, frozen at construction time.
    #[must_use]
    pub const fn stats(&self) -> &BTreeMap<String, String> {
        &self.stats
    }

    #[must_use]
    pub fn visited(&self) -> usize {
        self.metrics().visited_count()
    }

    #[must_use]
    pub fn scanned(&self) -> usize {
        self.metrics().scanned_count()
    }

    /// Number of objectives declared for the session.
    #[must_use]
    pub fn contract_max(&self) -> usize {
        self.metrics().objective_count()
    }

    #[must_use]
    pub fn result(&self) -> Verdict {
        verdict(self.session)
    }

    /// # Errors
    ///
    /// Fails when the live budget violates its invariant.
    pub fn initial(&self) -> Result<u32, ReportError> {
        self.metrics().budget_initial()
    }

    /// # Errors
    ///
    /// Fails when the live budget violates its invariant.
    pub fn remaining(&self) -> Result<u32, ReportError> {
        self.metrics().budget_remaining()
    }

    /// Legacy alias of [`Self::remaining`]; the wire schema carries both.
    ///
    /// # Errors
    ///
    /// Fails when the live budget violates its invariant.
    pub fn size(&self) -> Result<u32, ReportError> {
        self.metrics().size()
    }

    /// Wall-clock duration of the run, when the host recorded one. Not part
    /// of the rendered document.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub const fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    /// Render the report document.
    ///
    /// Field names are a compatibility contract with existing consumers, so
    /// the document is assembled field by field rather than derived; internal
    /// renames can never leak into the wire format. Live fields reflect the
    /// snapshot at call time, the tally and stats stay frozen.
    ///
    /// # Errors
    ///
    /// Fails when the live budget violates its invariant.
    pub fn render(&self) -> Result<Value, ReportError> {
        let budget = self.metrics().budget()?;
        let collected: Vec<Value> = self
            .collected
            .iter()
            .map(|entry| {
                json!({
                    "res": entry.kind.to_string(),
                    "amount": entry.amount,
                })
            })
            .collect();
        debug!(
            "rendering session report: {} tally entries, {} stat categories",
            self.collected.len(),
            self.stats.len()
        );
        Ok(json!({
            "collected": collected,
            "visited": self.visited(),
            "scanned": self.scanned(),
            "contractMax": self.contract_max(),
            "result": self.result().as_str(),
            "initial": budget.initial,
            "remaining": budget.remaining,
            "stats": self.stats,
            "size": budget.remaining,
        }))
    }

    /// Render and stringify in one step.
    ///
    /// # Errors
    ///
    /// Fails when rendering fails or the document cannot be stringified.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(&self.render()?)?)
    }
}
