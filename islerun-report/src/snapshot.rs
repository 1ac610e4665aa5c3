//! Read-only view of a finished or in-progress simulation session.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;
use crate::stats::EventRecord;

/// Identifier of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId {
    pub x: u32,
    pub y: u32,
}

impl CellId {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A contract declared for the session: collect `amount` of `resource`.
///
/// Only the number of declared objectives feeds the report; their structure
/// is kept for hosts that display contract details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub resource: ResourceKind,
    pub amount: u32,
}

/// Consumable action budget for the session. The engine guarantees
/// `remaining <= initial`; the report re-checks it defensively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub initial: u32,
    pub remaining: u32,
}

impl Budget {
    #[must_use]
    pub const fn new(initial: u32, remaining: u32) -> Self {
        Self { initial, remaining }
    }

    /// Budget consumed so far.
    #[must_use]
    pub const fn spent(self) -> u32 {
        self.initial.saturating_sub(self.remaining)
    }
}

/// Read-only accessors the report builder consumes from the engine.
///
/// The engine owns every collection returned here; the report never mutates
/// them and assumes no concurrent mutation while an accessor call is in
/// flight. `collected_resources` iterates in the engine's insertion order and
/// holds each kind at most once.
pub trait SessionSnapshot {
    fn collected_resources(&self) -> &[(ResourceKind, u32)];
    fn visited(&self) -> &HashSet<CellId>;
    fn scanned(&self) -> &HashSet<CellId>;
    fn objectives(&self) -> &[Objective];
    fn budget(&self) -> Budget;
    fn is_correct(&self) -> bool;
    fn stats_log(&self) -> &[EventRecord];
}

/// Owned snapshot for harnesses and tests that capture engine state by value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySession {
    pub collected: Vec<(ResourceKind, u32)>,
    pub visited: HashSet<CellId>,
    pub scanned: HashSet<CellId>,
    pub objectives: Vec<Objective>,
    pub budget: Budget,
    pub correct: bool,
    pub stats: Vec<EventRecord>,
}

impl SessionSnapshot for MemorySession {
    fn collected_resources(&self) -> &[(ResourceKind, u32)] {
        &self.collected
    }

    fn visited(&self) -> &HashSet<CellId> {
        &self.visited
    }

    fn scanned(&self) -> &HashSet<CellId> {
        &self.scanned
    }

    fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    fn budget(&self) -> Budget {
        self.budget
    }

    fn is_correct(&self) -> bool {
        self.correct
    }

    fn stats_log(&self) -> &[EventRecord] {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_spent_saturates() {
        assert_eq!(Budget::new(1000, 770).spent(), 230);
        assert_eq!(Budget::new(0, 0).spent(), 0);
        // Malformed budgets are rejected elsewhere; spent never underflows.
        assert_eq!(Budget::new(10, 20).spent(), 0);
    }

    #[test]
    fn memory_session_forwards_every_accessor() {
        let session = MemorySession {
            collected: vec![(ResourceKind::Wood, 3)],
            visited: [CellId::new(0, 0), CellId::new(1, 0)].into_iter().collect(),
            scanned: [CellId::new(0, 0)].into_iter().collect(),
            objectives: vec![Objective {
                resource: ResourceKind::Wood,
                amount: 10,
            }],
            budget: Budget::new(100, 40),
            correct: true,
            stats: vec![],
        };
        assert_eq!(session.collected_resources().len(), 1);
        assert_eq!(session.visited().len(), 2);
        assert_eq!(session.scanned().len(), 1);
        assert_eq!(session.objectives().len(), 1);
        assert_eq!(session.budget(), Budget::new(100, 40));
        assert!(session.is_correct());
        assert!(session.stats_log().is_empty());
    }
}
