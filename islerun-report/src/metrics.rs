//! Scalar counters read live from the session snapshot.
use crate::error::ReportError;
use crate::snapshot::{Budget, SessionSnapshot};

/// Thin accessor layer over a borrowed snapshot.
///
/// Every method is a pure read and nothing is cached, so values track the
/// live session state at each call.
#[derive(Debug, Clone, Copy)]
pub struct SessionMetrics<'a, S: SessionSnapshot> {
    session: &'a S,
}

impl<'a, S: SessionSnapshot> SessionMetrics<'a, S> {
    #[must_use]
    pub const fn new(session: &'a S) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.session.visited().len()
    }

    #[must_use]
    pub fn scanned_count(&self) -> usize {
        self.session.scanned().len()
    }

    /// Number of objectives declared for the session, completed or not.
    #[must_use]
    pub fn objective_count(&self) -> usize {
        self.session.objectives().len()
    }

    /// Budget with the remaining-within-initial invariant checked.
    ///
    /// # Errors
    ///
    /// Fails when the engine reports more remaining than initial budget.
    pub fn budget(&self) -> Result<Budget, ReportError> {
        let budget = self.session.budget();
        if budget.remaining > budget.initial {
            return Err(ReportError::BudgetOverflow {
                initial: budget.initial,
                remaining: budget.remaining,
            });
        }
        Ok(budget)
    }

    /// # Errors
    ///
    /// Fails when the budget invariant does not hold.
    pub fn budget_initial(&self) -> Result<u32, ReportError> {
        Ok(self.budget()?.initial)
    }

    /// # Errors
    ///
    /// Fails when the budget invariant does not hold.
    pub fn budget_remaining(&self) -> Result<u32, ReportError> {
        Ok(self.budget()?.remaining)
    }

    /// Legacy alias of [`Self::budget_remaining`], kept because the wire
    /// schema carries both `size` and `remaining`.
    ///
    /// # Errors
    ///
    /// Fails when the budget invariant does not hold.
    pub fn size(&self) -> Result<u32, ReportError> {
        self.budget_remaining()
    }
}
