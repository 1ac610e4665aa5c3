//! Chronological engine event log and its flattened form.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category of an engine event, as recorded in the session statistics log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventCategory {
    /// A resource was discovered on a cell.
    Found,
    /// An explorer moved.
    Move,
    /// A cell was scanned.
    Scan,
    /// A long-range echo was emitted.
    Echo,
    /// The expedition landed.
    Land,
    /// The expedition stopped.
    Stop,
}

impl EventCategory {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Found => "FOUND",
            Self::Move => "MOVE",
            Self::Scan => "SCAN",
            Self::Echo => "ECHO",
            Self::Land => "LAND",
            Self::Stop => "STOP",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One timestamped entry of the engine's statistics log. The log is
/// append-only and chronological; the engine owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub category: EventCategory,
    pub description: String,
}

impl EventRecord {
    pub fn new(category: EventCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
        }
    }
}

/// Flatten the chronological log into one description per category.
///
/// Later records overwrite earlier ones for the same category, so the map
/// keeps the last occurrence. The reduction is deliberately lossy; consumers
/// wanting first-occurrence semantics must not use this.
#[must_use]
pub fn flatten_stats(log: &[EventRecord]) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for event in log {
        flat.insert(event.category.to_string(), event.description.clone());
    }
    flat
}
