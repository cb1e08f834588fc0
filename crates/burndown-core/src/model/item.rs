//! Work Item Entity
//!
//! A single piece of homework, either worth a fixed number of points or
//! repeated over a number of units (pages, days, problems).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Opaque item identifier, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id assigned to the item at `index` of a decoded share link.
    pub fn positional(index: usize) -> Self {
        Self(format!("{}{}", defaults::DECODED_ID_PREFIX, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How an item is worth its points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Workload {
    /// Worth `points` as a whole
    Fixed { points: u32 },
    /// Worth `points_per_unit` for each of `units` units
    Repeating {
        points_per_unit: u32,
        units: u32,
        unit_name: String,
    },
}

impl Workload {
    pub fn effective_points(&self) -> u64 {
        match self {
            Workload::Fixed { points } => u64::from(*points),
            Workload::Repeating {
                points_per_unit,
                units,
                ..
            } => u64::from(*points_per_unit) * u64::from(*units),
        }
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Workload::Repeating { .. })
    }
}

/// A homework item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: ItemId,
    pub name: String,
    #[serde(flatten)]
    pub workload: Workload,
}

impl WorkItem {
    pub fn fixed(id: ItemId, name: impl Into<String>, points: u32) -> Self {
        Self {
            id,
            name: name.into(),
            workload: Workload::Fixed { points },
        }
    }

    pub fn repeating(
        id: ItemId,
        name: impl Into<String>,
        points_per_unit: u32,
        units: u32,
        unit_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            workload: Workload::Repeating {
                points_per_unit,
                units,
                unit_name: unit_name.into(),
            },
        }
    }

    pub fn effective_points(&self) -> u64 {
        self.workload.effective_points()
    }

    /// Breakdown shown next to the points, e.g. `1pt × 15 page`.
    pub fn detail(&self) -> Option<String> {
        match &self.workload {
            Workload::Fixed { .. } => None,
            Workload::Repeating {
                points_per_unit,
                units,
                unit_name,
            } => Some(format!("{}pt × {} {}", points_per_unit, units, unit_name)),
        }
    }

    /// Same content with another id
    pub fn with_id(self, id: ItemId) -> Self {
        Self { id, ..self }
    }
}
