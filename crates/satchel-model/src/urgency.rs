use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest day count still classified as [`Urgency::Urgent`].
pub const URGENT_MAX_DAYS: i64 = 2;

/// Largest day count still classified as [`Urgency::Upcoming`].
pub const UPCOMING_MAX_DAYS: i64 = 7;

/// Urgency bucket of an assignment relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Due within [`URGENT_MAX_DAYS`] days, today included.
    Urgent,
    /// Due within [`UPCOMING_MAX_DAYS`] days but not urgent.
    Upcoming,
    /// Due further out, or the due date could not be read.
    Later,
    /// The due date has already passed.
    Overdue,
}

impl Urgency {
    /// Bucket order used when presenting a schedule: actionable work
    /// first, missed work last.
    pub const DISPLAY_ORDER: [Urgency; 4] = [
        Urgency::Urgent,
        Urgency::Upcoming,
        Urgency::Later,
        Urgency::Overdue,
    ];

    /// Classifies a whole-day distance to the due date.
    ///
    /// `None` marks a due date that could not be interpreted; such
    /// records land in [`Urgency::Later`] rather than being dropped.
    pub fn for_days_left(days_left: Option<i64>) -> Self {
        match days_left {
            None => Urgency::Later,
            Some(days) if days < 0 => Urgency::Overdue,
            Some(days) if days <= URGENT_MAX_DAYS => Urgency::Urgent,
            Some(days) if days <= UPCOMING_MAX_DAYS => Urgency::Upcoming,
            Some(_) => Urgency::Later,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Urgent => "URGENT",
            Urgency::Upcoming => "UPCOMING",
            Urgency::Later => "LATER",
            Urgency::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
