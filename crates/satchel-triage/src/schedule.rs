use chrono::NaiveDate;

use satchel_model::{AssignmentRecord, DueDate, RecordId, Urgency};

/// Calculates the whole-day distance from `today` to a due date.
///
/// Both endpoints are calendar dates, so the count is exact at every
/// urgency boundary regardless of the time of day: due tomorrow is `1`,
/// due today is `0`, due yesterday is `-1`.
///
/// Returns `None` when the due date cannot be read as `DD/MM/YYYY`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use satchel_model::DueDate;
/// use satchel_triage::days_left;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// assert_eq!(days_left(&DueDate::new("11/06/2025"), today), Some(1));
/// assert_eq!(days_left(&DueDate::new("05/06/2025"), today), Some(-5));
/// assert_eq!(days_left(&DueDate::new("soon"), today), None);
/// ```
pub fn days_left(due: &DueDate, today: NaiveDate) -> Option<i64> {
    let due = due.to_naive_date()?;
    Some(due.signed_duration_since(today).num_days())
}

/// One record together with its derived day count and urgency bucket.
#[derive(Debug, Clone, Copy)]
pub struct TriagedAssignment<'a> {
    pub record: &'a AssignmentRecord,
    /// `None` when the due date could not be read; rendered as `?`.
    pub days_left: Option<i64>,
    pub urgency: Urgency,
}

/// Records bucketed by urgency, each bucket ascending by day count
/// (most overdue first in the overdue bucket).
///
/// The schedule borrows the records it was built from; the underlying
/// collection keeps its own order.
#[derive(Debug, Default)]
pub struct Schedule<'a> {
    urgent: Vec<TriagedAssignment<'a>>,
    upcoming: Vec<TriagedAssignment<'a>>,
    later: Vec<TriagedAssignment<'a>>,
    overdue: Vec<TriagedAssignment<'a>>,
}

impl<'a> Schedule<'a> {
    pub fn bucket(&self, urgency: Urgency) -> &[TriagedAssignment<'a>] {
        match urgency {
            Urgency::Urgent => &self.urgent,
            Urgency::Upcoming => &self.upcoming,
            Urgency::Later => &self.later,
            Urgency::Overdue => &self.overdue,
        }
    }

    /// Buckets in the fixed display order: urgent, upcoming, later,
    /// overdue. Empty buckets are yielded too; rendering decides whether
    /// to show them.
    pub fn buckets(&self) -> impl Iterator<Item = (Urgency, &[TriagedAssignment<'a>])> {
        Urgency::DISPLAY_ORDER
            .into_iter()
            .map(move |urgency| (urgency, self.bucket(urgency)))
    }

    /// Looks an id up across all buckets.
    pub fn find(&self, id: RecordId) -> Option<&TriagedAssignment<'a>> {
        self.buckets()
            .flat_map(|(_, rows)| rows)
            .find(|triaged| triaged.record.id == id)
    }

    pub fn len(&self) -> usize {
        self.urgent.len() + self.upcoming.len() + self.later.len() + self.overdue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies every record against `today` and builds the bucketed view.
///
/// Records are sorted ascending by day count before bucketing and each
/// bucket keeps that order, so upcoming work reads soonest-first and the
/// overdue bucket reads most-overdue first. Records with unreadable due
/// dates sort after everything else and land in the later bucket. Ties
/// keep the input order. The input slice is never reordered.
pub fn triage(records: &[AssignmentRecord], today: NaiveDate) -> Schedule<'_> {
    let mut triaged: Vec<TriagedAssignment<'_>> = records
        .iter()
        .map(|record| {
            let days = days_left(&record.due, today);
            TriagedAssignment {
                record,
                days_left: days,
                urgency: Urgency::for_days_left(days),
            }
        })
        .collect();
    triaged.sort_by_key(|triaged| triaged.days_left.unwrap_or(i64::MAX));

    let mut schedule = Schedule::default();
    for item in triaged {
        match item.urgency {
            Urgency::Urgent => schedule.urgent.push(item),
            Urgency::Upcoming => schedule.upcoming.push(item),
            Urgency::Later => schedule.later.push(item),
            Urgency::Overdue => schedule.overdue.push(item),
        }
    }
    schedule
}
