//! Urgency classification for assignment records.
//!
//! The classifier turns a borrowed set of records and a reference date
//! into a [`Schedule`]: every record gets a derived whole-day count to
//! its due date and an [`satchel_model::Urgency`] bucket. Classification
//! never fails; a due date that cannot be read is carried with a `None`
//! day count instead of being dropped.

pub mod schedule;

pub use schedule::{Schedule, TriagedAssignment, days_left, triage};
