//! Study-day helpers.
//!
//! A "study day" is the local calendar day, i.e. the window
//! [local midnight, local midnight + 24h). It is derived from the instant
//! passed in, never from ambient clock reads, so callers stay testable.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// The local calendar day an instant falls on.
pub fn study_day(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Local).date_naive()
}

/// Whether two instants fall within the same local study day.
pub fn same_study_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    study_day(a) == study_day(b)
}
