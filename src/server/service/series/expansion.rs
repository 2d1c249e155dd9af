//! Recurring schedule expansion.
//!
//! Turns a series schedule into concrete occurrences and persists them one by one
//! through an [`OccurrenceWriter`]. Planning, validation and equivalence are pure;
//! only [`materialize`] touches storage.
//!
//! Occurrences are generated week by week from the Sunday on or before `start_date`,
//! stepping `7 × recurrence_frequency_weeks` days, and within each week in ascending
//! weekday order. Dates and times are naive and interpreted as UTC.

use std::{collections::BTreeSet, future::Future};

use chrono::{Datelike, Duration, NaiveDate};
use sea_orm::DbErr;

use crate::server::{
    error::validation::FieldError,
    model::{
        batch::BatchOutcome,
        series::{EventTemplate, Occurrence, Schedule},
    },
};

/// Persists one occurrence as an event.
pub trait OccurrenceWriter {
    /// Writes the occurrence and returns the new event id.
    fn write(
        &self,
        occurrence: &Occurrence,
        template: &EventTemplate,
    ) -> impl Future<Output = Result<i32, DbErr>> + Send;
}

/// The Sunday on or before `date`.
fn anchor_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Valid weekday offsets in ascending order, without duplicates.
fn weekday_offsets(days: &[i32]) -> Vec<i64> {
    days.iter()
        .filter(|d| (0..=6).contains(*d))
        .map(|d| i64::from(*d))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Plans every occurrence of `schedule` in generation order.
///
/// Offsets outside `0..=6` are ignored and a cadence below one week is treated as
/// weekly; run [`validate_schedule`] first to reject such input.
pub fn plan_occurrences(schedule: &Schedule) -> Vec<Occurrence> {
    let offsets = weekday_offsets(&schedule.recurrence_frequency_days);
    let step = Duration::days(7 * i64::from(schedule.recurrence_frequency_weeks.max(1)));

    let mut occurrences = Vec::new();
    let mut cursor = anchor_sunday(schedule.start_date);

    while cursor <= schedule.end_date {
        for offset in &offsets {
            let candidate = cursor + Duration::days(*offset);
            if candidate < schedule.start_date || candidate > schedule.end_date {
                continue;
            }

            occurrences.push(Occurrence {
                start: candidate.and_time(schedule.start_time).and_utc(),
                end: candidate.and_time(schedule.end_time).and_utc(),
            });
        }

        match cursor.checked_add_signed(step) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    occurrences
}

/// Whole weeks between the schedule dates, at least one.
fn whole_weeks(schedule: &Schedule) -> i64 {
    ((schedule.end_date - schedule.start_date).num_days() / 7).max(1)
}

/// Checks a schedule before any event is generated.
///
/// # Returns
/// - `Ok(())` - Schedule can be expanded
/// - `Err(Vec<FieldError>)` - Every violated rule, one entry per field problem
pub fn validate_schedule(schedule: &Schedule) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let dates_ordered = schedule.end_date >= schedule.start_date;
    if !dates_ordered {
        errors.push(FieldError::new("end_date", "must not be before start_date"));
    }

    if schedule.end_time <= schedule.start_time {
        errors.push(FieldError::new("end_time", "must be after start_time"));
    }

    let weeks = schedule.recurrence_frequency_weeks;
    if weeks < 1 {
        errors.push(FieldError::new(
            "recurrence_frequency_weeks",
            "must be at least 1",
        ));
    } else if dates_ordered && i64::from(weeks) > whole_weeks(schedule) {
        errors.push(FieldError::new(
            "recurrence_frequency_weeks",
            format!(
                "must not exceed the {} whole week(s) between start_date and end_date",
                whole_weeks(schedule)
            ),
        ));
    }

    let days = &schedule.recurrence_frequency_days;
    if days.is_empty() {
        errors.push(FieldError::new(
            "recurrence_frequency_days",
            "must contain at least one weekday",
        ));
    }
    for day in days.iter().filter(|d| !(0..=6).contains(*d)) {
        errors.push(FieldError::new(
            "recurrence_frequency_days",
            format!("{} is not a weekday offset between 0 (Sunday) and 6", day),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether two schedules generate the same event dates.
///
/// Compares the date range, the cadence and the weekday set; weekday order and
/// duplicates are irrelevant. Daily times are not compared since changing them
/// only moves existing events.
pub fn is_schedule_equivalent(a: &Schedule, b: &Schedule) -> bool {
    let days = |s: &Schedule| -> BTreeSet<i32> {
        s.recurrence_frequency_days.iter().copied().collect()
    };

    a.start_date == b.start_date
        && a.end_date == b.end_date
        && a.recurrence_frequency_weeks == b.recurrence_frequency_weeks
        && days(a) == days(b)
}

/// Writes every planned occurrence sequentially.
///
/// A failed write is logged and recorded; the remaining occurrences are still
/// attempted.
///
/// # Returns
/// Ids of the created events and one failure per occurrence that could not be
/// written, keyed by its RFC 3339 start time.
pub async fn materialize<W>(
    writer: &W,
    schedule: &Schedule,
    template: &EventTemplate,
) -> BatchOutcome<i32>
where
    W: OccurrenceWriter + Sync,
{
    let mut outcome = BatchOutcome::new();

    for occurrence in plan_occurrences(schedule) {
        match writer.write(&occurrence, template).await {
            Ok(id) => outcome.record_success(id),
            Err(e) => {
                tracing::warn!(
                    start = %occurrence.start,
                    error = %e,
                    "failed to create series occurrence"
                );
                outcome.record_failure(occurrence.start.to_rfc3339(), e);
            }
        }
    }

    outcome
}
