//! Calendar date generators.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Earliest date handed out by [`generate_date`].
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Latest date handed out by [`generate_date`].
pub fn latest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Generate a random date in the given range (inclusive).
///
/// If `start` is not before `end`, `start` is returned.
pub fn generate_date_range<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }

    let offset = rng.random_range(0..=span as u64);
    start.checked_add_days(Days::new(offset)).unwrap_or(start)
}

/// Generate a random date between 1900 and 2025.
pub fn generate_date<R: Rng>(rng: &mut R) -> NaiveDate {
    generate_date_range(rng, earliest_date(), latest_date())
}
