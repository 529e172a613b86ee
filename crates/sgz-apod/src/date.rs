//! Random publication date selection.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Earliest date a round can draw from.
pub const EARLIEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2018, 1, 1) {
    Some(date) => date,
    None => panic!("2018-01-01 is a valid date"),
};

/// Pick a day uniformly between [`EARLIEST_DATE`] and `today`, both inclusive.
///
/// If `today` is before the earliest date the earliest date is returned.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let span = (today - EARLIEST_DATE).num_days();
    if span <= 0 {
        return EARLIEST_DATE;
    }

    let offset = rng.gen_range(0..=span.unsigned_abs());
    EARLIEST_DATE
        .checked_add_days(Days::new(offset))
        .unwrap_or(today)
}

/// Format a date the way the APOD service expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
