//! age.rs
//!
//! Calendar-aware decomposition of the elapsed time between a reference
//! instant (the "birth" moment) and now:
//!     years, months, weeks, days, hours, minutes, seconds
//! plus absolute totals (whole days and whole hours elapsed).
//!
//! Chrono does not provide a year/month/week breakdown of a duration
//! (unlike Python's relativedelta), so the calendar-aware stepping is
//! implemented manually. Each unit is computed against an "anchor"
//! instant that has already absorbed every coarser unit, which keeps the
//! remainders mutually consistent without fixed conversion factors
//! (a month is not 30 days, a year is not 365).
//!
//! This logic correctly handles:
//!   • leap years
//!   • varying month lengths
//!   • month-add clamping (Jan 31 + 1 month is Feb 28/29, never Mar 2)

use chrono::{Datelike, Duration, Months, NaiveDateTime};

/// Elapsed time between two instants, decomposed into calendar units.
///
/// Every field is non-negative. The remainder fields compose: adding
/// `years` years, `months` months, `weeks * 7 + days` days, then
/// `hours`, `minutes`, `seconds` back onto the reference instant lands
/// within one second of `now`. The totals are independent floor
/// divisions of the raw duration and are not anchor-relative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_days: i64,
    pub total_hours: i64,
}

/// Decompose the time elapsed from `reference` to `now`.
///
/// Total for all well-formed instants: if `now` is before `reference`,
/// every field is zero (an age is never negative).
pub fn decompose(reference: NaiveDateTime, now: NaiveDateTime) -> Breakdown {
    if now < reference {
        return Breakdown::default();
    }

    let years = elapsed_years(reference, now);
    let months = months_remainder(reference, now);

    // Anchor: reference advanced by the whole years, then by the months
    // remainder. From here on every step subtracts what the previous
    // steps already absorbed, so the differences are non-negative.
    let mut anchor = add_months(reference, years * 12);
    anchor = add_months(anchor, months);

    let weeks = (now - anchor).num_days() / 7;
    anchor += Duration::days(weeks * 7);

    let days = (now - anchor).num_days();
    anchor += Duration::days(days);

    let hours = (now - anchor).num_hours();
    anchor += Duration::hours(hours);

    let minutes = (now - anchor).num_minutes();
    anchor += Duration::minutes(minutes);

    let seconds = (now - anchor).num_seconds();

    // Totals come straight from the raw difference, not the anchor.
    let elapsed = now - reference;

    Breakdown {
        years,
        months,
        weeks,
        days,
        hours,
        minutes,
        seconds,
        total_days: elapsed.num_days(),
        total_hours: elapsed.num_hours(),
    }
}

/// Whole calendar years elapsed: the year difference, minus one when the
/// anniversary (month, day) has not yet been reached this year.
fn elapsed_years(reference: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let mut years = i64::from(now.year() - reference.year());
    let month_diff = now.month() as i32 - reference.month() as i32;

    if month_diff < 0 || (month_diff == 0 && now.day() < reference.day()) {
        years -= 1;
    }

    years.max(0)
}

/// Months past the last whole year, 0–11.
///
/// The modulo base is the unclamped year/month subtraction, not the
/// clamped result of `elapsed_years`, and the day-of-month decrement
/// applies whenever `now.day < reference.day` (a different tie-break
/// than the years step). Both are deliberate: switching the base to the
/// clamped year count changes the result when a year boundary is
/// crossed with the anniversary day not yet reached.
fn months_remainder(reference: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let mut months = i64::from(now.year() - reference.year()) * 12
        + i64::from(now.month() as i32 - reference.month() as i32);

    if now.day() < reference.day() {
        months -= 1;
    }

    (months % 12).max(0)
}

/// Month addition that clamps day-of-month to the target month's length
/// instead of overflowing into the next month. `months` is never
/// negative here; the fallback only triggers outside chrono's
/// representable date range.
fn add_months(t: NaiveDateTime, months: i64) -> NaiveDateTime {
    u32::try_from(months)
        .ok()
        .and_then(|m| t.checked_add_months(Months::new(m)))
        .unwrap_or(t)
}
