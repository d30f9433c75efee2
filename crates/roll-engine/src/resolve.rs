//! Deterministic resolution of month-position patterns to calendar dates.
//!
//! Pure functions over validated inputs: no clock access, no I/O, no shared
//! state. The caller supplies the reference date, so every call is
//! reproducible and safe to issue from any thread.
//!
//! Resolution has three steps: shift the reference (year, month) by the
//! pattern's offset, locate the day inside the shifted month (nth weekday or
//! month edge), and assemble the final date.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, RollError};
use crate::pattern::{Edge, Nth, Pattern};

/// Shift a (year, month) pair by a signed number of months.
///
/// Normalizes by stepping a year at a time, so any offset wraps correctly
/// across multiple year boundaries in either direction. Total for all
/// inputs; the inverse shift restores the original pair.
///
/// # Examples
///
/// ```
/// use roll_engine::shift_month;
///
/// assert_eq!(shift_month(2024, 1, -1), (2023, 12));
/// assert_eq!(shift_month(2024, 12, 1), (2025, 1));
/// assert_eq!(shift_month(2024, 6, -30), (2021, 12));
/// ```
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let mut year = year;
    let mut month = month as i32 + offset;
    while month <= 0 {
        year -= 1;
        month += 12;
    }
    while month > 12 {
        year += 1;
        month -= 12;
    }
    (year, month as u32)
}

/// Number of calendar days in a month, leap-year aware.
///
/// `month` must be in 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Compute a target date from a reference date, pattern string, and kind.
///
/// The single orchestration entry point: validates `kind`, parses the
/// pattern eagerly, shifts the reference month, and dispatches to the
/// kind-specific day resolver. Callers resolving one pattern repeatedly
/// should parse once with [`Pattern::parse`] and use [`resolve_pattern`].
///
/// # Errors
///
/// Propagates every parse and validation failure from [`Pattern::parse`];
/// no date arithmetic runs on a malformed pattern.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roll_engine::get_target_date;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
///
/// // second Wednesday of two months back
/// let d = get_target_date(reference, "-2/3/2", 1).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 9, 11).unwrap());
///
/// // last calendar day of next month
/// let d = get_target_date(reference, "1L", 2).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// ```
pub fn get_target_date(reference: NaiveDate, pattern: &str, kind: u8) -> Result<NaiveDate> {
    let pattern = Pattern::parse(kind, pattern)?;
    resolve_pattern(reference, &pattern)
}

/// Resolve an already-parsed pattern against a reference date.
///
/// The result always lies inside the shifted month; an nth request past the
/// month's occurrence count degrades to the last occurrence rather than
/// failing.
pub fn resolve_pattern(reference: NaiveDate, pattern: &Pattern) -> Result<NaiveDate> {
    let (year, month) = shift_month(reference.year(), reference.month(), pattern.month_offset());
    let day = match pattern {
        Pattern::NthWeekday { weekday, nth, .. } => {
            let occurrences = weekday_occurrences(first_of_month(year, month)?, *weekday);
            pick_occurrence(&occurrences, *nth)
        }
        Pattern::MonthEdge { edge, .. } => match edge {
            Edge::First => 1,
            Edge::Last => days_in_month(year, month),
        },
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RollError::Validation(format!(
            "resolved date {year:04}-{month:02}-{day:02} is outside the supported range"
        ))
    })
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        RollError::Validation(format!(
            "target month {year:04}-{month:02} is outside the supported range"
        ))
    })
}

/// Every day-of-month in `first`'s month falling on `weekday`, ascending.
fn weekday_occurrences(first: NaiveDate, weekday: Weekday) -> Vec<u32> {
    let n = days_in_month(first.year(), first.month());
    first
        .iter_days()
        .take(n as usize)
        .filter(|d| d.weekday() == weekday)
        .map(|d| d.day())
        .collect()
}

/// Select the nth entry from a month's weekday occurrence list.
///
/// A numbered position past the end of the list degrades to the final
/// occurrence instead of failing; scheduling patterns treat "3rd Friday" in
/// a month holding fewer Fridays as "the last Friday". The fallback is
/// intentional and callers rely on it; do not tighten it into an error.
fn pick_occurrence(occurrences: &[u32], nth: Nth) -> u32 {
    // every weekday occurs at least four times in any month, so the list is
    // never empty
    let idx = match nth.index() {
        Some(i) if i < occurrences.len() => i,
        _ => occurrences.len() - 1,
    };
    occurrences[idx]
}

// ── Tests ───────────────────────────────────────────────────────────────────
