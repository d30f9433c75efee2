//! Fixed monthly expiry conventions.
//!
//! Monthly derivatives expire on the last Thursday of the contract month,
//! and the first session of the next contract is the day after that. Both
//! anchors are plain calendar computations; holiday adjustment is out of
//! scope here.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, RollError};
use crate::resolve::{days_in_month, shift_month};

/// Last Thursday of the given month — the monthly expiry session.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roll_engine::last_thursday;
///
/// let d = last_thursday(2024, 11).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 11, 28).unwrap());
/// ```
pub fn last_thursday(year: i32, month: u32) -> Result<NaiveDate> {
    let last = end_of_month(year, month)?;
    let back = (last.weekday().num_days_from_monday() + 7
        - Weekday::Thu.num_days_from_monday())
        % 7;
    last.checked_sub_days(chrono::Days::new(back as u64))
        .ok_or_else(|| out_of_range(year, month))
}

/// The session after the previous month's expiry: one day past that month's
/// last Thursday.
///
/// The result is always a Friday; when the previous month ends on a
/// Thursday it falls on the 1st of `month` itself.
pub fn post_expiry_friday(year: i32, month: u32) -> Result<NaiveDate> {
    let (py, pm) = shift_month(year, month, -1);
    last_thursday(py, pm)?
        .succ_opt()
        .ok_or_else(|| out_of_range(py, pm))
}

fn end_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
        .ok_or_else(|| out_of_range(year, month))
}

fn out_of_range(year: i32, month: u32) -> RollError {
    RollError::Validation(format!(
        "month {year:04}-{month:02} is outside the supported range"
    ))
}

// ── Tests ───────────────────────────────────────────────────────────────────
