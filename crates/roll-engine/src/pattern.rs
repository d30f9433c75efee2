//! Pattern grammar for relative month positions.
//!
//! A pattern string names a position inside a month some signed number of
//! months away from a reference date. Two grammars exist, selected by an
//! integer kind:
//!
//! - **Kind 1** — `"<offset>/<weekday>/<nth>"`: the nth (or last) occurrence
//!   of a weekday in the shifted month. `"0/1/1"` is the first Monday of the
//!   reference month; `"-3/5/L"` is the last Friday of three months back.
//! - **Kind 2** — `"<offset>F"` or `"<offset>L"`: the first or last calendar
//!   day of the shifted month, e.g. `"-1F"`, `"1L"`.
//!
//! Parsing is eager: [`Pattern::parse`] validates every field before any
//! date arithmetic happens, so a held [`Pattern`] is always resolvable.

use chrono::Weekday;

use crate::error::{Result, RollError};

/// Position of a weekday occurrence within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nth {
    First,
    Second,
    Third,
    /// The final occurrence, whether the weekday lands four or five times.
    Last,
}

impl Nth {
    /// Zero-based position into the month's occurrence list, `None` for
    /// [`Nth::Last`].
    pub(crate) fn index(self) -> Option<usize> {
        match self {
            Nth::First => Some(0),
            Nth::Second => Some(1),
            Nth::Third => Some(2),
            Nth::Last => None,
        }
    }
}

/// First or last calendar day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

/// A parsed, validated month-position instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Nth (or last) occurrence of a working-week day in the shifted month.
    NthWeekday {
        month_offset: i32,
        weekday: Weekday,
        nth: Nth,
    },
    /// First or last calendar day of the shifted month.
    MonthEdge { month_offset: i32, edge: Edge },
}

impl Pattern {
    /// Parse a pattern string under the grammar selected by `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidKind`] for a kind other than 1 or 2,
    /// [`RollError::Format`] when the string does not have the grammar's
    /// shape, [`RollError::Parse`] when an integer field is unparseable, and
    /// [`RollError::Validation`] when a field lies outside its domain
    /// (weekday not in 1-5, nth token not in `1`/`2`/`3`/`L`).
    ///
    /// # Examples
    ///
    /// ```
    /// use roll_engine::{Nth, Pattern};
    ///
    /// let p = Pattern::parse(1, "-2/3/2").unwrap();
    /// assert!(matches!(p, Pattern::NthWeekday { month_offset: -2, nth: Nth::Second, .. }));
    /// ```
    pub fn parse(kind: u8, s: &str) -> Result<Pattern> {
        match kind {
            1 => parse_nth_weekday(s),
            2 => parse_month_edge(s),
            other => Err(RollError::InvalidKind(other)),
        }
    }

    /// The signed month shift this pattern applies to the reference month.
    pub fn month_offset(&self) -> i32 {
        match self {
            Pattern::NthWeekday { month_offset, .. } | Pattern::MonthEdge { month_offset, .. } => {
                *month_offset
            }
        }
    }
}

fn parse_nth_weekday(s: &str) -> Result<Pattern> {
    let fields: Vec<&str> = s.split('/').collect();
    let [offset, weekday, nth] = fields.as_slice() else {
        return Err(RollError::Format(format!(
            "'{s}' must have exactly three '/'-separated fields"
        )));
    };

    let month_offset = parse_int_field("month offset", offset)?;
    let weekday = parse_weekday_field(weekday)?;
    let nth = parse_nth_field(nth)?;

    Ok(Pattern::NthWeekday {
        month_offset,
        weekday,
        nth,
    })
}

fn parse_month_edge(s: &str) -> Result<Pattern> {
    let s = s.trim();
    let edge = match s.chars().last() {
        Some('F') => Edge::First,
        Some('L') => Edge::Last,
        _ => {
            return Err(RollError::Format(format!(
                "'{s}' must be an integer month offset followed by 'F' or 'L'"
            )));
        }
    };
    // the suffix letter is ASCII, so byte slicing is safe
    let month_offset = parse_int_field("month offset", &s[..s.len() - 1])?;

    Ok(Pattern::MonthEdge { month_offset, edge })
}

fn parse_int_field(field: &'static str, s: &str) -> Result<i32> {
    s.trim().parse().map_err(|_| RollError::Parse {
        field,
        value: s.to_string(),
    })
}

fn parse_weekday_field(s: &str) -> Result<Weekday> {
    let n: u8 = s.trim().parse().map_err(|_| RollError::Parse {
        field: "weekday",
        value: s.to_string(),
    })?;
    match n {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        other => Err(RollError::Validation(format!(
            "weekday {other} out of range 1-5 (Mon-Fri)"
        ))),
    }
}

fn parse_nth_field(s: &str) -> Result<Nth> {
    match s.trim() {
        "1" => Ok(Nth::First),
        "2" => Ok(Nth::Second),
        "3" => Ok(Nth::Third),
        "L" => Ok(Nth::Last),
        other => Err(RollError::Validation(format!(
            "nth must be 1, 2, 3, or L, got '{other}'"
        ))),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
