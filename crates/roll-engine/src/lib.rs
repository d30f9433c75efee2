//! # roll-engine
//!
//! Deterministic trading-calendar computation: pattern-based month rolling,
//! fixed expiry conventions, and price-series utilities.
//!
//! The core resolves a compact pattern string against a caller-supplied
//! reference date — "second Wednesday of two months back", "last calendar
//! day of next month" — into a concrete date. All functions take explicit
//! inputs (no system clock access), so every call is reproducible, and no
//! state is shared between calls.
//!
//! ```
//! use chrono::NaiveDate;
//! use roll_engine::get_target_date;
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
//! let d = get_target_date(reference, "-1/5/L", 1).unwrap(); // last Friday, previous month
//! assert_eq!(d, NaiveDate::from_ymd_opt(2024, 10, 25).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`pattern`] — pattern grammar, eager parsing and validation
//! - [`resolve`] — month shifting and pattern → date resolution
//! - [`expiry`] — last-Thursday expiry and post-expiry roll helpers
//! - [`volatility`] — annualized rolling volatility of a close series
//! - [`table`] — extension-dispatched price-table loading
//! - [`error`] — error types

pub mod error;
pub mod expiry;
pub mod pattern;
pub mod resolve;
pub mod table;
pub mod volatility;

pub use error::RollError;
pub use expiry::{last_thursday, post_expiry_friday};
pub use pattern::{Edge, Nth, Pattern};
pub use resolve::{days_in_month, get_target_date, resolve_pattern, shift_month};
pub use table::{PriceTable, DATE_COLUMN};
pub use volatility::{historical_volatility, DEFAULT_LOOKBACK, FALLBACK_VOLATILITY};
