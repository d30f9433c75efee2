//! Annualized historical volatility from a close-price series.
//!
//! Rolling sample standard deviation of daily log returns, scaled to a
//! yearly figure. Positions without a full window of defined returns carry
//! [`FALLBACK_VOLATILITY`] so downstream sizing always has a usable number
//! instead of a gap.

/// Volatility reported where the return history is shorter than the window.
pub const FALLBACK_VOLATILITY: f64 = 0.25;

/// Default rolling window: a half year of trading sessions.
pub const DEFAULT_LOOKBACK: usize = 126;

/// Session count used for annualization. Fixed at a half year even when a
/// custom `lookback` is supplied.
const ANNUALIZATION_SESSIONS: f64 = 126.0;

/// Annualized rolling volatility of `closes`, one entry per input price.
///
/// The entry at index `i` is the sample standard deviation of the
/// `lookback` log returns ending at `i`, times `sqrt(126)`. The first
/// `lookback` entries carry [`FALLBACK_VOLATILITY`]: the return at index 0
/// is undefined, and a window is only valid once it holds `lookback`
/// defined returns. Windows touching a non-finite return (a zero or
/// negative price in the series) fall back as well, as does any `lookback`
/// below 2, which leaves the sample deviation undefined everywhere.
///
/// # Examples
///
/// ```
/// use roll_engine::{historical_volatility, FALLBACK_VOLATILITY};
///
/// let closes = vec![100.0; 10];
/// let vol = historical_volatility(&closes, 4);
/// assert_eq!(vol[0], FALLBACK_VOLATILITY); // warm-up
/// assert_eq!(vol[9], 0.0); // constant prices, no variance
/// ```
pub fn historical_volatility(closes: &[f64], lookback: usize) -> Vec<f64> {
    let n = closes.len();
    let mut vol = vec![FALLBACK_VOLATILITY; n];
    if lookback < 2 {
        return vol;
    }

    // returns[i] is the log return from close i-1 to close i; index 0 is a
    // placeholder that never enters a window
    let returns: Vec<f64> = std::iter::once(f64::NAN)
        .chain(closes.windows(2).map(|w| (w[1] / w[0]).ln()))
        .collect();

    for i in lookback..n {
        let window = &returns[i + 1 - lookback..=i];
        let annualized = sample_std(window) * ANNUALIZATION_SESSIONS.sqrt();
        if annualized.is_finite() {
            vol[i] = annualized;
        }
    }
    vol
}

/// Sample standard deviation (n − 1 denominator).
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        assert!(historical_volatility(&[], 126).is_empty());
    }

    #[test]
    fn test_series_shorter_than_window_is_all_fallback() {
        let closes = vec![100.0, 101.0, 102.0];
        let vol = historical_volatility(&closes, 126);
        assert_eq!(vol, vec![FALLBACK_VOLATILITY; 3]);
    }

    #[test]
    fn test_warm_up_then_zero_for_constant_prices() {
        let closes = vec![250.0; 8];
        let vol = historical_volatility(&closes, 3);
        assert_eq!(&vol[..3], &[FALLBACK_VOLATILITY; 3]);
        assert_eq!(&vol[3..], &[0.0; 5]);
    }

    #[test]
    fn test_alternating_returns_match_closed_form() {
        // closes alternate 100 / 110, so returns alternate +r / -r with
        // r = ln(1.1); the sample std of [r, -r] is r * sqrt(2)
        let closes = vec![100.0, 110.0, 100.0, 110.0, 100.0];
        let vol = historical_volatility(&closes, 2);
        let r = 1.1f64.ln();
        let expected = r * 2.0f64.sqrt() * 126.0f64.sqrt();
        for v in &vol[2..] {
            assert!((v - expected).abs() < 1e-12, "got {v}, expected {expected}");
        }
    }

    #[test]
    fn test_annualization_independent_of_lookback() {
        // same alternating series, wider window: std of [r, -r, r] is
        // unchanged in scale terms but the annualization stays sqrt(126)
        let closes = vec![100.0, 110.0, 100.0, 110.0, 100.0, 110.0];
        let vol = historical_volatility(&closes, 3);
        let r = 1.1f64.ln();
        // sample std of [r, -r, r]: mean r/3, var = (4/9 + 16/9 + 4/9) r² / 2
        let std = (24.0 / 18.0 * r * r).sqrt();
        let expected = std * 126.0f64.sqrt();
        assert!((vol[3] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bad_price_windows_fall_back() {
        let closes = vec![100.0, 0.0, 100.0, 101.0, 102.0, 103.0, 104.0];
        let vol = historical_volatility(&closes, 2);
        // windows touching the zero price have undefined returns
        assert_eq!(vol[2], FALLBACK_VOLATILITY);
        assert_eq!(vol[3], FALLBACK_VOLATILITY);
        // clean windows resume normally
        assert!(vol[4].is_finite() && vol[4] != FALLBACK_VOLATILITY);
    }

    #[test]
    fn test_degenerate_lookback_is_all_fallback() {
        let closes = vec![100.0, 101.0, 102.0, 103.0];
        for lookback in [0, 1] {
            let vol = historical_volatility(&closes, lookback);
            assert_eq!(vol, vec![FALLBACK_VOLATILITY; 4], "lookback {lookback}");
        }
    }
}
