//! Central finite differences in the spot price.

use pricer_core::types::OptionResult;

/// Central-difference delta: `(P(s+h) - P(s-h)) / (2h)`.
///
/// `price_at` evaluates the option at a given spot. Its first error is
/// returned unchanged; `h` itself is not checked.
///
/// # Examples
/// ```
/// use pricer_models::greeks::central_delta;
///
/// // d/ds of s² at s = 3
/// let delta = central_delta(3.0, 1e-3, |s| Ok(s * s)).unwrap();
/// assert!((delta - 6.0).abs() < 1e-9);
/// ```
pub fn central_delta<F>(s: f64, h: f64, price_at: F) -> OptionResult<f64>
where
    F: Fn(f64) -> OptionResult<f64>,
{
    let price_up = price_at(s + h)?;
    let price_down = price_at(s - h)?;
    Ok((price_up - price_down) / (2.0 * h))
}

/// Central-difference gamma: `(P(s+h) + P(s-h) - 2·P(s)) / h²`.
///
/// # Errors
/// The first error returned by `price_at`.
pub fn central_gamma<F>(s: f64, h: f64, price_at: F) -> OptionResult<f64>
where
    F: Fn(f64) -> OptionResult<f64>,
{
    let price_up = price_at(s + h)?;
    let price_down = price_at(s - h)?;
    let price_mid = price_at(s)?;
    Ok((price_up + price_down - 2.0 * price_mid) / (h * h))
}
