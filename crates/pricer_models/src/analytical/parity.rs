//! Put-call parity counterparts.
//!
//! The counterpart uses the plain parity relation
//! `C - P = S - K·e^(-rT)`, which is exact for European options when the
//! cost-of-carry equals the risk-free rate (`b = r`).

use pricer_core::types::{FactorSet, OptionError, OptionResult, OptionType};

/// Absolute tolerance used by [`parity_holds`].
pub const PARITY_TOLERANCE: f64 = 1e-5;

/// Returns the no-arbitrage price of the opposite option type.
///
/// For a call price `C` this is `C - S + K·e^(-rT)`; for a put price `P`
/// it is `P + S - K·e^(-rT)`.
///
/// # Errors
/// `OptionError::InvalidFactorValue` if `price` is negative or NaN.
///
/// # Examples
/// ```
/// use pricer_core::types::{FactorSet, OptionType};
/// use pricer_models::analytical::parity_counterpart;
///
/// let f = FactorSet::new(0.0, 100.0, 0.2, 0.05, 0.05, 100.0);
/// // At expiry the discount factor is one.
/// let put = parity_counterpart(3.0, OptionType::Call, &f).unwrap();
/// assert!((put - 3.0).abs() < 1e-12);
/// ```
pub fn parity_counterpart(price: f64, option_type: OptionType, f: &FactorSet) -> OptionResult<f64> {
    if !(price >= 0.0) {
        return Err(OptionError::InvalidFactorValue);
    }

    let discounted_strike = f.k * (-f.r * f.t).exp();
    Ok(match option_type {
        OptionType::Call => price - f.s + discounted_strike,
        OptionType::Put => price + f.s - discounted_strike,
    })
}

/// Returns whether a call and put price satisfy parity to within
/// [`PARITY_TOLERANCE`].
///
/// # Errors
/// `OptionError::InvalidFactorValue` if `call` is negative or NaN.
pub fn parity_holds(call: f64, put: f64, f: &FactorSet) -> OptionResult<bool> {
    let implied_put = parity_counterpart(call, OptionType::Call, f)?;
    Ok((implied_put - put).abs() < PARITY_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::european::{call_price, put_price};
    use approx::assert_relative_eq;

    fn no_dividend() -> FactorSet {
        FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.04, 100.0)
    }

    #[test]
    fn test_counterpart_of_call_is_put() {
        let f = no_dividend();
        let put = parity_counterpart(call_price(&f), OptionType::Call, &f).unwrap();
        assert_relative_eq!(put, put_price(&f), epsilon = 1e-9);
    }

    #[test]
    fn test_counterpart_of_put_is_call() {
        let f = no_dividend();
        let call = parity_counterpart(put_price(&f), OptionType::Put, &f).unwrap();
        assert_relative_eq!(call, call_price(&f), epsilon = 1e-9);
    }

    #[test]
    fn test_counterpart_round_trips() {
        let f = no_dividend();
        let put = parity_counterpart(10.0, OptionType::Call, &f).unwrap();
        let call = parity_counterpart(put, OptionType::Put, &f).unwrap();
        assert_relative_eq!(call, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_price_rejected() {
        let f = no_dividend();
        assert_eq!(
            parity_counterpart(-0.01, OptionType::Call, &f),
            Err(OptionError::InvalidFactorValue)
        );
        assert_eq!(
            parity_counterpart(f64::NAN, OptionType::Put, &f),
            Err(OptionError::InvalidFactorValue)
        );
        assert_eq!(
            parity_holds(-1.0, 1.0, &f),
            Err(OptionError::InvalidFactorValue)
        );
    }

    #[test]
    fn test_parity_holds_for_closed_form_prices() {
        let f = no_dividend();
        assert!(parity_holds(call_price(&f), put_price(&f), &f).unwrap());
        assert!(!parity_holds(call_price(&f), put_price(&f) + 1e-3, &f).unwrap());
    }

    #[test]
    fn test_parity_ignores_carry() {
        // With b != r the closed-form prices include the carry term, the
        // plain relation does not.
        let f = FactorSet { b: 0.0, ..no_dividend() };
        assert!(!parity_holds(call_price(&f), put_price(&f), &f).unwrap());
    }
}
