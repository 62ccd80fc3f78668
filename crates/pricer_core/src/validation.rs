//! Validation policy for factors, tokens and sweep steps.
//!
//! All guards are pure and side-effect free. Higher layers call them before
//! writing to a contract or accumulating any sweep result, so a failing
//! operation never leaves partial state behind.
//!
//! Token canonicalisation lives here as well: every public entry point that
//! accepts a factor or option-type token passes it through [`canonicalize`]
//! exactly once before matching.

use crate::types::{FactorName, OptionError, OptionResult, OptionType};

/// Folds a factor or option-type token to its canonical (upper) case.
///
/// No trimming is performed: `" s"` stays invalid.
#[inline]
pub fn canonicalize(token: &str) -> String {
    token.to_ascii_uppercase()
}

/// Parses an option-type token.
///
/// # Errors
/// `OptionError::InvalidOptionType` unless the token is `C`/`P` in any case.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_core::validation::validate_option_type;
///
/// assert_eq!(validate_option_type("c").unwrap(), OptionType::Call);
/// assert!(validate_option_type("X").is_err());
/// ```
#[inline]
pub fn validate_option_type(token: &str) -> OptionResult<OptionType> {
    token.parse()
}

/// Checks the bounds of the six pricing factors.
///
/// K must be strictly positive because every kernel divides by it; all other
/// factors must be non-negative. NaN fails every bound.
///
/// # Errors
/// `OptionError::InvalidFactorValue` on the first violated bound. The error
/// does not say which factor failed.
///
/// # Examples
/// ```
/// use pricer_core::validation::validate_factor_values;
///
/// assert!(validate_factor_values(1.0, 100.0, 0.2, 0.05, 0.0, 100.0).is_ok());
/// assert!(validate_factor_values(1.0, 0.0, 0.2, 0.05, 0.0, 100.0).is_err());
/// assert!(validate_factor_values(1.0, 100.0, 0.2, 0.05, -0.01, 100.0).is_err());
/// ```
pub fn validate_factor_values(t: f64, k: f64, sig: f64, r: f64, b: f64, s: f64) -> OptionResult<()> {
    let non_negative = [t, sig, r, b, s].iter().all(|v| *v >= 0.0);
    if non_negative && k > 0.0 {
        Ok(())
    } else {
        Err(OptionError::InvalidFactorValue)
    }
}

/// Parses a factor token into a [`FactorName`].
///
/// # Errors
/// `OptionError::InvalidFactorName` carrying the token as supplied.
#[inline]
pub fn validate_factor_name(token: &str) -> OptionResult<FactorName> {
    token.parse()
}

/// Checks that `step` walks from `start` towards `end`.
///
/// A zero step is always rejected, as are non-finite endpoints or steps.
/// When `start == end` any non-zero step is accepted (the sweep then has
/// exactly one point).
///
/// # Errors
/// `OptionError::InvalidStepDirection` carrying `step`, `start`, `end`.
///
/// # Examples
/// ```
/// use pricer_core::validation::validate_step;
///
/// assert!(validate_step(0.1, 0.9, 0.2).is_ok());
/// assert!(validate_step(0.9, 0.1, -0.2).is_ok());
/// assert!(validate_step(0.1, 0.9, -0.2).is_err());
/// assert!(validate_step(0.1, 0.9, 0.0).is_err());
/// assert!(validate_step(0.0, f64::INFINITY, 1.0).is_err());
/// ```
pub fn validate_step(start: f64, end: f64, step: f64) -> OptionResult<()> {
    let span = end - start;
    let invalid = step == 0.0
        || !(start.is_finite() && end.is_finite() && step.is_finite())
        || span.is_nan()
        || (span > 0.0 && step < 0.0)
        || (span < 0.0 && step > 0.0);

    if invalid {
        Err(OptionError::InvalidStepDirection { step, start, end })
    } else {
        Ok(())
    }
}

/// Checks the endpoints of a sweep over `factor`.
///
/// Endpoints must be non-negative, and a strike sweep may not touch zero.
///
/// # Errors
/// `OptionError::InvalidFactorValue`.
pub fn validate_sweep_range(factor: FactorName, start: f64, end: f64) -> OptionResult<()> {
    let negative = !(start >= 0.0 && end >= 0.0);
    let zero_strike = factor == FactorName::K && (start == 0.0 || end == 0.0);
    if negative || zero_strike {
        Err(OptionError::InvalidFactorValue)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_upper_cases_ascii() {
        assert_eq!(canonicalize("sig"), "SIG");
        assert_eq!(canonicalize("SiG"), "SIG");
        assert_eq!(canonicalize(" s"), " S");
    }

    #[test]
    fn test_factor_values_each_bound() {
        let base = [1.0, 100.0, 0.2, 0.05, 0.01, 100.0];
        assert!(validate_factor_values(base[0], base[1], base[2], base[3], base[4], base[5]).is_ok());

        for i in 0..6 {
            let mut bad = base;
            bad[i] = -1.0;
            assert_eq!(
                validate_factor_values(bad[0], bad[1], bad[2], bad[3], bad[4], bad[5]),
                Err(OptionError::InvalidFactorValue),
                "index {} should be rejected",
                i
            );
        }
    }

    #[test]
    fn test_factor_values_allow_zero_except_strike() {
        assert!(validate_factor_values(0.0, 1.0, 0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(validate_factor_values(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_factor_values_reject_nan() {
        assert!(validate_factor_values(f64::NAN, 100.0, 0.2, 0.05, 0.0, 100.0).is_err());
        assert!(validate_factor_values(1.0, f64::NAN, 0.2, 0.05, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_step_rejects_non_finite_inputs() {
        assert!(validate_step(0.0, f64::INFINITY, 1.0).is_err());
        assert!(validate_step(f64::NEG_INFINITY, 0.0, 1.0).is_err());
        assert!(validate_step(0.0, 1.0, f64::INFINITY).is_err());
        assert!(validate_step(0.0, 1.0, f64::NAN).is_err());
        assert_eq!(
            validate_step(1.0, 1.0, f64::INFINITY),
            Err(OptionError::InvalidStepDirection {
                step: f64::INFINITY,
                start: 1.0,
                end: 1.0
            })
        );
    }

    #[test]
    fn test_factor_name_rejects_z() {
        assert_eq!(
            validate_factor_name("Z"),
            Err(OptionError::InvalidFactorName {
                token: "Z".to_string()
            })
        );
    }

    #[test]
    fn test_option_type_rejects_x() {
        assert_eq!(
            validate_option_type("X"),
            Err(OptionError::InvalidOptionType {
                token: "X".to_string()
            })
        );
    }

    #[test]
    fn test_step_zero_rejected() {
        assert_eq!(
            validate_step(0.1, 0.9, 0.0),
            Err(OptionError::InvalidStepDirection {
                step: 0.0,
                start: 0.1,
                end: 0.9
            })
        );
        assert!(validate_step(0.5, 0.5, 0.0).is_err());
    }

    #[test]
    fn test_step_direction_mismatch_rejected() {
        assert!(validate_step(0.1, 0.9, -0.1).is_err());
        assert!(validate_step(0.9, 0.1, 0.1).is_err());
    }

    #[test]
    fn test_step_degenerate_range_accepts_any_nonzero_step() {
        assert!(validate_step(0.5, 0.5, 0.1).is_ok());
        assert!(validate_step(0.5, 0.5, -0.1).is_ok());
    }

    #[test]
    fn test_step_nan_rejected() {
        assert!(validate_step(0.1, 0.9, f64::NAN).is_err());
        assert!(validate_step(f64::NAN, 0.9, 0.1).is_err());
    }

    #[test]
    fn test_sweep_range_guards() {
        assert!(validate_sweep_range(FactorName::Sig, 0.0, 0.5).is_ok());
        assert!(validate_sweep_range(FactorName::Sig, -0.1, 0.5).is_err());
        assert!(validate_sweep_range(FactorName::S, 10.0, -1.0).is_err());
        assert!(validate_sweep_range(FactorName::K, 0.0, 100.0).is_err());
        assert!(validate_sweep_range(FactorName::K, 100.0, 0.0).is_err());
        assert!(validate_sweep_range(FactorName::K, 50.0, 100.0).is_ok());
    }
}
