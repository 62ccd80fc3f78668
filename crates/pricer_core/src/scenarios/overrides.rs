//! Evaluate a kernel with one factor overridden.

use crate::types::{FactorSet, OptionResult};
use crate::validation::validate_factor_name;

/// Evaluates `kernel` on a copy of `base` with one factor replaced.
///
/// The factor token is validated and canonicalised first, then the
/// overridden record is validated as a whole before the kernel runs. `base`
/// is never modified.
///
/// # Arguments
/// * `base` - Current factors of the contract
/// * `factor` - Factor token (`T`, `K`, `SIG`, `R`, `B`, `S`; any case)
/// * `value` - Replacement value
/// * `kernel` - Pricing function over the six factors
///
/// # Errors
/// - `OptionError::InvalidFactorName` for an unknown token
/// - `OptionError::InvalidFactorValue` if the overridden record is out of bounds
///
/// # Examples
/// ```
/// use pricer_core::scenarios::override_factor;
/// use pricer_core::types::FactorSet;
///
/// let base = FactorSet::new(1.0, 100.0, 0.2, 0.05, 0.05, 100.0);
/// let moneyness = override_factor(&base, "k", 80.0, |f| f.s / f.k).unwrap();
/// assert_eq!(moneyness, 1.25);
///
/// // Strike may not be overridden to zero
/// assert!(override_factor(&base, "K", 0.0, |f| f.s / f.k).is_err());
/// ```
pub fn override_factor<F>(base: &FactorSet, factor: &str, value: f64, kernel: F) -> OptionResult<f64>
where
    F: FnOnce(&FactorSet) -> f64,
{
    let name = validate_factor_name(factor)?;

    let mut factors = *base;
    factors.set(name, value);
    factors.validate()?;

    Ok(kernel(&factors))
}
