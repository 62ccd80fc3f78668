//! Closed-form prices for perpetual American options.
//!
//! With no expiry, the optimal exercise boundary is flat and the value
//! solves a time-independent ODE. The expiry factor `T` is ignored.
//!
//! ## Mathematical Formulas
//!
//! tmp = √((b/σ² - 1/2)² + 2r/σ²)
//!
//! **Call**: y₁ = 1/2 - b/σ² + tmp, C = K/(y₁-1) · ((y₁-1)·S / (K·y₁))^y₁
//! **Put**: y₂ = 1/2 - b/σ² - tmp, P = K/(1-y₂) · ((y₂-1)·S / (K·y₂))^y₂

use pricer_core::types::{FactorSet, OptionType};

use super::Kernel;

/// Returns (b/σ², tmp) for the given factors.
#[inline]
fn exponent_terms(f: &FactorSet) -> (f64, f64) {
    let sig2 = f.sig * f.sig;
    let carry_ratio = f.b / sig2;
    let tmp = ((carry_ratio - 0.5) * (carry_ratio - 0.5) + 2.0 * f.r / sig2).sqrt();
    (carry_ratio, tmp)
}

/// Perpetual American call price.
///
/// # Examples
/// ```
/// use pricer_core::types::FactorSet;
/// use pricer_models::analytical::perpetual_american::call_price;
///
/// let f = FactorSet::new(0.0, 100.0, 0.1, 0.1, 0.02, 110.0);
/// assert!((call_price(&f) - 18.5035).abs() < 1e-4);
/// ```
pub fn call_price(f: &FactorSet) -> f64 {
    let (carry_ratio, tmp) = exponent_terms(f);
    let y = 0.5 - carry_ratio + tmp;
    (f.k / (y - 1.0)) * ((y - 1.0) * f.s / (f.k * y)).powf(y)
}

/// Perpetual American put price.
pub fn put_price(f: &FactorSet) -> f64 {
    let (carry_ratio, tmp) = exponent_terms(f);
    let y = 0.5 - carry_ratio - tmp;
    (f.k / (1.0 - y)) * ((y - 1.0) * f.s / (f.k * y)).powf(y)
}

/// Returns the price kernel for the given option type.
#[inline]
pub fn price_kernel(option_type: OptionType) -> Kernel {
    match option_type {
        OptionType::Call => call_price,
        OptionType::Put => put_price,
    }
}
