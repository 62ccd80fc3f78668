//! Generalised Black-Scholes kernels for European options.
//!
//! The cost-of-carry parameter `b` covers the usual special cases:
//! `b = r` (non-dividend stock), `b = r - q` (continuous yield `q`),
//! `b = 0` (futures, Black 1976).
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//! **Call Delta**: e^((b-r)T)·N(d₁)
//! **Put Delta**: e^((b-r)T)·(N(d₁) - 1)
//! **Gamma**: e^((b-r)T)·φ(d₁) / (S·σ√T)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::{norm_cdf, norm_pdf};
use pricer_core::types::{FactorSet, OptionType};

use super::Kernel;

/// Intermediate terms shared by every European kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    /// σ√T
    pub vol_sqrt_t: f64,
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
}

impl D1D2 {
    /// Computes σ√T, d₁ and d₂ for the given factors.
    #[inline]
    pub fn new(f: &FactorSet) -> Self {
        let vol_sqrt_t = f.sig * f.t.sqrt();
        let d1 = ((f.s / f.k).ln() + (f.b + 0.5 * f.sig * f.sig) * f.t) / vol_sqrt_t;
        Self {
            vol_sqrt_t,
            d1,
            d2: d1 - vol_sqrt_t,
        }
    }
}

/// Carry discount factor e^((b-r)T).
#[inline]
fn carry_factor(f: &FactorSet) -> f64 {
    ((f.b - f.r) * f.t).exp()
}

/// Risk-free discount factor e^(-rT).
#[inline]
fn discount_factor(f: &FactorSet) -> f64 {
    (-f.r * f.t).exp()
}

/// European call price.
///
/// # Examples
/// ```
/// use pricer_core::types::FactorSet;
/// use pricer_models::analytical::european::call_price;
///
/// // Haug (2007), p.3: S=60, K=65, T=0.25, r=b=0.08, σ=0.30 → 2.1334
/// let f = FactorSet::new(0.25, 65.0, 0.30, 0.08, 0.08, 60.0);
/// assert!((call_price(&f) - 2.1334).abs() < 1e-4);
/// ```
pub fn call_price(f: &FactorSet) -> f64 {
    let D1D2 { d1, d2, .. } = D1D2::new(f);
    f.s * carry_factor(f) * norm_cdf(d1) - f.k * discount_factor(f) * norm_cdf(d2)
}

/// European put price.
pub fn put_price(f: &FactorSet) -> f64 {
    let D1D2 { d1, d2, .. } = D1D2::new(f);
    f.k * discount_factor(f) * norm_cdf(-d2) - f.s * carry_factor(f) * norm_cdf(-d1)
}

/// European call delta (∂C/∂S).
pub fn call_delta(f: &FactorSet) -> f64 {
    carry_factor(f) * norm_cdf(D1D2::new(f).d1)
}

/// European put delta (∂P/∂S).
pub fn put_delta(f: &FactorSet) -> f64 {
    carry_factor(f) * (norm_cdf(D1D2::new(f).d1) - 1.0)
}

/// European gamma (∂²V/∂S²), identical for calls and puts.
pub fn gamma(f: &FactorSet) -> f64 {
    let D1D2 { vol_sqrt_t, d1, .. } = D1D2::new(f);
    carry_factor(f) * norm_pdf(d1) / (f.s * vol_sqrt_t)
}

/// Returns the price kernel for the given option type.
#[inline]
pub fn price_kernel(option_type: OptionType) -> Kernel {
    match option_type {
        OptionType::Call => call_price,
        OptionType::Put => put_price,
    }
}

/// Returns the delta kernel for the given option type.
#[inline]
pub fn delta_kernel(option_type: OptionType) -> Kernel {
    match option_type {
        OptionType::Call => call_delta,
        OptionType::Put => put_delta,
    }
}

/// Returns the gamma kernel (the option type does not matter).
#[inline]
pub fn gamma_kernel(_option_type: OptionType) -> Kernel {
    gamma
}
