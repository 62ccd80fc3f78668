//! European options under generalised Black-Scholes.

use std::fmt;

use pricer_core::scenarios::{override_factor, sweep_factor};
use pricer_core::types::{FactorName, FactorSet, OptionResult, OptionType};

use super::contract::{ContractData, OptionContract};
use crate::analytical::european::{delta_kernel, gamma, price_kernel};
use crate::analytical::parity::{parity_counterpart, parity_holds};
use crate::greeks::{central_delta, central_gamma};

/// A European option: price, delta and gamma in closed form, plus
/// finite-difference and parity helpers.
///
/// Each quantity comes in three forms: at the contract's own factors, with
/// one factor overridden, and swept over a range of one factor. None of
/// them modify the contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::EuropeanOption;
/// use pricer_core::types::{FactorSet, OptionType};
///
/// let option = EuropeanOption::from_factors(
///     FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0),
///     OptionType::Put,
/// )
/// .unwrap();
///
/// let puts = option.price_sweep("sig", 0.1, 0.9, 0.2).unwrap();
/// assert_eq!(puts.len(), 5);
/// assert!(puts.windows(2).all(|w| w[0] < w[1]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EuropeanOption {
    contract: OptionContract,
}

impl EuropeanOption {
    /// Description heading.
    pub const HEADING: &'static str = "European Option";

    /// Creates a default call option.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default option of the given type.
    pub fn with_type(option_type: OptionType) -> Self {
        Self::from_contract(OptionContract::with_type(option_type))
    }

    /// Creates a default option from a type token (`C` or `P`, any case).
    ///
    /// # Errors
    /// `OptionError::InvalidOptionType` for any other token.
    pub fn from_type_token(token: &str) -> OptionResult<Self> {
        OptionContract::from_type_token(token).map(Self::from_contract)
    }

    /// Creates an option from factors and a type.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn from_factors(factors: FactorSet, option_type: OptionType) -> OptionResult<Self> {
        OptionContract::from_factors(factors, option_type).map(Self::from_contract)
    }

    /// Creates an option from a full contract record.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn from_data(data: ContractData) -> OptionResult<Self> {
        OptionContract::from_data(data).map(Self::from_contract)
    }

    /// Wraps an already validated contract.
    pub fn from_contract(contract: OptionContract) -> Self {
        Self { contract }
    }

    /// Returns the underlying contract.
    #[inline]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Returns the underlying contract mutably.
    #[inline]
    pub fn contract_mut(&mut self) -> &mut OptionContract {
        &mut self.contract
    }

    /// Returns the pricing factors.
    #[inline]
    pub fn factors(&self) -> &FactorSet {
        self.contract.factors()
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.contract.option_type()
    }

    /// Replaces the contract record. See [`OptionContract::set_data`].
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn set_data(&mut self, data: ContractData) -> OptionResult<()> {
        self.contract.set_data(data)
    }

    /// Flips Call to Put and Put to Call.
    pub fn toggle(&mut self) {
        self.contract.toggle();
    }

    // ========================================================================
    // Price
    // ========================================================================

    /// Price at the contract's factors.
    pub fn price(&self) -> f64 {
        price_kernel(self.option_type())(self.factors())
    }

    /// Price with one factor replaced.
    ///
    /// # Errors
    /// - `OptionError::InvalidFactorName` for an unknown factor token
    /// - `OptionError::InvalidFactorValue` if the overridden factors are out of bounds
    pub fn price_with(&self, factor: &str, value: f64) -> OptionResult<f64> {
        override_factor(self.factors(), factor, value, price_kernel(self.option_type()))
    }

    /// Prices while one factor walks from `start` to `end` by `step`.
    ///
    /// # Errors
    /// - `OptionError::InvalidFactorName` for an unknown factor token
    /// - `OptionError::InvalidStepDirection` for a zero or backwards step
    /// - `OptionError::InvalidFactorValue` for an out-of-bounds endpoint
    pub fn price_sweep(&self, factor: &str, start: f64, end: f64, step: f64) -> OptionResult<Vec<f64>> {
        sweep_factor(self.factors(), factor, start, end, step, price_kernel(self.option_type()))
    }

    // ========================================================================
    // Delta
    // ========================================================================

    /// Closed-form delta at the contract's factors.
    pub fn delta(&self) -> f64 {
        delta_kernel(self.option_type())(self.factors())
    }

    /// Closed-form delta with one factor replaced.
    ///
    /// # Errors
    /// Same as [`EuropeanOption::price_with`].
    pub fn delta_with(&self, factor: &str, value: f64) -> OptionResult<f64> {
        override_factor(self.factors(), factor, value, delta_kernel(self.option_type()))
    }

    /// Closed-form delta over a sweep of one factor.
    ///
    /// # Errors
    /// Same as [`EuropeanOption::price_sweep`].
    pub fn delta_sweep(&self, factor: &str, start: f64, end: f64, step: f64) -> OptionResult<Vec<f64>> {
        sweep_factor(self.factors(), factor, start, end, step, delta_kernel(self.option_type()))
    }

    /// Central-difference delta at the contract's spot.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if `S - h` is negative.
    pub fn approx_delta(&self, h: f64) -> OptionResult<f64> {
        self.approx_delta_at(self.factors().s, h)
    }

    /// Central-difference delta at spot `s`.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if `s - h` is negative.
    pub fn approx_delta_at(&self, s: f64, h: f64) -> OptionResult<f64> {
        central_delta(s, h, |spot| self.price_with(FactorName::S.as_str(), spot))
    }

    // ========================================================================
    // Gamma
    // ========================================================================

    /// Closed-form gamma at the contract's factors.
    pub fn gamma(&self) -> f64 {
        gamma(self.factors())
    }

    /// Closed-form gamma with one factor replaced.
    ///
    /// # Errors
    /// Same as [`EuropeanOption::price_with`].
    pub fn gamma_with(&self, factor: &str, value: f64) -> OptionResult<f64> {
        override_factor(self.factors(), factor, value, gamma)
    }

    /// Closed-form gamma over a sweep of one factor.
    ///
    /// # Errors
    /// Same as [`EuropeanOption::price_sweep`].
    pub fn gamma_sweep(&self, factor: &str, start: f64, end: f64, step: f64) -> OptionResult<Vec<f64>> {
        sweep_factor(self.factors(), factor, start, end, step, gamma)
    }

    /// Central-difference gamma at the contract's spot.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if `S - h` is negative.
    pub fn approx_gamma(&self, h: f64) -> OptionResult<f64> {
        self.approx_gamma_at(self.factors().s, h)
    }

    /// Central-difference gamma at spot `s`.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if `s` or `s - h` is negative.
    pub fn approx_gamma_at(&self, s: f64, h: f64) -> OptionResult<f64> {
        central_gamma(s, h, |spot| self.price_with(FactorName::S.as_str(), spot))
    }

    // ========================================================================
    // Parity
    // ========================================================================

    /// Counterpart price under put-call parity at the contract's factors.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if `price` is negative.
    pub fn parity(&self, price: f64, option_type: OptionType) -> OptionResult<f64> {
        parity_counterpart(price, option_type, self.factors())
    }

    /// Whether `call` and `put` satisfy put-call parity at the contract's
    /// factors.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if `call` is negative.
    pub fn parity_holds(&self, call: f64, put: f64) -> OptionResult<bool> {
        parity_holds(call, put, self.factors())
    }

    /// Multi-line description of the contract.
    pub fn describe(&self) -> String {
        self.contract.describe(Self::HEADING, true)
    }
}

impl fmt::Display for EuropeanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
