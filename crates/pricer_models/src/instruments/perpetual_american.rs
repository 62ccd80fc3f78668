//! Perpetual American options.

use std::fmt;

use pricer_core::scenarios::{override_factor, sweep_factor};
use pricer_core::types::{FactorSet, OptionResult, OptionType};

use super::contract::{ContractData, OptionContract};
use crate::analytical::perpetual_american::price_kernel;

/// A perpetual American option. Only prices are available; the expiry
/// factor is carried but ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerpetualAmericanOption {
    contract: OptionContract,
}

impl PerpetualAmericanOption {
    /// Description heading.
    pub const HEADING: &'static str = "Perpetual American Option";

    /// Creates a default call option.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default option of the given type.
    pub fn with_type(option_type: OptionType) -> Self {
        Self::from_contract(OptionContract::with_type(option_type))
    }

    /// Creates a default option from a type token.
    ///
    /// # Errors
    /// `OptionError::InvalidOptionType` unless the token is `C` or `P`.
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

    /// Replaces the contract record.
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

    /// Multi-line description of the contract, without an expiry line.
    pub fn describe(&self) -> String {
        self.contract.describe(Self::HEADING, false)
    }
}

impl fmt::Display for PerpetualAmericanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
