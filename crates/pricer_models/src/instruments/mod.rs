//! Option instrument definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - [`Instrument`] wraps every option family
//! - Every family carries the same [`OptionContract`]
//! - Capabilities a family lacks (delta and gamma on perpetuals) return `None`
//!
//! # Instrument Types
//!
//! - [`EuropeanOption`]: generalised Black-Scholes price, delta, gamma
//! - [`PerpetualAmericanOption`]: closed-form perpetual American price
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Instrument, OptionFamily};
//! use pricer_core::types::{FactorSet, OptionType};
//!
//! let factors = FactorSet::new(0.0, 100.0, 0.1, 0.1, 0.02, 110.0);
//! let instrument = Instrument::new(OptionFamily::PerpetualAmerican, factors, OptionType::Put).unwrap();
//!
//! assert!(instrument.price() > 0.0);
//! assert_eq!(instrument.delta(), None);
//! ```

mod contract;
mod european;
mod perpetual_american;

pub use contract::{ContractData, OptionContract, DEFAULT_LABEL};
pub use european::EuropeanOption;
pub use perpetual_american::PerpetualAmericanOption;

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{FactorSet, OptionResult, OptionType};
use pricer_core::validation::canonicalize;

/// Option family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OptionFamily {
    /// European exercise at expiry.
    #[default]
    European,
    /// American exercise with no expiry.
    PerpetualAmerican,
}

impl OptionFamily {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionFamily::European => "european",
            OptionFamily::PerpetualAmerican => "perpetual",
        }
    }
}

impl FromStr for OptionFamily {
    type Err = String;

    /// Accepts `european`/`eu` and `perpetual`/`perpetual_american`/`pa`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonicalize(s).as_str() {
            "EUROPEAN" | "EU" => Ok(OptionFamily::European),
            "PERPETUAL" | "PERPETUAL_AMERICAN" | "PA" => Ok(OptionFamily::PerpetualAmerican),
            _ => Err(format!(
                "{s} is not a valid option family: expected 'european' or 'perpetual'"
            )),
        }
    }
}

impl fmt::Display for OptionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified instrument enum for static dispatch over option families.
///
/// # Variants
/// - `European`: price, delta and gamma
/// - `PerpetualAmerican`: price only
#[derive(Debug, Clone, PartialEq)]
pub enum Instrument {
    /// European option.
    European(EuropeanOption),
    /// Perpetual American option.
    PerpetualAmerican(PerpetualAmericanOption),
}

impl Instrument {
    /// Builds an instrument of the given family.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn new(family: OptionFamily, factors: FactorSet, option_type: OptionType) -> OptionResult<Self> {
        Ok(Self::from_contract(family, OptionContract::from_factors(factors, option_type)?))
    }

    /// Builds an instrument from a full contract record.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn from_data(family: OptionFamily, data: ContractData) -> OptionResult<Self> {
        Ok(Self::from_contract(family, OptionContract::from_data(data)?))
    }

    /// Wraps an already validated contract in the given family.
    pub fn from_contract(family: OptionFamily, contract: OptionContract) -> Self {
        match family {
            OptionFamily::European => Instrument::European(EuropeanOption::from_contract(contract)),
            OptionFamily::PerpetualAmerican => {
                Instrument::PerpetualAmerican(PerpetualAmericanOption::from_contract(contract))
            }
        }
    }

    /// Returns the option family.
    pub fn family(&self) -> OptionFamily {
        match self {
            Instrument::European(_) => OptionFamily::European,
            Instrument::PerpetualAmerican(_) => OptionFamily::PerpetualAmerican,
        }
    }

    /// Returns the shared contract.
    pub fn contract(&self) -> &OptionContract {
        match self {
            Instrument::European(o) => o.contract(),
            Instrument::PerpetualAmerican(o) => o.contract(),
        }
    }

    /// Price at the contract's factors.
    pub fn price(&self) -> f64 {
        match self {
            Instrument::European(o) => o.price(),
            Instrument::PerpetualAmerican(o) => o.price(),
        }
    }

    /// Price with one factor replaced.
    ///
    /// # Errors
    /// - `OptionError::InvalidFactorName` for an unknown factor token
    /// - `OptionError::InvalidFactorValue` if the overridden factors are out of bounds
    pub fn price_with(&self, factor: &str, value: f64) -> OptionResult<f64> {
        match self {
            Instrument::European(o) => o.price_with(factor, value),
            Instrument::PerpetualAmerican(o) => o.price_with(factor, value),
        }
    }

    /// Prices over a sweep of one factor.
    ///
    /// # Errors
    /// See [`EuropeanOption::price_sweep`].
    pub fn price_sweep(&self, factor: &str, start: f64, end: f64, step: f64) -> OptionResult<Vec<f64>> {
        match self {
            Instrument::European(o) => o.price_sweep(factor, start, end, step),
            Instrument::PerpetualAmerican(o) => o.price_sweep(factor, start, end, step),
        }
    }

    /// Closed-form delta, if the family has one.
    pub fn delta(&self) -> Option<f64> {
        match self {
            Instrument::European(o) => Some(o.delta()),
            Instrument::PerpetualAmerican(_) => None,
        }
    }

    /// Closed-form gamma, if the family has one.
    pub fn gamma(&self) -> Option<f64> {
        match self {
            Instrument::European(o) => Some(o.gamma()),
            Instrument::PerpetualAmerican(_) => None,
        }
    }

    /// Flips Call to Put and Put to Call.
    pub fn toggle(&mut self) {
        match self {
            Instrument::European(o) => o.toggle(),
            Instrument::PerpetualAmerican(o) => o.toggle(),
        }
    }

    /// Multi-line description of the contract.
    pub fn describe(&self) -> String {
        match self {
            Instrument::European(o) => o.describe(),
            Instrument::PerpetualAmerican(o) => o.describe(),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<EuropeanOption> for Instrument {
    fn from(option: EuropeanOption) -> Self {
        Instrument::European(option)
    }
}

impl From<PerpetualAmericanOption> for Instrument {
    fn from(option: PerpetualAmericanOption) -> Self {
        Instrument::PerpetualAmerican(option)
    }
}
