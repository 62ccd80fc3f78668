//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod approx;
pub mod batch;
pub mod demo;
pub mod parity;
pub mod price;
pub mod sweep;

use clap::{Args, ValueEnum};
use pricer_core::validation::validate_option_type;
use pricer_models::instruments::ContractData;

use crate::Result;

/// Per-command contract overrides on top of the configured contract.
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Expiry in years
    #[arg(long = "T", value_name = "YEARS")]
    pub t: Option<f64>,

    /// Strike
    #[arg(long = "K")]
    pub k: Option<f64>,

    /// Volatility
    #[arg(long)]
    pub sig: Option<f64>,

    /// Risk-free rate
    #[arg(long)]
    pub r: Option<f64>,

    /// Cost of carry
    #[arg(long)]
    pub b: Option<f64>,

    /// Spot price
    #[arg(long = "S")]
    pub s: Option<f64>,

    /// Option type token (C or P)
    #[arg(long = "type", value_name = "C|P")]
    pub option_type: Option<String>,

    /// Asset name shown in descriptions
    #[arg(long)]
    pub name: Option<String>,
}

impl ContractArgs {
    /// Applies the overrides to `base`. Factor bounds are checked later,
    /// when the contract is built.
    pub fn apply(&self, base: &ContractData) -> Result<ContractData> {
        let mut data = base.clone();
        let f = &mut data.factors;
        f.t = self.t.unwrap_or(f.t);
        f.k = self.k.unwrap_or(f.k);
        f.sig = self.sig.unwrap_or(f.sig);
        f.r = self.r.unwrap_or(f.r);
        f.b = self.b.unwrap_or(f.b);
        f.s = self.s.unwrap_or(f.s);

        if let Some(token) = &self.option_type {
            data.option_type = Some(validate_option_type(token)?);
        }
        if let Some(name) = &self.name {
            data.label = Some(name.clone());
        }
        Ok(data)
    }
}

/// Quantity computed by sweep and batch commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Option price
    Price,
    /// Closed-form delta (European only)
    Delta,
    /// Closed-form gamma (European only)
    Gamma,
}

impl Quantity {
    /// Lowercase name used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Price => "price",
            Quantity::Delta => "delta",
            Quantity::Gamma => "gamma",
        }
    }
}
