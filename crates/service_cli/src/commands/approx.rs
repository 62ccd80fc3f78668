//! Approx command implementation
//!
//! Compares central finite-difference delta or gamma with the closed form.

use clap::ValueEnum;
use pricer_models::instruments::EuropeanOption;
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::output::{cell, render, OutputFormat, TableRow};
use crate::Result;

/// Sensitivity to approximate.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensitivity {
    /// First derivative in spot
    Delta,
    /// Second derivative in spot
    Gamma,
}

/// Finite-difference estimate next to the closed form.
#[derive(Debug, Serialize)]
pub struct Approximation {
    /// Sensitivity name
    pub sensitivity: String,
    /// Spot at which it is evaluated
    pub spot: f64,
    /// Bump size
    pub bump: f64,
    /// Central-difference estimate
    pub approximate: f64,
    /// Closed-form value
    pub closed_form: f64,
    /// approximate - closed_form
    pub error: f64,
}

impl TableRow for Approximation {
    fn headers() -> Vec<&'static str> {
        vec!["Sensitivity", "Spot", "h", "Approximate", "Closed form", "Error"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.sensitivity.clone(),
            cell(Some(self.spot)),
            format!("{:e}", self.bump),
            cell(Some(self.approximate)),
            cell(Some(self.closed_form)),
            format!("{:.3e}", self.error),
        ]
    }
}

/// Computes the approximation. `spot` defaults to the contract's spot and
/// `bump` to the configured finite-difference bump.
pub fn approximate(
    config: &CliConfig,
    sensitivity: Sensitivity,
    spot: Option<f64>,
    bump: Option<f64>,
    args: &ContractArgs,
) -> Result<Approximation> {
    let option = EuropeanOption::from_data(args.apply(&config.contract)?)?;
    let spot = spot.unwrap_or(option.factors().s);
    let h = bump.unwrap_or(config.finite_difference.bump);

    let (name, approximate, closed_form) = match sensitivity {
        Sensitivity::Delta => ("delta", option.approx_delta_at(spot, h)?, option.delta_with("S", spot)?),
        Sensitivity::Gamma => ("gamma", option.approx_gamma_at(spot, h)?, option.gamma_with("S", spot)?),
    };

    Ok(Approximation {
        sensitivity: name.to_string(),
        spot,
        bump: h,
        approximate,
        closed_form,
        error: approximate - closed_form,
    })
}

/// Run the approx command
pub fn run(
    config: &CliConfig,
    sensitivity: Sensitivity,
    spot: Option<f64>,
    bump: Option<f64>,
    args: &ContractArgs,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    info!(?sensitivity, "Approximating sensitivity");
    let row = approximate(config, sensitivity, spot, bump, args)?;
    println!("{}", render(format, &[row])?);
    Ok(())
}
