//! Demo command: a guided walkthrough of both option families.
//!
//! Prices a European call and put, sweeps volatility and cost of carry,
//! compares finite-difference sensitivities with the closed form, then
//! prices a perpetual American put and call with a rate sweep.

use std::fmt::Write;

use pricer_core::types::{FactorSet, OptionType};
use pricer_models::instruments::{ContractData, EuropeanOption, PerpetualAmericanOption};

use super::sweep::european_points;
use super::Quantity;
use crate::config::CliConfig;
use crate::Result;

fn join(values: &[(f64, f64)]) -> String {
    values
        .iter()
        .map(|(x, y)| format!("{x:.2} -> {y:.6}"))
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// Builds the walkthrough text. `h` comes from the finite-difference config.
pub fn walkthrough(config: &CliConfig) -> Result<String> {
    let h = config.finite_difference.bump;
    let mut out = String::new();

    // ------------------------------------------------------------------
    // European
    // ------------------------------------------------------------------
    let data = ContractData::new(FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0))
        .with_option_type(OptionType::Call)
        .with_label("Demo");
    let mut euro = EuropeanOption::from_data(data)?;

    writeln!(out, "========================================")?;
    writeln!(out, "European Option Walkthrough")?;
    writeln!(out, "========================================")?;
    writeln!(out, "{euro}\n")?;
    writeln!(out, "C price: {:.6}", euro.price())?;
    writeln!(out, "C delta: {:.6}", euro.delta())?;
    writeln!(out, "Gamma:   {:.6}", euro.gamma())?;

    euro.toggle();
    writeln!(out, "P price: {:.6}", euro.price())?;
    writeln!(out, "P delta: {:.6}", euro.delta())?;
    writeln!(out, "Gamma:   {:.6}\n", euro.gamma())?;

    let puts = european_points(&euro, Quantity::Price, "sig", 0.1, 0.9, 0.2)?;
    writeln!(out, "Put prices, sig from 0.1 to 0.9 step 0.2:\n  {}\n", join(&puts))?;

    let deltas = european_points(&euro, Quantity::Delta, "b", 0.02, 0.1, 0.01)?;
    writeln!(out, "Put deltas, b from 0.02 to 0.1 step 0.01:\n  {}\n", join(&deltas))?;

    writeln!(
        out,
        "Approximate delta (h = {h}): {:.6} (closed form {:.6})",
        euro.approx_delta(h)?,
        euro.delta()
    )?;
    writeln!(
        out,
        "Approximate gamma (h = {h}): {:.6} (closed form {:.6})\n",
        euro.approx_gamma(h)?,
        euro.gamma()
    )?;

    // ------------------------------------------------------------------
    // Perpetual American
    // ------------------------------------------------------------------
    let data = ContractData::new(FactorSet::new(0.0, 100.0, 0.1, 0.1, 0.02, 110.0))
        .with_option_type(OptionType::Put)
        .with_label("American");
    let mut perpetual = PerpetualAmericanOption::from_data(data)?;

    writeln!(out, "========================================")?;
    writeln!(out, "Perpetual American Option Walkthrough")?;
    writeln!(out, "========================================")?;
    writeln!(out, "{perpetual}\n")?;
    writeln!(out, "Put price:  {:.6}", perpetual.price())?;
    perpetual.toggle();
    writeln!(out, "Call price: {:.6}\n", perpetual.price())?;

    let rates = perpetual.price_sweep("r", 0.1, 0.5, 0.1)?;
    writeln!(out, "Call prices, r from 0.1 to 0.5 step 0.1:")?;
    for price in rates {
        writeln!(out, "  {price:.6}")?;
    }

    Ok(out)
}

/// Runs the walkthrough and prints it.
pub fn run(config: &CliConfig) -> Result<()> {
    print!("{}", walkthrough(config)?);
    Ok(())
}
