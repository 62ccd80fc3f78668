//! Sweep command implementation
//!
//! Evaluates price, delta or gamma while one factor walks a range.

use pricer_core::scenarios::SweepSpec;
use pricer_core::validation::validate_factor_name;
use pricer_models::instruments::{EuropeanOption, Instrument, OptionFamily};
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, Quantity};
use crate::config::CliConfig;
use crate::output::{cell, render, OutputFormat, TableRow};
use crate::{CliError, Result};

/// One sweep point.
#[derive(Debug, Serialize, PartialEq)]
pub struct SweepPoint {
    /// Swept factor
    pub factor: String,
    /// Factor value
    pub value: f64,
    /// Computed quantity
    pub quantity: String,
    /// Result at this point
    pub result: f64,
}

impl TableRow for SweepPoint {
    fn headers() -> Vec<&'static str> {
        vec!["Factor", "Value", "Quantity", "Result"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.factor.clone(),
            cell(Some(self.value)),
            self.quantity.clone(),
            cell(Some(self.result)),
        ]
    }
}

/// Sweep parameters.
#[derive(Debug, Clone)]
pub struct SweepRequest {
    /// Option family
    pub family: OptionFamily,
    /// Computed quantity
    pub quantity: Quantity,
    /// Factor token
    pub factor: String,
    /// First value
    pub start: f64,
    /// Last value
    pub end: f64,
    /// Increment
    pub step: f64,
}

/// Evaluates the sweep and pairs every result with its factor value.
pub fn evaluate(config: &CliConfig, request: &SweepRequest, args: &ContractArgs) -> Result<Vec<SweepPoint>> {
    let data = args.apply(&config.contract)?;
    let instrument = Instrument::from_data(request.family, data)?;
    let SweepRequest {
        factor,
        start,
        end,
        step,
        quantity,
        ..
    } = request;

    let pairs = match (&instrument, quantity) {
        (Instrument::European(option), q) => european_points(option, *q, factor, *start, *end, *step)?,
        (Instrument::PerpetualAmerican(option), Quantity::Price) => {
            with_factor_values(factor, *start, *end, *step, option.price_sweep(factor, *start, *end, *step)?)?
        }
        (Instrument::PerpetualAmerican(_), q) => return Err(european_only(*q)),
    };

    let factor_name = validate_factor_name(factor)?.to_string();
    Ok(pairs
        .into_iter()
        .map(|(value, result)| SweepPoint {
            factor: factor_name.clone(),
            value,
            quantity: quantity.as_str().to_string(),
            result,
        })
        .collect())
}

pub(crate) fn european_only(quantity: Quantity) -> CliError {
    CliError::InvalidArgument(format!(
        "{} is only available for {} options",
        quantity.as_str(),
        OptionFamily::European
    ))
}

/// Run the sweep command
pub fn run(config: &CliConfig, request: &SweepRequest, args: &ContractArgs, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    info!(
        factor = %request.factor,
        start = request.start,
        end = request.end,
        step = request.step,
        "Sweeping factor"
    );
    let points = evaluate(config, request, args)?;
    println!("{}", render(format, &points)?);
    Ok(())
}

/// Sweeps a European option and pairs each result with its factor value.
pub fn european_points(
    option: &EuropeanOption,
    quantity: Quantity,
    factor: &str,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<(f64, f64)>> {
    let results = match quantity {
        Quantity::Price => option.price_sweep(factor, start, end, step)?,
        Quantity::Delta => option.delta_sweep(factor, start, end, step)?,
        Quantity::Gamma => option.gamma_sweep(factor, start, end, step)?,
    };
    with_factor_values(factor, start, end, step, results)
}

fn with_factor_values(factor: &str, start: f64, end: f64, step: f64, results: Vec<f64>) -> Result<Vec<(f64, f64)>> {
    let spec = SweepSpec::new(factor, start, end, step)?;
    Ok(spec.points().zip(results).collect())
}
