//! Parity command implementation
//!
//! Computes a put-call parity counterpart, or checks a call/put pair.

use pricer_core::types::OptionType;
use pricer_core::validation::validate_option_type;
use pricer_models::instruments::EuropeanOption;
use serde::Serialize;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::output::{cell, render, OutputFormat, TableRow};
use crate::{CliError, Result};

/// What the parity command was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ParityRequest {
    /// Counterpart of a price quoted for the given type token
    Counterpart {
        /// Quoted price
        price: f64,
        /// Type token of the quoted price
        option_type: String,
    },
    /// Whether a call and put price satisfy parity
    Check {
        /// Call price
        call: f64,
        /// Put price
        put: f64,
    },
}

impl ParityRequest {
    /// Builds a request from the raw command line options.
    pub fn from_options(
        price: Option<f64>,
        price_type: Option<String>,
        call: Option<f64>,
        put: Option<f64>,
    ) -> Result<Self> {
        match (price, call, put) {
            (Some(price), None, None) => Ok(ParityRequest::Counterpart {
                price,
                option_type: price_type.unwrap_or_else(|| "C".to_string()),
            }),
            (None, Some(call), Some(put)) => Ok(ParityRequest::Check { call, put }),
            _ => Err(CliError::InvalidArgument(
                "Provide either --price [--price-type C|P] or both --call and --put".to_string(),
            )),
        }
    }
}

/// Outcome of a parity query.
#[derive(Debug, Serialize, PartialEq)]
pub struct ParityResult {
    /// Call price
    pub call: f64,
    /// Put price
    pub put: f64,
    /// Whether the pair satisfies parity
    pub holds: bool,
}

impl TableRow for ParityResult {
    fn headers() -> Vec<&'static str> {
        vec!["Call", "Put", "Parity holds"]
    }

    fn cells(&self) -> Vec<String> {
        vec![cell(Some(self.call)), cell(Some(self.put)), self.holds.to_string()]
    }
}

/// Evaluates the request against the configured contract.
pub fn evaluate(config: &CliConfig, request: &ParityRequest, args: &ContractArgs) -> Result<ParityResult> {
    let option = EuropeanOption::from_data(args.apply(&config.contract)?)?;

    match request {
        ParityRequest::Counterpart { price, option_type } => {
            let option_type = validate_option_type(option_type)?;
            let counterpart = option.parity(*price, option_type)?;
            let (call, put) = match option_type {
                OptionType::Call => (*price, counterpart),
                OptionType::Put => (counterpart, *price),
            };
            // A negative counterpart is reported as a failed pair.
            let holds = put >= 0.0 && call >= 0.0 && option.parity_holds(call, put)?;
            Ok(ParityResult { call, put, holds })
        }
        ParityRequest::Check { call, put } => Ok(ParityResult {
            call: *call,
            put: *put,
            holds: option.parity_holds(*call, *put)?,
        }),
    }
}

/// Run the parity command
pub fn run(config: &CliConfig, request: &ParityRequest, args: &ContractArgs, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let result = evaluate(config, request, args)?;
    println!("{}", render(format, &[result])?);
    Ok(())
}
