//! Price command implementation
//!
//! Prices one contract and reports closed-form sensitivities where the
//! option family has them.

use pricer_models::instruments::{Instrument, OptionFamily};
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::output::{cell, render, OutputFormat, TableRow};
use crate::Result;

/// One priced contract.
#[derive(Debug, Serialize)]
pub struct Quote {
    /// Asset name
    pub name: String,
    /// Option family
    pub family: String,
    /// Option type token
    #[serde(rename = "type")]
    pub option_type: String,
    /// Price
    pub price: f64,
    /// Closed-form delta
    pub delta: Option<f64>,
    /// Closed-form gamma
    pub gamma: Option<f64>,
}

impl Quote {
    /// Prices an instrument.
    pub fn from_instrument(instrument: &Instrument) -> Self {
        let contract = instrument.contract();
        Self {
            name: contract.label().to_string(),
            family: instrument.family().to_string(),
            option_type: contract.option_type().to_string(),
            price: instrument.price(),
            delta: instrument.delta(),
            gamma: instrument.gamma(),
        }
    }
}

impl TableRow for Quote {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Family", "Type", "Price", "Delta", "Gamma"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.family.clone(),
            self.option_type.clone(),
            cell(Some(self.price)),
            cell(self.delta),
            cell(self.gamma),
        ]
    }
}

/// Builds the instrument and renders its quote.
pub fn quote(config: &CliConfig, family: OptionFamily, args: &ContractArgs, format: OutputFormat) -> Result<String> {
    let data = args.apply(&config.contract)?;
    let instrument = Instrument::from_data(family, data)?;
    let table = render(format, &[Quote::from_instrument(&instrument)])?;

    Ok(match format {
        OutputFormat::Table => format!("{}\n\n{}", instrument.describe(), table),
        _ => table,
    })
}

/// Run the price command
pub fn run(config: &CliConfig, family: OptionFamily, args: &ContractArgs, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    info!(%family, "Pricing contract");
    println!("{}", quote(config, family, args, format)?);
    Ok(())
}
