//! Batch command implementation
//!
//! Prices a TOML list of contracts through the factor-matrix pricers.
//!
//! ```toml
//! [[contracts]]
//! name = "ACME"
//! type = "P"
//! T = 1.5
//! K = 120.0
//! sig = 0.4
//! r = 0.04
//! b = 0.0
//! S = 100.0
//! ```

use std::path::Path;

use pricer_core::types::OptionType;
use pricer_models::instruments::{ContractData, OptionFamily, DEFAULT_LABEL};
use pricer_risk::matrix::{FactorMatrix, MatrixEvaluator};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::sweep::european_only;
use super::Quantity;
use crate::config::CliConfig;
use crate::output::{cell, render, OutputFormat, TableRow};
use crate::{CliError, Result};

/// Contents of a batch file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    /// Contracts in evaluation order
    #[serde(default)]
    pub contracts: Vec<ContractData>,
}

impl BatchFile {
    /// Reads a batch file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// One evaluated contract.
#[derive(Debug, Serialize, PartialEq)]
pub struct BatchRow {
    /// Asset name
    pub name: String,
    /// Option type token
    #[serde(rename = "type")]
    pub option_type: String,
    /// Computed quantity
    pub quantity: String,
    /// Result
    pub value: f64,
}

impl TableRow for BatchRow {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Type", "Quantity", "Value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.option_type.clone(),
            self.quantity.clone(),
            cell(Some(self.value)),
        ]
    }
}

/// Evaluates every contract, keeping file order.
///
/// Contracts are grouped by option type, each group goes through one matrix
/// evaluation, and the results are put back in file order. A contract
/// without a type is a call.
pub fn evaluate(
    evaluator: &MatrixEvaluator,
    family: OptionFamily,
    quantity: Quantity,
    contracts: &[ContractData],
) -> Result<Vec<BatchRow>> {
    if family == OptionFamily::PerpetualAmerican && quantity != Quantity::Price {
        return Err(european_only(quantity));
    }

    let types: Vec<OptionType> = contracts
        .iter()
        .map(|c| c.option_type.unwrap_or_default())
        .collect();
    let mut values = vec![0.0; contracts.len()];

    for option_type in [OptionType::Call, OptionType::Put] {
        let indices: Vec<usize> = (0..contracts.len()).filter(|&i| types[i] == option_type).collect();
        if indices.is_empty() {
            continue;
        }
        let group: Vec<ContractData> = indices.iter().map(|&i| contracts[i].clone()).collect();
        let matrix = FactorMatrix::from_contracts(&group);

        let results = match (family, quantity) {
            (OptionFamily::European, Quantity::Price) => evaluator.european_price(&matrix, option_type)?,
            (OptionFamily::European, Quantity::Delta) => evaluator.european_delta(&matrix, option_type)?,
            (OptionFamily::European, Quantity::Gamma) => evaluator.european_gamma(&matrix, option_type)?,
            (OptionFamily::PerpetualAmerican, _) => evaluator.perpetual_price(&matrix, option_type)?,
        };
        for (i, value) in indices.into_iter().zip(results) {
            values[i] = value;
        }
    }

    Ok(contracts
        .iter()
        .zip(types)
        .zip(values)
        .map(|((contract, option_type), value)| BatchRow {
            name: contract.label.clone().unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            option_type: option_type.to_string(),
            quantity: quantity.as_str().to_string(),
            value,
        })
        .collect())
}

/// Run the batch command
pub fn run(config: &CliConfig, file: &Path, family: OptionFamily, quantity: Quantity, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let batch = BatchFile::load(file)?;
    info!(contracts = batch.contracts.len(), %family, "Evaluating batch");

    let evaluator = MatrixEvaluator::new(config.parallel.clone());
    let rows = evaluate(&evaluator, family, quantity, &batch.contracts)?;
    println!("{}", render(format, &rows)?);
    Ok(())
}
