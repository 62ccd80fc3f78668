//! European price, delta and gamma over a factor matrix.
//!
//! Each row becomes a transient [`EuropeanOption`] of the requested type, so
//! a row that fails contract validation fails the whole call.

use pricer_core::types::{OptionResult, OptionType};
use pricer_models::instruments::EuropeanOption;

use super::{FactorMatrix, MatrixEvaluator};

impl MatrixEvaluator {
    /// European prices, one per row.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
    pub fn european_price(&self, matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
        self.evaluate(matrix, "european_price", |row| {
            EuropeanOption::from_factors(*row, option_type).map(|o| o.price())
        })
    }

    /// European closed-form deltas, one per row.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
    pub fn european_delta(&self, matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
        self.evaluate(matrix, "european_delta", |row| {
            EuropeanOption::from_factors(*row, option_type).map(|o| o.delta())
        })
    }

    /// European closed-form gammas, one per row.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
    pub fn european_gamma(&self, matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
        self.evaluate(matrix, "european_gamma", |row| {
            EuropeanOption::from_factors(*row, option_type).map(|o| o.gamma())
        })
    }
}

/// European prices with the default parallel configuration.
///
/// # Errors
/// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
pub fn matrix_pricer(matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
    MatrixEvaluator::default().european_price(matrix, option_type)
}

/// European deltas with the default parallel configuration.
///
/// # Errors
/// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
pub fn matrix_delta(matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
    MatrixEvaluator::default().european_delta(matrix, option_type)
}

/// European gammas with the default parallel configuration.
///
/// # Errors
/// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
pub fn matrix_gamma(matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
    MatrixEvaluator::default().european_gamma(matrix, option_type)
}
