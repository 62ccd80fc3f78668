//! Perpetual American prices over a factor matrix.

use pricer_core::types::{OptionResult, OptionType};
use pricer_models::instruments::PerpetualAmericanOption;

use super::{FactorMatrix, MatrixEvaluator};

impl MatrixEvaluator {
    /// Perpetual American prices, one per row. `T` is ignored.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
    pub fn perpetual_price(&self, matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
        self.evaluate(matrix, "perpetual_price", |row| {
            PerpetualAmericanOption::from_factors(*row, option_type).map(|o| o.price())
        })
    }
}

/// Perpetual American prices with the default parallel configuration.
///
/// # Errors
/// `OptionError::InvalidFactorValue` for the first out-of-bounds row.
pub fn matrix_pricer(matrix: &FactorMatrix, option_type: OptionType) -> OptionResult<Vec<f64>> {
    MatrixEvaluator::default().perpetual_price(matrix, option_type)
}
