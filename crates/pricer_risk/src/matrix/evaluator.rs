//! Row-wise evaluation of a factor matrix.

use pricer_core::types::{FactorSet, OptionResult};
use tracing::debug;

use super::FactorMatrix;
use crate::parallel::{try_map_ordered, ParallelConfig};

/// Applies a per-row evaluation to every row of a [`FactorMatrix`].
///
/// Results are in row order. Large matrices are split across the Rayon
/// pool according to the [`ParallelConfig`].
#[derive(Debug, Clone, Default)]
pub struct MatrixEvaluator {
    config: ParallelConfig,
}

impl MatrixEvaluator {
    /// Creates an evaluator with the given parallel configuration.
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Returns the parallel configuration.
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Evaluates `row_fn` on every row.
    ///
    /// # Errors
    /// The error of the first failing row in row order.
    pub fn evaluate<F>(&self, matrix: &FactorMatrix, quantity: &str, row_fn: F) -> OptionResult<Vec<f64>>
    where
        F: Fn(&FactorSet) -> OptionResult<f64> + Sync + Send,
    {
        let parallel = self.config.should_parallelize(matrix.len());
        let values = try_map_ordered(matrix.rows(), &self.config, row_fn)?;
        debug!(quantity, rows = values.len(), parallel, "factor matrix evaluated");
        Ok(values)
    }
}
