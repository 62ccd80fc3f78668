//! Factor matrices and the batch pricers that consume them.
//!
//! A [`FactorMatrix`] is an ordered list of six-factor rows `(T, K, sig, r, b, S)`.
//! Rows are not validated when the matrix is built; each row is validated
//! when a pricer turns it into a transient contract.

pub mod european;
pub mod perpetual_american;

mod evaluator;

pub use evaluator::MatrixEvaluator;

use pricer_core::scenarios::SweepSpec;
use pricer_core::types::{FactorSet, OptionResult};
use pricer_models::instruments::ContractData;
use tracing::debug;

/// Ordered rows of pricing factors.
///
/// # Examples
/// ```
/// use pricer_core::types::FactorSet;
/// use pricer_risk::matrix::FactorMatrix;
///
/// let seed = FactorSet::new(1.0, 100.0, 0.2, 0.05, 0.05, 100.0);
/// let matrix = FactorMatrix::generate(&seed, "sig", 0.1, 0.3, 0.1).unwrap();
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.rows()[0].sig, 0.1);
/// assert_eq!(matrix.rows()[0].k, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FactorMatrix {
    rows: Vec<FactorSet>,
}

impl FactorMatrix {
    /// Creates a matrix from factor rows.
    pub fn new(rows: Vec<FactorSet>) -> Self {
        Self { rows }
    }

    /// Generates one row per value of a single-factor sweep over `seed`.
    ///
    /// The factor token and step direction are validated as for a pricing
    /// sweep; the endpoint bounds are not.
    ///
    /// # Errors
    /// - `OptionError::InvalidFactorName` for an unknown factor token
    /// - `OptionError::InvalidStepDirection` for a zero or backwards step
    pub fn generate(seed: &FactorSet, factor: &str, start: f64, end: f64, step: f64) -> OptionResult<Self> {
        let spec = SweepSpec::new(factor, start, end, step)?;
        let rows: Vec<FactorSet> = spec.factor_sets(*seed).collect();
        debug!(factor = %spec.factor(), rows = rows.len(), "factor matrix generated");
        Ok(Self { rows })
    }

    /// One row per contract, in input order, copied verbatim.
    pub fn from_contracts(contracts: &[ContractData]) -> Self {
        contracts.iter().map(|c| c.factors).collect()
    }

    /// Creates a matrix from raw `(T, K, sig, r, b, S)` rows.
    pub fn from_arrays(rows: &[[f64; 6]]) -> Self {
        rows.iter().copied().map(FactorSet::from_array).collect()
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[FactorSet] {
        &self.rows
    }

    /// Returns the rows as `(T, K, sig, r, b, S)` arrays.
    pub fn to_arrays(&self) -> Vec<[f64; 6]> {
        self.rows.iter().map(FactorSet::to_array).collect()
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<FactorSet> for FactorMatrix {
    fn from_iter<I: IntoIterator<Item = FactorSet>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
