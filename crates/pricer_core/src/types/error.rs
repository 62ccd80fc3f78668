//! Error types for structured error handling.
//!
//! This module provides:
//! - `OptionError`: The closed set of validation failures raised by contract,
//!   override, sweep, parity and matrix operations
//! - `OptionResult`: Result alias used across the workspace

use thiserror::Error;

/// Validation failures for option contracts and factor queries.
///
/// Every variant is raised synchronously at the point of the failing check,
/// before any contract is written or any sweep result is accumulated.
///
/// # Variants
/// - `InvalidFactorName`: Unrecognised factor token
/// - `InvalidOptionType`: Unrecognised option-type token
/// - `InvalidStepDirection`: Sweep step is zero or points away from `end`
/// - `InvalidFactorValue`: A numeric bound was violated
///
/// # Examples
/// ```
/// use pricer_core::types::OptionError;
///
/// let err = OptionError::InvalidFactorName { token: "Z".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "Z is not a valid factor: expected one of S, T, K, SIG, R, B"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionError {
    /// Factor token does not canonicalise to one of T, K, SIG, R, B, S.
    #[error("{token} is not a valid factor: expected one of S, T, K, SIG, R, B")]
    InvalidFactorName {
        /// The offending token, as supplied by the caller
        token: String,
    },

    /// Option-type token is not one of C, P (any case).
    #[error("{token} is not a valid option type: expected 'C' or 'P'")]
    InvalidOptionType {
        /// The offending token, as supplied by the caller
        token: String,
    },

    /// Step is zero or its sign disagrees with `end - start`.
    #[error("Cannot apply {step} as step size to range ({start}, {end})")]
    InvalidStepDirection {
        /// Requested step
        step: f64,
        /// Range start
        start: f64,
        /// Range end
        end: f64,
    },

    /// A factor value is negative, or the strike is not strictly positive.
    #[error("Parameters cannot be negative and K must be positive")]
    InvalidFactorValue,
}

/// Result alias for option operations.
pub type OptionResult<T> = Result<T, OptionError>;
