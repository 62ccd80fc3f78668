//! # Pricer Risk (L3: Batch Evaluation)
//!
//! Factor matrices and order-preserving parallel evaluation of option
//! kernels across many parameter rows.
//!
//! This crate provides:
//! - [`matrix::FactorMatrix`]: rows of six pricing factors, generated from a
//!   single-factor sweep or from a list of contracts
//! - Matrix pricers for European price/delta/gamma and perpetual American price
//! - Rayon-based parallelisation with a sequential fallback for small inputs
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  matrix/    - FactorMatrix, pricers     │
//! │  parallel/  - Rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Option contracts and kernels           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{FactorSet, OptionType};
//! use pricer_risk::matrix::{european, FactorMatrix};
//!
//! let seed = FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0);
//! let matrix = FactorMatrix::generate(&seed, "S", 80.0, 120.0, 10.0).unwrap();
//! assert_eq!(matrix.len(), 5);
//!
//! let prices = european::matrix_pricer(&matrix, OptionType::Call).unwrap();
//! assert!(prices.windows(2).all(|w| w[0] < w[1]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod matrix;
pub mod parallel;
