//! Mathematical primitives.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF and PDF used by the pricing kernels

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
