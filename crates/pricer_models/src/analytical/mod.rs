//! Analytical pricing formulas under a cost-of-carry Black-Scholes model.
//!
//! This module provides closed-form solutions for option pricing:
//! - Generalised Black-Scholes price, delta and gamma for European options
//! - Perpetual American call and put prices
//! - Put-call parity counterparts
//!
//! ## Design Principles
//!
//! - **Kernels are `fn(&FactorSet) -> f64`**: every formula takes the full
//!   six-factor record, so any of them can be handed to the shared
//!   override/sweep engines unchanged
//! - **Literal formulas**: kernels do not special-case `T = 0` or `sig = 0`;
//!   such inputs follow IEEE arithmetic

use pricer_core::types::FactorSet;

pub mod european;
pub mod parity;
pub mod perpetual_american;

// Re-export main functions at module level
pub use parity::{parity_counterpart, parity_holds, PARITY_TOLERANCE};

/// A closed-form pricing kernel over the six pricing factors.
pub type Kernel = fn(&FactorSet) -> f64;
