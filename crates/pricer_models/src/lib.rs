//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts, closed-form pricing kernels, and sensitivities.
//!
//! This crate provides:
//! - The option contract entity with validate-before-write mutation
//! - Generalised Black-Scholes (cost-of-carry) kernels for European options
//! - Closed-form kernels for perpetual American options
//! - Point, single-factor override, and swept forms of price/delta/gamma
//! - Central finite-difference delta and gamma
//! - Put-call parity checks
//!
//! ## Design Principles
//!
//! - **Kernels are plain functions** over [`FactorSet`], passed by value into
//!   the shared override/sweep engines of `pricer_core`
//! - **Enum-based instruments** for static dispatch over option families
//! - **Contracts are values**: freely cloned, never partially mutated
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{ContractData, EuropeanOption};
//! use pricer_core::types::{FactorSet, OptionType};
//!
//! // Non-dividend equity: cost-of-carry equals the risk-free rate
//! let data = ContractData::new(FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.04, 100.0))
//!     .with_option_type(OptionType::Call);
//! let mut option = EuropeanOption::from_data(data).unwrap();
//!
//! let call = option.price();
//! option.toggle();
//! let put = option.price();
//! assert!(option.parity_holds(call, put).unwrap());
//! ```
//!
//! [`FactorSet`]: pricer_core::types::FactorSet

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod instruments;
