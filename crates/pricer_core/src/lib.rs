//! # pricer_core: Foundation Layer for Cost-of-Carry Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Error kinds: `OptionError` (`types::error`)
//! - The six pricing factors and their canonical names: `FactorName`, `FactorSet` (`types::factor`)
//! - Option type discriminant: `OptionType` (`types::option_type`)
//! - Pure validation guards over factors, tokens and sweep steps (`validation`)
//! - Standard normal distribution primitives (`math::distributions`)
//! - Single-factor override and sweep engines shared by every kernel (`scenarios`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: High-precision complementary error function
//! - thiserror: Error derivation
//! - tracing: Diagnostic events (no subscriber is installed here)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::scenarios::{override_factor, sweep_factor};
//! use pricer_core::types::FactorSet;
//!
//! let factors = FactorSet::new(1.0, 100.0, 0.2, 0.05, 0.05, 100.0);
//! let spot_of = |f: &FactorSet| f.s;
//!
//! // Evaluate with one factor replaced
//! let bumped = override_factor(&factors, "s", 105.0, spot_of).unwrap();
//! assert_eq!(bumped, 105.0);
//!
//! // Evaluate across a range of one factor
//! let swept = sweep_factor(&factors, "SIG", 0.1, 0.9, 0.2, |f| f.sig).unwrap();
//! assert_eq!(swept.len(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for factor and option-type types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod scenarios;
pub mod types;
pub mod validation;
