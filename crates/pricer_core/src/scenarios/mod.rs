//! Single-factor scenario engines.
//!
//! This module provides the two generic operations every pricing quantity is
//! routed through:
//! - [`override_factor`]: evaluate a kernel with exactly one factor replaced
//! - [`sweep_factor`]: evaluate a kernel while one factor walks a range
//!
//! Both take the kernel as a plain function value over [`FactorSet`], so
//! there is a single implementation of the override and sweep algorithms
//! shared by prices, deltas and gammas of every option family.
//!
//! [`FactorSet`]: crate::types::FactorSet

pub mod overrides;
pub mod sweep;

pub use overrides::override_factor;
pub use sweep::{sweep_factor, SweepPoints, SweepSpec};
