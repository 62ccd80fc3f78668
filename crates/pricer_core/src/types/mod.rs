//! Core factor, option-type, and error types.
//!
//! This module provides:
//! - `factor`: The six pricing factors (`FactorSet`) and their canonical names (`FactorName`)
//! - `option_type`: The Call/Put discriminant with token parsing and toggling
//! - `error`: The closed error-kind enumeration shared by every layer
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`FactorName`], [`FactorSet`] from `factor`
//! - [`OptionType`] from `option_type`
//! - [`OptionError`], [`OptionResult`] from `error`

pub mod error;
pub mod factor;
pub mod option_type;

// Re-export commonly used types at module level
pub use error::{OptionError, OptionResult};
pub use factor::{FactorName, FactorSet};
pub use option_type::OptionType;
