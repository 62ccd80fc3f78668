//! Bump-and-revalue sensitivities.
//!
//! Delta and gamma are estimated by central differences on the spot price,
//! revaluing through a caller-supplied price-at-spot function so that every
//! bumped point goes through the same validation as a direct override.

pub mod finite_difference;

pub use finite_difference::{central_delta, central_gamma};
