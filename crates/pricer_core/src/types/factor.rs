//! Pricing factor definitions.
//!
//! This module provides:
//! - [`FactorName`]: the closed set of factor identifiers {T, K, SIG, R, B, S}
//! - [`FactorSet`]: the fixed six-field record consumed by every pricing kernel
//!
//! Textual factor tokens are canonicalised once (see
//! [`crate::validation::canonicalize`]) and then mapped onto a field of the
//! record, so no string-keyed lookup happens inside kernels or sweeps.

use std::fmt;
use std::str::FromStr;

use super::error::{OptionError, OptionResult};
use crate::validation::{canonicalize, validate_factor_values};

/// Identifier of one of the six pricing factors.
///
/// # Variants
/// - `T`: Expiry time in years
/// - `K`: Strike price
/// - `Sig`: Volatility
/// - `R`: Risk-free rate
/// - `B`: Cost-of-carry
/// - `S`: Spot price
///
/// # Examples
/// ```
/// use pricer_core::types::FactorName;
///
/// let sig: FactorName = "SiG".parse().unwrap();
/// assert_eq!(sig, FactorName::Sig);
/// assert_eq!(sig.as_str(), "SIG");
///
/// assert!("Z".parse::<FactorName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum FactorName {
    /// Expiry time (T)
    T,
    /// Strike price (K)
    K,
    /// Volatility (sig)
    Sig,
    /// Risk-free interest rate (r)
    R,
    /// Cost-of-carry (b)
    B,
    /// Spot price (S)
    S,
}

impl FactorName {
    /// All factors in row order (T, K, SIG, R, B, S).
    pub const ALL: [FactorName; 6] = [
        FactorName::T,
        FactorName::K,
        FactorName::Sig,
        FactorName::R,
        FactorName::B,
        FactorName::S,
    ];

    /// Returns the canonical (upper-case) token for this factor.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorName::T => "T",
            FactorName::K => "K",
            FactorName::Sig => "SIG",
            FactorName::R => "R",
            FactorName::B => "B",
            FactorName::S => "S",
        }
    }

    /// Returns the column index of this factor within a matrix row.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            FactorName::T => 0,
            FactorName::K => 1,
            FactorName::Sig => 2,
            FactorName::R => 3,
            FactorName::B => 4,
            FactorName::S => 5,
        }
    }
}

impl FromStr for FactorName {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonicalize(s).as_str() {
            "T" => Ok(FactorName::T),
            "K" => Ok(FactorName::K),
            "SIG" => Ok(FactorName::Sig),
            "R" => Ok(FactorName::R),
            "B" => Ok(FactorName::B),
            "S" => Ok(FactorName::S),
            _ => Err(OptionError::InvalidFactorName {
                token: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FactorName {
    type Error = OptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FactorName> for String {
    fn from(name: FactorName) -> Self {
        name.as_str().to_string()
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six numeric pricing factors.
///
/// A plain value record: construction does not validate, so it can also hold
/// a candidate set that is about to be checked with [`FactorSet::validate`].
/// Defaults follow the contract defaults (`K = 1`, everything else `0`).
///
/// # Examples
/// ```
/// use pricer_core::types::{FactorName, FactorSet};
///
/// let factors = FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0);
/// assert!(factors.validate().is_ok());
///
/// let bumped = factors.with(FactorName::S, 101.0);
/// assert_eq!(bumped.get(FactorName::S), 101.0);
/// assert_eq!(factors.s, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorSet {
    /// Expiry time in years (T)
    #[cfg_attr(feature = "serde", serde(rename = "T", default))]
    pub t: f64,
    /// Strike price (K)
    #[cfg_attr(feature = "serde", serde(rename = "K", default = "default_strike"))]
    pub k: f64,
    /// Volatility (sig)
    #[cfg_attr(feature = "serde", serde(default))]
    pub sig: f64,
    /// Risk-free rate (r)
    #[cfg_attr(feature = "serde", serde(default))]
    pub r: f64,
    /// Cost-of-carry (b)
    #[cfg_attr(feature = "serde", serde(default))]
    pub b: f64,
    /// Spot price (S)
    #[cfg_attr(feature = "serde", serde(rename = "S", default))]
    pub s: f64,
}

#[cfg(feature = "serde")]
fn default_strike() -> f64 {
    1.0
}

impl Default for FactorSet {
    fn default() -> Self {
        Self {
            t: 0.0,
            k: 1.0,
            sig: 0.0,
            r: 0.0,
            b: 0.0,
            s: 0.0,
        }
    }
}

impl FactorSet {
    /// Creates a factor set in (T, K, sig, r, b, S) order.
    #[inline]
    pub fn new(t: f64, k: f64, sig: f64, r: f64, b: f64, s: f64) -> Self {
        Self { t, k, sig, r, b, s }
    }

    /// Builds a factor set from a matrix row in (T, K, SIG, R, B, S) order.
    #[inline]
    pub fn from_array(row: [f64; 6]) -> Self {
        Self::new(row[0], row[1], row[2], row[3], row[4], row[5])
    }

    /// Returns the factors as a matrix row in (T, K, SIG, R, B, S) order.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [self.t, self.k, self.sig, self.r, self.b, self.s]
    }

    /// Returns the value of one factor.
    #[inline]
    pub fn get(&self, name: FactorName) -> f64 {
        match name {
            FactorName::T => self.t,
            FactorName::K => self.k,
            FactorName::Sig => self.sig,
            FactorName::R => self.r,
            FactorName::B => self.b,
            FactorName::S => self.s,
        }
    }

    /// Overwrites one factor in place.
    #[inline]
    pub fn set(&mut self, name: FactorName, value: f64) {
        match name {
            FactorName::T => self.t = value,
            FactorName::K => self.k = value,
            FactorName::Sig => self.sig = value,
            FactorName::R => self.r = value,
            FactorName::B => self.b = value,
            FactorName::S => self.s = value,
        }
    }

    /// Returns a copy with one factor replaced.
    #[inline]
    pub fn with(mut self, name: FactorName, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Checks the bounds of every factor.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if T, sig, r, b or S is negative, or
    /// K is not strictly positive.
    #[inline]
    pub fn validate(&self) -> OptionResult<()> {
        validate_factor_values(self.t, self.k, self.sig, self.r, self.b, self.s)
    }
}
