//! Option type (Call/Put) definitions.

use std::fmt;
use std::str::FromStr;

use super::error::OptionError;
use crate::validation::canonicalize;

/// Option type discriminant.
///
/// Parsed from the single-letter tokens `C`/`P` (any case). Contracts default
/// to `Call`.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let put: OptionType = "p".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.toggled(), OptionType::Call);
/// assert_eq!(put.to_string(), "P");
///
/// assert!("X".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum OptionType {
    /// Right to buy
    #[default]
    Call,
    /// Right to sell
    Put,
}

impl OptionType {
    /// Returns the canonical one-letter token.
    #[inline]
    pub fn as_char(&self) -> char {
        match self {
            OptionType::Call => 'C',
            OptionType::Put => 'P',
        }
    }

    /// Returns the opposite type (Call ↔ Put).
    #[inline]
    pub fn toggled(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Returns true for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonicalize(s).as_str() {
            "C" => Ok(OptionType::Call),
            "P" => Ok(OptionType::Put),
            _ => Err(OptionError::InvalidOptionType {
                token: s.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for OptionType {
    type Error = OptionError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value.to_string().parse()
    }
}

impl TryFrom<String> for OptionType {
    type Error = OptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionType> for String {
    fn from(value: OptionType) -> Self {
        value.as_char().to_string()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
