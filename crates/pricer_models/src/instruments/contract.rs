//! The option contract entity shared by every option family.

use std::fmt;

use pricer_core::types::{FactorSet, OptionResult, OptionType};
use pricer_core::validation::validate_option_type;

/// Label given to contracts created without one.
pub const DEFAULT_LABEL: &str = "Default";

/// A full contract record: factors plus optional type and label.
///
/// `option_type = None` means "unset": constructors fall back to Call and
/// [`OptionContract::set_data`] keeps the contract's current type.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractData;
/// use pricer_core::types::{FactorSet, OptionType};
///
/// let data = ContractData::new(FactorSet::new(1.0, 100.0, 0.2, 0.05, 0.05, 100.0))
///     .with_option_type(OptionType::Put)
///     .with_label("ACME");
/// assert_eq!(data.option_type, Some(OptionType::Put));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractData {
    /// The six pricing factors.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub factors: FactorSet,
    /// Option type, if specified.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub option_type: Option<OptionType>,
    /// Display label, if specified.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "name", default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
}

impl ContractData {
    /// Creates a record with the given factors and no type or label.
    pub fn new(factors: FactorSet) -> Self {
        Self {
            factors,
            option_type: None,
            label: None,
        }
    }

    /// Sets the option type.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Validated factors, option type and label of one option.
///
/// Every constructor and mutator validates the whole record before writing
/// it, so a contract is never left partially updated.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    factors: FactorSet,
    option_type: OptionType,
    label: String,
}

impl Default for OptionContract {
    fn default() -> Self {
        Self {
            factors: FactorSet::default(),
            option_type: OptionType::Call,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl OptionContract {
    /// Creates a default call contract.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default contract of the given type.
    pub fn with_type(option_type: OptionType) -> Self {
        Self {
            option_type,
            ..Self::default()
        }
    }

    /// Creates a default contract from a type token (`C` or `P`, any case).
    ///
    /// # Errors
    /// `OptionError::InvalidOptionType` for any other token.
    pub fn from_type_token(token: &str) -> OptionResult<Self> {
        Ok(Self::with_type(validate_option_type(token)?))
    }

    /// Creates a contract from factors and a type.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn from_factors(factors: FactorSet, option_type: OptionType) -> OptionResult<Self> {
        factors.validate()?;
        Ok(Self {
            factors,
            option_type,
            label: DEFAULT_LABEL.to_string(),
        })
    }

    /// Creates a contract from a full record. An unset type means Call.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn from_data(data: ContractData) -> OptionResult<Self> {
        let mut contract = Self::default();
        contract.set_data(data)?;
        Ok(contract)
    }

    /// Returns the pricing factors.
    #[inline]
    pub fn factors(&self) -> &FactorSet {
        &self.factors
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the contract as a full record.
    pub fn data(&self) -> ContractData {
        ContractData {
            factors: self.factors,
            option_type: Some(self.option_type),
            label: Some(self.label.clone()),
        }
    }

    /// Replaces factors, and type and label where given.
    ///
    /// Nothing is written unless the new factors validate.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn set_data(&mut self, data: ContractData) -> OptionResult<()> {
        data.factors.validate()?;

        self.factors = data.factors;
        if let Some(option_type) = data.option_type {
            self.option_type = option_type;
        }
        if let Some(label) = data.label {
            self.label = label;
        }
        Ok(())
    }

    /// Replaces all six factors, keeping type and label.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if the factors are out of bounds.
    pub fn replace_factors(&mut self, factors: FactorSet) -> OptionResult<()> {
        factors.validate()?;
        self.factors = factors;
        Ok(())
    }

    /// Sets the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Flips Call to Put and Put to Call.
    pub fn toggle(&mut self) {
        self.option_type = self.option_type.toggled();
    }

    /// Renders a multi-line description under the given family heading.
    ///
    /// `T` is listed only when `with_expiry` is set.
    pub fn describe(&self, heading: &str, with_expiry: bool) -> String {
        let f = &self.factors;
        let mut out = format!(
            "{heading}\nAsset Name: {}\nOption Type: {}\nK:   {}\nsig: {}\nr:   {}\nb:   {}\nS:   {}",
            self.label, self.option_type, f.k, f.sig, f.r, f.b, f.s
        );
        if with_expiry {
            out.push_str(&format!("\nT:   {}", f.t));
        }
        out
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("Option", true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionError;

    fn sample() -> FactorSet {
        FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0)
    }

    #[test]
    fn test_default_contract() {
        let c = OptionContract::new();
        assert_eq!(c.option_type(), OptionType::Call);
        assert_eq!(c.label(), DEFAULT_LABEL);
        assert_eq!(*c.factors(), FactorSet::default());
        assert!(c.factors().validate().is_ok());
    }

    #[test]
    fn test_from_type_token() {
        assert_eq!(
            OptionContract::from_type_token("p").unwrap().option_type(),
            OptionType::Put
        );
        assert_eq!(
            OptionContract::from_type_token("X"),
            Err(OptionError::InvalidOptionType {
                token: "X".to_string()
            })
        );
    }

    #[test]
    fn test_from_factors_rejects_zero_strike() {
        let bad = FactorSet { k: 0.0, ..sample() };
        assert_eq!(
            OptionContract::from_factors(bad, OptionType::Call),
            Err(OptionError::InvalidFactorValue)
        );
    }

    #[test]
    fn test_from_data_defaults_to_call() {
        let c = OptionContract::from_data(ContractData::new(sample())).unwrap();
        assert_eq!(c.option_type(), OptionType::Call);
        assert_eq!(c.label(), DEFAULT_LABEL);
    }

    #[test]
    fn test_set_data_keeps_type_when_unset() {
        let mut c = OptionContract::with_type(OptionType::Put);
        c.set_data(ContractData::new(sample()).with_label("X")).unwrap();
        assert_eq!(c.option_type(), OptionType::Put);
        assert_eq!(c.label(), "X");
        assert_eq!(*c.factors(), sample());
    }

    #[test]
    fn test_set_data_failure_leaves_contract_untouched() {
        let mut c = OptionContract::from_factors(sample(), OptionType::Call).unwrap();
        let before = c.clone();
        let bad = ContractData::new(FactorSet { sig: -0.1, ..sample() })
            .with_option_type(OptionType::Put)
            .with_label("changed");
        assert_eq!(c.set_data(bad), Err(OptionError::InvalidFactorValue));
        assert_eq!(c, before);
    }

    #[test]
    fn test_replace_factors_validates_first() {
        let mut c = OptionContract::new();
        assert!(c.replace_factors(FactorSet { r: -1.0, ..sample() }).is_err());
        assert_eq!(*c.factors(), FactorSet::default());
        c.replace_factors(sample()).unwrap();
        assert_eq!(*c.factors(), sample());
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut c = OptionContract::new();
        c.toggle();
        assert_eq!(c.option_type(), OptionType::Put);
        c.toggle();
        assert_eq!(c.option_type(), OptionType::Call);
    }

    #[test]
    fn test_data_round_trip() {
        let mut c = OptionContract::from_factors(sample(), OptionType::Put).unwrap();
        c.set_label("ACME");
        let copy = OptionContract::from_data(c.data()).unwrap();
        assert_eq!(copy, c);
    }

    #[test]
    fn test_describe_layout() {
        let mut c = OptionContract::from_factors(sample(), OptionType::Call).unwrap();
        c.set_label("ACME");
        let text = c.describe("European Option", true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "European Option");
        assert_eq!(lines[1], "Asset Name: ACME");
        assert_eq!(lines[2], "Option Type: C");
        assert_eq!(lines[3], "K:   120");
        assert_eq!(lines[7], "S:   100");
        assert_eq!(lines[8], "T:   1.5");

        let perpetual = c.describe("Perpetual American Option", false);
        assert!(!perpetual.contains("T:"));
        assert_eq!(perpetual.lines().count(), 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_contract_data_serde() {
        let data: ContractData =
            serde_json::from_str(r#"{"T": 1.0, "K": 100.0, "sig": 0.2, "S": 90.0, "type": "p", "name": "X"}"#)
                .unwrap();
        assert_eq!(data.option_type, Some(OptionType::Put));
        assert_eq!(data.label.as_deref(), Some("X"));
        assert_eq!(data.factors.s, 90.0);
        assert_eq!(data.factors.r, 0.0);

        let bare: ContractData = serde_json::from_str(r#"{"K": 50.0}"#).unwrap();
        assert_eq!(bare.option_type, None);
    }
}
