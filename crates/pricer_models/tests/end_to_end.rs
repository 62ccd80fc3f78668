//! End-to-end scenarios across contracts, kernels and queries.

use approx::assert_relative_eq;
use pricer_core::types::{FactorSet, OptionError, OptionType};
use pricer_models::analytical::european;
use pricer_models::instruments::{
    ContractData, EuropeanOption, Instrument, OptionFamily, PerpetualAmericanOption,
};

// ============================================================================
// European
// ============================================================================

fn european_call() -> EuropeanOption {
    let data = ContractData::new(FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0))
        .with_option_type(OptionType::Call)
        .with_label("Reference");
    EuropeanOption::from_data(data).unwrap()
}

#[test]
fn european_call_put_satisfy_carry_parity() {
    let option = european_call();
    let f = *option.factors();
    let call = option.price();
    let put = european::put_price(&f);

    let rhs = f.s * ((f.b - f.r) * f.t).exp() - f.k * (-f.r * f.t).exp();
    assert_relative_eq!(call - put, rhs, epsilon = 1e-9);
}

#[test]
fn european_toggle_prices_the_put() {
    let mut option = european_call();
    let direct_put = european::put_price(option.factors());
    option.toggle();
    assert_eq!(option.option_type(), OptionType::Put);
    assert_eq!(option.price(), direct_put);
}

#[test]
fn european_sig_sweep_has_five_points() {
    let mut option = european_call();
    option.toggle();
    let puts = option.price_sweep("sig", 0.1, 0.9, 0.2).unwrap();
    assert_eq!(puts.len(), 5);

    // Each point equals a direct override at the accumulated factor value
    let mut sig = 0.1;
    for put in puts {
        assert_eq!(put, option.price_with("SIG", sig).unwrap());
        sig += 0.2;
    }
}

#[test]
fn european_carry_delta_sweep() {
    let option = european_call();
    let deltas = option.delta_sweep("B", 0.02, 0.1, 0.01).unwrap();
    assert!(deltas.len() >= 8);
    // Higher carry raises the forward and the call delta
    assert!(deltas.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn european_finite_differences_converge() {
    let option = european_call();
    assert!((option.approx_delta(1e-4).unwrap() - option.delta()).abs() < 1e-3);
    assert!((option.approx_gamma(0.01).unwrap() - option.gamma()).abs() < 1e-3);
}

#[test]
fn european_validation_rejects() {
    let option = european_call();
    assert_eq!(option.price_with("K", 0.0), Err(OptionError::InvalidFactorValue));
    assert_eq!(
        option.price_with("Z", 1.0),
        Err(OptionError::InvalidFactorName {
            token: "Z".to_string()
        })
    );
    assert_eq!(
        EuropeanOption::from_type_token("X"),
        Err(OptionError::InvalidOptionType {
            token: "X".to_string()
        })
    );
    assert_eq!(
        option.price_sweep("S", 90.0, 110.0, 0.0),
        Err(OptionError::InvalidStepDirection {
            step: 0.0,
            start: 90.0,
            end: 110.0
        })
    );
}

#[test]
fn failed_set_data_leaves_option_untouched() {
    let mut option = european_call();
    let before = option.clone();
    let bad = ContractData::new(FactorSet::new(1.0, 0.0, 0.2, 0.05, 0.05, 100.0))
        .with_option_type(OptionType::Put);
    assert_eq!(option.set_data(bad), Err(OptionError::InvalidFactorValue));
    assert_eq!(option, before);
}

// ============================================================================
// Perpetual American
// ============================================================================

fn perpetual_put() -> PerpetualAmericanOption {
    PerpetualAmericanOption::from_factors(FactorSet::new(0.0, 100.0, 0.1, 0.1, 0.02, 110.0), OptionType::Put)
        .unwrap()
}

#[test]
fn perpetual_put_is_finite_and_positive() {
    let price = perpetual_put().price();
    assert!(price.is_finite());
    assert!(price > 0.0);
}

#[test]
fn perpetual_double_toggle_reproduces_price() {
    let mut option = perpetual_put();
    let original = option.price();
    option.toggle();
    assert_ne!(option.price(), original);
    option.toggle();
    assert_eq!(option.price(), original);
}

#[test]
fn perpetual_rate_sweep() {
    let mut option = perpetual_put();
    option.toggle();
    let calls = option.price_sweep("r", 0.1, 0.5, 0.1).unwrap();
    assert_eq!(calls.len(), 5);
    assert_relative_eq!(calls[0], 18.503499883047926, epsilon = 1e-9);
}

// ============================================================================
// Instrument dispatch
// ============================================================================

#[test]
fn instrument_dispatch_matches_direct_options() {
    let eu = european_call();
    let pa = perpetual_put();

    let eu_inst = Instrument::from(eu.clone());
    let pa_inst = Instrument::from_data(OptionFamily::PerpetualAmerican, pa.contract().data()).unwrap();

    assert_eq!(eu_inst.price(), eu.price());
    assert_eq!(eu_inst.delta(), Some(eu.delta()));
    assert_eq!(eu_inst.gamma(), Some(eu.gamma()));
    assert_eq!(pa_inst.price(), pa.price());
    assert_eq!(pa_inst.delta(), None);
    assert_eq!(pa_inst.describe(), pa.describe());
}

#[cfg(feature = "serde")]
#[test]
fn contract_data_from_toml() {
    let text = r#"
        name = "ACME"
        type = "P"
        T = 1.5
        K = 120.0
        sig = 0.4
        r = 0.04
        b = 0.0
        S = 100.0
    "#;
    let data: ContractData = toml::from_str(text).unwrap();
    let option = EuropeanOption::from_data(data).unwrap();
    assert_eq!(option.option_type(), OptionType::Put);
    assert_eq!(option.contract().label(), "ACME");
    assert_relative_eq!(option.price(), 30.804080038461777, epsilon = 1e-9);
}
