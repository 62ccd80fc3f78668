//! Integration tests for factor matrices and batch pricers.

use pricer_core::types::{FactorSet, OptionError, OptionType};
use pricer_models::instruments::{ContractData, EuropeanOption, PerpetualAmericanOption};
use pricer_risk::matrix::{european, perpetual_american, FactorMatrix, MatrixEvaluator};
use pricer_risk::parallel::ParallelConfig;
use proptest::prelude::*;

fn seed() -> FactorSet {
    FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0)
}

// ============================================================================
// Matrix vs sweep
// ============================================================================

#[test]
fn generated_matrix_prices_match_option_sweep() {
    let option = EuropeanOption::from_factors(seed(), OptionType::Put).unwrap();
    let swept = option.price_sweep("SIG", 0.1, 0.9, 0.2).unwrap();

    let matrix = FactorMatrix::generate(&seed(), "SIG", 0.1, 0.9, 0.2).unwrap();
    let priced = european::matrix_pricer(&matrix, OptionType::Put).unwrap();

    assert_eq!(swept, priced);
}

#[test]
fn generated_matrix_deltas_match_option_sweep() {
    let option = EuropeanOption::from_factors(seed(), OptionType::Call).unwrap();
    let swept = option.delta_sweep("b", 0.02, 0.1, 0.01).unwrap();

    let matrix = FactorMatrix::generate(&seed(), "b", 0.02, 0.1, 0.01).unwrap();
    assert_eq!(european::matrix_delta(&matrix, OptionType::Call).unwrap(), swept);
}

#[test]
fn contract_batch_keeps_input_order() {
    let contracts: Vec<ContractData> = [90.0, 130.0, 100.0]
        .iter()
        .map(|&k| ContractData::new(FactorSet { k, ..seed() }))
        .collect();
    let matrix = FactorMatrix::from_contracts(&contracts);
    let prices = european::matrix_pricer(&matrix, OptionType::Call).unwrap();

    for (contract, price) in contracts.iter().zip(&prices) {
        let direct = EuropeanOption::from_data(contract.clone()).unwrap().price();
        assert_eq!(*price, direct);
    }
    assert!(prices[0] > prices[2] && prices[2] > prices[1]);
}

#[test]
fn perpetual_matrix_matches_direct_prices() {
    let base = FactorSet::new(0.0, 100.0, 0.1, 0.1, 0.02, 110.0);
    let matrix = FactorMatrix::generate(&base, "S", 100.0, 120.0, 5.0).unwrap();
    let puts = perpetual_american::matrix_pricer(&matrix, OptionType::Put).unwrap();

    for (row, price) in matrix.rows().iter().zip(&puts) {
        let direct = PerpetualAmericanOption::from_factors(*row, OptionType::Put).unwrap().price();
        assert_eq!(*price, direct);
    }
}

#[test]
fn unvalidated_generation_fails_at_pricing() {
    let matrix = FactorMatrix::generate(&seed(), "K", 0.0, 20.0, 10.0).unwrap();
    assert_eq!(matrix.len(), 3);
    assert_eq!(
        european::matrix_gamma(&matrix, OptionType::Call),
        Err(OptionError::InvalidFactorValue)
    );
}

// ============================================================================
// Parallel vs sequential
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_and_sequential_agree(
        n in 1usize..2000,
        batch in 1usize..128,
        ty in prop_oneof![Just(OptionType::Call), Just(OptionType::Put)],
    ) {
        let rows: FactorMatrix = (0..n)
            .map(|i| FactorSet { s: 50.0 + i as f64 * 0.1, ..seed() })
            .collect();

        let parallel = MatrixEvaluator::new(ParallelConfig::new(batch, 0));
        let sequential = MatrixEvaluator::new(ParallelConfig::sequential());

        prop_assert_eq!(
            parallel.european_price(&rows, ty).unwrap(),
            sequential.european_price(&rows, ty).unwrap()
        );
        prop_assert_eq!(
            parallel.perpetual_price(&rows, ty).unwrap(),
            sequential.perpetual_price(&rows, ty).unwrap()
        );
    }
}
