//! Property-based tests for the override and sweep engines.

use pricer_core::scenarios::{override_factor, sweep_factor, SweepSpec};
use pricer_core::types::{FactorName, FactorSet, OptionError};
use proptest::prelude::*;

fn factor_strategy() -> impl Strategy<Value = FactorName> {
    prop::sample::select(FactorName::ALL.to_vec())
}

fn valid_factors() -> impl Strategy<Value = FactorSet> {
    (0.0..5.0, 1.0..200.0, 0.0..1.0, 0.0..0.2, 0.0..0.2, 0.0..200.0)
        .prop_map(|(t, k, sig, r, b, s)| FactorSet::new(t, k, sig, r, b, s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sweep_values_are_ordered_and_bounded(
        start in 0.01..10.0,
        span in 0.0..10.0,
        step in 0.05f64..2.0,
        increasing in any::<bool>(),
    ) {
        let (start, end, step) = if increasing {
            (start, start + span, step)
        } else {
            (start + span, start, -step)
        };
        let spec = SweepSpec::new("S", start, end, step).unwrap();
        let points: Vec<f64> = spec.points().collect();

        prop_assert!(!points.is_empty());
        prop_assert_eq!(points[0], start);
        for pair in points.windows(2) {
            if increasing {
                prop_assert!(pair[1] > pair[0]);
            } else {
                prop_assert!(pair[1] < pair[0]);
            }
        }
        for p in &points {
            prop_assert!((p - end) * spec.direction() <= 0.0);
        }
    }

    #[test]
    fn sweep_matches_pointwise_override(
        factors in valid_factors(),
        factor in factor_strategy(),
        start in 1.0..2.0,
        span in 0.0..3.0,
    ) {
        let kernel = |f: &FactorSet| f.t + 2.0 * f.k + 3.0 * f.sig + 5.0 * f.r + 7.0 * f.b + 11.0 * f.s;
        let swept = sweep_factor(&factors, factor.as_str(), start, start + span, 0.5, kernel).unwrap();
        let spec = SweepSpec::new(factor.as_str(), start, start + span, 0.5).unwrap();

        prop_assert_eq!(swept.len(), spec.points().count());
        for (value, point) in swept.iter().zip(spec.points()) {
            let single = override_factor(&factors, factor.as_str(), point, kernel).unwrap();
            prop_assert_eq!(*value, single);
        }
    }

    #[test]
    fn wrong_direction_is_always_rejected(
        start in 0.0..10.0,
        span in 0.001..10.0,
        step in 0.001f64..1.0,
    ) {
        let result = sweep_factor(&FactorSet::default(), "S", start, start + span, -step, |f| f.s);
        let is_step_error = matches!(result, Err(OptionError::InvalidStepDirection { .. }));
        prop_assert!(is_step_error);
    }
}
