use chatrecap_math::{mean, percentage, round_f64, safe_ratio};
use proptest::prelude::*;

proptest! {
    #[test]
    fn safe_ratio_zero_denominator_is_zero(numer in 0usize..100_000, decimals in 0u32..4) {
        prop_assert_eq!(safe_ratio(numer, 0, decimals), 0.0);
    }

    #[test]
    fn safe_ratio_identity_is_one(value in 1usize..100_000) {
        prop_assert_eq!(safe_ratio(value, value, 2), 1.0);
    }

    #[test]
    fn percentage_is_bounded_when_numer_leq_denom(numer in 0usize..10_000, denom in 1usize..10_000) {
        if numer <= denom {
            let pct = percentage(numer, denom, 1);
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn round_f64_is_idempotent(value in -1000.0f64..1000.0, decimals in 0u32..6) {
        let once = round_f64(value, decimals);
        let twice = round_f64(once, decimals);
        prop_assert!((once - twice).abs() < 1e-9);
    }

    #[test]
    fn mean_lies_between_min_and_max(values in prop::collection::vec(0usize..1000, 1..50)) {
        let got = mean(&values, 1);
        let min = *values.iter().min().unwrap() as f64;
        let max = *values.iter().max().unwrap() as f64;
        prop_assert!(got >= min - 0.05 && got <= max + 0.05);
    }
}
