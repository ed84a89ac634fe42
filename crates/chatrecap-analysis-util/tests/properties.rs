use chatrecap_analysis_util::{Clock, OrderedCounter, cjk_ratio};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stamp_fields_are_in_range(secs in 1_000_000i64..4_000_000_000i64, hours in -12i8..=14) {
        let offset = time::UtcOffset::from_hms(hours, 0, 0).unwrap();
        let stamp = Clock::with_offset(offset).stamp(secs as f64).unwrap();
        prop_assert!(stamp.hour < 24);
        prop_assert!(stamp.weekday < 7);
        prop_assert!((1..=12).contains(&stamp.month));
    }

    #[test]
    fn counter_total_equals_number_of_adds(keys in prop::collection::vec(0u8..10, 0..60)) {
        let counter: OrderedCounter<u8> = keys.iter().copied().collect();
        prop_assert_eq!(counter.total(), keys.len());
    }

    #[test]
    fn most_common_count_is_the_maximum(keys in prop::collection::vec(0u8..5, 1..60)) {
        let counter: OrderedCounter<u8> = keys.iter().copied().collect();
        let (_, top) = counter.most_common().unwrap();
        prop_assert!(counter.iter().all(|(_, n)| n <= top));
    }

    #[test]
    fn cjk_ratio_is_a_fraction(text in "\\PC{0,30}") {
        let ratio = cjk_ratio(&text);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }
}
