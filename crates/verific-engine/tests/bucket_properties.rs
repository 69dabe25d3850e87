use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use verific_engine::{BucketKind, BucketOptions, bucket_by};
use verific_types::YearDisplay;

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

// Items carry their input position so order and multiset checks are exact
fn dated_items(offsets: &[i64]) -> Vec<(usize, DateTime<Utc>)> {
    let base = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    offsets
        .iter()
        .enumerate()
        .map(|(i, minutes)| (i, base + Duration::minutes(*minutes)))
        .collect()
}

fn options_strategy() -> impl Strategy<Value = BucketOptions> {
    prop_oneof![
        Just(YearDisplay::Never),
        Just(YearDisplay::Auto),
        Just(YearDisplay::Always),
    ]
    .prop_map(|year_display| BucketOptions {
        year_display,
        ..BucketOptions::default()
    })
}

proptest! {
    #[test]
    fn prop_every_item_lands_in_exactly_one_bucket(
        // roughly -2 years to +2 years around the reference day
        offsets in proptest::collection::vec(-1_051_200i64..1_051_200, 0..60),
        options in options_strategy(),
    ) {
        let items = dated_items(&offsets);
        let result = bucket_by(items.clone(), |(_, d)| *d, &reference_now(), &options);

        let mut seen: Vec<usize> = result
            .iter()
            .flat_map(|b| b.items.iter().map(|(i, _)| *i))
            .collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..items.len()).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_items_keep_input_order_within_buckets(
        offsets in proptest::collection::vec(-20_000i64..20_000, 0..60),
        options in options_strategy(),
    ) {
        let result = bucket_by(dated_items(&offsets), |(_, d)| *d, &reference_now(), &options);

        for bucket in result.buckets() {
            let positions: Vec<usize> = bucket.items.iter().map(|(i, _)| *i).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "bucket {} out of order", bucket.label);
        }
    }

    #[test]
    fn prop_display_order_is_relative_then_chronological(
        offsets in proptest::collection::vec(-1_051_200i64..1_051_200, 0..60),
        options in options_strategy(),
    ) {
        let result = bucket_by(dated_items(&offsets), |(_, d)| *d, &reference_now(), &options);
        let buckets = result.buckets();

        for pair in buckets.windows(2) {
            prop_assert!((pair[0].kind, pair[0].day) < (pair[1].kind, pair[1].day));
        }
        let order = result.order();
        let mut unique = order.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), order.len());
        if let Some(today) = order.iter().position(|l| *l == "Today") {
            prop_assert_eq!(today, 0);
        }
        if let Some(tomorrow) = order.iter().position(|l| *l == "Tomorrow") {
            prop_assert!(tomorrow <= 1);
        }
    }

    #[test]
    fn prop_same_arguments_give_same_result(
        offsets in proptest::collection::vec(-100_000i64..100_000, 0..40),
    ) {
        let items = dated_items(&offsets);
        let options = BucketOptions::default();
        let first = bucket_by(items.clone(), |(_, d)| *d, &reference_now(), &options);
        let second = bucket_by(items, |(_, d)| *d, &reference_now(), &options);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_no_relative_buckets_sort_ascending() {
    let now = reference_now();
    let items = vec![
        Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 11, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 20, 18, 0, 0).unwrap(),
    ];

    let result = bucket_by(items, |d| *d, &now, &BucketOptions::default());
    assert_eq!(
        result.order(),
        vec!["20 de janeiro", "11 de fevereiro", "2 de março"]
    );
    assert!(result.iter().all(|b| b.kind == BucketKind::Date));
    assert_eq!(result.get("20 de janeiro").unwrap().len(), 2);
}
