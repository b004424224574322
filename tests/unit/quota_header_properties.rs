//! Property-based tests for the quota header parser.
//!
//! Generates well-formed bucket segments, then checks parsing against the
//! generated values and checks that corrupting a segment only ever drops
//! that segment.

use auth0_core::quota::{
    QuotaBucket, QuotaParseError, parse_bucket_segment, parse_client_limit,
    parse_organization_limit, parse_quota_limit,
};
use auth0_core::QuotaLimit;
use proptest::prelude::*;

/// A generated bucket together with its rendered segment.
#[derive(Debug, Clone)]
struct SegmentCase {
    name: String,
    limit: QuotaLimit,
    segment: String,
}

fn bucket_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("per_hour".to_string()),
        Just("per_day".to_string()),
        "[a-z_]{1,12}",
    ]
}

fn in_range() -> impl Strategy<Value = u32> {
    0..=i32::MAX as u32
}

prop_compose! {
    fn segment_strategy()
        (name in bucket_name_strategy(),
         quota in in_range(),
         remaining in in_range(),
         reset_after in in_range(),
         extra in proptest::option::of("[u-z]=[a-z0-9]{1,6}"),
         reversed in any::<bool>())
        -> SegmentCase {
        let mut pairs = vec![
            format!("b={}", name),
            format!("q={}", quota),
            format!("r={}", remaining),
            format!("t={}", reset_after),
        ];
        if reversed {
            pairs.reverse();
        }
        if let Some(extra) = extra {
            pairs.push(extra);
        }
        SegmentCase {
            name,
            limit: QuotaLimit::new(quota, remaining, reset_after),
            segment: pairs.join(";"),
        }
    }
}

proptest! {
    #[test]
    fn well_formed_segments_parse(case in segment_strategy()) {
        let bucket = parse_bucket_segment(&case.segment).unwrap();
        prop_assert_eq!(&bucket.name, &case.name);
        prop_assert_eq!(bucket.limit, case.limit);

        let via_from_str: QuotaBucket = case.segment.parse().unwrap();
        prop_assert_eq!(via_from_str, bucket);
    }

    #[test]
    fn parsing_is_deterministic(case in segment_strategy()) {
        prop_assert_eq!(
            parse_quota_limit(Some(&case.segment)),
            parse_quota_limit(Some(&case.segment))
        );
    }

    #[test]
    fn duplicate_keys_are_rejected(case in segment_strategy(), key in prop::sample::select(vec!["b", "q", "r", "t"])) {
        let segment = format!("{};{}=1", case.segment, key);
        prop_assert_eq!(
            parse_bucket_segment(&segment),
            Err(QuotaParseError::DuplicateKey(key.to_string()))
        );
        prop_assert!(parse_quota_limit(Some(&segment)).is_none());
    }

    #[test]
    fn out_of_range_numbers_are_rejected(value in (i32::MAX as u64 + 1)..=u64::MAX) {
        let segment = format!("b=per_hour;q={};r=1;t=1", value);
        let is_invalid_number = matches!(
            parse_bucket_segment(&segment),
            Err(QuotaParseError::InvalidNumber { field: "q", .. })
        );
        prop_assert!(is_invalid_number);
    }

    #[test]
    fn only_per_hour_routes_to_hourly_slot(first in segment_strategy(), second in segment_strategy()) {
        let header = format!("{},{}", first.segment, second.segment);
        let limit = parse_client_limit(Some(&header)).unwrap();

        let expected_hour = [&first, &second]
            .into_iter()
            .filter(|case| case.name == "per_hour")
            .last()
            .map(|case| case.limit);
        let expected_day = [&first, &second]
            .into_iter()
            .filter(|case| case.name != "per_hour")
            .last()
            .map(|case| case.limit);

        prop_assert_eq!(limit.per_hour, expected_hour);
        prop_assert_eq!(limit.per_day, expected_day);
    }

    #[test]
    fn malformed_segments_are_skipped(case in segment_strategy(), junk in "[a-z;]{0,8}") {
        let header = format!("{},{}", junk, case.segment);
        let limit = parse_organization_limit(Some(&header)).unwrap();

        let parsed = if case.name == "per_hour" { limit.per_hour } else { limit.per_day };
        prop_assert_eq!(parsed, Some(case.limit));
    }
}
