//! Property tests for min-max normalization.

use std::collections::BTreeMap;

use proptest::prelude::{ProptestConfig, prop_assert, proptest};

use ckd_model::{Feature, FeatureRange, FeatureSchema, PatientProfile, ReferenceStats};
use ckd_transform::{FeatureRow, normalize};

fn uniform_stats(min: f64, max: f64) -> ReferenceStats {
    let ranges: BTreeMap<String, FeatureRange> = Feature::ALL
        .iter()
        .map(|f| (f.name().to_string(), FeatureRange::new(min, max)))
        .collect();
    ReferenceStats::new(&FeatureSchema::expected(), ranges).expect("build stats")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn in_range_values_normalize_into_unit_interval(value in 10.0f64..=90.0) {
        let stats = uniform_stats(10.0, 90.0);
        let mut profile = PatientProfile::default();
        for feature in Feature::ALL {
            profile.set(feature, value);
        }
        let normalized = normalize(&FeatureRow::from_profile(&profile), &stats).unwrap();
        for v in normalized.values() {
            prop_assert!((0.0..=1.0).contains(v), "normalized value {v} outside [0, 1]");
        }
    }

    #[test]
    fn normalization_is_finite_for_any_input(value in -1.0e6f64..=1.0e6) {
        let stats = uniform_stats(10.0, 90.0);
        let mut profile = PatientProfile::default();
        for feature in Feature::ALL {
            profile.set(feature, value);
        }
        let normalized = normalize(&FeatureRow::from_profile(&profile), &stats).unwrap();
        for v in normalized.values() {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn normalization_is_monotonic(a in 0.0f64..=500.0, b in 0.0f64..=500.0) {
        let stats = uniform_stats(10.0, 90.0);
        let mut low = PatientProfile::default();
        let mut high = PatientProfile::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        low.set(Feature::Bu, lo);
        high.set(Feature::Bu, hi);
        let normalized_low = normalize(&FeatureRow::from_profile(&low), &stats).unwrap();
        let normalized_high = normalize(&FeatureRow::from_profile(&high), &stats).unwrap();
        prop_assert!(normalized_low.get("Bu").unwrap() <= normalized_high.get("Bu").unwrap());
    }
}
