//! Min-max normalization against reference statistics.

use tracing::warn;

use ckd_model::{CkdError, ReferenceStats, Result};

use crate::row::FeatureRow;

/// Normalize each feature to `(x - min) / (max - min)` using the reference
/// ranges.
///
/// A value equal to the reference minimum maps to exactly 0.0 and one equal
/// to the maximum to exactly 1.0. Values outside the reference range pass
/// through unclamped (they normalize outside [0, 1]); a warning is logged so
/// the condition is observable.
///
/// # Errors
///
/// - [`CkdError::DegenerateFeatureRange`] when a feature's reference min
///   equals its max; the division is never performed
/// - [`CkdError::UnknownFeature`] when the row holds a column the
///   statistics do not cover
pub fn normalize(row: &FeatureRow, stats: &ReferenceStats) -> Result<FeatureRow> {
    let mut values = Vec::with_capacity(row.len());
    for (column, value) in row.columns().iter().zip(row.values()) {
        let range = stats.range(column)?;
        if range.span() == 0.0 {
            return Err(CkdError::DegenerateFeatureRange {
                feature: column.clone(),
                value: range.min,
            });
        }
        if !range.contains(*value) {
            warn!(
                feature = %column,
                value,
                min = range.min,
                max = range.max,
                "input outside reference range, normalizing unclamped"
            );
        }
        values.push((value - range.min) / range.span());
    }
    Ok(FeatureRow::from_parts(row.columns().to_vec(), values))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ckd_model::{Feature, FeatureRange, FeatureSchema, PatientProfile};

    use super::*;

    fn stats_with(bp: FeatureRange) -> ReferenceStats {
        let mut ranges: BTreeMap<String, FeatureRange> = Feature::ALL
            .iter()
            .map(|f| (f.name().to_string(), FeatureRange::new(0.0, 100.0)))
            .collect();
        ranges.insert("Bp".to_string(), bp);
        ReferenceStats::new(&FeatureSchema::expected(), ranges).unwrap()
    }

    #[test]
    fn reference_min_maps_to_zero_and_max_to_one() {
        let stats = stats_with(FeatureRange::new(50.0, 180.0));
        let mut profile = PatientProfile::default();
        profile.set(Feature::Bp, 50.0);
        let normalized = normalize(&FeatureRow::from_profile(&profile), &stats).unwrap();
        assert_eq!(normalized.get("Bp"), Some(0.0));

        profile.set(Feature::Bp, 180.0);
        let normalized = normalize(&FeatureRow::from_profile(&profile), &stats).unwrap();
        assert_eq!(normalized.get("Bp"), Some(1.0));
    }

    #[test]
    fn degenerate_range_is_an_error_not_a_nan() {
        let stats = stats_with(FeatureRange::new(120.0, 120.0));
        let row = FeatureRow::from_profile(&PatientProfile::default());
        let error = normalize(&row, &stats).unwrap_err();
        match error {
            CkdError::DegenerateFeatureRange { feature, value } => {
                assert_eq!(feature, "Bp");
                assert_eq!(value, 120.0);
            }
            other => panic!("expected degenerate range, got {other}"),
        }
    }

    #[test]
    fn out_of_range_values_pass_through_unclamped() {
        let stats = stats_with(FeatureRange::new(50.0, 150.0));
        let mut profile = PatientProfile::default();
        profile.set(Feature::Bp, 200.0);
        let normalized = normalize(&FeatureRow::from_profile(&profile), &stats).unwrap();
        assert_eq!(normalized.get("Bp"), Some(1.5));
    }

    #[test]
    fn normalization_preserves_the_column_set() {
        let stats = stats_with(FeatureRange::new(50.0, 180.0));
        let row = FeatureRow::from_profile(&PatientProfile::default());
        let normalized = normalize(&row, &stats).unwrap();
        assert_eq!(normalized.columns(), row.columns());
    }
}
