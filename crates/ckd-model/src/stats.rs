//! Reference statistics: per-feature (min, max) pairs.

use std::collections::BTreeMap;

use crate::error::{CkdError, Result};
use crate::schema::FeatureSchema;

/// Observed range of one feature in the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Min/max statistics for every schema feature, derived from the reference
/// dataset. Loaded once and held as a value; reloading is an explicit call
/// on the loader, never an implicit re-read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStats {
    ranges: BTreeMap<String, FeatureRange>,
}

impl ReferenceStats {
    /// Build statistics from per-feature ranges, validating the feature set
    /// against the schema.
    pub fn new(
        schema: &FeatureSchema,
        ranges: BTreeMap<String, FeatureRange>,
    ) -> Result<ReferenceStats> {
        let columns: Vec<&String> = ranges.keys().collect();
        schema.validate_columns("reference statistics", &columns)?;
        Ok(ReferenceStats { ranges })
    }

    pub fn range(&self, feature: &str) -> Result<FeatureRange> {
        self.ranges
            .get(feature)
            .copied()
            .ok_or_else(|| CkdError::UnknownFeature {
                name: feature.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), *range))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
