//! Single-row feature table assembly.

use ckd_model::{Feature, FeatureSchema, PatientProfile, Result};

/// One ordered, named feature row, as expected by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRow {
    /// Assemble a feature row from a patient profile, in schema order.
    pub fn from_profile(profile: &PatientProfile) -> FeatureRow {
        let columns = Feature::ALL.iter().map(|f| f.name().to_string()).collect();
        let values = profile.values();
        FeatureRow { columns, values }
    }

    /// Build a row from explicit columns and values.
    ///
    /// Intended for tests and for reconstructing rows after normalization;
    /// callers must keep the two vectors aligned.
    pub fn from_parts(columns: Vec<String>, values: Vec<f64>) -> FeatureRow {
        debug_assert_eq!(columns.len(), values.len());
        FeatureRow { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx])
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Fail fast if this row's column set does not match the schema.
    pub fn validate_schema(&self, schema: &FeatureSchema) -> Result<()> {
        schema.validate_columns("feature row", &self.columns)
    }
}
