//! Feature schema contract shared by the loader, assembler, and classifier.
//!
//! Column names and order were fixed at classifier training time. Every
//! stage that produces or consumes a feature table validates against this
//! schema and fails fast on mismatch instead of silently mispredicting.

use crate::error::{CkdError, Result};

/// Schema contract version, bumped whenever the trained column set changes.
pub const SCHEMA_VERSION: &str = "ckd-v1";

/// The thirteen biochemical features, in classifier training order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Feature {
    /// Blood pressure (mmHg)
    Bp,
    /// Urine specific gravity
    Sg,
    /// Albumin (0-5 scale)
    Al,
    /// Sugar (0-5 scale)
    Su,
    /// Red blood cell count (million cells/mcL)
    Rbc,
    /// Blood urea (mg/dL)
    Bu,
    /// Serum creatinine (mg/dL)
    Sc,
    /// Sodium (mEq/L)
    Sod,
    /// Potassium (mEq/L)
    Pot,
    /// Hemoglobin (g/dL)
    Hemo,
    /// White blood cell count (cells/mm3)
    Wbcc,
    /// Red blood cell count, second assay (million cells/mcL)
    Rbcc,
    /// Hypertension flag (0/1)
    Htn,
}

impl Feature {
    pub const ALL: [Feature; 13] = [
        Feature::Bp,
        Feature::Sg,
        Feature::Al,
        Feature::Su,
        Feature::Rbc,
        Feature::Bu,
        Feature::Sc,
        Feature::Sod,
        Feature::Pot,
        Feature::Hemo,
        Feature::Wbcc,
        Feature::Rbcc,
        Feature::Htn,
    ];

    /// Column name as it appears in the reference data and model artifact.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Bp => "Bp",
            Feature::Sg => "Sg",
            Feature::Al => "Al",
            Feature::Su => "Su",
            Feature::Rbc => "Rbc",
            Feature::Bu => "Bu",
            Feature::Sc => "Sc",
            Feature::Sod => "Sod",
            Feature::Pot => "Pot",
            Feature::Hemo => "Hemo",
            Feature::Wbcc => "Wbcc",
            Feature::Rbcc => "Rbcc",
            Feature::Htn => "Htn",
        }
    }

    /// Human-readable label with measurement unit.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Bp => "Blood Pressure (mmHg)",
            Feature::Sg => "Specific Gravity (Sg)",
            Feature::Al => "Albumin (0-5 scale)",
            Feature::Su => "Sugar (0-5 scale)",
            Feature::Rbc => "RBC Count (million cells/mcL)",
            Feature::Bu => "Blood Urea (mg/dL)",
            Feature::Sc => "Serum Creatinine (mg/dL)",
            Feature::Sod => "Sodium (mEq/L)",
            Feature::Pot => "Potassium (mEq/L)",
            Feature::Hemo => "Hemoglobin (g/dL)",
            Feature::Wbcc => "WBC Count (cells/mm3)",
            Feature::Rbcc => "RBCC (million cells/mcL)",
            Feature::Htn => "Hypertension (0/1)",
        }
    }

    /// Plausible input bounds, used only to clamp user-facing inputs.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Feature::Bp => (70.0, 200.0),
            Feature::Sg => (1.000, 1.030),
            Feature::Al => (0.0, 5.0),
            Feature::Su => (0.0, 5.0),
            Feature::Rbc => (2.0, 6.0),
            Feature::Bu => (5.0, 150.0),
            Feature::Sc => (0.5, 20.0),
            Feature::Sod => (100.0, 160.0),
            Feature::Pot => (3.0, 8.0),
            Feature::Hemo => (5.0, 18.0),
            Feature::Wbcc => (2000.0, 25000.0),
            Feature::Rbcc => (2.0, 6.5),
            Feature::Htn => (0.0, 1.0),
        }
    }

    /// Default form value for the feature.
    pub fn default_value(self) -> f64 {
        match self {
            Feature::Bp => 120.0,
            Feature::Sg => 1.010,
            Feature::Al => 0.0,
            Feature::Su => 0.0,
            Feature::Rbc => 4.0,
            Feature::Bu => 20.0,
            Feature::Sc => 1.0,
            Feature::Sod => 140.0,
            Feature::Pot => 4.5,
            Feature::Hemo => 12.0,
            Feature::Wbcc => 8000.0,
            Feature::Rbcc => 4.0,
            Feature::Htn => 0.0,
        }
    }

    /// Resolve a column name back to a feature.
    pub fn from_name(name: &str) -> Result<Feature> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == name)
            .ok_or_else(|| CkdError::UnknownFeature {
                name: name.to_string(),
            })
    }
}

/// The versioned column contract expected by the trained classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    pub version: String,
    pub columns: Vec<String>,
}

impl FeatureSchema {
    /// The schema the bundled classifier was trained against.
    pub fn expected() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            columns: Feature::ALL.iter().map(|f| f.name().to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Validate a column set against this schema.
    ///
    /// Order is not significant for validation; producers are expected to
    /// emit columns in schema order, but a reordered set with the same
    /// names is accepted since every consumer addresses columns by name.
    pub fn validate_columns<S: AsRef<str>>(&self, context: &str, columns: &[S]) -> Result<()> {
        let provided: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
        let missing: Vec<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|expected| !provided.contains(expected))
            .collect();
        let unexpected: Vec<&str> = provided
            .iter()
            .filter(|name| !self.columns.iter().any(|c| c == *name))
            .copied()
            .collect();
        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        Err(CkdError::SchemaMismatch {
            context: context.to_string(),
            version: self.version.clone(),
            missing: missing.join(", "),
            unexpected: unexpected.join(", "),
        })
    }
}
