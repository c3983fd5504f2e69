use std::path::PathBuf;

use ckd_model::{PatientProfile, RiskLabel};
use ckd_transform::FeatureRow;

/// Outcome of one assessment run.
#[derive(Debug)]
pub struct AssessResult {
    pub profile: PatientProfile,
    pub normalized: FeatureRow,
    pub label: RiskLabel,
    pub reference_path: PathBuf,
    pub model_path: PathBuf,
}
