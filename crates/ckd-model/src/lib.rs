pub mod error;
pub mod label;
pub mod presets;
pub mod profile;
pub mod schema;
pub mod stats;

pub use error::{CkdError, Result};
pub use label::RiskLabel;
pub use presets::Preset;
pub use profile::{PatientProfile, ProfileState};
pub use schema::{Feature, FeatureSchema, SCHEMA_VERSION};
pub use stats::{FeatureRange, ReferenceStats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes() {
        let profile = PatientProfile::default();
        let json = serde_json::to_string(&profile).expect("serialize profile");
        let round: PatientProfile = serde_json::from_str(&json).expect("deserialize profile");
        assert_eq!(round, profile);
    }

    #[test]
    fn schema_mismatch_error_names_context() {
        let schema = FeatureSchema::expected();
        let error = schema
            .validate_columns("model artifact", &["Bp"])
            .unwrap_err();
        let message = error.to_string();
        assert!(message.contains("model artifact"));
        assert!(message.contains(SCHEMA_VERSION));
    }
}
