#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CkdError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("reference data {path} is missing the '{label}' label column")]
    MissingLabelColumn { path: PathBuf, label: String },

    #[error("reference data {path} contains no data rows")]
    EmptyReference { path: PathBuf },

    #[error("invalid numeric cell in {path}, column {column}, row {row}: {value:?}")]
    InvalidCell {
        path: PathBuf,
        column: String,
        row: usize,
        value: String,
    },

    #[error(
        "feature schema mismatch in {context} (schema {version}): missing [{missing}], unexpected [{unexpected}]"
    )]
    SchemaMismatch {
        context: String,
        version: String,
        missing: String,
        unexpected: String,
    },

    #[error("degenerate reference range for feature {feature}: min equals max ({value})")]
    DegenerateFeatureRange { feature: String, value: f64 },

    #[error("unknown feature name: {name}")]
    UnknownFeature { name: String },

    #[error("invalid model artifact {path}: {message}")]
    Model { path: PathBuf, message: String },
}

impl CkdError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CkdError>;
