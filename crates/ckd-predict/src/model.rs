//! Gradient-boosted-tree classifier adapter.
//!
//! Wraps a pre-trained, JSON-serialized binary ensemble. The model is loaded
//! once at startup and inference is deterministic and stateless: the margin
//! is the base score plus one leaf value per tree, and the label is positive
//! when the sigmoid of the margin reaches 0.5.
//!
//! Training, feature selection, and class balancing all happened offline;
//! none of that is reproducible here and none of it is part of the runtime
//! contract.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ckd_model::{CkdError, FeatureSchema, Result, RiskLabel, SCHEMA_VERSION};
use ckd_transform::FeatureRow;

/// Artifact format identifier, checked at load time.
pub const MODEL_FORMAT: &str = "ckd-gbt";

/// One node of a decision tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Leaf {
        value: f64,
    },
    Split {
        feature: String,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Walk the tree for one feature row: left when the feature value is
    /// strictly below the threshold, right otherwise.
    fn evaluate(&self, row: &FeatureRow) -> Result<f64> {
        match self {
            TreeNode::Leaf { value } => Ok(*value),
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                let value = row.get(feature).ok_or_else(|| CkdError::UnknownFeature {
                    name: feature.clone(),
                })?;
                if value < *threshold {
                    left.evaluate(row)
                } else {
                    right.evaluate(row)
                }
            }
        }
    }

    fn split_features<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let TreeNode::Split {
            feature,
            left,
            right,
            ..
        } = self
        {
            out.push(feature);
            left.split_features(out);
            right.split_features(out);
        }
    }
}

/// Serialized artifact layout.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ModelArtifact {
    format: String,
    schema_version: String,
    feature_names: Vec<String>,
    base_score: f64,
    trees: Vec<TreeNode>,
}

/// A loaded, validated classifier.
#[derive(Debug)]
pub struct GbtModel {
    path: PathBuf,
    schema: FeatureSchema,
    base_score: f64,
    trees: Vec<TreeNode>,
}

impl GbtModel {
    /// Load and validate a serialized model artifact.
    ///
    /// # Errors
    ///
    /// - [`CkdError::Io`] when the file is missing or unreadable
    /// - [`CkdError::Model`] for a malformed artifact, a foreign format
    ///   identifier, a stale schema version, or an empty ensemble
    /// - [`CkdError::SchemaMismatch`] when the artifact's feature list
    ///   differs from the expected schema
    pub fn load(path: &Path) -> Result<GbtModel> {
        let file = File::open(path).map_err(|error| CkdError::io(path, error))?;
        let artifact: ModelArtifact =
            serde_json::from_reader(BufReader::new(file)).map_err(|error| CkdError::Model {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;

        if artifact.format != MODEL_FORMAT {
            return Err(CkdError::Model {
                path: path.to_path_buf(),
                message: format!(
                    "unsupported format {:?}, expected {MODEL_FORMAT:?}",
                    artifact.format
                ),
            });
        }
        if artifact.schema_version != SCHEMA_VERSION {
            return Err(CkdError::Model {
                path: path.to_path_buf(),
                message: format!(
                    "schema version {:?} does not match expected {SCHEMA_VERSION:?}",
                    artifact.schema_version
                ),
            });
        }
        if artifact.trees.is_empty() {
            return Err(CkdError::Model {
                path: path.to_path_buf(),
                message: "ensemble contains no trees".to_string(),
            });
        }

        let schema = FeatureSchema::expected();
        schema.validate_columns("model artifact", &artifact.feature_names)?;

        // Every split must reference a schema feature.
        let mut split_features = Vec::new();
        for tree in &artifact.trees {
            tree.split_features(&mut split_features);
        }
        for feature in split_features {
            if !schema.columns.iter().any(|c| c == feature) {
                return Err(CkdError::Model {
                    path: path.to_path_buf(),
                    message: format!("tree split references unknown feature {feature:?}"),
                });
            }
        }

        info!(
            path = %path.display(),
            trees = artifact.trees.len(),
            base_score = artifact.base_score,
            "loaded classifier"
        );
        Ok(GbtModel {
            path: path.to_path_buf(),
            schema,
            base_score: artifact.base_score,
            trees: artifact.trees,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Raw additive margin for a normalized feature row.
    pub fn decision_margin(&self, row: &FeatureRow) -> Result<f64> {
        row.validate_schema(&self.schema)?;
        let mut margin = self.base_score;
        for tree in &self.trees {
            margin += tree.evaluate(row)?;
        }
        debug!(margin, "evaluated ensemble");
        Ok(margin)
    }

    /// Binary prediction: positive when sigmoid(margin) >= 0.5.
    pub fn predict(&self, row: &FeatureRow) -> Result<RiskLabel> {
        let margin = self.decision_margin(row)?;
        let label = if sigmoid(margin) >= 0.5 {
            RiskLabel::Positive
        } else {
            RiskLabel::Negative
        };
        Ok(label)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
