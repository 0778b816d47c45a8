mod artifact;

pub use artifact::{ArtifactNode, ArtifactTree, EnsembleArtifact};

use std::path::Path;

use crate::ScoreError;
use crate::findings::Findings;
use crate::scores::CclsClass;

/// Positive-class prior of the training set. Replayed onto the model once
/// at load time, exactly as it was set when the ensemble was trained.
pub const BASE_SCORE: f64 = 0.5612296;

/// Column contract of the classifier feature row. Order is fixed; artifacts
/// must name their features in exactly this sequence.
pub const FEATURE_NAMES: [&str; 7] = [
    "t2_signal",
    "corticomedullary_enhancement",
    "microscopic_fat",
    "sei",
    "ader",
    "diffusion_restriction",
    "ccls",
];

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

const OBJECTIVE: &str = "binary:logistic";

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn margin(&self, features: &[f64]) -> f64 {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Leaf(value) => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// A loaded gradient-boosted ensemble. Immutable after construction; the
/// base score is folded into `base_margin` during load and never touched
/// again.
#[derive(Debug, Clone)]
pub struct CcrccModel {
    model_id: String,
    schema_version: u32,
    trees: Vec<Tree>,
    base_margin: f64,
}

impl CcrccModel {
    /// Loads and validates an artifact file.
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        let source = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ScoreError::ModelLoad {
            path: source.clone(),
            detail: e.to_string(),
        })?;
        let artifact: EnsembleArtifact =
            serde_json::from_str(&content).map_err(|e| ScoreError::ModelLoad {
                path: source.clone(),
                detail: e.to_string(),
            })?;
        Self::from_artifact(artifact, &source)
    }

    /// Loads the ensemble embedded in the binary.
    pub fn load_builtin() -> Result<Self, ScoreError> {
        let content = include_str!("../../assets/models/ccrcc_gbt_v1.json");
        let artifact: EnsembleArtifact =
            serde_json::from_str(content).map_err(|e| ScoreError::ModelLoad {
                path: "builtin ccrcc_gbt_v1".to_string(),
                detail: e.to_string(),
            })?;
        Self::from_artifact(artifact, "builtin ccrcc_gbt_v1")
    }

    /// Validates an already-deserialized artifact and builds the runtime
    /// ensemble.
    pub fn from_artifact(artifact: EnsembleArtifact, source: &str) -> Result<Self, ScoreError> {
        if artifact.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(load_error(
                source,
                format!(
                    "unsupported schema_version {} (supported: {})",
                    artifact.schema_version, SUPPORTED_SCHEMA_VERSION
                ),
            ));
        }
        if artifact.objective != OBJECTIVE {
            return Err(load_error(
                source,
                format!("unsupported objective '{}'", artifact.objective),
            ));
        }
        if artifact.feature_names != FEATURE_NAMES {
            return Err(load_error(
                source,
                format!(
                    "feature columns {:?} do not match the contract {:?}",
                    artifact.feature_names, FEATURE_NAMES
                ),
            ));
        }
        if artifact.trees.is_empty() {
            return Err(load_error(source, "artifact contains no trees".to_string()));
        }

        let mut trees = Vec::with_capacity(artifact.trees.len());
        for (t_idx, tree) in artifact.trees.iter().enumerate() {
            trees.push(convert_tree(source, t_idx, tree)?);
        }

        Ok(Self {
            model_id: artifact.model_id,
            schema_version: artifact.schema_version,
            trees,
            base_margin: (BASE_SCORE / (1.0 - BASE_SCORE)).ln(),
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Positive-class probability for a raw feature row in
    /// [`FEATURE_NAMES`] order.
    pub fn predict(&self, features: &[f64]) -> Result<f64, ScoreError> {
        if features.len() != FEATURE_NAMES.len() {
            return Err(ScoreError::Inference {
                detail: format!(
                    "expected {} features, got {}",
                    FEATURE_NAMES.len(),
                    features.len()
                ),
            });
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(ScoreError::Inference {
                detail: "non-finite feature value".to_string(),
            });
        }

        let mut margin = self.base_margin;
        for tree in &self.trees {
            margin += tree.margin(features);
        }
        Ok(sigmoid(margin))
    }

    /// Assembles the seven-column row for validated findings plus their
    /// CCLS class and predicts.
    pub fn predict_findings(
        &self,
        findings: &Findings,
        class: CclsClass,
    ) -> Result<f64, ScoreError> {
        self.predict(&feature_row(findings, class))
    }
}

/// The seven-column row in [`FEATURE_NAMES`] order.
pub fn feature_row(findings: &Findings, class: CclsClass) -> [f64; 7] {
    let codes = findings.codes();
    [
        codes[0] as f64,
        codes[1] as f64,
        codes[2] as f64,
        codes[3] as f64,
        codes[4] as f64,
        codes[5] as f64,
        class.code() as f64,
    ]
}

fn convert_tree(source: &str, t_idx: usize, tree: &ArtifactTree) -> Result<Tree, ScoreError> {
    let n = tree.nodes.len();
    if n == 0 {
        return Err(load_error(source, format!("tree {} is empty", t_idx)));
    }

    let mut nodes = Vec::with_capacity(n);
    for (n_idx, node) in tree.nodes.iter().enumerate() {
        let converted = match node.leaf {
            Some(value) => {
                if !value.is_finite() {
                    return Err(load_error(
                        source,
                        format!("tree {} node {} has a non-finite leaf", t_idx, n_idx),
                    ));
                }
                Node::Leaf(value)
            }
            None => {
                let feature = usize::try_from(node.feature).ok().filter(|f| *f < FEATURE_NAMES.len());
                let Some(feature) = feature else {
                    return Err(load_error(
                        source,
                        format!(
                            "tree {} node {} references unknown feature {}",
                            t_idx, n_idx, node.feature
                        ),
                    ));
                };
                if !node.threshold.is_finite() {
                    return Err(load_error(
                        source,
                        format!("tree {} node {} has a non-finite threshold", t_idx, n_idx),
                    ));
                }
                let left = child_index(source, t_idx, n_idx, n, node.left)?;
                let right = child_index(source, t_idx, n_idx, n, node.right)?;
                Node::Split {
                    feature,
                    threshold: node.threshold,
                    left,
                    right,
                }
            }
        };
        nodes.push(converted);
    }

    Ok(Tree { nodes })
}

// children must point forward so a walk always terminates
fn child_index(
    source: &str,
    t_idx: usize,
    n_idx: usize,
    len: usize,
    child: i32,
) -> Result<usize, ScoreError> {
    let child = usize::try_from(child)
        .ok()
        .filter(|c| *c > n_idx && *c < len);
    child.ok_or_else(|| {
        load_error(
            source,
            format!("tree {} node {} has an invalid child index", t_idx, n_idx),
        )
    })
}

fn load_error(source: &str, detail: String) -> ScoreError {
    ScoreError::ModelLoad {
        path: source.to_string(),
        detail,
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
