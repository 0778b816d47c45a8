use serde::{Deserialize, Serialize};

/// On-disk layout of a serialized ensemble.
///
/// Trees store their nodes flat; `feature`, `left` and `right` use -1 as the
/// leaf sentinel, and `leaf` carries the margin of leaf nodes. Children must
/// reference strictly later indices, checked at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleArtifact {
    pub schema_version: u32,
    pub model_id: String,
    pub objective: String,
    pub feature_names: Vec<String>,
    pub trees: Vec<ArtifactTree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactTree {
    pub nodes: Vec<ArtifactNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactNode {
    pub feature: i32,
    pub threshold: f64,
    pub left: i32,
    pub right: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<f64>,
}

impl ArtifactNode {
    pub fn split(feature: i32, threshold: f64, left: i32, right: i32) -> Self {
        Self {
            feature,
            threshold,
            left,
            right,
            leaf: None,
        }
    }

    pub fn leaf(value: f64) -> Self {
        Self {
            feature: -1,
            threshold: 0.0,
            left: -1,
            right: -1,
            leaf: Some(value),
        }
    }
}
