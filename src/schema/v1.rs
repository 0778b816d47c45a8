use serde::{Deserialize, Serialize};

use crate::findings::{Enhancement, Presence, T2Signal};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingsBlock {
    pub t2_signal: T2Signal,
    pub corticomedullary_enhancement: Enhancement,
    pub microscopic_fat: Presence,
    pub sei: Presence,
    pub ader: Presence,
    pub diffusion_restriction: Presence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CclsBlock {
    pub class: u8,
    pub interpretation: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcrccBlock {
    pub probability: f64,
    pub model_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scores {
    pub ccls: Option<CclsBlock>,
    pub ccrcc: Option<CcrccBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explainability {
    pub consulted_findings: Vec<String>,
    pub suspected_histology: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenalCclsV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub findings: Option<FindingsBlock>,
    pub scores: Scores,
    pub explainability: Explainability,
    pub warnings: Vec<String>,
}

impl RenalCclsV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "renal-ccls".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            findings: None,
            scores: Scores {
                ccls: None,
                ccrcc: None,
            },
            explainability: Explainability {
                consulted_findings: Vec::new(),
                suspected_histology: None,
            },
            warnings: Vec::new(),
        }
    }
}
