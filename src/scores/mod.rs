pub mod calibration;
pub mod ccls;
pub mod differential;

use crate::ScoreError;
use crate::findings::Findings;
use crate::model::CcrccModel;

/// Clear cell likelihood score. `Unmatched` (code 0) means no branch of the
/// decision tree fired; it is never a clinical score and must not be read
/// as benign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CclsClass {
    Unmatched,
    VeryUnlikely,
    Unlikely,
    Equivocal,
    Likely,
    VeryLikely,
}

impl CclsClass {
    pub fn code(self) -> u8 {
        match self {
            Self::Unmatched => 0,
            Self::VeryUnlikely => 1,
            Self::Unlikely => 2,
            Self::Equivocal => 3,
            Self::Likely => 4,
            Self::VeryLikely => 5,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Self::Unmatched => "undefined (no matching rule)",
            Self::VeryUnlikely => "very unlikely to be ccRCC",
            Self::Unlikely => "unlikely to be ccRCC",
            Self::Equivocal => "equivocal",
            Self::Likely => "likely to be ccRCC",
            Self::VeryLikely => "very likely to be ccRCC",
        }
    }
}

/// Everything one scoring pass produces.
#[derive(Debug, Clone)]
pub struct ScoreSet {
    pub ccls: CclsClass,
    pub ccls_score: f64,
    pub ccrcc_score: f64,
}

/// One-shot scoring: decision tree, calibrated probability, then the
/// classifier over the assembled feature row.
pub fn compute_scores(findings: &Findings, model: &CcrccModel) -> Result<ScoreSet, ScoreError> {
    let class = ccls::evaluate(findings);
    let ccls_score = calibration::probability_for(class.code());
    let ccrcc_score = model.predict_findings(findings, class)?;
    Ok(ScoreSet {
        ccls: class,
        ccls_score,
        ccrcc_score,
    })
}
