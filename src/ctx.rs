use std::path::PathBuf;

use crate::findings::Findings;
use crate::model::CcrccModel;
use crate::schema::v1::RenalCclsV1;
use crate::scores::CclsClass;
use crate::scores::ccls::ConsultedFindings;
use crate::scores::differential::Histology;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
}

/// Everything one scoring run reads and produces. Stages fill the `Option`
/// fields in order.
#[derive(Debug)]
pub struct Ctx {
    pub input_codes: [i64; 6],
    pub model_path: Option<PathBuf>,
    pub write_json: bool,
    pub findings: Option<Findings>,
    pub ccls: Option<CclsClass>,
    pub ccls_score: Option<f64>,
    pub ccrcc_score: Option<f64>,
    pub consulted: Option<ConsultedFindings>,
    pub suspected_histology: Option<Histology>,
    pub model: Option<CcrccModel>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: RenalCclsV1,
}

impl Ctx {
    pub fn new(
        input_codes: [i64; 6],
        out_dir: PathBuf,
        model_path: Option<PathBuf>,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("renal_ccls.json");
        let report = RenalCclsV1::empty(tool_version);
        Self {
            input_codes,
            model_path,
            write_json,
            findings: None,
            ccls: None,
            ccls_score: None,
            ccrcc_score: None,
            consulted: None,
            suspected_histology: None,
            model: None,
            warnings: Vec::new(),
            output: OutputPaths { out_dir, json_path },
            report,
        }
    }
}
