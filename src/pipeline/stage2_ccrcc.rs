use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::model::CcrccModel;
use crate::pipeline::Stage;

pub struct Stage2Ccrcc;

impl Stage2Ccrcc {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Ccrcc {
    fn name(&self) -> &'static str {
        "stage2_ccrcc"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let model = match &ctx.model_path {
            Some(path) => CcrccModel::load(path)?,
            None => CcrccModel::load_builtin()?,
        };
        info!(
            model_id = model.model_id(),
            trees = model.n_trees(),
            "model_loaded"
        );

        let findings = ctx.findings.as_ref().context("findings missing")?;
        let class = ctx.ccls.context("ccls class missing")?;
        let probability = model.predict_findings(findings, class)?;

        ctx.ccrcc_score = Some(probability);
        ctx.model = Some(model);
        info!(ccrcc = probability, "ccrcc_ready");
        Ok(())
    }
}
