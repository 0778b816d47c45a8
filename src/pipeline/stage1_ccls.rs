use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::CclsClass;
use crate::scores::calibration::probability_for;
use crate::scores::ccls;
use crate::scores::differential::suspected_histology;

pub struct Stage1Ccls;

impl Stage1Ccls {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Ccls {
    fn name(&self) -> &'static str {
        "stage1_ccls"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let findings = ctx.findings.as_ref().context("findings missing")?;

        let class = ccls::evaluate(findings);
        let score = probability_for(class.code());
        if class == CclsClass::Unmatched {
            warn!("decision tree matched no rule");
            ctx.warnings
                .push("decision tree matched no rule; severity is undefined".to_string());
        }

        ctx.consulted = Some(ccls::consulted(findings));
        ctx.suspected_histology = suspected_histology(findings);
        ctx.ccls = Some(class);
        ctx.ccls_score = Some(score);
        info!(ccls = class.code(), probability = score, "ccls_ready");
        Ok(())
    }
}
