use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{CclsBlock, CcrccBlock, Explainability, FindingsBlock, RenalCclsV1, Scores};

pub fn build_report(ctx: &Ctx) -> Result<RenalCclsV1> {
    let findings = ctx.findings.as_ref().context("findings missing")?;
    let class = ctx.ccls.context("ccls class missing")?;
    let ccls_score = ctx.ccls_score.context("ccls probability missing")?;
    let ccrcc_score = ctx.ccrcc_score.context("ccrcc probability missing")?;
    let model = ctx.model.as_ref().context("model missing")?;

    let findings_block = FindingsBlock {
        t2_signal: findings.t2_signal,
        corticomedullary_enhancement: findings.enhancement,
        microscopic_fat: findings.microscopic_fat,
        sei: findings.sei,
        ader: findings.ader,
        diffusion_restriction: findings.diffusion_restriction,
    };

    let scores = Scores {
        ccls: Some(CclsBlock {
            class: class.code(),
            interpretation: class.interpretation().to_string(),
            probability: ccls_score,
        }),
        ccrcc: Some(CcrccBlock {
            probability: ccrcc_score,
            model_id: model.model_id().to_string(),
        }),
    };

    let consulted_findings = ctx
        .consulted
        .map(|c| c.names().into_iter().map(str::to_string).collect())
        .unwrap_or_default();

    Ok(RenalCclsV1 {
        tool: "renal-ccls".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        findings: Some(findings_block),
        scores,
        explainability: Explainability {
            consulted_findings,
            suspected_histology: ctx.suspected_histology.map(|h| h.label().to_string()),
        },
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
