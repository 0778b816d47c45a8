use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let findings = ctx.findings.as_ref().context("findings missing")?;
    let class = ctx.ccls.context("ccls class missing")?;
    let ccls_score = ctx.ccls_score.context("ccls probability missing")?;
    let ccrcc_score = ctx.ccrcc_score.context("ccrcc probability missing")?;

    let mut out = String::new();
    out.push_str(&format!("renal-ccls v{}\n", version));
    out.push_str(&format!(
        "Findings: t2={} enhancement={} fat={} sei={} ader={} diffusion={}\n",
        findings.t2_signal.label(),
        findings.enhancement.label(),
        findings.microscopic_fat.label(),
        findings.sei.label(),
        findings.ader.label(),
        findings.diffusion_restriction.label(),
    ));
    out.push_str(&format!(
        "CCLS: {} ({})\n",
        class.code(),
        class.interpretation()
    ));
    out.push_str(&format!("CCLS probability: {:.4}\n", ccls_score));
    out.push_str(&format!("ccRCC probability: {:.4}\n", ccrcc_score));
    if let Some(h) = ctx.suspected_histology {
        out.push_str(&format!("Suspected histology: {}\n", h.label()));
    }

    Ok(out)
}
