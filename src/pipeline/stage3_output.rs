use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_writer;
use crate::pipeline::Stage;

pub struct Stage3Output;

impl Stage3Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Output {
    fn name(&self) -> &'static str {
        "stage3_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if ctx.write_json {
            std::fs::create_dir_all(&ctx.output.out_dir)
                .with_context(|| format!("failed to create {}", ctx.output.out_dir.display()))?;
            json_writer::write_json(&ctx.output.json_path, ctx)?;
            info!(path = %ctx.output.json_path.display(), "report_written");
        }

        info!("stage3_output_ready");
        Ok(())
    }
}
