use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::findings::Findings;
use crate::pipeline::Stage;

pub struct Stage0Validate;

impl Stage0Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Validate {
    fn name(&self) -> &'static str {
        "stage0_validate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let findings = Findings::from_codes(ctx.input_codes)?;
        ctx.findings = Some(findings);
        info!("findings_validated");
        Ok(())
    }
}
