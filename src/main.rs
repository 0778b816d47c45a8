use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use renal_ccls::cli::{Cli, Commands, ModelCommand, ModelShowArgs};
use renal_ccls::ctx::Ctx;
use renal_ccls::io;
use renal_ccls::model::{self, CcrccModel};
use renal_ccls::pipeline::Pipeline;
use renal_ccls::pipeline::stage0_validate::Stage0Validate;
use renal_ccls::pipeline::stage1_ccls::Stage1Ccls;
use renal_ccls::pipeline::stage2_ccrcc::Stage2Ccrcc;
use renal_ccls::pipeline::stage3_output::Stage3Output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => {
            let codes = [
                args.t2_signal,
                args.enhancement,
                args.microscopic_fat,
                args.sei,
                args.ader,
                args.diffusion_restriction,
            ];
            run_scoring(codes, args.model, args.out, args.json)?;
        }
        Commands::Prompt(args) => {
            let codes = read_prompt_codes()?;
            run_scoring(codes, args.model, args.out, args.json)?;
        }
        Commands::Model(args) => match args.command {
            ModelCommand::Show(show) => handle_model_show(show)?,
        },
    }

    Ok(())
}

fn run_scoring(
    codes: [i64; 6],
    model_path: Option<PathBuf>,
    out: PathBuf,
    json: bool,
) -> Result<()> {
    let mut ctx = Ctx::new(codes, out, model_path, json, env!("CARGO_PKG_VERSION"));
    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Validate::new()),
        Box::new(Stage1Ccls::new()),
        Box::new(Stage2Ccrcc::new()),
        Box::new(Stage3Output::new()),
    ]);
    pipeline.run(&mut ctx)?;
    print_summary(&ctx)?;
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn read_prompt_codes() -> Result<[i64; 6]> {
    println!("Enter the six findings as one line of codes separated by spaces:");
    println!("T2 signal: 0=low, 1=intermediate, 2=high");
    println!("Corticomedullary enhancement: 0=mild, 1=moderate, 2=marked");
    println!("Microscopic fat: 0=absent, 1=present");
    println!("Segmental enhancement inversion: 0=absent, 1=present");
    println!("ADER >= 1.5: 0=no, 1=yes");
    println!("Diffusion restriction: 0=absent, 1=present");

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read findings from stdin")?;
    parse_prompt_line(&line)
}

fn parse_prompt_line(line: &str) -> Result<[i64; 6]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 6 {
        anyhow::bail!("expected 6 finding codes, got {}", tokens.len());
    }
    let mut codes = [0i64; 6];
    for (i, token) in tokens.iter().enumerate() {
        codes[i] = token
            .parse::<i64>()
            .with_context(|| format!("finding code '{}' is not an integer", token))?;
    }
    Ok(codes)
}

fn handle_model_show(args: ModelShowArgs) -> Result<()> {
    let model = match args.model {
        Some(path) => CcrccModel::load(&path)?,
        None => CcrccModel::load_builtin()?,
    };
    println!("model: {}", model.model_id());
    println!("schema_version: {}", model.schema_version());
    println!("objective: binary:logistic");
    println!("trees: {}", model.n_trees());
    println!("features: {}", model::FEATURE_NAMES.join(", "));
    println!("base_score: {}", model::BASE_SCORE);
    Ok(())
}
