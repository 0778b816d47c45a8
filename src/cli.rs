use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "renal-ccls",
    version,
    about = "CCLS scoring and ccRCC likelihood for renal masses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score six findings given as positional codes
    Score(ScoreArgs),
    /// Read the six finding codes interactively from stdin
    Prompt(PromptArgs),
    /// Inspect model artifacts
    Model(ModelArgs),
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(help = "T2 signal: 0=low, 1=intermediate, 2=high")]
    pub t2_signal: i64,

    #[arg(help = "Corticomedullary enhancement: 0=mild, 1=moderate, 2=marked")]
    pub enhancement: i64,

    #[arg(help = "Microscopic fat: 0=absent, 1=present")]
    pub microscopic_fat: i64,

    #[arg(help = "Segmental enhancement inversion: 0=absent, 1=present")]
    pub sei: i64,

    #[arg(help = "Arterial-to-delayed enhancement ratio >= 1.5: 0=no, 1=yes")]
    pub ader: i64,

    #[arg(help = "Diffusion restriction: 0=absent, 1=present")]
    pub diffusion_restriction: i64,

    #[arg(long, help = "Model artifact JSON (defaults to the built-in ensemble)")]
    pub model: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PromptArgs {
    #[arg(long, help = "Model artifact JSON (defaults to the built-in ensemble)")]
    pub model: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    Show(ModelShowArgs),
}

#[derive(Debug, Args)]
pub struct ModelShowArgs {
    #[arg(long, help = "Model artifact JSON (defaults to the built-in ensemble)")]
    pub model: Option<PathBuf>,
}
