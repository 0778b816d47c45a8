//! Deterministic CCLS scoring and ccRCC likelihood estimation for renal
//! masses characterized on multiparametric MRI.
//!
//! Six categorical imaging findings go in; a clear cell likelihood score
//! (CCLS 1-5), its calibrated probability, and a model-based ccRCC
//! probability come out.

pub mod cli;
pub mod ctx;
pub mod findings;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod scores;

/// Error kinds surfaced by the scoring core. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("finding {name}={value} outside domain {domain}")]
    InvalidFinding {
        name: &'static str,
        value: i64,
        domain: &'static str,
    },

    #[error("failed to load model artifact {path}: {detail}")]
    ModelLoad { path: String, detail: String },

    #[error("model inference failed: {detail}")]
    Inference { detail: String },
}
