//! `hashcheck verify` – check content against an expected digest.

use super::source::outcome_from_source;
use crate::cli::terminal::{ensure_not_failed, print_outcome};
use crate::cli::ContentSource;
use anyhow::Result;

pub async fn run_verify(
    algorithm: &str,
    expected: &str,
    source: &ContentSource,
    json: bool,
) -> Result<()> {
    let outcome = outcome_from_source(algorithm, expected, source).await?;
    tracing::info!(algorithm, state = ?outcome.state, "verify");
    print_outcome(&outcome, json)?;
    ensure_not_failed(&outcome)
}
