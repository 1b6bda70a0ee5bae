//! `hashcheck open` – verify the state carried by a share link.

use crate::cli::terminal::{ensure_not_failed, print_outcome};
use anyhow::Result;
use hashcheck_core::evaluate;
use hashcheck_core::fragment::{fragment_of, parse_fragment};

pub async fn run_open(target: &str, json: bool) -> Result<()> {
    let fragment = fragment_of(target);
    let Some(inputs) = parse_fragment(&fragment) else {
        println!("Nothing to verify: the fragment needs both `digest` and `content`.");
        return Ok(());
    };
    let outcome = tokio::task::spawn_blocking(move || evaluate(&inputs)).await?;
    print_outcome(&outcome, json)?;
    ensure_not_failed(&outcome)
}
