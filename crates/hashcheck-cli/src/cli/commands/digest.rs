//! Digest command: compute and print the digest of content.

use super::source::{describe, digest_source};
use crate::cli::ContentSource;
use anyhow::Result;

/// Print `<hex>  <source>`, like `sha256sum`.
pub async fn run_digest(algorithm: &str, source: &ContentSource) -> Result<()> {
    let digest = digest_source(algorithm, source).await?;
    println!("{}  {}", digest, describe(source));
    Ok(())
}
