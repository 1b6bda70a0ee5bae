//! `hashcheck algorithms` – list supported digests.

use anyhow::Result;
use hashcheck_core::HashAlgorithm;

pub async fn run_algorithms() -> Result<()> {
    println!("{:<8} {}", "NAME", "BITS");
    for algo in HashAlgorithm::ALL {
        println!("{:<8} {}", algo.name(), algo.output_len() * 8);
    }
    Ok(())
}
