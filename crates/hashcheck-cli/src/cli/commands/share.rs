//! `hashcheck share` – print a link that carries the inputs in its fragment.

use anyhow::{Context, Result};
use hashcheck_core::fragment::{share_url, to_fragment};
use hashcheck_core::VerifierInputs;

pub async fn run_share(
    algorithm: &str,
    expected: &str,
    content: &str,
    base: Option<&str>,
) -> Result<()> {
    println!("{}", share_link(algorithm, expected, content, base)?);
    Ok(())
}

fn share_link(algorithm: &str, expected: &str, content: &str, base: Option<&str>) -> Result<String> {
    let inputs = VerifierInputs::new(algorithm, expected, content);
    match base {
        Some(base) => {
            let url = share_url(base, &inputs).with_context(|| format!("invalid base URL {}", base))?;
            Ok(url.to_string())
        }
        None => Ok(format!("#{}", to_fragment(&inputs))),
    }
}
