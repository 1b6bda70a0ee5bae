//! `hashcheck completions` – shell completion scripts.

use anyhow::Result;
use clap::Command;
use clap_complete::Shell;

pub async fn run_completions(shell: Shell, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}
