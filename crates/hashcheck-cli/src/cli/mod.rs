//! CLI for the hashcheck digest verifier.

mod commands;
mod terminal;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use hashcheck_core::config;
use std::path::PathBuf;

use commands::{
    run_algorithms, run_completions, run_digest, run_interactive, run_open, run_share, run_verify,
};

/// Top-level CLI for hashcheck.
#[derive(Debug, Parser)]
#[command(name = "hashcheck")]
#[command(about = "hashcheck: check content against an expected digest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the content to digest comes from. Stdin when neither is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ContentSource {
    /// Content text, digested as UTF-8.
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the content from a file.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify content against an expected digest.
    Verify {
        /// Digest algorithm (SHA-1, SHA-256, SHA-384, SHA-512). Defaults to the configured one.
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Expected digest in hex (any case). Omit to only compute.
        #[arg(short, long)]
        digest: Option<String>,

        #[command(flatten)]
        source: ContentSource,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute and print the digest of content.
    Digest {
        /// Digest algorithm. Defaults to the configured one.
        #[arg(short, long)]
        algorithm: Option<String>,

        #[command(flatten)]
        source: ContentSource,
    },

    /// Print a share link carrying algorithm, digest and content in its fragment.
    Share {
        /// Digest algorithm. Defaults to the configured one.
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Expected digest in hex.
        #[arg(short, long, default_value = "")]
        digest: String,

        /// Content text.
        #[arg(long)]
        content: String,

        /// Page the link points at. Defaults to `share_base_url` from the config.
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },

    /// Verify the state carried by a share link or `#fragment`.
    Open {
        /// Share URL, `#fragment`, or bare `digest=...&content=...`.
        target: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Edit the inputs line by line and watch the result update.
    Interactive {
        /// Start from the state of a share link or fragment.
        #[arg(long, value_name = "URL_OR_FRAGMENT")]
        load: Option<String>,
    },

    /// List supported digest algorithms.
    Algorithms,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let default_algorithm = cfg.default_algorithm.to_string();

        match cli.command {
            CliCommand::Verify {
                algorithm,
                digest,
                source,
                json,
            } => {
                let algorithm = algorithm.unwrap_or(default_algorithm);
                run_verify(&algorithm, digest.as_deref().unwrap_or(""), &source, json).await?
            }
            CliCommand::Digest { algorithm, source } => {
                run_digest(&algorithm.unwrap_or(default_algorithm), &source).await?
            }
            CliCommand::Share {
                algorithm,
                digest,
                content,
                base,
            } => {
                let base = base.or(cfg.share_base_url);
                run_share(
                    &algorithm.unwrap_or(default_algorithm),
                    &digest,
                    &content,
                    base.as_deref(),
                )
                .await?
            }
            CliCommand::Open { target, json } => run_open(&target, json).await?,
            CliCommand::Interactive { load } => {
                run_interactive(&default_algorithm, load.as_deref()).await?
            }
            CliCommand::Algorithms => run_algorithms().await?,
            CliCommand::Completions { shell } => {
                run_completions(shell, &mut Cli::command()).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
