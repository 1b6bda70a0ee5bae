//! Digesting the content selected by `--content`, `--file`, or stdin.

use crate::cli::ContentSource;
use anyhow::{Context, Result};
use hashcheck_core::digest::{compute_digest, digest_path, digest_reader};
use hashcheck_core::verify::outcome_for;
use hashcheck_core::{evaluate, ComputeError, HashAlgorithm, Outcome, VerifierInputs};
use std::io;

/// Human-readable name of the source, as printed next to a digest.
pub fn describe(source: &ContentSource) -> String {
    match (&source.content, &source.file) {
        (Some(_), _) => "-".to_string(),
        (None, Some(path)) => path.display().to_string(),
        (None, None) => "-".to_string(),
    }
}

/// Digest the source. Files and stdin are streamed on the blocking pool.
pub async fn digest_source(algorithm: &str, source: &ContentSource) -> Result<String, ComputeError> {
    if let Some(text) = &source.content {
        return compute_digest(text, algorithm);
    }
    let algo: HashAlgorithm = algorithm.parse()?;
    let file = source.file.clone();
    let joined = tokio::task::spawn_blocking(move || match file {
        Some(path) => digest_path(algo, &path),
        None => digest_reader(algo, io::stdin().lock()),
    })
    .await;
    match joined {
        Ok(result) => result,
        Err(e) => Err(ComputeError::Io(io::Error::new(io::ErrorKind::Other, e))),
    }
}

/// Compute and verify the source against `expected`.
///
/// Text content follows the interactive rules (empty text is not verified);
/// files and stdin are always digested, even when empty.
pub async fn outcome_from_source(
    algorithm: &str,
    expected: &str,
    source: &ContentSource,
) -> Result<Outcome> {
    if let Some(text) = &source.content {
        let inputs = VerifierInputs::new(algorithm, expected, text.as_str());
        return tokio::task::spawn_blocking(move || evaluate(&inputs))
            .await
            .context("digest task");
    }
    let computed = digest_source(algorithm, source).await;
    Ok(outcome_for(algorithm, expected, computed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashcheck_core::VerificationState;
    use std::io::Write;

    #[tokio::test]
    async fn text_and_file_agree() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello").unwrap();
        f.flush().unwrap();

        let text = ContentSource {
            content: Some("hello".to_string()),
            file: None,
        };
        let file = ContentSource {
            content: None,
            file: Some(f.path().to_path_buf()),
        };
        assert_eq!(
            digest_source("SHA-384", &text).await.unwrap(),
            digest_source("SHA-384", &file).await.unwrap()
        );
    }

    #[tokio::test]
    async fn empty_file_is_still_digested() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let source = ContentSource {
            content: None,
            file: Some(f.path().to_path_buf()),
        };
        let out = outcome_from_source(
            "SHA-256",
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855",
            &source,
        )
        .await
        .unwrap();
        assert_eq!(out.state, VerificationState::Valid);
        assert_eq!(describe(&source), f.path().display().to_string());
    }

    #[tokio::test]
    async fn missing_file_is_reported_inline() {
        let dir = tempfile::tempdir().unwrap();
        let source = ContentSource {
            content: None,
            file: Some(dir.path().join("absent.txt")),
        };
        let out = outcome_from_source("SHA-1", "abc", &source).await.unwrap();
        assert!(out.error.is_some());
        assert_eq!(out.state, VerificationState::NotVerified);
    }
}
