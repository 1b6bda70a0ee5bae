//! Digest computation: content under a named algorithm, as lowercase hex.
//!
//! Text content is digested as its UTF-8 bytes. Files and stdin are streamed
//! in fixed-size chunks so large inputs never have to fit in memory.

use crate::algorithm::HashAlgorithm;
use crate::error::ComputeError;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Digest `content` with the algorithm named `algorithm`.
///
/// Fails only if the name is not a supported algorithm.
pub fn compute_digest(content: &str, algorithm: &str) -> Result<String, ComputeError> {
    let algo: HashAlgorithm = algorithm.parse()?;
    Ok(digest_bytes(algo, content.as_bytes()))
}

/// Digest a byte slice and return lowercase hex.
pub fn digest_bytes(algo: HashAlgorithm, data: &[u8]) -> String {
    match algo {
        HashAlgorithm::Sha1 => hex::encode(Sha1::digest(data)),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        HashAlgorithm::Sha384 => hex::encode(Sha384::digest(data)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
    }
}

/// Stream a reader through `algo` and return lowercase hex.
pub fn digest_reader<R: Read>(algo: HashAlgorithm, reader: R) -> Result<String, ComputeError> {
    match algo {
        HashAlgorithm::Sha1 => stream::<Sha1, R>(reader),
        HashAlgorithm::Sha256 => stream::<Sha256, R>(reader),
        HashAlgorithm::Sha384 => stream::<Sha384, R>(reader),
        HashAlgorithm::Sha512 => stream::<Sha512, R>(reader),
    }
}

/// Digest a file's contents.
pub fn digest_path(algo: HashAlgorithm, path: &Path) -> Result<String, ComputeError> {
    let f = File::open(path)?;
    digest_reader(algo, f)
}

fn stream<D: Digest, R: Read>(mut reader: R) -> Result<String, ComputeError> {
    let mut hasher = D::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn sha256_of_hello() {
        assert_eq!(compute_digest("hello", "SHA-256").unwrap(), HELLO_SHA256);
    }

    #[test]
    fn known_vectors_for_every_algorithm() {
        assert_eq!(
            compute_digest("abc", "SHA-1").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            compute_digest("abc", "SHA-384").unwrap(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            compute_digest("abc", "SHA-512").unwrap(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn output_is_lowercase_hex_of_expected_length() {
        for algo in HashAlgorithm::ALL {
            let hex = digest_bytes(algo, "Grüße".as_bytes());
            assert_eq!(hex.len(), algo.output_len() * 2);
            assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn deterministic() {
        for algo in HashAlgorithm::ALL {
            let a = compute_digest("same input", algo.name()).unwrap();
            let b = compute_digest("same input", algo.name()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn unsupported_algorithm_fails() {
        assert!(matches!(
            compute_digest("hello", "MD5"),
            Err(ComputeError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn reader_matches_in_memory() {
        let content = "x".repeat(3 * BUF_SIZE + 17);
        for algo in HashAlgorithm::ALL {
            assert_eq!(
                digest_reader(algo, content.as_bytes()).unwrap(),
                digest_bytes(algo, content.as_bytes())
            );
        }
    }

    #[test]
    fn path_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let digest = digest_path(HashAlgorithm::Sha256, f.path()).unwrap();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn path_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        let digest = digest_path(HashAlgorithm::Sha256, f.path()).unwrap();
        assert_eq!(
            digest,
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = digest_path(HashAlgorithm::Sha1, &dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ComputeError::Io(_)));
    }
}
