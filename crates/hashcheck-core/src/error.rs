//! The single failure kind of a recompute cycle.

use std::io;
use thiserror::Error;

/// A digest computation failed. Caught at the top of the recompute flow and
/// shown to the user inline; never fatal.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The algorithm name is not one of the supported digests.
    #[error("unrecognized digest algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
    /// Reading the content (file or stdin) failed.
    #[error("reading content: {0}")]
    Io(#[from] io::Error),
}
