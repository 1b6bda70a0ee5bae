pub mod config;
pub mod logging;

pub mod algorithm;
pub mod control;
pub mod digest;
pub mod error;
pub mod fragment;
pub mod session;
pub mod verify;

pub use algorithm::HashAlgorithm;
pub use error::ComputeError;
pub use verify::{evaluate, Outcome, VerificationState, VerifierInputs};
