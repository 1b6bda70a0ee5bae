//! Verification: compare a computed digest against the expected one, and the
//! pure compute/verify step that produces everything a surface displays.

use crate::digest::compute_digest;
use crate::error::ComputeError;
use serde::{Deserialize, Serialize};

/// Marker shown in digest displays when there is nothing to show.
pub const NOT_APPLICABLE: &str = "N/A";

/// Tri-state verification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    Valid,
    Invalid,
    NotVerified,
}

impl VerificationState {
    /// Status text shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            VerificationState::Valid => "Valid ✓",
            VerificationState::Invalid => "Invalid ✗",
            VerificationState::NotVerified => "Not verified",
        }
    }

    /// Style tag of the status region.
    pub fn style(self) -> &'static str {
        match self {
            VerificationState::Valid => "valid",
            VerificationState::Invalid => "invalid",
            VerificationState::NotVerified => "neutral",
        }
    }
}

/// Compare `computed` with `expected`, ignoring ASCII case on both sides.
/// An empty `expected` means there is nothing to verify against.
pub fn verify(computed: &str, expected: &str) -> VerificationState {
    if expected.is_empty() {
        VerificationState::NotVerified
    } else if computed.eq_ignore_ascii_case(expected) {
        VerificationState::Valid
    } else {
        VerificationState::Invalid
    }
}

/// The three user inputs of a verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierInputs {
    /// Algorithm name as selected; validated only when digesting.
    pub algorithm: String,
    /// Expected digest as typed (any case, may be empty).
    pub expected: String,
    pub content: String,
}

impl VerifierInputs {
    pub fn new(
        algorithm: impl Into<String>,
        expected: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            expected: expected.into(),
            content: content.into(),
        }
    }
}

/// Result of one compute/verify cycle, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub hash_type: String,
    pub expected_display: String,
    pub computed_display: String,
    pub state: VerificationState,
    /// Set when the computation failed.
    pub error: Option<String>,
}

impl Outcome {
    /// Text of the status region.
    pub fn status_text(&self) -> String {
        match &self.error {
            Some(msg) => format!("Error: {}", msg),
            None => self.state.label().to_string(),
        }
    }

    /// Style tag of the status region; errors are styled as invalid.
    pub fn status_style(&self) -> &'static str {
        if self.error.is_some() {
            "invalid"
        } else {
            self.state.style()
        }
    }

    /// Outcome of a failed computation: both digests not applicable, not verified.
    pub fn failed(hash_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash_type: hash_type.into(),
            expected_display: NOT_APPLICABLE.to_string(),
            computed_display: NOT_APPLICABLE.to_string(),
            state: VerificationState::NotVerified,
            error: Some(message.into()),
        }
    }

    /// True when the cycle completed with content, so the inputs may be
    /// mirrored into the URL fragment.
    pub fn is_shareable(&self) -> bool {
        self.error.is_none() && self.computed_display != NOT_APPLICABLE
    }
}

/// Compute and verify `inputs`. Pure: the same inputs always give the same outcome.
pub fn evaluate(inputs: &VerifierInputs) -> Outcome {
    if inputs.content.is_empty() {
        return Outcome {
            hash_type: inputs.algorithm.clone(),
            expected_display: display_or_na(&inputs.expected),
            computed_display: NOT_APPLICABLE.to_string(),
            state: VerificationState::NotVerified,
            error: None,
        };
    }

    tracing::debug!(
        algorithm = %inputs.algorithm,
        content_len = inputs.content.len(),
        "recomputing digest"
    );
    let computed = compute_digest(&inputs.content, &inputs.algorithm);
    outcome_for(&inputs.algorithm, &inputs.expected, computed)
}

/// Build the outcome for an already attempted computation, e.g. a streamed
/// file digest.
pub fn outcome_for(
    algorithm: &str,
    expected: &str,
    computed: Result<String, ComputeError>,
) -> Outcome {
    match computed {
        Ok(computed) => {
            let state = verify(&computed, expected);
            tracing::debug!(algorithm, ?state, "verified digest");
            Outcome {
                hash_type: algorithm.to_string(),
                expected_display: display_or_na(expected),
                computed_display: computed,
                state,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(algorithm, "digest computation failed: {}", e);
            Outcome::failed(algorithm, e.to_string())
        }
    }
}

fn display_or_na(value: &str) -> String {
    if value.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        value.to_string()
    }
}
