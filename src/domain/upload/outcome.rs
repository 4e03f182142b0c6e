// SPDX-License-Identifier: MPL-2.0
//! Result annotation attached to the form after a submission attempt.

/// Outcome of the most recent submission attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The webhook accepted the upload (2xx).
    Success,
    /// The attempt failed; carries the user-visible message.
    Failure(String),
}

impl SubmissionResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }

    /// Failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success => None,
            SubmissionResult::Failure(message) => Some(message),
        }
    }
}
