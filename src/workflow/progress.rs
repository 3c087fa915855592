//! Progress callback trait for interface-agnostic updates
//!
//! Workflows report phases and notifications through this trait so the
//! CLI (or any other front end) decides how to render them.

use crate::error::Error;
use crate::types::SubmissionReceipt;
use async_trait::async_trait;
use std::fmt;

/// Workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Determining the target problem
    ResolvingProblem,
    /// Fetching accepted languages and choosing one
    ResolvingLanguage,
    /// Waiting for the user to confirm
    AwaitingConfirmation,
    /// Submit call in flight (not cancellable)
    Submitting,
    /// Abort call in flight (not cancellable)
    Aborting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResolvingProblem => "Resolving problem",
            Self::ResolvingLanguage => "Resolving language",
            Self::AwaitingConfirmation => "Awaiting confirmation",
            Self::Submitting => "Submitting",
            Self::Aborting => "Aborting",
        };
        f.write_str(s)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a workflow.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when a precondition is not met
    async fn on_warning(&self, message: &str);

    /// Called when the workflow fails with a user-visible error
    async fn on_error(&self, error: &Error);

    /// Called after the judge accepted a submission
    async fn on_submitted(&self, problem_id: u64, receipt: &SubmissionReceipt);

    /// Called after the judge aborted a submission
    async fn on_aborted(&self, submission_id: u64);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_warning(&self, _message: &str) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_submitted(&self, _problem_id: u64, _receipt: &SubmissionReceipt) {}
    async fn on_aborted(&self, _submission_id: u64) {}
    async fn on_message(&self, _message: &str) {}
}
