//! Abort a pending submission

use crate::directive::parse_numeric_id;
use crate::error::{Error, Result};
use crate::workflow::{Phase, WorkflowContext};
use tracing::info;

/// Terminal state of an abort invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortOutcome {
    /// Caller is not logged in; nothing was done
    NotAuthenticated,
    /// The submission ID was not a positive integer
    InvalidSubmissionId(String),
    /// The user declined
    Cancelled,
    /// The judge aborted the submission
    Aborted {
        /// Aborted submission ID
        submission_id: u64,
    },
    /// The judge refused or could not be reached
    Failed {
        /// Submission that was to be aborted
        submission_id: u64,
        /// Service-provided error message
        message: String,
    },
}

/// Run the abort workflow for `raw_submission_id`
///
/// The ID is validated before any prompt is shown or call is made.
pub async fn abort_submission(
    ctx: &WorkflowContext<'_>,
    raw_submission_id: &str,
) -> Result<AbortOutcome> {
    if !ctx.auth.is_logged_in() {
        info!("Abort requested while logged out");
        return Ok(AbortOutcome::NotAuthenticated);
    }

    let Some(submission_id) = parse_numeric_id(raw_submission_id) else {
        let err = Error::InvalidSubmissionId(raw_submission_id.to_string());
        ctx.progress.on_error(&err).await;
        return Ok(AbortOutcome::InvalidSubmissionId(
            raw_submission_id.to_string(),
        ));
    };

    ctx.progress.on_phase(Phase::AwaitingConfirmation).await;

    let question = format!("Abort submission {submission_id}?");
    if !ctx.prompter.confirm(&question)? {
        return Ok(AbortOutcome::Cancelled);
    }

    ctx.progress.on_phase(Phase::Aborting).await;

    match ctx.judge.abort_submission(submission_id).await {
        Ok(()) => {
            info!("Aborted submission {submission_id}");
            ctx.progress.on_aborted(submission_id).await;
            ctx.refresh.refresh_submissions().await;
            Ok(AbortOutcome::Aborted { submission_id })
        }
        Err(e) => {
            info!("Abort of submission {submission_id} failed: {e}");
            ctx.progress.on_error(&e).await;
            Ok(AbortOutcome::Failed {
                submission_id,
                message: e.user_message(),
            })
        }
    }
}
