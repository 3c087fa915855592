//! Interactive submission workflows
//!
//! Drives submit and abort from a command invocation to a terminal state:
//! 1. Resolve the problem (argument, directive, file name, user prompt)
//! 2. Resolve the language (accepted set from the judge, editor tag)
//! 3. Persist the problem directive into the source file
//! 4. Confirm and call the judge

mod abort;
mod association;
mod progress;
mod prompt;
mod refresh;
mod submit;

pub use abort::{AbortOutcome, abort_submission};
pub use association::{AssociationWrite, write_association};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use prompt::{ProblemArgument, ProblemPayload, Prompter};
pub use refresh::{NoopRefresh, SubmissionListRefresh};
pub use submit::{SubmitOutcome, fetch_accepted_languages, submit_current_file};

use crate::auth::AuthState;
use crate::judge::JudgeService;

/// Collaborators a workflow invocation talks to
pub struct WorkflowContext<'a> {
    /// Authentication state
    pub auth: &'a dyn AuthState,
    /// Remote judge
    pub judge: &'a dyn JudgeService,
    /// User prompts
    pub prompter: &'a dyn Prompter,
    /// Progress and notification sink
    pub progress: &'a dyn ProgressCallback,
    /// Submission list to refresh after a successful call
    pub refresh: &'a dyn SubmissionListRefresh,
}
