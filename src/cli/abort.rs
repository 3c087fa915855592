//! Abort command - abort a pending submission

use crate::cli::auth::offer_login;
use crate::cli::progress::CliProgress;
use crate::cli::prompt::DialoguerPrompter;
use crate::cli::submissions::CliRefresh;
use acmoj::auth::TokenStore;
use acmoj::config::Config;
use acmoj::error::Result;
use acmoj::judge::create_judge_service;
use acmoj::workflow::{AbortOutcome, WorkflowContext, abort_submission};
use std::process::ExitCode;

/// Run the abort command
pub async fn run_abort(config: &Config, submission_id: &str) -> Result<ExitCode> {
    let tokens = TokenStore::from_config(config);
    let judge = create_judge_service(config, &tokens);

    let prompter = DialoguerPrompter::new();
    let progress = CliProgress::new(config.clone());
    let refresh = CliRefresh::new(judge.as_ref());
    let ctx = WorkflowContext {
        auth: &tokens,
        judge: judge.as_ref(),
        prompter: &prompter,
        progress: &progress,
        refresh: &refresh,
    };

    Ok(match abort_submission(&ctx, submission_id).await? {
        AbortOutcome::Aborted { .. } | AbortOutcome::Cancelled => ExitCode::SUCCESS,
        AbortOutcome::NotAuthenticated => {
            offer_login(config, &tokens).await?;
            ExitCode::FAILURE
        }
        AbortOutcome::InvalidSubmissionId(_) | AbortOutcome::Failed { .. } => ExitCode::FAILURE,
    })
}
