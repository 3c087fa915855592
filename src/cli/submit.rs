//! Submit command - submit a source file to a problem

use crate::cli::auth::offer_login;
use crate::cli::progress::CliProgress;
use crate::cli::prompt::DialoguerPrompter;
use crate::cli::submissions::CliRefresh;
use acmoj::auth::TokenStore;
use acmoj::config::Config;
use acmoj::document::SourceFile;
use acmoj::error::Result;
use acmoj::judge::create_judge_service;
use acmoj::workflow::{ProblemArgument, SubmitOutcome, WorkflowContext, submit_current_file};
use std::path::Path;
use std::process::ExitCode;

/// Run the submit command
pub async fn run_submit(
    config: &Config,
    file: Option<&Path>,
    argument: Option<ProblemArgument>,
) -> Result<ExitCode> {
    let tokens = TokenStore::from_config(config);
    let judge = create_judge_service(config, &tokens);
    let mut document = file.map(SourceFile::open).transpose()?;

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

    let outcome = submit_current_file(&ctx, document.as_mut(), argument.as_ref()).await?;

    Ok(match outcome {
        SubmitOutcome::Submitted { .. } | SubmitOutcome::Cancelled => ExitCode::SUCCESS,
        SubmitOutcome::NotAuthenticated => {
            offer_login(config, &tokens).await?;
            ExitCode::FAILURE
        }
        SubmitOutcome::NoActiveDocument
        | SubmitOutcome::InvalidProblemId(_)
        | SubmitOutcome::Failed { .. } => ExitCode::FAILURE,
    })
}
