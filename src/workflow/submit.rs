//! Submit the current source file

use crate::directive::{infer_from_content, infer_problem_id, parse_numeric_id};
use crate::document::SourceFile;
use crate::error::{Error, Result};
use crate::judge::JudgeService;
use crate::language::{AcceptedLanguages, map_language_id};
use crate::types::SubmissionRequest;
use crate::workflow::{
    AssociationWrite, Phase, ProblemArgument, WorkflowContext, write_association,
};
use tracing::{debug, info};

/// Terminal state of a submit invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Caller is not logged in; nothing was done
    NotAuthenticated,
    /// No source file to submit
    NoActiveDocument,
    /// The user dismissed or declined a prompt
    Cancelled,
    /// The problem ID entered was not a positive integer
    InvalidProblemId(String),
    /// The judge accepted the submission
    Submitted {
        /// New submission ID
        submission_id: u64,
        /// Problem submitted to
        problem_id: u64,
        /// Language submitted as
        language: String,
    },
    /// The judge rejected the submission or could not be reached
    Failed {
        /// Problem submitted to
        problem_id: u64,
        /// Service-provided error message
        message: String,
    },
}

/// Fetch the languages a problem accepts
///
/// Never fails: any fetch error is logged and the default set is returned,
/// since the judge validates the language on submit anyway.
pub async fn fetch_accepted_languages(
    judge: &dyn JudgeService,
    problem_id: u64,
) -> AcceptedLanguages {
    match judge.get_problem_details(problem_id).await {
        Ok(details) => match details.languages_accepted {
            Some(langs) if !langs.is_empty() => AcceptedLanguages::Confirmed(langs),
            _ => {
                debug!("Problem {problem_id} lists no accepted languages; using defaults");
                AcceptedLanguages::defaulted()
            }
        },
        Err(e) => {
            debug!("Failed to fetch accepted languages for problem {problem_id}: {e}");
            AcceptedLanguages::defaulted()
        }
    }
}

/// Run the submit workflow on `document`
///
/// Steps run strictly in order: resolve problem, resolve language, write
/// the directive, confirm, submit. A declined confirmation never reaches
/// the judge but keeps any directive already written.
pub async fn submit_current_file(
    ctx: &WorkflowContext<'_>,
    document: Option<&mut SourceFile>,
    argument: Option<&ProblemArgument>,
) -> Result<SubmitOutcome> {
    if !ctx.auth.is_logged_in() {
        info!("Submit requested while logged out");
        return Ok(SubmitOutcome::NotAuthenticated);
    }

    let Some(document) = document else {
        ctx.progress.on_warning("No active source file to submit").await;
        return Ok(SubmitOutcome::NoActiveDocument);
    };

    // Problem
    ctx.progress.on_phase(Phase::ResolvingProblem).await;

    let (problem_id, attempted_problem_id) = if let Some(arg) = argument {
        (arg.problem_id(), infer_from_content(document.text()))
    } else {
        let attempted = infer_problem_id(document.text(), document.file_name());
        let Some(input) = ctx.prompter.input_problem_id(attempted)? else {
            return Ok(SubmitOutcome::Cancelled);
        };
        let Some(problem_id) = parse_numeric_id(&input) else {
            let err = Error::InvalidProblemId(input.clone());
            ctx.progress.on_error(&err).await;
            return Ok(SubmitOutcome::InvalidProblemId(input));
        };
        (problem_id, attempted)
    };

    // Language
    ctx.progress.on_phase(Phase::ResolvingLanguage).await;

    let accepted = fetch_accepted_languages(ctx.judge, problem_id).await;
    let languages = accepted.languages();
    let suggested = document
        .language_tag()
        .and_then(|tag| map_language_id(tag, languages))
        .and_then(|lang| languages.iter().position(|l| l == lang));

    let Some(index) = ctx
        .prompter
        .select_language(problem_id, languages, suggested)?
    else {
        return Ok(SubmitOutcome::Cancelled);
    };
    let language = languages
        .get(index)
        .cloned()
        .ok_or_else(|| Error::Internal(format!("language index {index} out of range")))?;

    // Directive is written before confirmation so the file records exactly
    // what is about to be submitted.
    let written = write_association(document, attempted_problem_id, problem_id, &language)?;
    debug!("Directive: {written:?}");
    if written == AssociationWrite::Written {
        ctx.progress
            .on_message(&format!(
                "Linked {} to problem {problem_id}",
                document.file_name()
            ))
            .await;
    }

    // Confirmation
    ctx.progress.on_phase(Phase::AwaitingConfirmation).await;

    let question = format!("Submit to problem {problem_id} as {language}?");
    if !ctx.prompter.confirm(&question)? {
        return Ok(SubmitOutcome::Cancelled);
    }

    // Submit
    ctx.progress.on_phase(Phase::Submitting).await;

    let request = SubmissionRequest {
        problem_id,
        language: language.clone(),
        code: document.text().to_string(),
    };

    match ctx.judge.submit_code(&request).await {
        Ok(receipt) => {
            info!("Submitted problem {problem_id} as submission {}", receipt.id);
            ctx.progress.on_submitted(problem_id, &receipt).await;
            ctx.refresh.refresh_submissions().await;
            Ok(SubmitOutcome::Submitted {
                submission_id: receipt.id,
                problem_id,
                language,
            })
        }
        Err(e) => {
            info!("Submission to problem {problem_id} failed: {e}");
            ctx.progress.on_error(&e).await;
            Ok(SubmitOutcome::Failed {
                problem_id,
                message: e.user_message(),
            })
        }
    }
}
