//! Submissions command - list recent submissions

use crate::cli::style::{Stylize, bullet, verdict};
use acmoj::error::Result;
use acmoj::judge::JudgeService;
use acmoj::types::{SubmissionFilter, SubmissionSummary};
use acmoj::workflow::SubmissionListRefresh;
use anstream::println;
use async_trait::async_trait;
use tracing::debug;

/// Rows shown after a submit or abort
const REFRESH_LIMIT: usize = 5;

/// Run the submissions command
pub async fn run_submissions(
    judge: &dyn JudgeService,
    problem_id: Option<u64>,
    mine: bool,
) -> Result<()> {
    let username = if mine {
        Some(judge.get_profile().await?.username)
    } else {
        None
    };

    let filter = SubmissionFilter {
        problem_id,
        username,
    };
    let submissions = judge.list_submissions(&filter).await?;

    if submissions.is_empty() {
        println!("{}", "No submissions found".muted());
        return Ok(());
    }

    println!("{}", "Submissions".emphasis());
    print_submissions(&submissions);
    Ok(())
}

fn print_submissions(submissions: &[SubmissionSummary]) {
    for sub in submissions {
        let id = format!("#{}", sub.id);
        let problem = sub
            .problem_id
            .map_or_else(|| "?".to_string(), |p| p.to_string());
        let status = verdict(sub.status.as_deref().unwrap_or("unknown"));
        let language = sub.language.as_deref().unwrap_or("-");
        let user = sub.username.as_deref().unwrap_or("");

        println!(
            "  {} {} problem {} {} {} {}",
            bullet(),
            id.accent(),
            problem,
            language.muted(),
            status,
            user.muted()
        );
    }
}

/// Prints the user's latest submissions after a successful submit or abort
pub struct CliRefresh<'a> {
    judge: &'a dyn JudgeService,
}

impl<'a> CliRefresh<'a> {
    /// Refresh from `judge`
    pub const fn new(judge: &'a dyn JudgeService) -> Self {
        Self { judge }
    }

    async fn latest(&self) -> Result<Vec<SubmissionSummary>> {
        let profile = self.judge.get_profile().await?;
        let filter = SubmissionFilter {
            problem_id: None,
            username: Some(profile.username),
        };
        let mut submissions = self.judge.list_submissions(&filter).await?;
        submissions.truncate(REFRESH_LIMIT);
        Ok(submissions)
    }
}

#[async_trait]
impl SubmissionListRefresh for CliRefresh<'_> {
    async fn refresh_submissions(&self) {
        match self.latest().await {
            Ok(submissions) if !submissions.is_empty() => {
                println!();
                println!("{}", "Recent submissions".emphasis());
                print_submissions(&submissions);
            }
            Ok(_) => {}
            Err(e) => debug!("Failed to refresh submission list: {e}"),
        }
    }
}
