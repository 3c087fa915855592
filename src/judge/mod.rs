//! Remote judge service
//!
//! Provides a trait over the ACM Online Judge API so the submission
//! workflow can run against the real service or a test double.

mod client;
mod factory;

pub use client::AcmojClient;
pub use factory::create_judge_service;

use crate::error::Result;
use crate::types::{
    ProblemDetails, Profile, SubmissionFilter, SubmissionReceipt, SubmissionRequest,
    SubmissionSummary,
};
use async_trait::async_trait;

/// Judge service trait for problem and submission operations
#[async_trait]
pub trait JudgeService: Send + Sync {
    /// Fetch a problem's details, including its accepted languages
    async fn get_problem_details(&self, problem_id: u64) -> Result<ProblemDetails>;

    /// Submit code for judging
    async fn submit_code(&self, request: &SubmissionRequest) -> Result<SubmissionReceipt>;

    /// Abort a pending submission
    async fn abort_submission(&self, submission_id: u64) -> Result<()>;

    /// List recent submissions
    async fn list_submissions(&self, filter: &SubmissionFilter) -> Result<Vec<SubmissionSummary>>;

    /// Fetch the authenticated user's profile
    async fn get_profile(&self) -> Result<Profile>;
}
