//! Mock judge service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use acmoj::error::{Error, Result};
use acmoj::judge::JudgeService;
use acmoj::types::{
    ProblemDetails, Profile, SubmissionFilter, SubmissionReceipt, SubmissionRequest,
    SubmissionSummary,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simple mock judge service for testing
///
/// Features:
/// - Auto-incrementing submission IDs
/// - Call tracking for verification
/// - Configurable accepted languages per problem
/// - Error injection for failure path testing
pub struct MockJudgeService {
    next_submission_id: AtomicU64,
    languages: Mutex<HashMap<u64, Vec<String>>>,
    // Call tracking
    details_calls: Mutex<Vec<u64>>,
    submit_calls: Mutex<Vec<SubmissionRequest>>,
    abort_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_details: Mutex<Option<String>>,
    error_on_submit: Mutex<Option<String>>,
    error_on_abort: Mutex<Option<String>>,
}

impl MockJudgeService {
    pub fn new() -> Self {
        Self {
            next_submission_id: AtomicU64::new(1000),
            languages: Mutex::new(HashMap::new()),
            details_calls: Mutex::new(Vec::new()),
            submit_calls: Mutex::new(Vec::new()),
            abort_calls: Mutex::new(Vec::new()),
            error_on_details: Mutex::new(None),
            error_on_submit: Mutex::new(None),
            error_on_abort: Mutex::new(None),
        }
    }

    /// Set the accepted languages reported for `problem_id`
    pub fn set_languages(&self, problem_id: u64, languages: &[&str]) {
        self.languages.lock().unwrap().insert(
            problem_id,
            languages.iter().map(ToString::to_string).collect(),
        );
    }

    // === Error injection methods ===

    /// Make `get_problem_details` fail like an unreachable network
    pub fn fail_details(&self, msg: &str) {
        *self.error_on_details.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `submit_code` return a service error
    pub fn fail_submit(&self, msg: &str) {
        *self.error_on_submit.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `abort_submission` return a service error
    pub fn fail_abort(&self, msg: &str) {
        *self.error_on_abort.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    pub fn get_details_calls(&self) -> Vec<u64> {
        self.details_calls.lock().unwrap().clone()
    }

    pub fn get_submit_calls(&self) -> Vec<SubmissionRequest> {
        self.submit_calls.lock().unwrap().clone()
    }

    pub fn get_abort_calls(&self) -> Vec<u64> {
        self.abort_calls.lock().unwrap().clone()
    }

    /// Assert that no remote call of any kind was made
    pub fn assert_untouched(&self) {
        assert!(self.get_details_calls().is_empty(), "unexpected get_problem_details");
        assert!(self.get_submit_calls().is_empty(), "unexpected submit_code");
        assert!(self.get_abort_calls().is_empty(), "unexpected abort_submission");
    }
}

#[async_trait]
impl JudgeService for MockJudgeService {
    async fn get_problem_details(&self, problem_id: u64) -> Result<ProblemDetails> {
        self.details_calls.lock().unwrap().push(problem_id);

        if let Some(msg) = self.error_on_details.lock().unwrap().as_ref() {
            return Err(Error::Internal(msg.clone()));
        }

        Ok(ProblemDetails {
            id: problem_id,
            title: Some(format!("Problem {problem_id}")),
            languages_accepted: self.languages.lock().unwrap().get(&problem_id).cloned(),
        })
    }

    async fn submit_code(&self, request: &SubmissionRequest) -> Result<SubmissionReceipt> {
        self.submit_calls.lock().unwrap().push(request.clone());

        if let Some(msg) = self.error_on_submit.lock().unwrap().as_ref() {
            return Err(Error::Api {
                status: 400,
                message: msg.clone(),
            });
        }

        let id = self.next_submission_id.fetch_add(1, Ordering::SeqCst);
        Ok(SubmissionReceipt { id })
    }

    async fn abort_submission(&self, submission_id: u64) -> Result<()> {
        self.abort_calls.lock().unwrap().push(submission_id);

        if let Some(msg) = self.error_on_abort.lock().unwrap().as_ref() {
            return Err(Error::Api {
                status: 400,
                message: msg.clone(),
            });
        }
        Ok(())
    }

    async fn list_submissions(&self, _filter: &SubmissionFilter) -> Result<Vec<SubmissionSummary>> {
        Ok(Vec::new())
    }

    async fn get_profile(&self) -> Result<Profile> {
        Ok(Profile {
            username: "tester".to_string(),
            friendly_name: None,
        })
    }
}
