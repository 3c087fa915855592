//! Test doubles for workflow collaborators
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use acmoj::auth::AuthState;
use acmoj::document::SourceFile;
use acmoj::error::{Error, Result};
use acmoj::types::SubmissionReceipt;
use acmoj::workflow::{Phase, ProgressCallback, Prompter, SubmissionListRefresh};
use async_trait::async_trait;
use std::fs;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Fixed login state
pub struct StaticAuth(pub bool);

impl AuthState for StaticAuth {
    fn is_logged_in(&self) -> bool {
        self.0
    }
}

/// Record of a `select_language` prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    pub problem_id: u64,
    pub languages: Vec<String>,
    pub suggested: Option<usize>,
}

/// Prompter answering from a script
///
/// `None` answers mean the user dismissed the prompt.
pub struct ScriptedPrompter {
    problem_input: Option<String>,
    language: Option<String>,
    confirm: bool,
    input_calls: Mutex<Vec<Option<u64>>>,
    select_calls: Mutex<Vec<SelectCall>>,
    confirm_calls: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// Accept the pre-filled problem, pick `language`, confirm
    pub fn accepting(language: &str) -> Self {
        Self {
            problem_input: None,
            language: Some(language.to_string()),
            confirm: true,
            input_calls: Mutex::new(Vec::new()),
            select_calls: Mutex::new(Vec::new()),
            confirm_calls: Mutex::new(Vec::new()),
        }
    }

    /// Type `input` into the problem prompt instead of accepting the default
    pub fn with_problem_input(mut self, input: &str) -> Self {
        self.problem_input = Some(input.to_string());
        self
    }

    /// Dismiss the language prompt
    pub fn dismiss_language(mut self) -> Self {
        self.language = None;
        self
    }

    /// Answer no to the confirmation
    pub fn declining(mut self) -> Self {
        self.confirm = false;
        self
    }

    pub fn input_calls(&self) -> Vec<Option<u64>> {
        self.input_calls.lock().unwrap().clone()
    }

    pub fn select_calls(&self) -> Vec<SelectCall> {
        self.select_calls.lock().unwrap().clone()
    }

    pub fn confirm_calls(&self) -> Vec<String> {
        self.confirm_calls.lock().unwrap().clone()
    }

    pub fn prompted_at_all(&self) -> bool {
        !self.input_calls().is_empty()
            || !self.select_calls().is_empty()
            || !self.confirm_calls().is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn input_problem_id(&self, initial: Option<u64>) -> Result<Option<String>> {
        self.input_calls.lock().unwrap().push(initial);
        // Empty prompt with no pre-fill behaves like a dismissal
        Ok(self
            .problem_input
            .clone()
            .or_else(|| initial.map(|id| id.to_string())))
    }

    fn select_language(
        &self,
        problem_id: u64,
        languages: &[String],
        suggested: Option<usize>,
    ) -> Result<Option<usize>> {
        self.select_calls.lock().unwrap().push(SelectCall {
            problem_id,
            languages: languages.to_vec(),
            suggested,
        });

        let Some(wanted) = &self.language else {
            return Ok(None);
        };
        languages
            .iter()
            .position(|l| l == wanted)
            .map(Some)
            .ok_or_else(|| Error::Prompt(format!("{wanted} not offered in {languages:?}")))
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        self.confirm_calls.lock().unwrap().push(message.to_string());
        Ok(self.confirm)
    }
}

/// Progress callback that records notifications
#[derive(Default)]
pub struct RecordingProgress {
    phases: Mutex<Vec<Phase>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    submitted: Mutex<Vec<(u64, u64)>>,
    aborted: Mutex<Vec<u64>>,
    messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<(u64, u64)> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn aborted(&self) -> Vec<u64> {
        self.aborted.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    async fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.user_message());
    }

    async fn on_submitted(&self, problem_id: u64, receipt: &SubmissionReceipt) {
        self.submitted
            .lock()
            .unwrap()
            .push((problem_id, receipt.id));
    }

    async fn on_aborted(&self, submission_id: u64) {
        self.aborted.lock().unwrap().push(submission_id);
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Refresh hook that counts invocations
#[derive(Default)]
pub struct CountingRefresh {
    count: AtomicUsize,
}

impl CountingRefresh {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionListRefresh for CountingRefresh {
    async fn refresh_submissions(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Write `text` to `dir/name` and open it
pub fn make_source(dir: &TempDir, name: &str, text: &str) -> SourceFile {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    SourceFile::open(path).unwrap()
}

/// Current on-disk contents of `doc`
pub fn disk_text(doc: &SourceFile) -> String {
    fs::read_to_string(doc.path()).unwrap()
}
