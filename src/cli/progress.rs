//! Shared CLI progress callback with styled output and spinners

use crate::cli::style::{Stylize, check, cross, spinner_style, submission_link};
use acmoj::config::Config;
use acmoj::error::Error;
use acmoj::types::SubmissionReceipt;
use acmoj::workflow::{Phase, ProgressCallback};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints to the terminal
///
/// Network calls run under a spinner that cannot be cancelled; it is
/// cleared as soon as the call resolves.
pub struct CliProgress {
    config: Config,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create progress output for `config`'s judge
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(old) = slot.replace(bar) {
                old.finish_and_clear();
            }
        }
    }

    fn finish_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Submitting | Phase::Aborting => {
                self.start_spinner(format!("{phase}..."));
            }
            Phase::ResolvingLanguage => {
                println!("{}", "Fetching accepted languages...".muted());
            }
            Phase::ResolvingProblem | Phase::AwaitingConfirmation => {}
        }
    }

    async fn on_warning(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}: {}", "warning".warn(), message);
    }

    async fn on_error(&self, err: &Error) {
        self.finish_spinner();
        eprintln!("{} {}: {}", cross(), "error".error(), err.user_message());
    }

    async fn on_submitted(&self, problem_id: u64, receipt: &SubmissionReceipt) {
        self.finish_spinner();
        let id = format!("#{}", receipt.id);
        println!(
            "{} Submitted problem {} as submission {}",
            check(),
            problem_id.accent(),
            id.emphasis()
        );
        println!(
            "    {}",
            submission_link(&self.config, receipt.id)
        );
    }

    async fn on_aborted(&self, submission_id: u64) {
        self.finish_spinner();
        let id = format!("#{submission_id}");
        println!("{} Aborted submission {}", check(), id.emphasis());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
