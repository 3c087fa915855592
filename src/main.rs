//! acmoj - submit solutions to ACM Online Judge
//!
//! CLI binary for submitting source files and managing submissions.

use acmoj::auth::TokenStore;
use acmoj::config::Config;
use acmoj::judge::create_judge_service;
use acmoj::workflow::ProblemArgument;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "acmoj")]
#[command(about = "Submit solutions to ACM Online Judge")]
#[command(version)]
struct Cli {
    /// Judge API base URL (overrides ACMOJ_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a source file
    Submit {
        /// Source file to submit
        file: Option<PathBuf>,

        /// Problem ID (skips inference and the problem prompt)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        problem: Option<u64>,

        /// Problem as JSON: a number or an object with a `problemId` field
        #[arg(long, conflicts_with = "problem")]
        payload: Option<String>,
    },

    /// Abort a pending submission
    Abort {
        /// Submission ID
        submission_id: String,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Show a problem's accepted languages
    Problem {
        /// Problem ID
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        problem_id: u64,
    },

    /// List recent submissions
    Submissions {
        /// Only submissions for this problem
        #[arg(long)]
        problem: Option<u64>,

        /// Only your own submissions
        #[arg(long)]
        mine: bool,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Store an access token
    Login,
    /// Remove the stored access token
    Logout,
    /// Show authentication status
    Status,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "acmoj=debug" } else { "acmoj=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_env(cli.api_base.as_deref())?;

    match cli.command {
        Commands::Submit {
            file,
            problem,
            payload,
        } => {
            let argument = match (problem, payload) {
                (Some(id), _) => Some(ProblemArgument::from(id)),
                (None, Some(raw)) => Some(ProblemArgument::from_json(&raw)?),
                (None, None) => None,
            };
            Ok(cli::run_submit(&config, file.as_deref(), argument).await?)
        }
        Commands::Abort { submission_id } => Ok(cli::run_abort(&config, &submission_id).await?),
        Commands::Auth { action } => {
            let action = match action {
                AuthCommand::Login => cli::AuthAction::Login,
                AuthCommand::Logout => cli::AuthAction::Logout,
                AuthCommand::Status => cli::AuthAction::Status,
            };
            cli::run_auth(&config, action).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Problem { problem_id } => {
            let judge = create_judge_service(&config, &TokenStore::from_config(&config));
            cli::run_problem(judge.as_ref(), problem_id).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Submissions { problem, mine } => {
            let judge = create_judge_service(&config, &TokenStore::from_config(&config));
            cli::run_submissions(judge.as_ref(), problem, mine).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
