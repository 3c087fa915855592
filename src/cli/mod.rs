//! CLI commands
//!
//! Command implementations for the `acmoj` binary.

mod abort;
mod auth;
mod problem;
mod progress;
mod prompt;
mod style;
mod submissions;
mod submit;

pub use abort::run_abort;
pub use auth::{AuthAction, run_auth};
pub use problem::run_problem;
pub use submissions::run_submissions;
pub use submit::run_submit;
