//! acmoj - submit solutions to ACM Online Judge
//!
//! The library holds the submission workflow: inferring which problem a
//! source file belongs to, picking the submission language, recording the
//! association in the file, and driving submit/abort calls against the
//! judge. The `acmoj` binary wires it to a terminal.

pub mod auth;
pub mod config;
pub mod directive;
pub mod document;
pub mod error;
pub mod judge;
pub mod language;
pub mod types;
pub mod workflow;
