//! Core types for acmoj

use serde::{Deserialize, Serialize};

/// Problem details as returned by the judge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// Problem ID
    pub id: u64,
    /// Problem title
    #[serde(default)]
    pub title: Option<String>,
    /// Submission languages the problem accepts
    #[serde(default)]
    pub languages_accepted: Option<Vec<String>>,
}

/// A request to submit code for a problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Target problem ID
    pub problem_id: u64,
    /// Judge language identifier
    pub language: String,
    /// Full source text
    pub code: String,
}

/// Response to a successful submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// ID of the newly created submission
    pub id: u64,
}

/// A submission as shown in submission lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionSummary {
    /// Submission ID
    pub id: u64,
    /// Problem the submission was made for
    #[serde(default)]
    pub problem_id: Option<u64>,
    /// Judge status (e.g. "accepted", "judging")
    #[serde(default)]
    pub status: Option<String>,
    /// Submission language
    #[serde(default)]
    pub language: Option<String>,
    /// Submitter's username
    #[serde(default)]
    pub username: Option<String>,
}

/// Filter for listing submissions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    /// Only submissions for this problem
    pub problem_id: Option<u64>,
    /// Only submissions by this user
    pub username: Option<String>,
}

/// The logged-in user's profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Login name
    pub username: String,
    /// Display name
    #[serde(default)]
    pub friendly_name: Option<String>,
}
