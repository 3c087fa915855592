//! User interaction for workflows

use crate::directive::parse_numeric_id;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Prompts shown during a workflow
///
/// `Ok(None)` from a prompt means the user dismissed it.
pub trait Prompter: Send + Sync {
    /// Ask for a problem ID, pre-filled with `initial`
    ///
    /// Implementations should only accept digit strings.
    fn input_problem_id(&self, initial: Option<u64>) -> Result<Option<String>>;

    /// Ask the user to pick one of `languages`
    ///
    /// `suggested` is the index to highlight; it is never picked implicitly.
    fn select_language(
        &self,
        problem_id: u64,
        languages: &[String],
        suggested: Option<usize>,
    ) -> Result<Option<usize>>;

    /// Ask a yes/no question; only an explicit yes returns `true`
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Problem supplied by the invoker instead of being inferred
///
/// Either a bare number or a record with a `problemId` field. Other fields
/// of the record are kept but not interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProblemArgument {
    /// Bare problem ID
    Id(u64),
    /// Record carrying a `problemId`
    Payload(ProblemPayload),
}

/// Record form of [`ProblemArgument`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProblemPayload {
    /// Problem ID
    #[serde(rename = "problemId", deserialize_with = "number_or_digits")]
    pub problem_id: u64,
    /// Fields not interpreted by the workflow
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProblemArgument {
    /// Parse a JSON argument
    pub fn from_json(raw: &str) -> Result<Self> {
        let arg: Self = serde_json::from_str(raw)
            .map_err(|_| Error::InvalidProblemId(raw.trim().to_string()))?;
        if arg.problem_id() == 0 {
            return Err(Error::InvalidProblemId(raw.trim().to_string()));
        }
        Ok(arg)
    }

    /// The carried problem ID
    pub const fn problem_id(&self) -> u64 {
        match self {
            Self::Id(id) => *id,
            Self::Payload(payload) => payload.problem_id,
        }
    }
}

impl From<u64> for ProblemArgument {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

fn number_or_digits<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => parse_numeric_id(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid problemId: {s}"))),
    }
}
