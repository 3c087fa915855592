//! ACM Online Judge service implementation

use crate::config::Config;
use crate::error::{Error, Result};
use crate::judge::JudgeService;
use crate::types::{
    ProblemDetails, Profile, SubmissionFilter, SubmissionReceipt, SubmissionRequest,
    SubmissionSummary,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Judge service using reqwest
pub struct AcmojClient {
    client: Client,
    token: Option<String>,
    config: Config,
}

#[derive(Deserialize)]
struct SubmissionList {
    #[serde(default)]
    submissions: Vec<SubmissionSummary>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

impl AcmojClient {
    /// Create a new client
    ///
    /// Without a token, requests are sent anonymously.
    pub fn new(token: Option<String>, config: Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("acmoj-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            config,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.authorized(builder).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Judge returned {status}: {body}");
        Err(Error::Api {
            status: status.as_u16(),
            message: error_message(&body, status.canonical_reason()),
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        Ok(self.send(builder).await?.json().await?)
    }
}

/// Extract the human-readable message from an error response body
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.message.or(parsed.detail) {
            return msg;
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    reason.unwrap_or("request failed").to_string()
}

#[async_trait]
impl JudgeService for AcmojClient {
    async fn get_problem_details(&self, problem_id: u64) -> Result<ProblemDetails> {
        let url = self.config.api_url(&format!("/problem/{problem_id}"));
        self.send_json(self.client.get(&url)).await
    }

    async fn submit_code(&self, request: &SubmissionRequest) -> Result<SubmissionReceipt> {
        let url = self
            .config
            .api_url(&format!("/problem/{}/submit", request.problem_id));

        let form = [
            ("language", request.language.as_str()),
            ("code", request.code.as_str()),
            ("public", "false"),
        ];

        self.send_json(self.client.post(&url).form(&form)).await
    }

    async fn abort_submission(&self, submission_id: u64) -> Result<()> {
        let url = self
            .config
            .api_url(&format!("/submission/{submission_id}/abort"));
        self.send(self.client.post(&url)).await?;
        Ok(())
    }

    async fn list_submissions(&self, filter: &SubmissionFilter) -> Result<Vec<SubmissionSummary>> {
        let url = self.config.api_url("/submission/");

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(problem_id) = filter.problem_id {
            query.push(("problem_id", problem_id.to_string()));
        }
        if let Some(username) = &filter.username {
            query.push(("username", username.clone()));
        }

        let list: SubmissionList = self.send_json(self.client.get(&url).query(&query)).await?;
        Ok(list.submissions)
    }

    async fn get_profile(&self) -> Result<Profile> {
        let url = self.config.api_url("/user/profile");
        self.send_json(self.client.get(&url)).await
    }
}
