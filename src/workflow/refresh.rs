//! Submission list refresh hook

use async_trait::async_trait;

/// Something showing a submission list that should be refreshed
///
/// Called after a successful submit or abort. Implementations handle their
/// own failures; the workflow does not wait on a result.
#[async_trait]
pub trait SubmissionListRefresh: Send + Sync {
    /// Refresh the list
    async fn refresh_submissions(&self);
}

/// Refresh hook that does nothing
pub struct NoopRefresh;

#[async_trait]
impl SubmissionListRefresh for NoopRefresh {
    async fn refresh_submissions(&self) {}
}
