//! Judge service factory
//!
//! Creates the judge service from configuration and stored credentials.

use crate::auth::TokenStore;
use crate::config::Config;
use crate::judge::{AcmojClient, JudgeService};
use tracing::debug;

/// Create a judge service from configuration
///
/// Uses the stored token when one resolves. Otherwise the service is
/// anonymous and authenticated endpoints will be rejected by the judge;
/// unreadable credentials count as no token, matching
/// [`TokenStore`]'s login check.
pub fn create_judge_service(config: &Config, tokens: &TokenStore) -> Box<dyn JudgeService> {
    let token = match tokens.load() {
        Ok(Some(auth)) => {
            debug!("Using token from {:?}", auth.source);
            Some(auth.token)
        }
        Ok(None) => None,
        Err(e) => {
            debug!("Ignoring unreadable credentials: {e}");
            None
        }
    };
    Box::new(AcmojClient::new(token, config.clone()))
}
