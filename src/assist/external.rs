use super::{OptimizationSnapshot, ProposedPlan, ResponseError};
use crate::config::AssistConfig;
use crate::http_handler::{http_client::HTTPClient, http_request::optimize_post::OptimizePlanRequest};
use async_trait::async_trait;
use std::time::Duration;

/// Source of alternative load plans.
///
/// Implementors may fail in any way, the caller falls back to its own plan.
#[async_trait]
pub trait ExternalOptimizer: Sync {
    fn name(&self) -> &'static str { "external optimizer" }
    async fn propose(&self, snapshot: &OptimizationSnapshot<'_>) -> Result<ProposedPlan, ResponseError>;
}

/// [`ExternalOptimizer`] backed by the REST optimization service.
#[derive(Debug)]
pub struct AssistClient {
    client: HTTPClient,
}

impl AssistClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ResponseError> {
        Ok(Self { client: HTTPClient::new(base_url, timeout)? })
    }

    /// Builds a client from `config`.
    ///
    /// # Returns
    /// * `Ok(None)` - No base URL is configured, assistance is disabled.
    /// * `Ok(Some(AssistClient))` - A client for the configured service.
    /// * `Err(ResponseError)` - The HTTP client could not be set up.
    pub fn from_config(config: &AssistConfig) -> Result<Option<Self>, ResponseError> {
        config.base_url.as_deref().map(|url| Self::new(url, config.timeout())).transpose()
    }

    pub fn base_url(&self) -> &str { self.client.url() }
}

#[async_trait]
impl ExternalOptimizer for AssistClient {
    fn name(&self) -> &'static str { "optimization service" }

    async fn propose(&self, snapshot: &OptimizationSnapshot<'_>) -> Result<ProposedPlan, ResponseError> {
        self.client.send_json_request(&OptimizePlanRequest { snapshot }).await
    }
}
