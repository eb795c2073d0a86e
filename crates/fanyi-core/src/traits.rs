use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

/// HTTP seam between the translator and the network.
///
/// Implementations send one form-encoded `POST` and return the raw response
/// body. They never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name.
    fn name(&self) -> &str;

    /// Post `form` to `url`, giving up after `timeout`.
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        timeout: Duration,
    ) -> Result<String, TransportError>;
}
