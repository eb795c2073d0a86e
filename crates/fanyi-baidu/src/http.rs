//! reqwest-backed [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use fanyi_core::{error::TransportError, traits::Transport};
use tracing::debug;

/// Form-posting HTTP transport sharing one connection pool.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(e.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
        timeout: Duration,
    ) -> Result<String, TransportError> {
        debug!("http: POST {url} timeout={}s", timeout.as_secs());

        let resp = self
            .client
            .post(url)
            .form(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        resp.text().await.map_err(map_reqwest_error)
    }
}
