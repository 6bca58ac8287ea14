//! HTTP seam of the client.
//!
//! [`GelbooruClient`](crate::client::GelbooruClient) only needs one thing from the network: a GET
//! that hands back the status code and the body. [`HttpTransport`] does that with `reqwest`;
//! tests plug in their own [`Transport`].
use log::debug;
use reqwest::Client;
use std::future::Future;

use crate::{config::ServerConfig, error::ClientError};

/// Status and body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

pub trait Transport: Send + Sync {
    /// Performs a single GET request.
    ///
    /// Any failure to get a response at all (DNS, connect, TLS, timeout) must come back as
    /// [`ClientError::Transport`]. Non-success statuses are *not* errors at this level.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a client with the user agent and timeout from `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()?;

        debug!("Using user-agent: {}", config.user_agent);
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Error pages are never decoded, so don't bother downloading them.
        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
