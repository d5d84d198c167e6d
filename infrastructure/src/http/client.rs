//! Shared JSON-over-HTTP plumbing for the exchange adapters

use super::error::{HttpError, Result};
use localchat_application::ExchangeError;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

/// A `reqwest` client bound to one endpoint.
pub(crate) struct JsonEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl JsonEndpoint {
    /// Build a client for `endpoint`.
    ///
    /// With `timeout` unset the request waits for the network stack.
    pub(crate) fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| HttpError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }

    /// POST `body` as JSON and decode the JSON reply.
    ///
    /// A non-2xx status is an error even when the body would decode.
    pub(crate) async fn post_json<B, R>(&self, body: &B) -> std::result::Result<R, ExchangeError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        trace!("Response body: {}", text);

        serde_json::from_str(&text).map_err(|e| ExchangeError::InvalidBody(e.to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> ExchangeError {
    if e.is_timeout() {
        ExchangeError::Timeout
    } else {
        ExchangeError::Connection(e.to_string())
    }
}
