//! Delivery of a callback request to the intake endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::dto::intake::{IntakeRequest, IntakeResponse};

/// The request did not complete with a readable reply.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Reply from the intake endpoint, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeReply {
    pub status: u16,
    pub body: IntakeResponse,
}

impl IntakeReply {
    /// `true` when the endpoint answered with a 2xx status and `success: true`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.body.success
    }
}

/// Posts a callback request to the intake endpoint.
#[async_trait]
pub trait IntakeTransport: Send + Sync {
    async fn post(&self, request: &IntakeRequest) -> Result<IntakeReply, TransportError>;
}

#[cfg(feature = "client")]
pub use http::HttpIntakeTransport;

#[cfg(feature = "client")]
mod http {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{IntakeReply, IntakeTransport, TransportError};
    use crate::dto::intake::{IntakeRequest, IntakeResponse};

    /// [`IntakeTransport`] over HTTPS using `reqwest`.
    #[derive(Clone)]
    pub struct HttpIntakeTransport {
        client: reqwest::Client,
        endpoint: String,
    }

    impl HttpIntakeTransport {
        /// Builds a transport posting to `endpoint`, bounded by `timeout`.
        pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(TransportError::from)?;
            Ok(Self {
                client,
                endpoint: endpoint.into(),
            })
        }
    }

    impl From<reqwest::Error> for TransportError {
        fn from(err: reqwest::Error) -> Self {
            if err.is_timeout() {
                TransportError::Timeout
            } else if err.is_decode() {
                TransportError::Malformed(err.to_string())
            } else {
                TransportError::Request(err.to_string())
            }
        }
    }

    #[async_trait]
    impl IntakeTransport for HttpIntakeTransport {
        async fn post(&self, request: &IntakeRequest) -> Result<IntakeReply, TransportError> {
            let response = self.client.post(&self.endpoint).json(request).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            let body = serde_json::from_slice::<IntakeResponse>(&body)
                .map_err(|e| TransportError::Malformed(e.to_string()))?;
            Ok(IntakeReply { status, body })
        }
    }
}
