//! HTTP transport for the analysis service

use crate::client::encoder::MultipartPayload;
use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError, SubmissionError};
use log::{debug, info};
use std::future::Future;
use std::time::Duration;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Delivers one encoded submission and returns whatever came back.
///
/// Implementations report network-level failures as
/// `SubmissionError::Transport` with no status; interpreting the response is
/// left to the caller.
pub trait AnalysisBackend {
    fn send(
        &self,
        payload: MultipartPayload,
    ) -> impl Future<Output = std::result::Result<RawResponse, SubmissionError>> + Send;
}

pub struct HttpBackend {
    client: reqwest::Client,
    analyze_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }
}

impl AnalysisBackend for HttpBackend {
    async fn send(
        &self,
        payload: MultipartPayload,
    ) -> std::result::Result<RawResponse, SubmissionError> {
        info!("Sending request to: {}", self.analyze_url);
        debug!("Payload carries {} bytes", payload.content_length());

        let form = payload.into_form()?;

        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport {
                status: None,
                body: e.to_string(),
            })?;

        let status = response.status();
        info!("Response status: {}", status);

        let body = response.text().await.map_err(|e| SubmissionError::Transport {
            status: None,
            body: format!("failed to read response body ({}): {}", status, e),
        })?;

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
