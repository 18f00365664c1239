//! REST API for the classification server.
//!
//! The [`DigitApi`] trait is the seam between client logic and the network:
//! [`HttpApi`] talks to a real server through `reqwest`, tests substitute a
//! scripted implementation. Body decoding lives in pure `decode_*` functions
//! so it can be tested without a socket.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ClientError>`; nothing panics and nothing
//! retries. Non-2xx statuses become [`ClientError::Status`] with the body kept
//! for logging.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use async_trait::async_trait;
use canvas::consts::PNG_MIME;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::types::{
    AvgConfidenceResponse, DigitCount, DistributionResponse, HistoryResponse, PredictResponse, PredictionResult,
    TotalResponse,
};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::state::history::HistoryEntry;

pub const PREDICT_PATH: &str = "/predict";
pub const HISTORY_PATH: &str = "/history";
pub const CLEAR_HISTORY_PATH: &str = "/clear_history";
pub const DISTRIBUTION_PATH: &str = "/analytics/digit-distribution";
pub const AVG_CONFIDENCE_PATH: &str = "/analytics/avg-confidence";
pub const TOTAL_PATH: &str = "/analytics/total";

/// Multipart field carrying the raster.
pub const UPLOAD_FIELD: &str = "file";
/// File name attached to the uploaded raster.
pub const UPLOAD_FILENAME: &str = "digit.png";

/// Operations the classification server exposes.
#[async_trait]
pub trait DigitApi: Send + Sync {
    /// Classify a PNG image. The server persists the prediction as a side effect.
    async fn predict(&self, png: Vec<u8>) -> Result<PredictionResult, ClientError>;

    /// Full server-held history, most recent first.
    async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError>;

    /// Delete every stored prediction.
    async fn clear_history(&self) -> Result<(), ClientError>;

    async fn digit_distribution(&self) -> Result<Vec<DigitCount>, ClientError>;

    /// Mean confidence, `None` when there are no predictions.
    async fn avg_confidence(&self) -> Result<Option<f64>, ClientError>;

    async fn total_predictions(&self) -> Result<u64, ClientError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client for `config.base_url`. Timeouts apply only when configured.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(status, body)
    }

    async fn get(&self, path: &str) -> Result<String, ClientError> {
        tracing::debug!(path, "GET");
        self.send(self.http.get(self.url(path))).await
    }
}

#[async_trait]
impl DigitApi for HttpApi {
    async fn predict(&self, png: Vec<u8>) -> Result<PredictionResult, ClientError> {
        tracing::debug!(path = PREDICT_PATH, bytes = png.len(), "POST");
        let part = Part::bytes(png).file_name(UPLOAD_FILENAME).mime_str(PNG_MIME)?;
        let form = Form::new().part(UPLOAD_FIELD, part);
        let body = self.send(self.http.post(self.url(PREDICT_PATH)).multipart(form)).await?;
        decode_prediction(&body)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        decode_history(&self.get(HISTORY_PATH).await?)
    }

    async fn clear_history(&self) -> Result<(), ClientError> {
        tracing::debug!(path = CLEAR_HISTORY_PATH, "DELETE");
        self.send(self.http.delete(self.url(CLEAR_HISTORY_PATH))).await?;
        Ok(())
    }

    async fn digit_distribution(&self) -> Result<Vec<DigitCount>, ClientError> {
        decode_distribution(&self.get(DISTRIBUTION_PATH).await?)
    }

    async fn avg_confidence(&self) -> Result<Option<f64>, ClientError> {
        decode_avg_confidence(&self.get(AVG_CONFIDENCE_PATH).await?)
    }

    async fn total_predictions(&self) -> Result<u64, ClientError> {
        decode_total(&self.get(TOTAL_PATH).await?)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn check_status(status: u16, body: String) -> Result<String, ClientError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ClientError::Status { status, body })
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// # Errors
///
/// Returns [`ClientError::Parse`] or [`ClientError::Rejected`].
pub fn decode_prediction(body: &str) -> Result<PredictionResult, ClientError> {
    parse_json::<PredictResponse>(body)?.into_result()
}

/// # Errors
///
/// Returns [`ClientError::Parse`] for malformed or out-of-range rows.
pub fn decode_history(body: &str) -> Result<Vec<HistoryEntry>, ClientError> {
    parse_json::<HistoryResponse>(body)?.into_entries()
}

/// # Errors
///
/// Returns [`ClientError::Parse`] for a malformed body.
pub fn decode_distribution(body: &str) -> Result<Vec<DigitCount>, ClientError> {
    Ok(parse_json::<DistributionResponse>(body)?.into_counts())
}

/// # Errors
///
/// Returns [`ClientError::Parse`] for a malformed body.
pub fn decode_avg_confidence(body: &str) -> Result<Option<f64>, ClientError> {
    Ok(parse_json::<AvgConfidenceResponse>(body)?.average_confidence)
}

/// # Errors
///
/// Returns [`ClientError::Parse`] for a malformed body.
pub fn decode_total(body: &str) -> Result<u64, ClientError> {
    Ok(parse_json::<TotalResponse>(body)?.total_predictions)
}
