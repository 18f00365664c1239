//! Wire DTOs for the classification server.
//!
//! DESIGN
//! ======
//! Response bodies are decoded into these shapes and then validated into
//! domain values. Anything outside the documented ranges (digit `0..=9`,
//! confidence `[0, 1]`) counts as a malformed body.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::state::history::HistoryEntry;

/// Classifier output for one submitted image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub digit: u8,
    pub confidence: f64,
}

impl PredictionResult {
    #[must_use]
    pub fn new(digit: u8, confidence: f64) -> Self {
        Self { digit, confidence }
    }

    /// Check the documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if the digit or confidence is out of range.
    pub fn validated(self) -> Result<Self, ClientError> {
        validate_digit(self.digit)?;
        validate_confidence(self.confidence)?;
        Ok(self)
    }
}

/// Body of `POST /predict`.
///
/// A blank upload is answered with HTTP 200 and an `error`/`message` pair
/// instead of a prediction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Prediction(PredictionResult),
    Rejected {
        error: String,
        #[serde(default)]
        message: String,
    },
}

impl PredictResponse {
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] for a server-side rejection and
    /// [`ClientError::Parse`] for out-of-range values.
    pub fn into_result(self) -> Result<PredictionResult, ClientError> {
        match self {
            Self::Prediction(result) => result.validated(),
            Self::Rejected { error, message } => {
                let message = if message.is_empty() { error } else { message };
                Err(ClientError::Rejected { message })
            }
        }
    }
}

/// Body of `GET /history`: `[digit, confidence]` pairs, most recent first.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<(u8, f64)>,
}

impl HistoryResponse {
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if any row is out of range.
    pub fn into_entries(self) -> Result<Vec<HistoryEntry>, ClientError> {
        self.history
            .into_iter()
            .map(|(digit, confidence)| {
                validate_digit(digit)?;
                validate_confidence(confidence)?;
                Ok(HistoryEntry::new(digit, confidence))
            })
            .collect()
    }
}

/// One bar of the digit distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DigitCount {
    pub digit: u8,
    pub count: u64,
}

/// Body of `GET /analytics/digit-distribution`: `[digit, count]` pairs in digit order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DistributionResponse {
    pub distribution: Vec<(u8, u64)>,
}

impl DistributionResponse {
    #[must_use]
    pub fn into_counts(self) -> Vec<DigitCount> {
        self.distribution
            .into_iter()
            .map(|(digit, count)| DigitCount { digit, count })
            .collect()
    }
}

/// Body of `GET /analytics/avg-confidence`; `null` when nothing was predicted yet.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AvgConfidenceResponse {
    pub average_confidence: Option<f64>,
}

/// Body of `GET /analytics/total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct TotalResponse {
    pub total_predictions: u64,
}

fn validate_digit(digit: u8) -> Result<(), ClientError> {
    if digit > 9 {
        return Err(ClientError::Parse(format!("digit out of range: {digit}")));
    }
    Ok(())
}

fn validate_confidence(confidence: f64) -> Result<(), ClientError> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(ClientError::Parse(format!("confidence out of range: {confidence}")));
    }
    Ok(())
}
