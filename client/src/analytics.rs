//! Read-only aggregate queries against the analytics endpoints.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::sync::Arc;

use serde::Serialize;

use crate::error::ClientError;
use crate::net::api::DigitApi;
use crate::net::types::DigitCount;

/// Everything the analytics panel shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    /// Per-digit counts in digit order.
    pub distribution: Vec<DigitCount>,
    /// `None` until the first prediction is stored.
    pub average_confidence: Option<f64>,
    pub total_predictions: u64,
}

pub struct AnalyticsClient<A: ?Sized> {
    api: Arc<A>,
}

impl<A: DigitApi + ?Sized> AnalyticsClient<A> {
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch distribution, average confidence, and total, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first failing query's error; later queries are not issued.
    pub async fn summary(&self) -> Result<AnalyticsSummary, ClientError> {
        let distribution = self.api.digit_distribution().await?;
        let average_confidence = self.api.avg_confidence().await?;
        let total_predictions = self.api.total_predictions().await?;
        Ok(AnalyticsSummary { distribution, average_confidence, total_predictions })
    }
}
