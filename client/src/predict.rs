//! Submit/response protocol for classifying the capture surface.
//!
//! `submit` is validation gated: an empty surface fails locally without any
//! request. Otherwise the buffer is copied synchronously, encoded as PNG on a
//! blocking task, and posted. Because the copy is taken before the first
//! await, strokes drawn while a request is in flight do not affect it.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use std::sync::Arc;

use canvas::RgbaImage;
use canvas::codec;
use canvas::surface::CaptureSurface;

use crate::error::ClientError;
use crate::net::api::DigitApi;
use crate::net::types::PredictionResult;

pub struct PredictionClient<A: ?Sized> {
    api: Arc<A>,
}

impl<A: DigitApi + ?Sized> PredictionClient<A> {
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Classify what is currently on `surface`.
    ///
    /// # Errors
    ///
    /// [`ClientError::EmptySurface`] when nothing is drawn (no request made);
    /// otherwise any encoding or transport-class error. No retry is attempted.
    pub async fn submit(&self, surface: &CaptureSurface) -> Result<PredictionResult, ClientError> {
        let snapshot = Self::capture(surface)?;
        self.submit_snapshot(snapshot).await
    }

    /// The synchronous half of [`PredictionClient::submit`]: emptiness gate and buffer copy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptySurface`] when nothing is drawn.
    pub fn capture(surface: &CaptureSurface) -> Result<RgbaImage, ClientError> {
        if surface.is_empty() {
            tracing::debug!("submit refused: surface is empty");
            return Err(ClientError::EmptySurface);
        }
        Ok(surface.snapshot())
    }

    /// Encode and post a previously captured buffer.
    ///
    /// # Errors
    ///
    /// Returns encoding or transport-class errors.
    pub async fn submit_snapshot(&self, snapshot: RgbaImage) -> Result<PredictionResult, ClientError> {
        let png = serialize(snapshot).await?;
        match self.api.predict(png).await {
            Ok(result) => {
                tracing::info!(digit = result.digit, confidence = result.confidence, "prediction received");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "prediction failed");
                Err(e)
            }
        }
    }
}

/// Encode a captured buffer as PNG off the calling task.
///
/// # Errors
///
/// Returns [`ClientError::Codec`] or [`ClientError::Task`].
pub async fn serialize(snapshot: RgbaImage) -> Result<Vec<u8>, ClientError> {
    let png = tokio::task::spawn_blocking(move || codec::encode_png(&snapshot)).await??;
    Ok(png)
}
