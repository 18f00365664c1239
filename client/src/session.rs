//! Session controller: one capture surface, one history, one server.
//!
//! DESIGN
//! ======
//! The session is the only owner of the surface and the history store. UI
//! actions map one-to-one onto methods here, and each network-facing method
//! ends in a [`Notice`] instead of an error so the presentation layer never
//! has to unwind anything. A successful prediction is the only producer of
//! new history entries on the client.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use canvas::codec;
use canvas::input::{Action, PointerEvent};
use canvas::mapper::Rect;
use canvas::surface::CaptureSurface;

use crate::analytics::{AnalyticsClient, AnalyticsSummary};
use crate::error::ClientError;
use crate::net::api::DigitApi;
use crate::net::types::PredictionResult;
use crate::notice::Notice;
use crate::predict::PredictionClient;
use crate::render;
use crate::state::history::{HistoryEntry, HistoryStore};

/// Shown when predict is pressed on an empty surface.
pub const EMPTY_SURFACE_MESSAGE: &str = "Please draw or upload a digit before predicting!";

pub struct Session<A: ?Sized> {
    api: Arc<A>,
    surface: CaptureSurface,
    history: HistoryStore,
    predictor: PredictionClient<A>,
    aggregates: AnalyticsClient<A>,
    last_result: Option<PredictionResult>,
    summary: Option<AnalyticsSummary>,
}

impl<A: DigitApi + ?Sized> Session<A> {
    /// A session with a blank `size` x `size` surface and a placeholder history.
    #[must_use]
    pub fn new(api: Arc<A>, size: u32) -> Self {
        Self {
            predictor: PredictionClient::new(Arc::clone(&api)),
            aggregates: AnalyticsClient::new(Arc::clone(&api)),
            api,
            surface: CaptureSurface::new(size, size),
            history: HistoryStore::new(),
            last_result: None,
            summary: None,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn surface(&self) -> &CaptureSurface {
        &self.surface
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The result currently displayed; only replaced by a successful prediction.
    #[must_use]
    pub fn last_result(&self) -> Option<PredictionResult> {
        self.last_result
    }

    /// The last analytics summary fetched; kept across failed refreshes.
    #[must_use]
    pub fn analytics(&self) -> Option<&AnalyticsSummary> {
        self.summary.as_ref()
    }

    // --- Surface ---

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.surface.set_bounds(bounds);
    }

    pub fn pointer(&mut self, event: PointerEvent) -> Vec<Action> {
        self.surface.handle(event)
    }

    pub fn clear_surface(&mut self) {
        self.surface.clear();
    }

    /// Decode `file` off the calling task, then draw it over the surface.
    ///
    /// Returns whether the surface changed. No file, a corrupt file, or a
    /// failed decode task is a silent no-op.
    pub async fn import_image(&mut self, file: Option<Vec<u8>>) -> bool {
        let Some(bytes) = file else {
            return false;
        };
        let (width, height) = (self.surface.width(), self.surface.height());
        let decoded = tokio::task::spawn_blocking(move || codec::decode_import(&bytes, width, height)).await;
        match decoded {
            Ok(Ok(image)) => {
                self.surface.replace(image);
                true
            }
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "import ignored");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "import task failed");
                false
            }
        }
    }

    // --- Network ---

    /// Classify the surface; on success show the result and prepend it to history.
    pub async fn predict(&mut self) -> Notice {
        match self.predictor.submit(&self.surface).await {
            Ok(result) => {
                self.last_result = Some(result);
                self.history.insert_local(HistoryEntry::from(result));
                let [digit, confidence] = render::result_lines(&result);
                Notice::success(format!("{digit} ({confidence})"))
            }
            Err(ClientError::EmptySurface) => Notice::warning(EMPTY_SURFACE_MESSAGE),
            Err(ClientError::Rejected { message }) => Notice::warning(message),
            Err(e) => Notice::error(format!("Prediction failed: {e}")),
        }
    }

    /// Replace the history view with the server's.
    pub async fn load_history(&mut self) -> Notice {
        if let Err(e) = self.history.load(self.api.as_ref()).await {
            return Notice::error(format!("Failed to load history: {e}"));
        }
        if self.history.is_placeholder() {
            Notice::info(render::PLACEHOLDER_TEXT)
        } else {
            Notice::info(format!("Loaded {} predictions", self.history.entries().len()))
        }
    }

    /// Destructive server-side clear.
    pub async fn clear_history(&mut self) -> Notice {
        self.history.clear(self.api.as_ref()).await
    }

    /// Refresh the analytics aggregates. A failure keeps the previous summary.
    pub async fn load_analytics(&mut self) -> Notice {
        match self.aggregates.summary().await {
            Ok(summary) => {
                let total = summary.total_predictions;
                self.summary = Some(summary);
                Notice::info(format!("Total Predictions: {total}"))
            }
            Err(e) => {
                tracing::warn!(error = %e, "analytics refresh failed");
                Notice::error(format!("Failed to load analytics: {e}"))
            }
        }
    }
}
