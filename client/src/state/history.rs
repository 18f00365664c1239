//! Prediction history as shown to the user.
//!
//! DESIGN
//! ======
//! The server owns the history. The store mirrors it on load, prepends
//! optimistically after each successful prediction (the server already wrote
//! the row while answering `/predict`), and resets to the placeholder after a
//! confirmed clear. Local inserts are never re-sorted or deduplicated against
//! a later load; a load simply replaces the view.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::Serialize;

use crate::error::ClientError;
use crate::net::api::DigitApi;
use crate::net::types::PredictionResult;
use crate::notice::Notice;

/// One row of history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub digit: u8,
    pub confidence: f64,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(digit: u8, confidence: f64) -> Self {
        Self { digit, confidence }
    }
}

impl From<PredictionResult> for HistoryEntry {
    fn from(result: PredictionResult) -> Self {
        Self::new(result.digit, result.confidence)
    }
}

/// What the history panel displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HistoryView {
    /// "No predictions yet".
    #[default]
    Placeholder,
    /// Most recent first. Never empty.
    Entries(Vec<HistoryEntry>),
}

impl HistoryView {
    fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        if entries.is_empty() { Self::Placeholder } else { Self::Entries(entries) }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HistoryStore {
    view: HistoryView,
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &HistoryView {
        &self.view
    }

    /// Displayed entries; empty while the placeholder is shown.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        match &self.view {
            HistoryView::Placeholder => &[],
            HistoryView::Entries(entries) => entries,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.view == HistoryView::Placeholder
    }

    /// Replace the displayed sequence wholesale. An empty sequence shows the placeholder.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) {
        self.view = HistoryView::from_entries(entries);
    }

    /// Fetch the server-held history and replace the view with it.
    ///
    /// On failure the view is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the transport-class [`ClientError`] from the API.
    pub async fn load<A: DigitApi + ?Sized>(&mut self, api: &A) -> Result<&HistoryView, ClientError> {
        match api.history().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "history loaded");
                self.replace(entries);
                Ok(&self.view)
            }
            Err(e) => {
                tracing::warn!(error = %e, "history load failed");
                Err(e)
            }
        }
    }

    /// Prepend a freshly predicted entry without asking the server.
    pub fn insert_local(&mut self, entry: HistoryEntry) {
        if let HistoryView::Entries(entries) = &mut self.view {
            entries.insert(0, entry);
        } else {
            self.view = HistoryView::Entries(vec![entry]);
        }
    }

    /// Delete the server-held history. Irreversible.
    ///
    /// Success shows the placeholder; failure leaves the view untouched.
    pub async fn clear<A: DigitApi + ?Sized>(&mut self, api: &A) -> Notice {
        match api.clear_history().await {
            Ok(()) => {
                self.view = HistoryView::Placeholder;
                tracing::info!("history cleared");
                Notice::success("History cleared!")
            }
            Err(e) => {
                tracing::warn!(error = %e, "history clear failed");
                Notice::error("Failed to clear history")
            }
        }
    }
}
