//! Scripted [`DigitApi`] for unit tests.
//!
//! Replies are queued per operation and consumed in order; an operation with
//! no queued reply fails with a transport error. Every call is recorded so
//! tests can assert which requests were (not) made.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::net::api::DigitApi;
use crate::net::types::{DigitCount, PredictionResult};
use crate::state::history::HistoryEntry;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Predict(Vec<u8>),
    History,
    ClearHistory,
    Distribution,
    AvgConfidence,
    Total,
}

#[derive(Default)]
pub struct MockApi {
    predict: Mutex<VecDeque<Result<PredictionResult, ClientError>>>,
    history: Mutex<VecDeque<Result<Vec<HistoryEntry>, ClientError>>>,
    clear: Mutex<VecDeque<Result<(), ClientError>>>,
    distribution: Mutex<VecDeque<Result<Vec<DigitCount>, ClientError>>>,
    avg_confidence: Mutex<VecDeque<Result<Option<f64>, ClientError>>>,
    total: Mutex<VecDeque<Result<u64, ClientError>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(self, reply: Result<PredictionResult, ClientError>) -> Self {
        self.predict.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_history(self, reply: Result<Vec<HistoryEntry>, ClientError>) -> Self {
        self.history.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_clear(self, reply: Result<(), ClientError>) -> Self {
        self.clear.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_analytics(self, distribution: Vec<DigitCount>, avg: Option<f64>, total: u64) -> Self {
        self.distribution.lock().unwrap().push_back(Ok(distribution));
        self.avg_confidence.lock().unwrap().push_back(Ok(avg));
        self.total.lock().unwrap().push_back(Ok(total));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn predict_calls(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Predict(_))).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, ClientError>>>) -> Result<T, ClientError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ClientError::Transport("no scripted reply".into())))
}

pub fn server_error() -> ClientError {
    ClientError::Status { status: 500, body: "Internal Server Error".into() }
}

#[async_trait]
impl DigitApi for MockApi {
    async fn predict(&self, png: Vec<u8>) -> Result<PredictionResult, ClientError> {
        self.record(Call::Predict(png));
        next(&self.predict)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        self.record(Call::History);
        next(&self.history)
    }

    async fn clear_history(&self) -> Result<(), ClientError> {
        self.record(Call::ClearHistory);
        next(&self.clear)
    }

    async fn digit_distribution(&self) -> Result<Vec<DigitCount>, ClientError> {
        self.record(Call::Distribution);
        next(&self.distribution)
    }

    async fn avg_confidence(&self) -> Result<Option<f64>, ClientError> {
        self.record(Call::AvgConfidence);
        next(&self.avg_confidence)
    }

    async fn total_predictions(&self) -> Result<u64, ClientError> {
        self.record(Call::Total);
        next(&self.total)
    }
}
