//! Stateless text rendering.
//!
//! Pure functions from state to display lines. No state is read from or
//! written to anywhere but the arguments.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::analytics::AnalyticsSummary;
use crate::net::types::PredictionResult;
use crate::state::history::{HistoryEntry, HistoryView};

pub const PLACEHOLDER_TEXT: &str = "No predictions yet";

/// Widest distribution bar, in characters.
pub const BAR_WIDTH: u64 = 40;

/// `0.93` → `"93.00%"`.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

#[must_use]
pub fn result_lines(result: &PredictionResult) -> [String; 2] {
    [format!("Digit: {}", result.digit), format!("Confidence: {}", format_confidence(result.confidence))]
}

#[must_use]
pub fn history_line(entry: &HistoryEntry) -> String {
    format!("Digit: {}  {}", entry.digit, format_confidence(entry.confidence))
}

#[must_use]
pub fn history_lines(view: &HistoryView) -> Vec<String> {
    match view {
        HistoryView::Placeholder => vec![PLACEHOLDER_TEXT.to_owned()],
        HistoryView::Entries(entries) => entries.iter().map(history_line).collect(),
    }
}

#[must_use]
pub fn analytics_lines(summary: &AnalyticsSummary) -> Vec<String> {
    let average = summary
        .average_confidence
        .map_or_else(|| "n/a".to_owned(), format_confidence);
    let mut lines = vec![
        format!("Total Predictions: {}", summary.total_predictions),
        format!("Average Confidence: {average}"),
    ];

    let max = summary.distribution.iter().map(|d| d.count).max().unwrap_or(0);
    for bar in &summary.distribution {
        lines.push(format!("{} | {} {}", bar.digit, "#".repeat(bar_len(bar.count, max)), bar.count));
    }
    lines
}

/// Bar length for `count` relative to `max`, never zero for a non-zero count
/// and never wider than [`BAR_WIDTH`]. Scaled in `u128` so server-sized
/// counts cannot overflow.
#[allow(clippy::cast_possible_truncation)]
fn bar_len(count: u64, max: u64) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = u128::from(count) * u128::from(BAR_WIDTH) / u128::from(max);
    let len = u64::try_from(scaled).map_or(BAR_WIDTH, |len| len.clamp(1, BAR_WIDTH));
    len as usize
}
