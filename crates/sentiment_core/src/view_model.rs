use std::time::Duration;

use crate::SentimentReport;

/// Typed out while the input box is empty.
pub const PLACEHOLDER_MESSAGE: &str =
    "Please enter text, so I can perform sentiment analysis.";

/// Reveal interval for the placeholder and for raw input.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(100);

/// Reveal interval for a formatted classification summary.
pub const REPORT_TYPING_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    /// The revealed prefix of the current output target.
    pub output: String,
    pub dirty: bool,
}

/// What the output panel should currently be typing out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetText {
    pub text: String,
    pub interval: Duration,
}

/// Pick the output target: the placeholder while the input is empty, the
/// formatted summary once a report exists, the raw input otherwise.
pub fn select_target(input: &str, report: Option<&SentimentReport>) -> TargetText {
    if input.is_empty() {
        return TargetText {
            text: PLACEHOLDER_MESSAGE.to_string(),
            interval: TYPING_INTERVAL,
        };
    }
    match report {
        Some(report) => TargetText {
            text: report_summary(report),
            interval: REPORT_TYPING_INTERVAL,
        },
        None => TargetText {
            text: input.to_string(),
            interval: TYPING_INTERVAL,
        },
    }
}

/// Fixed-order, line-per-field summary of a report.
///
/// Keep the labels and field order stable; probabilities print with f64's
/// shortest round-trip formatting.
pub fn report_summary(report: &SentimentReport) -> String {
    format!(
        "Sentiment: {}\nP(Negative): {}\nLog P(Negative): {}\nP(Positive): {}\nLog P(Positive): {}\nPrediction: {}\nText: {}",
        report.label,
        report.negative,
        report.negative_log,
        report.positive,
        report.positive_log,
        report.prediction,
        report.text,
    )
}
