/// A classification result as the rest of the app consumes it.
///
/// Field names are ours; the service's wire labels are mapped away at the
/// HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub label: String,
    pub negative: f64,
    pub negative_log: f64,
    pub positive: f64,
    pub positive_log: f64,
    pub prediction: String,
    /// Echo of the text the service classified.
    pub text: String,
}
