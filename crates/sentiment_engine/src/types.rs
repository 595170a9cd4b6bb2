pub type RequestId = u64;

/// A parsed classification as the service reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub negative: f64,
    pub negative_log: f64,
    pub positive: f64,
    pub positive_log: f64,
    pub prediction: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Classified {
        request_id: RequestId,
        result: Result<Classification, ClassifyError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClassifyError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("invalid base url")]
    InvalidBaseUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("malformed response body")]
    InvalidBody,
    #[error("network error")]
    Network,
}
