//! Sentiment engine: HTTP classification and effect execution.
mod classify;
mod engine;
mod types;

pub use classify::{Classifier, ClassifySettings, ReqwestClassifier, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use types::{Classification, ClassifyError, EngineEvent, FailureKind, RequestId};
