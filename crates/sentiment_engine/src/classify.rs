use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::{Classification, ClassifyError, FailureKind};

/// Where the service lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://khurdhulaharshavardhan.pythonanywhere.com";

#[derive(Debug, Clone)]
pub struct ClassifySettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClassifySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClassifier {
    endpoint: url::Url,
    client: reqwest::Client,
}

impl ReqwestClassifier {
    pub fn new(settings: &ClassifySettings) -> Result<Self, ClassifyError> {
        let base = url::Url::parse(&settings.base_url)
            .map_err(|err| ClassifyError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
        let endpoint = base
            .join("/sentiment")
            .map_err(|err| ClassifyError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClassifyError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait::async_trait]
impl Classifier for ReqwestClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let wire: SentimentResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                ClassifyError::new(FailureKind::InvalidBody, err.to_string())
            } else {
                map_reqwest_error(err)
            }
        })?;

        Ok(wire.into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClassifyError {
    if err.is_timeout() {
        return ClassifyError::new(FailureKind::Timeout, err.to_string());
    }
    ClassifyError::new(FailureKind::Network, err.to_string())
}

/// The response body exactly as the service labels it.
#[derive(Debug, Deserialize)]
struct SentimentResponse {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "Negative Class")]
    negative: f64,
    #[serde(rename = "Negative Class Log")]
    negative_log: f64,
    #[serde(rename = "Positive Class")]
    positive: f64,
    #[serde(rename = "Positive Class Log")]
    positive_log: f64,
    #[serde(rename = "Prediction")]
    prediction: String,
    #[serde(rename = "Text")]
    text: String,
}

impl From<SentimentResponse> for Classification {
    fn from(wire: SentimentResponse) -> Self {
        Self {
            label: wire.label,
            negative: wire.negative,
            negative_log: wire.negative_log,
            positive: wire.positive,
            positive_log: wire.positive_log,
            prediction: wire.prediction,
            text: wire.text,
        }
    }
}
