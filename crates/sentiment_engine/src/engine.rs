use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_debug;

use crate::classify::{Classifier, ClassifySettings, ReqwestClassifier};
use crate::{ClassifyError, EngineEvent, RequestId};

enum EngineCommand {
    Classify {
        request_id: RequestId,
        text: String,
    },
}

/// Cloneable handle to the background classification worker.
///
/// Commands run on a tokio runtime owned by a dedicated thread; completions
/// arrive on the receiver returned by [`EngineHandle::new`] in whatever order
/// the service answers.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Fails fast when the configured base URL cannot be parsed.
    pub fn new(
        settings: &ClassifySettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), ClassifyError> {
        let classifier = Arc::new(ReqwestClassifier::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let classifier = classifier.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(classifier.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    /// Sends `text` off for classification. The eventual event carries
    /// `request_id` back so the caller can match it up.
    pub fn classify(&self, request_id: RequestId, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Classify {
            request_id,
            text: text.into(),
        });
    }
}

async fn handle_command(
    classifier: &dyn Classifier,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Classify { request_id, text } => {
            client_debug!("Dispatching classify request {}", request_id);
            let result = classifier.classify(&text).await;
            let _ = event_tx.send(EngineEvent::Classified { request_id, result });
        }
    }
}
