use std::sync::mpsc;
use std::thread;

use client_logging::{client_info, client_warn};
use sentiment_core::{ClassifyOutcome, Effect, Msg, SentimentReport};
use sentiment_engine::{Classification, EngineEvent, EngineHandle};

use super::timer::TimerHandle;

/// Executes core effects: owns the two one-shot timers and hands classify
/// requests to the engine. Dropping the runner cancels any armed timer.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    ctx: egui::Context,
    debounce: Option<TimerHandle>,
    typing: Option<TimerHandle>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        engine_events: mpsc::Receiver<EngineEvent>,
        msg_tx: mpsc::Sender<Msg>,
        ctx: egui::Context,
    ) -> Self {
        spawn_event_pump(engine_events, msg_tx.clone(), ctx.clone());
        Self {
            engine,
            msg_tx,
            ctx,
            debounce: None,
            typing: None,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ArmDebounce { generation, delay } => {
                    let msg_tx = self.msg_tx.clone();
                    let ctx = self.ctx.clone();
                    // Assignment drops (and thereby cancels) the old timer.
                    self.debounce = Some(TimerHandle::arm(delay, move || {
                        let _ = msg_tx.send(Msg::DebounceElapsed { generation });
                        ctx.request_repaint();
                    }));
                }
                Effect::CancelDebounce => {
                    if let Some(timer) = self.debounce.take() {
                        timer.cancel();
                    }
                }
                Effect::Classify { request_id, text } => {
                    client_info!(
                        "Classify request {} ({} chars)",
                        request_id,
                        text.chars().count()
                    );
                    self.engine.classify(request_id, text);
                }
                Effect::ArmTypingTick { interval } => {
                    let msg_tx = self.msg_tx.clone();
                    let ctx = self.ctx.clone();
                    self.typing = Some(TimerHandle::arm(interval, move || {
                        let _ = msg_tx.send(Msg::TypingTick);
                        ctx.request_repaint();
                    }));
                }
            }
        }
    }
}

/// Forwards engine completions into the message channel, collapsing every
/// failure kind into `ClassifyOutcome::Failed`.
fn spawn_event_pump(
    engine_events: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        while let Ok(event) = engine_events.recv() {
            let EngineEvent::Classified { request_id, result } = event;
            let outcome = match result {
                Ok(classification) => ClassifyOutcome::Success(map_classification(classification)),
                Err(err) => {
                    client_warn!(
                        "Classification {} failed: {}: {}",
                        request_id,
                        err.kind,
                        err.message
                    );
                    ClassifyOutcome::Failed
                }
            };
            let _ = msg_tx.send(Msg::ClassifyDone {
                request_id,
                outcome,
            });
            ctx.request_repaint();
        }
    });
}

fn map_classification(classification: Classification) -> SentimentReport {
    SentimentReport {
        label: classification.label,
        negative: classification.negative,
        negative_log: classification.negative_log,
        positive: classification.positive,
        positive_log: classification.positive_log,
        prediction: classification.prediction,
        text: classification.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_maps_field_for_field() {
        let classification = Classification {
            label: "Negative".to_string(),
            negative: 0.75,
            negative_log: -0.29,
            positive: 0.25,
            positive_log: -1.39,
            prediction: "Negative".to_string(),
            text: "what a mess".to_string(),
        };

        let report = map_classification(classification);

        assert_eq!(report.label, "Negative");
        assert_eq!(report.negative, 0.75);
        assert_eq!(report.negative_log, -0.29);
        assert_eq!(report.positive, 0.25);
        assert_eq!(report.positive_log, -1.39);
        assert_eq!(report.prediction, "Negative");
        assert_eq!(report.text, "what a mess");
    }
}
