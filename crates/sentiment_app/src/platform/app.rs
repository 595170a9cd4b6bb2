use std::sync::mpsc;

use sentiment_core::{update, AppState, Msg};
use sentiment_engine::{EngineEvent, EngineHandle};

use super::effects::EffectRunner;
use super::ui::{render, style, UiEvent};

/// The eframe shell around the pure state machine: widget events and
/// background messages both go through `dispatch`, and the resulting effects
/// are handed to the runner.
pub struct SentimentApp {
    state: AppState,
    /// Backing buffer for the text edit; mirrored into `state` on change.
    input_buffer: String,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
    visuals_set: bool,
}

impl SentimentApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        engine: EngineHandle,
        engine_events: mpsc::Receiver<EngineEvent>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(engine, engine_events, msg_tx, cc.egui_ctx.clone());
        let mut app = Self {
            state: AppState::new(),
            input_buffer: String::new(),
            msg_rx,
            effects,
            visuals_set: false,
        };
        app.dispatch(Msg::Started);
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }

    fn drain_background_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.drain_background_messages();

        let output = self.state.view().output;
        let mut event = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            event = render::render(ui, &mut self.input_buffer, &output);
        });

        match event {
            Some(UiEvent::InputEdited) => {
                let text = self.input_buffer.clone();
                self.dispatch(Msg::InputChanged(text));
            }
            Some(UiEvent::ClearClicked) => {
                self.input_buffer.clear();
                self.dispatch(Msg::ClearClicked);
            }
            None => {}
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
    }
}
