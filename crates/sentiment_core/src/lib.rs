//! Sentiment core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod report;
mod state;
mod typewriter;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{ClassifyOutcome, Msg};
pub use report::SentimentReport;
pub use state::{AppState, RequestId};
pub use typewriter::Typewriter;
pub use update::{update, DEBOUNCE_DELAY};
pub use view_model::{
    report_summary, select_target, AppViewModel, TargetText, PLACEHOLDER_MESSAGE,
    REPORT_TYPING_INTERVAL, TYPING_INTERVAL,
};
