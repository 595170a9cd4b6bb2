use std::time::Duration;

use crate::msg::ClassifyOutcome;
use crate::{AppState, Effect, Msg};

/// How long the input must stay unchanged before it is sent for
/// classification.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(3000);

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let mut effects = Vec::new();
            push_retarget(&mut state, &mut effects);
            effects
        }
        Msg::InputChanged(text) => apply_input(&mut state, text),
        Msg::ClearClicked => apply_input(&mut state, String::new()),
        Msg::DebounceElapsed { generation } => {
            if state.take_debounce(generation) {
                let request_id = state.issue_request();
                vec![Effect::Classify {
                    request_id,
                    text: state.input().to_owned(),
                }]
            } else {
                // A newer keystroke superseded this timer.
                Vec::new()
            }
        }
        Msg::ClassifyDone {
            request_id,
            outcome,
        } => {
            if !state.accept_response(request_id) {
                return (state, Vec::new());
            }
            match outcome {
                ClassifyOutcome::Success(report) => state.set_report(report),
                ClassifyOutcome::Failed => state.clear_report(),
            }
            let mut effects = Vec::new();
            push_retarget(&mut state, &mut effects);
            effects
        }
        Msg::TypingTick => match state.advance_typewriter() {
            Some(interval) => vec![Effect::ArmTypingTick { interval }],
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Shared by `InputChanged` and `ClearClicked`: installs the new text,
/// re-arms or cancels the debounce, and restarts the output animation when
/// the target changed.
fn apply_input(state: &mut AppState, text: String) -> Vec<Effect> {
    if text == state.input() {
        return Vec::new();
    }
    let mut effects = Vec::new();
    if text.is_empty() {
        state.clear_report();
        state.drop_pending_classification();
        effects.push(Effect::CancelDebounce);
    } else {
        let generation = state.arm_debounce();
        effects.push(Effect::ArmDebounce {
            generation,
            delay: DEBOUNCE_DELAY,
        });
    }
    state.set_input(text);
    push_retarget(state, &mut effects);
    effects
}

fn push_retarget(state: &mut AppState, effects: &mut Vec<Effect>) {
    if let Some(interval) = state.retarget_output() {
        effects.push(Effect::ArmTypingTick { interval });
    }
}
