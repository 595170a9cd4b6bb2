use std::sync::Once;

use sentiment_core::{
    update, AppState, ClassifyOutcome, Effect, Msg, SentimentReport, DEBOUNCE_DELAY,
    PLACEHOLDER_MESSAGE, TYPING_INTERVAL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn type_text(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::InputChanged(text.to_string()))
}

fn sample_report(text: &str) -> SentimentReport {
    SentimentReport {
        label: "Positive".to_string(),
        negative: 0.1,
        negative_log: -2.3,
        positive: 0.9,
        positive_log: -0.1,
        prediction: "Positive".to_string(),
        text: text.to_string(),
    }
}

/// Types `text`, lets its debounce fire, and delivers a successful result.
fn classified(state: AppState, text: &str, request_id: u64, generation: u64) -> AppState {
    let (state, _) = type_text(state, text);
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert_eq!(
        effects,
        vec![Effect::Classify {
            request_id,
            text: text.to_string(),
        }]
    );
    let (state, _) = update(
        state,
        Msg::ClassifyDone {
            request_id,
            outcome: ClassifyOutcome::Success(sample_report(text)),
        },
    );
    state
}

#[test]
fn typed_input_arms_debounce_and_echoes() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = type_text(state, "what a day");

    assert_eq!(
        effects,
        vec![
            Effect::ArmDebounce {
                generation: 1,
                delay: DEBOUNCE_DELAY,
            },
            Effect::ArmTypingTick {
                interval: TYPING_INTERVAL,
            },
        ]
    );
    assert_eq!(state.input(), "what a day");
    assert_eq!(state.output_target(), "what a day");
    assert!(state.consume_dirty());
}

#[test]
fn rapid_keystrokes_supersede_earlier_timers() {
    init_logging();
    let state = AppState::new();
    let (state, _) = type_text(state, "a");
    let (state, _) = type_text(state, "ab");
    let (state, effects) = type_text(state, "abc");
    assert!(effects.contains(&Effect::ArmDebounce {
        generation: 3,
        delay: DEBOUNCE_DELAY,
    }));

    // Timers one and two were replaced; if they fire anyway, nothing happens.
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: 1 });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: 2 });
    assert!(effects.is_empty());

    let (_state, effects) = update(state, Msg::DebounceElapsed { generation: 3 });
    assert_eq!(
        effects,
        vec![Effect::Classify {
            request_id: 1,
            text: "abc".to_string(),
        }]
    );
}

#[test]
fn debounce_fires_once_per_arm() {
    init_logging();
    let state = AppState::new();
    let (state, _) = type_text(state, "abc");

    let (state, effects) = update(state, Msg::DebounceElapsed { generation: 1 });
    assert_eq!(effects.len(), 1);

    // A duplicate fire for the same generation is ignored.
    let (_state, effects) = update(state, Msg::DebounceElapsed { generation: 1 });
    assert!(effects.is_empty());
}

#[test]
fn clear_cancels_pending_work_and_restores_placeholder() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::Started);
    let (state, _) = type_text(state, "gloomy");

    let (state, effects) = update(state, Msg::ClearClicked);

    assert_eq!(
        effects,
        vec![
            Effect::CancelDebounce,
            Effect::ArmTypingTick {
                interval: TYPING_INTERVAL,
            },
        ]
    );
    assert_eq!(state.input(), "");
    assert_eq!(state.output_target(), PLACEHOLDER_MESSAGE);

    // The cancelled timer may still fire; it must not classify.
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: 1 });
    assert!(effects.is_empty());
    assert_eq!(state.output_target(), PLACEHOLDER_MESSAGE);
}

#[test]
fn clear_and_emptied_input_are_equivalent() {
    init_logging();
    let (typed, _) = type_text(AppState::new(), "same path");

    let (via_clear, clear_effects) = update(typed.clone(), Msg::ClearClicked);
    let (via_empty, empty_effects) = update(typed, Msg::InputChanged(String::new()));

    assert_eq!(via_clear, via_empty);
    assert_eq!(clear_effects, empty_effects);
}

#[test]
fn late_result_after_clear_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _) = type_text(state, "dreadful");
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: 1 });
    assert_eq!(effects.len(), 1);

    let (mut state, _) = update(state, Msg::ClearClicked);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::ClassifyDone {
            request_id: 1,
            outcome: ClassifyOutcome::Success(sample_report("dreadful")),
        },
    );

    assert!(effects.is_empty());
    assert!(state.report().is_none());
    assert!(!state.consume_dirty());
    assert_eq!(state.output_target(), PLACEHOLDER_MESSAGE);
}

#[test]
fn unchanged_input_is_a_noop() {
    init_logging();
    let (mut state, _) = type_text(AppState::new(), "steady");
    assert!(state.consume_dirty());

    let (mut next, effects) = type_text(state, "steady");

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn report_persists_across_keystrokes() {
    init_logging();
    let state = classified(AppState::new(), "fine day", 1, 1);
    assert!(state.report().is_some());

    let (state, effects) = type_text(state, "fine days");

    // The old summary stays on screen until the new result lands, so only
    // the debounce is re-armed.
    assert!(state.report().is_some());
    assert_eq!(
        effects,
        vec![Effect::ArmDebounce {
            generation: 2,
            delay: DEBOUNCE_DELAY,
        }]
    );
}
