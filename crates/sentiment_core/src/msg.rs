use crate::{RequestId, SentimentReport};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// App finished constructing; install the placeholder target.
    Started,
    /// User edited the input box (full current value).
    InputChanged(String),
    /// User clicked the clear button.
    ClearClicked,
    /// The debounce timer armed for `generation` fired.
    DebounceElapsed { generation: u64 },
    /// The engine resolved a classification request.
    ClassifyDone {
        request_id: RequestId,
        outcome: ClassifyOutcome,
    },
    /// Reveal the next character of the output.
    TypingTick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Outcome of one classification request, already collapsed for the core:
/// every engine failure kind clears the report the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyOutcome {
    Success(SentimentReport),
    Failed,
}
