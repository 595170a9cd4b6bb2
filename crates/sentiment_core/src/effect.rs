use std::time::Duration;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce timer, replacing (and thereby cancelling) any
    /// previous one. `generation` comes back in `Msg::DebounceElapsed`.
    ArmDebounce { generation: u64, delay: Duration },
    /// Drop the pending debounce timer without re-arming.
    CancelDebounce,
    /// Send the text to the classifier service.
    Classify { request_id: RequestId, text: String },
    /// Arm the one-shot typing timer, replacing any previous one. The
    /// chain stops on its own: a tick that completes the reveal does not
    /// re-arm.
    ArmTypingTick { interval: Duration },
}
