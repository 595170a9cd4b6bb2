use std::time::Duration;

use crate::TYPING_INTERVAL;

/// Character-by-character reveal of a target string.
///
/// The displayed text is always a prefix of the target on a char boundary;
/// one `advance` reveals exactly one more character. The animation is idle
/// once every character is revealed and stays idle until retargeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    revealed: usize,
    interval: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Typewriter {
    pub fn new() -> Self {
        Self {
            target: String::new(),
            revealed: 0,
            interval: TYPING_INTERVAL,
        }
    }

    /// Install a new target and reset the reveal to zero.
    ///
    /// Returns `false` (leaving the animation untouched) when the target is
    /// the same string, so an unchanged selection never restarts a running
    /// reveal.
    pub fn retarget(&mut self, target: String, interval: Duration) -> bool {
        if target == self.target {
            return false;
        }
        self.target = target;
        self.revealed = 0;
        self.interval = interval;
        true
    }

    /// Reveal the next character, if any remain.
    pub fn advance(&mut self) {
        if self.revealed < self.target.chars().count() {
            self.revealed += 1;
        }
    }

    /// The revealed prefix of the target.
    pub fn displayed(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.revealed)
            .map(|(idx, _)| idx)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True once every character of the target is revealed.
    pub fn is_idle(&self) -> bool {
        self.revealed >= self.target.chars().count()
    }
}
