use std::time::Duration;

use crate::report::SentimentReport;
use crate::typewriter::Typewriter;
use crate::view_model::{select_target, AppViewModel};

/// Identifies one classification request. Ids are issued in strictly
/// increasing order, so a response can be checked against the newest
/// outstanding request.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    report: Option<SentimentReport>,
    /// Generation of the armed debounce timer, if one is pending.
    debounce: Option<u64>,
    generation_counter: u64,
    /// Id of the classification we are waiting on, if any.
    awaiting: Option<RequestId>,
    request_counter: u64,
    typewriter: Typewriter,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            output: self.typewriter.displayed().to_string(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a repaint is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn report(&self) -> Option<&SentimentReport> {
        self.report.as_ref()
    }

    /// The full text the output panel is revealing towards.
    pub fn output_target(&self) -> &str {
        self.typewriter.target()
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.dirty = true;
    }

    pub(crate) fn set_report(&mut self, report: SentimentReport) {
        self.report = Some(report);
    }

    pub(crate) fn clear_report(&mut self) {
        self.report = None;
    }

    /// Arms a fresh debounce window, superseding any earlier one.
    pub(crate) fn arm_debounce(&mut self) -> u64 {
        self.generation_counter += 1;
        self.debounce = Some(self.generation_counter);
        self.generation_counter
    }

    /// Consumes the pending debounce if `generation` is the one armed last.
    /// Stale generations leave the state untouched.
    pub(crate) fn take_debounce(&mut self, generation: u64) -> bool {
        if self.debounce == Some(generation) {
            self.debounce = None;
            true
        } else {
            false
        }
    }

    /// Forgets the pending debounce and any in-flight request, so a late
    /// timer fire or response is ignored.
    pub(crate) fn drop_pending_classification(&mut self) {
        self.debounce = None;
        self.awaiting = None;
    }

    /// Issues the next request id and records it as outstanding.
    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.request_counter += 1;
        self.awaiting = Some(self.request_counter);
        self.request_counter
    }

    /// Accepts a response only for the request issued last. Returns whether
    /// the caller should apply the outcome.
    pub(crate) fn accept_response(&mut self, request_id: RequestId) -> bool {
        if self.awaiting == Some(request_id) {
            self.awaiting = None;
            true
        } else {
            false
        }
    }

    /// Re-derives the output target from input and report. Returns the tick
    /// interval when a new animation starts, `None` when the target is
    /// unchanged.
    pub(crate) fn retarget_output(&mut self) -> Option<Duration> {
        let target = select_target(&self.input, self.report.as_ref());
        if self.typewriter.retarget(target.text, target.interval) {
            self.dirty = true;
            Some(target.interval)
        } else {
            None
        }
    }

    /// Reveals one more character. Returns the interval to re-arm with, or
    /// `None` once the target is fully revealed.
    pub(crate) fn advance_typewriter(&mut self) -> Option<Duration> {
        if self.typewriter.is_idle() {
            return None;
        }
        self.typewriter.advance();
        self.dirty = true;
        if self.typewriter.is_idle() {
            None
        } else {
            Some(self.typewriter.interval())
        }
    }
}
