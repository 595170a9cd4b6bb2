use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// A one-shot timer. `arm` schedules `on_fire` after `delay`; cancelling, or
/// just dropping the handle, wakes the timer thread without firing.
pub struct TimerHandle {
    cancel_tx: mpsc::Sender<()>,
}

impl TimerHandle {
    pub fn arm(delay: Duration, on_fire: impl FnOnce() + Send + 'static) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel();
        thread::spawn(move || {
            // Timeout means nobody cancelled us; Disconnected means the
            // handle was dropped.
            if let Err(mpsc::RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                on_fire();
            }
        });
        Self { cancel_tx }
    }

    pub fn cancel(self) {
        let _ = self.cancel_tx.send(());
    }
}
