//! `setTimeout`-backed [`Timer`].
//!
//! Handles wrap `gloo_timers::callback::Timeout`, which clears the timeout
//! when dropped, so superseding a handle cancels its task.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use enhance::schedule::Timer;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

/// Pending browser timeout; dropping it cancels the task.
pub struct TimeoutHandle {
    #[cfg(feature = "csr")]
    _timeout: gloo_timers::callback::Timeout,
}

impl Timer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimeoutHandle {
        #[cfg(feature = "csr")]
        {
            TimeoutHandle {
                _timeout: gloo_timers::callback::Timeout::new(delay_ms, task),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser timer; dropping task scheduled in {delay_ms}ms");
            drop(task);
            TimeoutHandle {}
        }
    }
}
