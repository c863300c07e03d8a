//! Cancellable delayed tasks and debouncing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page enhancer schedules two kinds of work: the debounced search and
//! the copy-button label revert. Both go through [`Timer`], whose handle
//! cancels the task when dropped. The browser implementation wraps
//! `gloo_timers::callback::Timeout`; [`ManualTimer`] is a virtual clock for
//! driving schedules deterministically.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A source of delayed one-shot tasks.
///
/// Dropping the returned handle before the delay elapses cancels the task.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Runs only the last of a burst of calls, once `delay_ms` of quiet passed.
pub struct Debouncer<T: Timer> {
    timer: T,
    delay_ms: u32,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    /// Cancel whatever is pending and schedule `task` afresh.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.timer.schedule(self.delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        // Drop outside the borrow: a handle's drop may touch the timer.
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

struct Scheduled {
    id: u64,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

/// Virtual-clock [`Timer`]. Nothing runs until [`ManualTimer::advance`].
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<Clock>>,
}

/// Handle returned by [`ManualTimer`]; dropping it unschedules the task.
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.queue.retain(|scheduled| scheduled.id != self.id);
            }
        }
    }
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Tasks scheduled and not yet run or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward, running every task that falls due in order.
    /// Tasks scheduled by running tasks are honoured if they fall inside the
    /// window too.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<Box<dyn FnOnce()>> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due_ms <= target)
            .min_by_key(|(_, scheduled)| (scheduled.due_ms, scheduled.id))
            .map(|(index, _)| index)?;
        let scheduled = clock.queue.remove(index);
        clock.now_ms = scheduled.due_ms;
        Some(scheduled.task)
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.queue.push(Scheduled { id, due_ms, task });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}
