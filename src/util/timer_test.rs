#![cfg(not(feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;

use enhance::schedule::Debouncer;

use super::*;

#[test]
fn native_timer_never_runs_tasks() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    let handle = BrowserTimer.schedule(0, Box::new(move || flag.set(true)));
    drop(handle);
    assert!(!ran.get());
}

#[test]
fn debouncer_accepts_browser_timer() {
    let debouncer = Debouncer::new(BrowserTimer, 300);
    debouncer.call(|| {});
    debouncer.cancel();
    assert_eq!(debouncer.delay_ms(), 300);
}
