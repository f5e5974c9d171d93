// Countdown driver: ticks a CountdownState once per second on a Scheduler.
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::{ClientError, Result};
use crate::model::CountdownState;
use crate::util::{clog, cwarn};

pub const TICK_MS: i32 = 1000;

pub type TimerId = i32;

/// One-shot timers. The countdown reschedules itself after every tick rather
/// than using a repeating interval, so the cadence is "at least" `TICK_MS`.
pub trait Scheduler {
    fn schedule(&self, delay_ms: i32, task: Box<dyn FnOnce()>) -> Result<TimerId>;
    fn cancel(&self, id: TimerId);
}

/// `window.setTimeout` backed scheduler.
pub struct BrowserScheduler {
    window: web_sys::Window,
}

impl BrowserScheduler {
    pub fn new() -> Result<Self> {
        Ok(Self { window: web_sys::window().ok_or(ClientError::NoWindow)? })
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: i32, task: Box<dyn FnOnce()>) -> Result<TimerId> {
        let cb = Closure::once_into_js(task);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)?;
        Ok(id)
    }

    fn cancel(&self, id: TimerId) {
        self.window.clear_timeout_with_handle(id);
    }
}

struct Inner {
    state: Cell<CountdownState>,
    cancelled: Cell<bool>,
    pending: Cell<Option<TimerId>>,
    scheduler: Rc<dyn Scheduler>,
    on_display: Box<dyn Fn(&str)>,
    on_exhausted: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Running countdown. Cancelling (or dropping) it guarantees no further ticks
/// fire and `on_display` is not called again.
pub struct CountdownHandle {
    inner: Rc<Inner>,
}

/// Start counting down from `initial_minutes`. The first tick runs
/// immediately, later ones every `TICK_MS`. When a minute rolls over the
/// fresh minute's first tick also runs immediately.
pub fn start_countdown(
    scheduler: Rc<dyn Scheduler>,
    initial_minutes: u32,
    on_display: impl Fn(&str) + 'static,
    on_exhausted: impl FnOnce() + 'static,
) -> Result<CountdownHandle> {
    let state = CountdownState::start(initial_minutes)?;
    clog(&format!("countdown: start minutes={}", initial_minutes));
    let inner = Rc::new(Inner {
        state: Cell::new(state),
        cancelled: Cell::new(false),
        pending: Cell::new(None),
        scheduler,
        on_display: Box::new(on_display),
        on_exhausted: RefCell::new(Some(Box::new(on_exhausted))),
    });
    run(&inner);
    Ok(CountdownHandle { inner })
}

fn run(inner: &Rc<Inner>) {
    inner.pending.set(None);
    loop {
        if inner.cancelled.get() {
            return;
        }
        let mut state = inner.state.get();
        let Some(text) = state.tick() else {
            return;
        };
        inner.state.set(state);
        (inner.on_display)(&text);
        // The display callback may have cancelled us.
        if inner.cancelled.get() {
            return;
        }
        if state.is_exhausted() {
            clog("countdown: exhausted");
            if let Some(done) = inner.on_exhausted.borrow_mut().take() {
                done();
            }
            return;
        }
        if state.at_minute_start() {
            continue;
        }
        let weak: Weak<Inner> = Rc::downgrade(inner);
        let task = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                run(&inner);
            }
        });
        match inner.scheduler.schedule(TICK_MS, task) {
            Ok(id) => inner.pending.set(Some(id)),
            Err(e) => cwarn(&format!("countdown: schedule failed: {}", e)),
        }
        return;
    }
}

impl CountdownHandle {
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        if let Some(id) = self.inner.pending.take() {
            self.inner.scheduler.cancel(id);
        }
        clog("countdown: cancelled");
    }

    #[cfg(test)]
    pub fn state(&self) -> CountdownState {
        self.inner.state.get()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.inner.cancelled.get() && !self.inner.state.get().is_exhausted()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Timers fire only when the test says so.
    #[derive(Default)]
    struct ManualScheduler {
        next_id: Cell<TimerId>,
        queue: RefCell<Vec<(TimerId, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        fn fire_next(&self) -> bool {
            let task = {
                let mut q = self.queue.borrow_mut();
                if q.is_empty() {
                    return false;
                }
                q.remove(0).1
            };
            task();
            true
        }

        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, _delay_ms: i32, task: Box<dyn FnOnce()>) -> Result<TimerId> {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.queue.borrow_mut().push((id, task));
            Ok(id)
        }

        fn cancel(&self, id: TimerId) {
            self.queue.borrow_mut().retain(|(i, _)| *i != id);
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |t: &str| sink.borrow_mut().push(t.to_string()))
    }

    #[test]
    fn one_minute_runs_to_exhaustion() {
        let sched = Rc::new(ManualScheduler::default());
        let (log, on_display) = recorder();
        let done = Rc::new(Cell::new(false));
        let done_flag = done.clone();
        let handle = start_countdown(sched.clone(), 1, on_display, move || done_flag.set(true)).unwrap();
        assert_eq!(log.borrow().as_slice(), ["0:59"]);
        for _ in 0..58 {
            assert!(sched.fire_next());
        }
        assert_eq!(log.borrow().last().map(String::as_str), Some("0:01"));
        assert!(sched.fire_next());
        assert_eq!(log.borrow().last().map(String::as_str), Some("0:00"));
        assert!(done.get());
        assert!(!handle.is_running());
        assert_eq!(sched.pending(), 0);
        assert_eq!(log.borrow().len(), 60);
    }

    #[test]
    fn rollover_shows_next_minute_without_waiting() {
        let sched = Rc::new(ManualScheduler::default());
        let (log, on_display) = recorder();
        let handle = start_countdown(sched.clone(), 2, on_display, || ()).unwrap();
        for _ in 0..59 {
            sched.fire_next();
        }
        let shown = log.borrow();
        let n = shown.len();
        assert_eq!(&shown[n - 2..], ["1:00", "0:59"]);
        drop(shown);
        assert_eq!(handle.state(), CountdownState::Running { minutes: 1, seconds: 59 });
        sched.fire_next();
        assert_eq!(log.borrow().last().map(String::as_str), Some("0:58"));
    }

    #[test]
    fn cancel_stops_updates() {
        let sched = Rc::new(ManualScheduler::default());
        let (log, on_display) = recorder();
        let handle = start_countdown(sched.clone(), 3, on_display, || ()).unwrap();
        sched.fire_next();
        handle.cancel();
        assert_eq!(sched.pending(), 0);
        assert!(!sched.fire_next());
        assert_eq!(log.borrow().len(), 2);
        assert!(!handle.is_running());
    }

    #[test]
    fn dropped_handle_ignores_stale_timer() {
        struct Leaky(ManualScheduler);
        impl Scheduler for Leaky {
            fn schedule(&self, d: i32, task: Box<dyn FnOnce()>) -> Result<TimerId> {
                self.0.schedule(d, task)
            }
            // never actually clears; the weak ref must still stop the tick
            fn cancel(&self, _id: TimerId) {}
        }
        let sched = Rc::new(Leaky(ManualScheduler::default()));
        let (log, on_display) = recorder();
        let handle = start_countdown(sched.clone(), 1, on_display, || ()).unwrap();
        drop(handle);
        assert!(sched.0.fire_next());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn cancel_from_display_callback_leaves_no_timer() {
        let sched = Rc::new(ManualScheduler::default());
        let slot: Rc<RefCell<Option<CountdownHandle>>> = Rc::new(RefCell::new(None));
        let shown = Rc::new(Cell::new(0));
        let on_display = {
            let slot = slot.clone();
            let shown = shown.clone();
            move |_: &str| {
                shown.set(shown.get() + 1);
                if shown.get() == 2 {
                    if let Some(h) = slot.borrow().as_ref() {
                        h.cancel();
                    }
                }
            }
        };
        let handle = start_countdown(sched.clone(), 3, on_display, || ()).unwrap();
        *slot.borrow_mut() = Some(handle);
        assert!(sched.fire_next());
        assert_eq!(shown.get(), 2);
        assert_eq!(sched.pending(), 0);
        assert!(!sched.fire_next());
    }

    #[test]
    fn cancel_on_last_tick_skips_exhausted_callback() {
        let sched = Rc::new(ManualScheduler::default());
        let slot: Rc<RefCell<Option<CountdownHandle>>> = Rc::new(RefCell::new(None));
        let done = Rc::new(Cell::new(false));
        let on_display = {
            let slot = slot.clone();
            move |t: &str| {
                if t == "0:00" {
                    if let Some(h) = slot.borrow().as_ref() {
                        h.cancel();
                    }
                }
            }
        };
        let done_flag = done.clone();
        let handle = start_countdown(sched.clone(), 1, on_display, move || done_flag.set(true)).unwrap();
        *slot.borrow_mut() = Some(handle);
        while sched.fire_next() {}
        assert!(!done.get());
    }

    #[test]
    fn zero_minutes_rejected() {
        let sched = Rc::new(ManualScheduler::default());
        let err = start_countdown(sched, 0, |_| (), || ()).err();
        assert!(matches!(err, Some(ClientError::InvalidCountdown)));
    }
}
