use gloo_timers::callback::{Interval, Timeout};

/// Source of repeating and one-shot timers.
///
/// Handles cancel their timer when dropped, so owners release timers by
/// dropping (or `take()`-ing) the handle.
pub trait Scheduler {
    type Handle: 'static;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers backed by `setInterval` / `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlooScheduler;

/// Keeps a browser timer armed; dropping it cancels the timer.
pub enum TimerHandle {
    Interval { _interval: Interval },
    Timeout { _timeout: Timeout },
}

impl Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn every(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Interval {
            _interval: Interval::new(period_ms, move || task()),
        }
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Timeout {
            _timeout: Timeout::new(delay_ms, task),
        }
    }
}

#[cfg(test)]
pub mod manual {
    //! Deterministic scheduler for tests: time only moves on `advance`.

    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum Task {
        Repeat(Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Pending {
        due: u64,
        seq: u64,
        period: u32,
        task: Task,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Inner {
        now: u64,
        seq: u64,
        queue: Vec<Pending>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        fn push(&self, delay: u32, period: u32, task: Task) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut inner = self.inner.borrow_mut();
            inner.seq += 1;
            let pending = Pending {
                due: inner.now + u64::from(delay),
                seq: inner.seq,
                period,
                task,
                cancelled: cancelled.clone(),
            };
            inner.queue.push(pending);
            ManualHandle { cancelled }
        }

        /// Number of timers that are still armed.
        pub fn pending(&self) -> usize {
            self.inner
                .borrow()
                .queue
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        /// Moves the clock forward, firing every timer that comes due in order.
        pub fn advance(&self, millis: u64) {
            let target = self.inner.borrow().now + millis;
            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    inner.queue.retain(|p| !p.cancelled.get());
                    let position = inner
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    match position {
                        Some(i) => {
                            let pending = inner.queue.remove(i);
                            inner.now = pending.due;
                            pending
                        }
                        None => {
                            inner.now = target;
                            break;
                        }
                    }
                };

                match next.task {
                    Task::Once(task) => task(),
                    Task::Repeat(mut task) => {
                        task();
                        if !next.cancelled.get() {
                            let mut inner = self.inner.borrow_mut();
                            inner.seq += 1;
                            let seq = inner.seq;
                            inner.queue.push(Pending {
                                due: next.due + u64::from(next.period.max(1)),
                                seq,
                                period: next.period,
                                task: Task::Repeat(task),
                                cancelled: next.cancelled,
                            });
                        }
                    }
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> ManualHandle {
            self.push(period_ms, period_ms, Task::Repeat(task))
        }

        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            self.push(delay_ms, 0, Task::Once(task))
        }
    }
}
