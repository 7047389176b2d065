use std::rc::Rc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use yew::prelude::*;

use crate::timer::{GlooScheduler, Scheduler};

pub const TICK_PERIOD_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockValue(DateTime<Utc>);

impl ClockValue {
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    pub fn from_utc(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// 24-hour `HH:MM:SS` in the given zone.
    pub fn hms_in(&self, zone: Tz) -> String {
        self.0.with_timezone(&zone).format("%H:%M:%S").to_string()
    }

    /// Zone abbreviation in effect at this instant, e.g. `CET` or `CEST`.
    pub fn zone_abbreviation(&self, zone: Tz) -> String {
        self.0.with_timezone(&zone).format("%Z").to_string()
    }
}

/// Publishes the current time once per second until stopped or dropped.
pub struct ClockTicker<S: Scheduler = GlooScheduler> {
    scheduler: S,
    source: Rc<dyn Fn() -> ClockValue>,
    handle: Option<S::Handle>,
}

impl ClockTicker<GlooScheduler> {
    pub fn new() -> Self {
        Self::with_source(GlooScheduler, ClockValue::now)
    }
}

impl<S: Scheduler> ClockTicker<S> {
    pub fn with_source(scheduler: S, source: impl Fn() -> ClockValue + 'static) -> Self {
        Self {
            scheduler,
            source: Rc::new(source),
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Publishes immediately, then on every tick. A second call while
    /// running keeps the existing timer.
    pub fn start(&mut self, publish: impl Fn(ClockValue) + 'static) {
        if self.is_running() {
            debug!("clock ticker already running");
            return;
        }
        publish((self.source)());
        let source = self.source.clone();
        let handle = self
            .scheduler
            .every(TICK_PERIOD_MS, Box::new(move || publish(source())));
        self.handle = Some(handle);
    }

    /// Returns whether a running timer was cancelled.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

/// Current time, refreshed every second for as long as the calling
/// component is mounted.
#[hook]
pub fn use_clock() -> ClockValue {
    let value = use_state(ClockValue::now);
    {
        let setter = value.setter();
        use_effect_with_deps(
            move |_| {
                let mut ticker = ClockTicker::new();
                ticker.start(move |tick| setter.set(tick));
                move || {
                    ticker.stop();
                }
            },
            (),
        );
    }
    *value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};

    fn counting_source(start: DateTime<Utc>) -> impl Fn() -> ClockValue {
        let calls = Cell::new(0i64);
        move || {
            let n = calls.get();
            calls.set(n + 1);
            ClockValue::from_utc(start + chrono::Duration::seconds(n))
        }
    }

    #[test]
    fn publishes_immediately_then_every_second() {
        let scheduler = ManualScheduler::new();
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let mut ticker = ClockTicker::with_source(scheduler.clone(), counting_source(start));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        ticker.start(move |value| sink.borrow_mut().push(value));
        assert_eq!(seen.borrow().len(), 1);

        scheduler.advance(999);
        assert_eq!(seen.borrow().len(), 1);
        scheduler.advance(2_001);
        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(
            seen.borrow()[3],
            ClockValue::from_utc(start + chrono::Duration::seconds(3))
        );
    }

    #[test]
    fn stop_cancels_timer_and_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let mut ticker = ClockTicker::with_source(scheduler.clone(), ClockValue::now);
        let ticks = Rc::new(Cell::new(0));

        let counter = ticks.clone();
        ticker.start(move |_| counter.set(counter.get() + 1));
        scheduler.advance(1_000);
        assert_eq!(ticks.get(), 2);

        assert!(ticker.stop());
        assert!(!ticker.stop());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(5_000);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn dropping_ticker_releases_timer() {
        let scheduler = ManualScheduler::new();
        {
            let mut ticker = ClockTicker::with_source(scheduler.clone(), ClockValue::now);
            ticker.start(|_| {});
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn second_start_keeps_single_timer() {
        let scheduler = ManualScheduler::new();
        let mut ticker = ClockTicker::with_source(scheduler.clone(), ClockValue::now);
        ticker.start(|_| {});
        ticker.start(|_| {});
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn formats_24_hour_time_in_zone() {
        let value = ClockValue::from_utc(Utc.with_ymd_and_hms(2026, 7, 14, 21, 5, 9).unwrap());
        assert_eq!(value.hms_in(chrono_tz::Europe::Paris), "23:05:09");
        assert_eq!(value.zone_abbreviation(chrono_tz::Europe::Paris), "CEST");
        assert_eq!(value.hms_in(chrono_tz::UTC), "21:05:09");
    }
}
