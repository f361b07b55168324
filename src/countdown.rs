//! Countdown Ticking
//!
//! One shared one-second interval drives every chore card's countdown.
//! Cards subscribe by chore ID; the interval only runs while at least one
//! chore is subscribed.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::time::format_duration;

/// Tick period in milliseconds
const TICK_MS: u32 = 1_000;

/// What a chore card shows under its title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Milliseconds left, always > 0
    Remaining(u64),
    Overdue,
}

impl Countdown {
    /// Remaining time until `due`, clamped at zero
    ///
    /// A missing (unparseable) due instant counts as overdue.
    pub fn until(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(due) = due else {
            return Countdown::Overdue;
        };

        let ms = (due - now).num_milliseconds();
        if ms > 0 {
            Countdown::Remaining(ms as u64)
        } else {
            Countdown::Overdue
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Remaining(ms) => write!(f, "{} remaining", format_duration(*ms)),
            Countdown::Overdue => write!(f, "Overdue"),
        }
    }
}

/// Reference counts of subscribed chore IDs
#[derive(Debug, Default, Clone)]
pub struct Subscriptions {
    counts: HashMap<String, usize>,
}

impl Subscriptions {
    /// Register `id`; returns true when this is the first subscriber overall
    pub fn insert(&mut self, id: &str) -> bool {
        let was_idle = self.counts.is_empty();
        *self.counts.entry(id.to_string()).or_insert(0) += 1;
        was_idle
    }

    /// Drop one registration of `id`; returns true when nobody is left
    pub fn remove(&mut self, id: &str) -> bool {
        if let Some(count) = self.counts.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(id);
            }
            return self.counts.is_empty();
        }
        false
    }

    #[cfg(test)]
    fn contains(&self, id: &str) -> bool {
        self.counts.contains_key(id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Starts the repeating timer behind a `Ticker`; dropping the returned
/// handle cancels it
pub type StartTimer = fn(RwSignal<DateTime<Utc>>) -> Box<dyn Any>;

fn browser_interval(now: RwSignal<DateTime<Utc>>) -> Box<dyn Any> {
    Box::new(Interval::new(TICK_MS, move || now.set(Utc::now())))
}

/// Shared scheduled-repeating task for chore countdowns
#[derive(Clone, Copy)]
pub struct Ticker {
    now: RwSignal<DateTime<Utc>>,
    subscriptions: StoredValue<Subscriptions>,
    timer: StoredValue<Option<Box<dyn Any>>, LocalStorage>,
    start_timer: StartTimer,
}

impl Ticker {
    pub fn new() -> Self {
        Self::with_timer(browser_interval)
    }

    pub fn with_timer(start_timer: StartTimer) -> Self {
        Self {
            now: RwSignal::new(Utc::now()),
            subscriptions: StoredValue::new(Subscriptions::default()),
            timer: StoredValue::new_local(None),
            start_timer,
        }
    }

    /// Current time, refreshed once per tick and on every subscribe
    pub fn now(&self) -> ReadSignal<DateTime<Utc>> {
        self.now.read_only()
    }

    pub fn is_running(&self) -> bool {
        self.timer.with_value(|timer| timer.is_some())
    }

    /// Start following the tick for `chore_id`
    ///
    /// `now` is refreshed so a card mounted between ticks starts from its
    /// mount time.
    pub fn subscribe(&self, chore_id: &str) {
        let mut first = false;
        self.subscriptions.update_value(|subs| first = subs.insert(chore_id));
        self.now.set(Utc::now());
        if first {
            self.start();
        }
    }

    pub fn unsubscribe(&self, chore_id: &str) {
        let mut idle = false;
        self.subscriptions.update_value(|subs| idle = subs.remove(chore_id));
        if idle {
            self.stop();
        }
    }

    fn start(&self) {
        let timer = (self.start_timer)(self.now);
        self.timer.set_value(Some(timer));
        tracing::debug!("countdown ticker started");
    }

    fn stop(&self) {
        self.timer.set_value(None);
        tracing::debug!("countdown ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_717_286_399 + secs, 0).unwrap()
    }

    #[test]
    fn test_countdown_remaining() {
        let now = at(0);
        let due = now + Duration::milliseconds(90_061_000);
        let countdown = Countdown::until(Some(due), now);
        assert_eq!(countdown, Countdown::Remaining(90_061_000));
        assert_eq!(countdown.to_string(), "1d 1h 1m 1s remaining");
    }

    #[test]
    fn test_countdown_past_due_is_overdue() {
        let now = at(0);
        for past in [at(-1), at(-86_400), at(-10_000_000)] {
            let countdown = Countdown::until(Some(past), now);
            assert_eq!(countdown, Countdown::Overdue);
            assert_eq!(countdown.to_string(), "Overdue");
        }
    }

    #[test]
    fn test_countdown_exactly_due_is_overdue() {
        assert_eq!(Countdown::until(Some(at(5)), at(5)), Countdown::Overdue);
    }

    #[test]
    fn test_countdown_unknown_due_is_overdue() {
        assert_eq!(Countdown::until(None, at(0)).to_string(), "Overdue");
    }

    #[test]
    fn test_subscriptions_track_first_and_last() {
        let mut subs = Subscriptions::default();
        assert!(subs.insert("a"));
        assert!(!subs.insert("b"));
        assert_eq!(subs.len(), 2);

        assert!(!subs.remove("a"));
        assert!(!subs.contains("a"));
        assert!(subs.remove("b"));
        assert_eq!(subs.len(), 0);
    }

    #[test]
    fn test_subscriptions_are_reference_counted_per_id() {
        let mut subs = Subscriptions::default();
        subs.insert("a");
        subs.insert("a");

        assert!(!subs.remove("a"));
        assert!(subs.contains("a"));
        assert!(subs.remove("a"));
    }

    #[test]
    fn test_subscriptions_ignore_unknown_id() {
        let mut subs = Subscriptions::default();
        subs.insert("a");
        assert!(!subs.remove("zzz"));
        assert_eq!(subs.len(), 1);
    }

    thread_local! {
        static TIMERS_STARTED: Cell<u32> = Cell::new(0);
        static TIMERS_ALIVE: Cell<i32> = Cell::new(0);
    }

    struct FakeTimer;

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            TIMERS_ALIVE.with(|alive| alive.set(alive.get() - 1));
        }
    }

    fn fake_timer(_now: RwSignal<DateTime<Utc>>) -> Box<dyn Any> {
        TIMERS_STARTED.with(|started| started.set(started.get() + 1));
        TIMERS_ALIVE.with(|alive| alive.set(alive.get() + 1));
        Box::new(FakeTimer)
    }

    fn started() -> u32 {
        TIMERS_STARTED.with(Cell::get)
    }

    fn alive() -> i32 {
        TIMERS_ALIVE.with(Cell::get)
    }

    #[test]
    fn test_ticker_runs_only_while_subscribed() {
        let (started_before, alive_before) = (started(), alive());
        let ticker = Ticker::with_timer(fake_timer);
        assert!(!ticker.is_running());

        ticker.subscribe("a");
        assert!(ticker.is_running());
        ticker.subscribe("b");
        assert_eq!(started() - started_before, 1);

        ticker.unsubscribe("a");
        assert!(ticker.is_running());
        ticker.unsubscribe("b");
        assert!(!ticker.is_running());
        assert_eq!(alive(), alive_before);
    }

    #[test]
    fn test_ticker_rearms_on_remount() {
        let (started_before, alive_before) = (started(), alive());
        let ticker = Ticker::with_timer(fake_timer);

        // A touched card: old one unmounts, new one mounts with the same id
        ticker.subscribe("a");
        ticker.unsubscribe("a");
        assert!(!ticker.is_running());
        ticker.subscribe("a");

        assert!(ticker.is_running());
        assert_eq!(started() - started_before, 2);
        assert_eq!(alive() - alive_before, 1);
    }

    #[test]
    fn test_ticker_new_card_mounted_first_keeps_timer() {
        let started_before = started();
        let ticker = Ticker::with_timer(fake_timer);

        ticker.subscribe("a");
        ticker.subscribe("a");
        ticker.unsubscribe("a");

        assert!(ticker.is_running());
        assert_eq!(started() - started_before, 1);
    }

    #[test]
    fn test_subscribe_refreshes_now() {
        let ticker = Ticker::with_timer(fake_timer);
        ticker.subscribe("a");

        let before = Utc::now();
        ticker.subscribe("b");
        assert!(ticker.now().get_untracked() >= before);
    }
}
