use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::{Rc, Weak};

use log::{debug, info};
use num_format::{Locale, ToFormattedString};

use crate::config;
use crate::scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    pub target: u64,
    pub step_count: NonZeroU32,
    pub tick_interval_ms: NonZeroU32,
}

impl CounterConfig {
    pub fn new(target: u64, step_count: NonZeroU32, tick_interval_ms: NonZeroU32) -> Self {
        Self {
            target,
            step_count,
            tick_interval_ms,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::new(
            config::PAYOUT_TARGET,
            config::COUNTER_STEPS,
            config::COUNTER_TICK_MS,
        )
    }
}

/// What a single tick did to the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Advanced(u64),
    /// Reached the target on this tick. The timer must be released.
    Finished(u64),
    /// Already stopped, nothing changed.
    Idle,
}

/// Value shown by the counter plus the arithmetic that moves it.
///
/// `current` never decreases and never passes `target`. Once `running` goes
/// false it stays false.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterState {
    target: u64,
    current: u64,
    increment: u64,
    running: bool,
}

impl CounterState {
    pub fn new(config: &CounterConfig) -> Self {
        let increment = config.target.div_ceil(u64::from(config.step_count.get()));
        Self {
            target: config.target,
            current: 0,
            increment,
            // a zero target is already at rest
            running: config.target > 0,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        let next = self.current.saturating_add(self.increment);
        if next >= self.target {
            self.current = self.target;
            self.running = false;
            Tick::Finished(self.current)
        } else {
            self.current = next;
            Tick::Advanced(self.current)
        }
    }

    /// Stops the counter where it is.
    pub fn halt(&mut self) {
        self.running = false;
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn display(&self) -> String {
        format_counter(self.current)
    }
}

/// Formats `value` with en-US thousands grouping, e.g. `674,079,338`.
pub fn format_counter(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Owns the periodic timer that animates a `CounterState`.
///
/// The timer is registered in `start` and released either by the final tick
/// or by `stop`. `stop` runs on drop, so unmounting the owner always cancels
/// the timer, and calling it more than once is harmless.
pub struct CounterDriver<S: Scheduler> {
    state: Rc<RefCell<CounterState>>,
    handle: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> CounterDriver<S> {
    pub fn start<F>(scheduler: &S, config: CounterConfig, on_update: F) -> Self
    where
        F: Fn(u64) + 'static,
    {
        let state = Rc::new(RefCell::new(CounterState::new(&config)));
        let handle: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));

        if !state.borrow().is_running() {
            debug!("Counter target is {}, nothing to animate", config.target);
            return Self { state, handle };
        }

        let tick_state = state.clone();
        let tick_handle: Weak<RefCell<Option<S::Handle>>> = Rc::downgrade(&handle);
        let on_tick = move || {
            let tick = tick_state.borrow_mut().tick();
            match tick {
                Tick::Advanced(current) => on_update(current),
                Tick::Finished(current) => {
                    on_update(current);
                    if let Some(slot) = tick_handle.upgrade() {
                        let finished = slot.borrow_mut().take();
                        drop(finished);
                    }
                    info!("Counter reached {}", format_counter(current));
                }
                Tick::Idle => {}
            }
        };

        let interval = scheduler.every(config.tick_interval_ms.get(), Box::new(on_tick));
        *handle.borrow_mut() = Some(interval);
        debug!(
            "Counter started: target {} in steps of {} every {}ms",
            config.target,
            state.borrow().increment(),
            config.tick_interval_ms
        );

        Self { state, handle }
    }

    /// Cancels the timer if it is still registered.
    pub fn stop(&self) {
        let pending = self.handle.borrow_mut().take();
        if let Some(interval) = pending {
            drop(interval);
            if let Ok(mut state) = self.state.try_borrow_mut() {
                state.halt();
            }
            debug!("Counter timer cancelled before reaching target");
        }
    }

    pub fn state(&self) -> CounterState {
        *self.state.borrow()
    }

    /// True while a timer is registered.
    pub fn is_active(&self) -> bool {
        self.handle.borrow().is_some()
    }
}

impl<S: Scheduler> Drop for CounterDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    fn recorder() -> (Rc<RefCell<Vec<u64>>>, impl Fn(u64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn formats_with_thousands_grouping() {
        assert_eq!(format_counter(674_079_338), "674,079,338");
        assert_eq!(format_counter(0), "0");
        assert_eq!(format_counter(999), "999");
        assert_eq!(format_counter(1_000), "1,000");
    }

    #[test]
    fn increment_rounds_up() {
        let state = CounterState::new(&CounterConfig::new(674_079_338, nz(100), nz(20)));
        assert_eq!(state.increment(), 6_740_794);

        let state = CounterState::new(&CounterConfig::new(1_000, nz(100), nz(20)));
        assert_eq!(state.increment(), 10);

        let state = CounterState::new(&CounterConfig::new(7, nz(100), nz(20)));
        assert_eq!(state.increment(), 1);
    }

    #[test]
    fn zero_target_starts_at_rest() {
        let mut state = CounterState::new(&CounterConfig::new(0, nz(100), nz(20)));
        assert!(!state.is_running());
        assert_eq!(state.display(), "0");
        assert_eq!(state.tick(), Tick::Idle);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn ticks_stay_monotonic_and_end_on_target() {
        let targets = [1, 7, 99, 100, 101, 999, 1_000, 12_345, 674_079_338, u64::MAX];
        let steps = [1, 3, 10, 100, 250];

        for &target in &targets {
            for &step_count in &steps {
                let mut state = CounterState::new(&CounterConfig::new(target, nz(step_count), nz(20)));
                let mut previous = state.current();
                let mut ticks = 0u32;

                loop {
                    let tick = state.tick();
                    ticks += 1;
                    assert!(state.current() >= previous, "target {target}, steps {step_count}");
                    assert!(state.current() <= target, "target {target}, steps {step_count}");
                    previous = state.current();
                    if let Tick::Finished(value) = tick {
                        assert_eq!(value, target);
                        break;
                    }
                    assert!(ticks < step_count, "target {target} overran {step_count} steps");
                }

                assert!(ticks <= step_count);
                assert_eq!(state.current(), target);
                assert!(!state.is_running());
                assert_eq!(state.tick(), Tick::Idle);
            }
        }
    }

    #[test]
    fn payout_counter_finishes_within_two_seconds() {
        let scheduler = ManualScheduler::new();
        let (seen, on_update) = recorder();
        let driver = CounterDriver::start(&scheduler, CounterConfig::default(), on_update);

        assert!(driver.is_active());
        scheduler.advance(2_000);

        assert_eq!(scheduler.fired(), 100);
        assert!(!driver.is_active());
        assert_eq!(scheduler.active(), 0);
        assert_eq!(driver.state().display(), "674,079,338");
        assert_eq!(seen.borrow().last().copied(), Some(674_079_338));

        scheduler.advance(10_000);
        assert_eq!(scheduler.fired(), 100);
        assert_eq!(seen.borrow().len(), 100);
    }

    #[test]
    fn zero_target_registers_no_timer() {
        let scheduler = ManualScheduler::new();
        let (seen, on_update) = recorder();
        let driver = CounterDriver::start(
            &scheduler,
            CounterConfig::new(0, nz(100), nz(20)),
            on_update,
        );

        assert!(!driver.is_active());
        assert_eq!(scheduler.active(), 0);
        assert_eq!(driver.state().display(), "0");

        scheduler.advance(1_000);
        assert_eq!(scheduler.fired(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn teardown_after_three_ticks_freezes_value() {
        let scheduler = ManualScheduler::new();
        let (seen, on_update) = recorder();
        let driver = CounterDriver::start(
            &scheduler,
            CounterConfig::new(1_000, nz(100), nz(20)),
            on_update,
        );

        scheduler.advance(60);
        assert_eq!(driver.state().current(), 30);
        assert_eq!(*seen.borrow(), vec![10, 20, 30]);

        drop(driver);
        assert_eq!(scheduler.active(), 0);

        scheduler.advance(5_000);
        assert_eq!(scheduler.fired(), 3);
        assert_eq!(*seen.borrow(), vec![10, 20, 30]);
    }

    #[test]
    fn stop_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let (seen, on_update) = recorder();
        let driver = CounterDriver::start(
            &scheduler,
            CounterConfig::new(1_000, nz(100), nz(20)),
            on_update,
        );

        scheduler.advance(40);
        driver.stop();
        driver.stop();
        scheduler.advance(1_000);

        let state = driver.state();
        assert_eq!(state.current(), 20);
        assert!(!state.is_running());
        assert!(!driver.is_active());
        assert_eq!(seen.borrow().len(), 2);
        drop(driver);
        assert_eq!(scheduler.fired(), 2);
    }

    #[test]
    fn stop_after_completion_keeps_target() {
        let scheduler = ManualScheduler::new();
        let (_seen, on_update) = recorder();
        let driver = CounterDriver::start(
            &scheduler,
            CounterConfig::new(50, nz(4), nz(10)),
            on_update,
        );

        scheduler.advance(40);
        assert_eq!(scheduler.fired(), 4);
        driver.stop();
        assert_eq!(driver.state().current(), 50);
    }
}
