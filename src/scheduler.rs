use gloo_timers::callback::Interval;

/// Host facility for periodic callbacks.
///
/// `every` registers `callback` to run once per `interval_ms` until the
/// returned handle is dropped. Dropping the handle is the only way to cancel.
pub trait Scheduler {
    type Handle: 'static;

    fn every(&self, interval_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser scheduler backed by `setInterval`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, interval_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(interval_ms, callback)
    }
}
