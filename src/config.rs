use log::Level;
use std::num::NonZeroU32;

/// Total paid out to members, shown by the hero counter.
pub const PAYOUT_TARGET: u64 = 674_079_338;

/// Number of ticks the counter animation is spread over.
pub const COUNTER_STEPS: NonZeroU32 = match NonZeroU32::new(100) {
    Some(steps) => steps,
    None => panic!("counter needs at least one step"),
};

/// Milliseconds between counter ticks.
pub const COUNTER_TICK_MS: NonZeroU32 = match NonZeroU32::new(20) {
    Some(ms) => ms,
    None => panic!("tick interval must be positive"),
};

pub const BRAND_NAME: &str = "swagbucks";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
