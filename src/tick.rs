//! Tick counters shared between timer interrupts and the PWM drivers.
//!
//! The application configures two periodic timers and calls
//! [`TickCounters::fast_tick`] and [`TickCounters::slow_tick`] from their
//! interrupt handlers. Drivers only see the counters through the
//! [`TickSource`] trait.

use core::sync::atomic::{AtomicU32, Ordering};

/// Amount added to the fast counter on every fast tick (~1 µs).
pub const FAST_TICK_STEP: u32 = 1;

/// Amount added to the slow counter on every slow tick (~10 ms).
pub const SLOW_TICK_STEP: u32 = 5;

/// Trait for abstracting the two tick counters.
///
/// Implementations must be safe to read while an interrupt increments the
/// counters. Only single-word loads and stores are required.
pub trait TickSource {
    /// Returns the current fast counter value.
    fn fast_ticks(&self) -> u32;

    /// Resets the fast counter to zero.
    fn reset_fast_ticks(&self);

    /// Returns the current slow counter value.
    fn slow_ticks(&self) -> u32;

    /// Resets the slow counter to zero, consuming the accumulated value.
    fn reset_slow_ticks(&self);
}

/// Interrupt-driven tick counters.
///
/// Designed to live in a `static`:
///
/// ```
/// use soft_pwm_leds::TickCounters;
///
/// static TICKS: TickCounters = TickCounters::new();
///
/// // in the fast timer interrupt handler
/// TICKS.fast_tick();
/// ```
///
/// Increments are a load followed by a store rather than `fetch_add`, so the
/// type also works on cores without atomic read-modify-write. Each counter has
/// exactly one interrupt writer; the main loop only ever stores zero.
#[derive(Debug, Default)]
pub struct TickCounters {
    fast: AtomicU32,
    slow: AtomicU32,
}

impl TickCounters {
    /// Creates counters starting at zero.
    pub const fn new() -> Self {
        Self {
            fast: AtomicU32::new(0),
            slow: AtomicU32::new(0),
        }
    }

    /// Fast timer interrupt hook.
    #[inline]
    pub fn fast_tick(&self) {
        let count = self.fast.load(Ordering::Relaxed);
        self.fast
            .store(count.wrapping_add(FAST_TICK_STEP), Ordering::Relaxed);
    }

    /// Slow timer interrupt hook.
    #[inline]
    pub fn slow_tick(&self) {
        let count = self.slow.load(Ordering::Relaxed);
        self.slow
            .store(count.wrapping_add(SLOW_TICK_STEP), Ordering::Relaxed);
    }
}

impl TickSource for TickCounters {
    #[inline]
    fn fast_ticks(&self) -> u32 {
        self.fast.load(Ordering::Relaxed)
    }

    #[inline]
    fn reset_fast_ticks(&self) {
        self.fast.store(0, Ordering::Relaxed);
    }

    #[inline]
    fn slow_ticks(&self) -> u32 {
        self.slow.load(Ordering::Relaxed)
    }

    #[inline]
    fn reset_slow_ticks(&self) {
        self.slow.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let ticks = TickCounters::new();
        assert_eq!(ticks.fast_ticks(), 0);
        assert_eq!(ticks.slow_ticks(), 0);
    }

    #[test]
    fn fast_tick_adds_one_and_slow_tick_adds_five() {
        let ticks = TickCounters::new();

        for _ in 0..3 {
            ticks.fast_tick();
        }
        ticks.slow_tick();
        ticks.slow_tick();

        assert_eq!(ticks.fast_ticks(), 3);
        assert_eq!(ticks.slow_ticks(), 10);
    }

    #[test]
    fn resets_only_touch_their_own_counter() {
        let ticks = TickCounters::new();
        ticks.fast_tick();
        ticks.slow_tick();

        ticks.reset_fast_ticks();
        assert_eq!(ticks.fast_ticks(), 0);
        assert_eq!(ticks.slow_ticks(), 5);

        ticks.reset_slow_ticks();
        assert_eq!(ticks.slow_ticks(), 0);
    }

    #[test]
    fn works_from_a_static() {
        static TICKS: TickCounters = TickCounters::new();
        TICKS.fast_tick();
        assert!(TICKS.fast_ticks() >= 1);
    }
}
