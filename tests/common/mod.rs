//! Shared test infrastructure for soft-pwm-leds integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::delay::DelayNs;
use soft_pwm_leds::{LedOutput, NUM_LEDS, StopSignal, TickSource};

// ============================================================================
// Mock LED Output
// ============================================================================

/// Mock LED bank that records every write
pub struct MockLeds {
    states: [bool; NUM_LEDS],
    history: heapless::Vec<(u8, bool), 512>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            states: [false; NUM_LEDS],
            history: heapless::Vec::new(),
        }
    }

    pub fn is_on(&self, led: u8) -> bool {
        self.states[led as usize]
    }

    pub fn history(&self) -> &[(u8, bool)] {
        &self.history
    }

    pub fn write_count(&self) -> usize {
        self.history.len()
    }
}

impl LedOutput for MockLeds {
    fn set_led(&mut self, led: u8, on: bool) {
        if let Some(state) = self.states.get_mut(led as usize) {
            *state = on;
            let _ = self.history.push((led, on));
        }
    }
}

// ============================================================================
// Mock Tick Sources
// ============================================================================

/// Tick source whose counters only change when the test says so
pub struct ManualTicks {
    fast: Cell<u32>,
    slow: Cell<u32>,
    fast_resets: Cell<u32>,
    slow_resets: Cell<u32>,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self {
            fast: Cell::new(0),
            slow: Cell::new(0),
            fast_resets: Cell::new(0),
            slow_resets: Cell::new(0),
        }
    }

    pub fn set_fast(&self, value: u32) {
        self.fast.set(value);
    }

    pub fn set_slow(&self, value: u32) {
        self.slow.set(value);
    }

    pub fn fast_resets(&self) -> u32 {
        self.fast_resets.get()
    }

    pub fn slow_resets(&self) -> u32 {
        self.slow_resets.get()
    }
}

impl TickSource for ManualTicks {
    fn fast_ticks(&self) -> u32 {
        self.fast.get()
    }

    fn reset_fast_ticks(&self) {
        self.fast.set(0);
        self.fast_resets.set(self.fast_resets.get() + 1);
    }

    fn slow_ticks(&self) -> u32 {
        self.slow.get()
    }

    fn reset_slow_ticks(&self) {
        self.slow.set(0);
        self.slow_resets.set(self.slow_resets.get() + 1);
    }
}

/// Tick source simulating the timer interrupts between polls
///
/// Every fast counter read returns the current value and then fires one fast
/// tick. Every `reads_per_slow_tick` reads also fire one slow tick. After
/// `read_limit` reads the embedded stop signal is raised.
pub struct ClockedTicks {
    fast: Cell<u32>,
    slow: Cell<u32>,
    reads: Cell<u32>,
    fast_resets: Cell<u32>,
    reads_per_slow_tick: u32,
    read_limit: u32,
    pub stop: StopSignal,
}

impl ClockedTicks {
    pub fn new(read_limit: u32) -> Self {
        Self::with_slow_rate(read_limit, u32::MAX)
    }

    pub fn with_slow_rate(read_limit: u32, reads_per_slow_tick: u32) -> Self {
        Self {
            fast: Cell::new(0),
            slow: Cell::new(0),
            reads: Cell::new(0),
            fast_resets: Cell::new(0),
            reads_per_slow_tick,
            read_limit,
            stop: StopSignal::new(),
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn fast_resets(&self) -> u32 {
        self.fast_resets.get()
    }
}

impl TickSource for ClockedTicks {
    fn fast_ticks(&self) -> u32 {
        let value = self.fast.get();
        self.fast.set(value + 1);

        let reads = self.reads.get() + 1;
        self.reads.set(reads);
        if reads % self.reads_per_slow_tick == 0 {
            self.slow.set(self.slow.get() + 5);
        }
        if reads >= self.read_limit {
            self.stop.request_stop();
        }

        value
    }

    fn reset_fast_ticks(&self) {
        self.fast.set(0);
        self.fast_resets.set(self.fast_resets.get() + 1);
    }

    fn slow_ticks(&self) -> u32 {
        self.slow.get()
    }

    fn reset_slow_ticks(&self) {
        self.slow.set(0);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that records requested durations instead of blocking
pub struct MockDelay<'a> {
    delays: heapless::Vec<u32, 128>,
    total_ms: u64,
    stop_after: Option<(&'a StopSignal, u64)>,
}

impl<'a> MockDelay<'a> {
    pub fn new() -> Self {
        Self {
            delays: heapless::Vec::new(),
            total_ms: 0,
            stop_after: None,
        }
    }

    /// Raise `stop` once at least `total_ms` milliseconds have been delayed
    pub fn stopping_after(stop: &'a StopSignal, total_ms: u64) -> Self {
        Self {
            stop_after: Some((stop, total_ms)),
            ..Self::new()
        }
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.delays.push(ms);
        self.total_ms += u64::from(ms);

        if let Some((stop, limit)) = self.stop_after {
            if self.total_ms >= limit {
                stop.request_stop();
            }
        }
    }
}
