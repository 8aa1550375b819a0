//! Scripted on/off light sequences.
//!
//! A sequence is an ordered list of [`PatternStep`]s. Playback writes each
//! step's pattern to the four LEDs and then blocks for the step's duration.
//! Nothing here touches the PWM engine or the tick counters.

use crate::led::{LedOutput, pattern_has_led};
use crate::stop::StopSignal;
use crate::types::SequenceError;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

/// Bits a pattern may use (one per LED).
pub const PATTERN_MASK: u8 = 0x0F;

/// One row of a light sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternStep {
    /// LED pattern, bit 0 = LED 0.
    pub pattern: u8,

    /// How long to hold the pattern, in milliseconds.
    pub duration_ms: u32,
}

impl PatternStep {
    /// Creates a new step.
    #[inline]
    pub const fn new(pattern: u8, duration_ms: u32) -> Self {
        Self {
            pattern,
            duration_ms,
        }
    }

    /// Returns true if `led` is lit during this step.
    #[inline]
    pub const fn is_lit(&self, led: u8) -> bool {
        pattern_has_led(self.pattern, led)
    }
}

const fn row(pattern: u8, duration_ms: u32) -> PatternStep {
    PatternStep::new(pattern, duration_ms)
}

/// Morse SOS: three short LED 0 flashes, three long all-LED flashes, three
/// short LED 0 flashes, then a trailing pause.
#[rustfmt::skip]
pub static SOS: [PatternStep; 19] = [
    row(0x1, 100), row(0x0, 250), row(0x1, 100), row(0x0, 250), row(0x1, 100), row(0x0, 500),
    row(0xF, 250), row(0x0, 250), row(0xF, 250), row(0x0, 250), row(0xF, 250), row(0x0, 500),
    row(0x1, 100), row(0x0, 250), row(0x1, 100), row(0x0, 250), row(0x1, 100), row(0x0, 250),
    row(0x0, 250),
];

/// A longer show: full flashes, inner/outer pairs and a bouncing chase.
#[rustfmt::skip]
pub static LIGHT_SHOW: [PatternStep; 43] = [
    row(0xF, 250), row(0x0, 250), row(0xF, 250), row(0x0, 250), row(0xF, 250), row(0x0, 250),
    row(0x6, 100), row(0x0, 100), row(0x9, 100), row(0x0, 100), row(0xF, 250), row(0x0, 250),
    row(0xF, 250), row(0x0, 250), row(0xF, 250), row(0x0, 250), row(0x9, 100), row(0x0, 100),
    row(0x6, 100), row(0x0, 100), row(0x8, 100), row(0xC, 100), row(0x6, 100), row(0x3, 100),
    row(0x1, 100), row(0x3, 100), row(0x6, 100), row(0xC, 100), row(0x8, 100), row(0xC, 100),
    row(0x6, 100), row(0x3, 100), row(0x1, 100), row(0x3, 100), row(0x6, 100), row(0xF, 250),
    row(0x0, 250), row(0xF, 250), row(0x0, 250), row(0x6, 250), row(0x0, 250), row(0x6, 250),
    row(0x0, 250),
];

/// Sums the durations of `steps`.
pub fn total_duration_ms(steps: &[PatternStep]) -> u32 {
    steps.iter().map(|step| step.duration_ms).sum()
}

/// Plays `steps` once, blocking on `delay` after each row.
pub fn play<O: LedOutput, D: DelayNs>(steps: &[PatternStep], output: &mut O, delay: &mut D) {
    for step in steps {
        output.show_pattern(step.pattern);
        delay.delay_ms(step.duration_ms);
    }
}

/// Plays `steps` once, checking `stop` before each row.
///
/// # Returns
/// * `true` - every row was played
/// * `false` - stopped early
pub fn play_until<O: LedOutput, D: DelayNs>(
    steps: &[PatternStep],
    output: &mut O,
    delay: &mut D,
    stop: &StopSignal,
) -> bool {
    for step in steps {
        if stop.is_stop_requested() {
            return false;
        }
        output.show_pattern(step.pattern);
        delay.delay_ms(step.duration_ms);
    }
    true
}

/// A user-defined light sequence with a fixed maximum number of steps.
///
/// # Type Parameters
/// * `N` - Maximum number of steps this sequence can hold
#[derive(Debug, Clone)]
pub struct PatternSequence<const N: usize> {
    steps: Vec<PatternStep, N>,
}

impl<const N: usize> PatternSequence<N> {
    /// Creates a new sequence builder.
    pub fn builder() -> PatternSequenceBuilder<N> {
        PatternSequenceBuilder::new()
    }

    /// Copies a step table into a validated sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - `steps` is empty
    /// * `CapacityExceeded` - more than `N` steps
    /// * `InvalidPattern` - a pattern addresses LEDs beyond the fourth
    pub fn from_steps(steps: &[PatternStep]) -> Result<Self, SequenceError> {
        let mut builder = PatternSequenceBuilder::new();
        for step in steps {
            builder = builder.step(step.pattern, step.duration_ms)?;
        }
        builder.build()
    }

    /// Returns the steps in playback order.
    pub fn steps(&self) -> &[PatternStep] {
        &self.steps
    }

    /// Returns the number of steps in this sequence.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the length of one playback in milliseconds.
    pub fn total_duration_ms(&self) -> u32 {
        total_duration_ms(&self.steps)
    }

    /// Plays the sequence once.
    pub fn play<O: LedOutput, D: DelayNs>(&self, output: &mut O, delay: &mut D) {
        play(&self.steps, output, delay)
    }
}

/// Builder for constructing validated pattern sequences.
#[derive(Debug)]
pub struct PatternSequenceBuilder<const N: usize> {
    steps: Vec<PatternStep, N>,
}

impl<const N: usize> PatternSequenceBuilder<N> {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Adds a step to the sequence.
    ///
    /// # Errors
    /// * `InvalidPattern` - pattern has bits above [`PATTERN_MASK`]
    /// * `CapacityExceeded` - the sequence already holds `N` steps
    pub fn step(mut self, pattern: u8, duration_ms: u32) -> Result<Self, SequenceError> {
        if pattern & !PATTERN_MASK != 0 {
            return Err(SequenceError::InvalidPattern(pattern));
        }

        self.steps
            .push(PatternStep::new(pattern, duration_ms))
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - No steps were added
    pub fn build(self) -> Result<PatternSequence<N>, SequenceError> {
        if self.steps.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        Ok(PatternSequence { steps: self.steps })
    }
}

impl<const N: usize> Default for PatternSequenceBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
