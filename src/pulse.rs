//! Breathing ("pulse glow") driver.
//!
//! Ramps one LED's threshold from 0 up to [`PERIOD`] and back down, one tick
//! per cadence window. The window closes when the slow counter reaches
//! [`PULSE_RATE`]; the driver then consumes it by resetting the counter.

use crate::led::LedOutput;
use crate::pwm::PwmChannel;
use crate::stop::StopSignal;
use crate::tick::TickSource;
use crate::{PERIOD, PULSE_RATE};

/// Direction of the threshold ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampDirection {
    /// No step taken yet. Treated like `Falling` when choosing the next step.
    Unset,
    /// Threshold increasing by one per window.
    Rising,
    /// Threshold decreasing by one per window.
    Falling,
}

impl RampDirection {
    /// Signed per-window change of the threshold.
    pub const fn delta(self) -> i32 {
        match self {
            RampDirection::Unset => 0,
            RampDirection::Rising => 1,
            RampDirection::Falling => -1,
        }
    }

    /// Chooses the direction of the next step from the current threshold.
    ///
    /// Keeps rising until the threshold sits at [`PERIOD`] and keeps falling
    /// (or, when unset, starts falling) until it sits at zero. An unset ramp
    /// at zero therefore starts by rising.
    fn next(self, threshold: u32) -> Self {
        match self {
            RampDirection::Rising if threshold < PERIOD => RampDirection::Rising,
            RampDirection::Rising => RampDirection::Falling,
            RampDirection::Unset | RampDirection::Falling if threshold > 0 => {
                RampDirection::Falling
            }
            RampDirection::Unset | RampDirection::Falling => RampDirection::Rising,
        }
    }
}

/// Drives one LED through a continuous dim-bright-dim ramp.
///
/// A full cycle is `2 * PERIOD` cadence windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseGlow {
    channel: PwmChannel,
    threshold: u32,
    direction: RampDirection,
}

impl PulseGlow {
    /// Creates a driver for `led` starting dark with the direction unset.
    pub const fn new(led: u8) -> Self {
        Self {
            channel: PwmChannel::new(led),
            threshold: 0,
            direction: RampDirection::Unset,
        }
    }

    /// Runs one iteration of the ramp.
    ///
    /// Always polls the PWM engine with the current threshold. If the slow
    /// counter has reached [`PULSE_RATE`], also moves the threshold one tick
    /// and resets the slow counter.
    ///
    /// # Returns
    /// * `Some(threshold)` - the new threshold after a ramp step
    /// * `None` - cadence window still open, threshold unchanged
    pub fn step<O: LedOutput, T: TickSource>(&mut self, output: &mut O, ticks: &T) -> Option<u32> {
        self.channel.apply(output, ticks, self.threshold);

        if ticks.slow_ticks() < PULSE_RATE {
            return None;
        }

        let next = self.direction.next(self.threshold);
        #[cfg(feature = "defmt")]
        {
            if next != self.direction {
                defmt::trace!(
                    "pulse: led {} now {} at threshold {}",
                    self.channel.led(),
                    next,
                    self.threshold
                );
            }
        }
        self.direction = next;

        self.threshold = self.threshold.saturating_add_signed(next.delta());
        ticks.reset_slow_ticks();

        Some(self.threshold)
    }

    /// Steps until `stop` is requested.
    pub fn run<O, T>(&mut self, output: &mut O, ticks: &T, stop: &StopSignal)
    where
        O: LedOutput,
        T: TickSource,
    {
        while !stop.is_stop_requested() {
            self.step(output, ticks);
        }
    }

    /// Steps until the device is reset.
    pub fn run_forever<O: LedOutput, T: TickSource>(&mut self, output: &mut O, ticks: &T) -> ! {
        loop {
            self.step(output, ticks);
        }
    }

    /// Returns the current threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns the direction of the last ramp step.
    pub fn direction(&self) -> RampDirection {
        self.direction
    }

    /// Returns the underlying PWM channel.
    pub fn channel(&self) -> &PwmChannel {
        &self.channel
    }
}

/// Pulses `led` until `stop` is requested.
pub fn pulse_glow<O: LedOutput, T: TickSource>(
    output: &mut O,
    ticks: &T,
    led: u8,
    stop: &StopSignal,
) {
    #[cfg(feature = "defmt")]
    defmt::debug!("pulse: led {}", led);

    PulseGlow::new(led).run(output, ticks, stop);
}
