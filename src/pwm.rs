//! Software PWM engine.
//!
//! Provides [`PwmChannel`], which decides from the shared fast tick counter
//! whether one LED should currently be on or off. The channel must be polled
//! continuously; each poll performs at most one LED write.

use crate::PERIOD;
use crate::led::LedOutput;
use crate::tick::TickSource;

/// What a single [`PwmChannel::apply`] poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmAction {
    /// Counter below the threshold; LED was switched on.
    TurnedOn,
    /// Counter between threshold and period; LED was switched off.
    TurnedOff,
    /// Counter reached the period and was reset to zero.
    Wrapped,
    /// LED already in the wanted state. Nothing was written.
    Unchanged,
}

/// PWM state for a single LED.
///
/// Caches the last commanded LED state so the output is only written when the
/// state actually changes. Create one channel per driven LED; all channels
/// share the same fast counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmChannel {
    led: u8,
    is_on: bool,
}

impl PwmChannel {
    /// Creates a channel for `led` with the LED assumed off.
    pub const fn new(led: u8) -> Self {
        Self { led, is_on: false }
    }

    /// Polls the fast counter once and drives the LED for `threshold`.
    ///
    /// * counter < `threshold` - LED on
    /// * `threshold` <= counter < [`PERIOD`] - LED off
    /// * counter >= [`PERIOD`] - counter reset to zero; this is the only place
    ///   the fast counter wraps
    ///
    /// `threshold` is not validated. Values above [`PERIOD`] keep the LED on
    /// until the counter is wrapped.
    pub fn apply<O, T>(&mut self, output: &mut O, ticks: &T, threshold: u32) -> PwmAction
    where
        O: LedOutput,
        T: TickSource,
    {
        let count = ticks.fast_ticks();

        if count < threshold {
            if !self.is_on {
                self.is_on = true;
                output.set_led(self.led, true);
                return PwmAction::TurnedOn;
            }
        } else if count < PERIOD {
            if self.is_on {
                self.is_on = false;
                output.set_led(self.led, false);
                return PwmAction::TurnedOff;
            }
        } else {
            ticks.reset_fast_ticks();
            return PwmAction::Wrapped;
        }

        PwmAction::Unchanged
    }

    /// Returns the LED index this channel drives.
    pub fn led(&self) -> u8 {
        self.led
    }

    /// Returns the last commanded LED state.
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}
