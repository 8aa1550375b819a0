#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TickCounters`**: Fast and slow counters advanced from timer interrupts
//! - **`TickSource`**: Trait the drivers read the counters through
//! - **`LedOutput`**: Trait to implement for your LED hardware
//! - **`PwmChannel`**: Software PWM engine for one LED
//! - **`Glow`**: Constant-brightness driver
//! - **`PulseGlow`**: Breathing driver ramping between dark and full brightness
//! - **`PatternStep`**: One row of a scripted on/off sequence (`SOS`, `LIGHT_SHOW`)
//! - **`Demo`**: The behavior a firmware runs, dispatched by [`demo::run`]
//! - **`StopSignal`**: Optional flag that ends the otherwise endless loops
//!
//! Brightness is a duty cycle: the LED is on for the first `threshold` fast
//! ticks of every [`PERIOD`]-tick cycle.

pub mod demo;
pub mod glow;
pub mod led;
pub mod pulse;
pub mod pwm;
pub mod sequence;
pub mod stop;
pub mod tick;
pub mod types;

pub use demo::Demo;
pub use glow::{Glow, glow};
pub use led::{LED_PORT_BITS, LedOutput, PinLeds, PortLeds, PortRegister};
pub use pulse::{PulseGlow, RampDirection, pulse_glow};
pub use pwm::{PwmAction, PwmChannel};
pub use sequence::{LIGHT_SHOW, PatternSequence, PatternSequenceBuilder, PatternStep, SOS};
pub use stop::StopSignal;
pub use tick::{FAST_TICK_STEP, SLOW_TICK_STEP, TickCounters, TickSource};
pub use types::{PwmError, SequenceError, Threshold};

/// Fast ticks per PWM cycle. Sets the duty-cycle resolution (1/500).
pub const PERIOD: u32 = 500;

/// Slow counter value that closes a pulse-glow cadence window
/// (two slow ticks, ~20 ms).
pub const PULSE_RATE: u32 = 2 * SLOW_TICK_STEP;

/// Number of LEDs addressed by outputs and patterns.
pub const NUM_LEDS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_timer_setup() {
        assert_eq!(PERIOD, 500);
        assert_eq!(PULSE_RATE, 10);
        assert_eq!(NUM_LEDS, LED_PORT_BITS.len());
    }
}
