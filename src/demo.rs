//! Demo selection for firmware entry points.
//!
//! A firmware picks one [`Demo`] at startup and hands it to [`run`] together
//! with its LED output, tick counters and a blocking delay.

use crate::glow::glow;
use crate::led::LedOutput;
use crate::pulse::pulse_glow;
use crate::sequence::{self, LIGHT_SHOW, PatternStep, SOS};
use crate::stop::StopSignal;
use crate::tick::TickSource;
use crate::types::PwmError;
use embedded_hal::delay::DelayNs;

/// The behaviors a firmware can run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Demo {
    /// Repeat the [`SOS`] sequence.
    Sos,
    /// Hold one LED at a constant brightness.
    Glow {
        /// LED index (0-3)
        led: u8,
        /// Duty cycle, 0.0-1.0
        brightness: f32,
    },
    /// Breathe one LED from dark to full and back.
    PulseGlow {
        /// LED index (0-3)
        led: u8,
    },
    /// Repeat the [`LIGHT_SHOW`] sequence.
    LightShow,
}

/// Runs `demo` until `stop` is requested.
///
/// With a signal that is never raised this does not return, except for a
/// glow with an invalid brightness, which is refused immediately.
///
/// # Errors
/// * `BrightnessOutOfRange` - `Demo::Glow` brightness outside `[0.0, 1.0]`
pub fn run<O, T, D>(
    demo: Demo,
    output: &mut O,
    ticks: &T,
    delay: &mut D,
    stop: &StopSignal,
) -> Result<(), PwmError>
where
    O: LedOutput,
    T: TickSource,
    D: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::info!("demo: {}", demo);

    match demo {
        Demo::Sos => repeat(&SOS, output, delay, stop),
        Demo::Glow { led, brightness } => glow(output, ticks, led, brightness, stop)?,
        Demo::PulseGlow { led } => pulse_glow(output, ticks, led, stop),
        Demo::LightShow => repeat(&LIGHT_SHOW, output, delay, stop),
    }

    Ok(())
}

fn repeat<O: LedOutput, D: DelayNs>(
    steps: &[PatternStep],
    output: &mut O,
    delay: &mut D,
    stop: &StopSignal,
) {
    while sequence::play_until(steps, output, delay, stop) {}
}
