//! Constant-brightness driver.

use crate::led::LedOutput;
use crate::pwm::{PwmAction, PwmChannel};
use crate::stop::StopSignal;
use crate::tick::TickSource;
use crate::types::{PwmError, Threshold};

/// Holds one LED at a fixed brightness.
///
/// The threshold is computed once at construction. Each [`Glow::step`] polls
/// the PWM engine; the LED only looks steady if steps run in a tight loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glow {
    channel: PwmChannel,
    threshold: Threshold,
}

impl Glow {
    /// Creates a glow driver for `led` at `brightness` (0.0-1.0).
    ///
    /// # Errors
    /// * `BrightnessOutOfRange` - brightness outside `[0.0, 1.0]` or NaN
    pub fn new(led: u8, brightness: f32) -> Result<Self, PwmError> {
        let threshold = Threshold::from_brightness(brightness)?;
        Ok(Self::with_threshold(led, threshold))
    }

    /// Creates a glow driver from an already computed threshold.
    pub const fn with_threshold(led: u8, threshold: Threshold) -> Self {
        Self {
            channel: PwmChannel::new(led),
            threshold,
        }
    }

    /// Polls the PWM engine once.
    #[inline]
    pub fn step<O: LedOutput, T: TickSource>(&mut self, output: &mut O, ticks: &T) -> PwmAction {
        self.channel.apply(output, ticks, self.threshold.ticks())
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

    /// Returns the fixed threshold.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Returns the underlying PWM channel.
    pub fn channel(&self) -> &PwmChannel {
        &self.channel
    }
}

/// Glows `led` at `brightness` until `stop` is requested.
///
/// Rejects an out-of-range brightness before touching the output.
///
/// # Errors
/// * `BrightnessOutOfRange` - the loop was never entered
pub fn glow<O: LedOutput, T: TickSource>(
    output: &mut O,
    ticks: &T,
    led: u8,
    brightness: f32,
    stop: &StopSignal,
) -> Result<(), PwmError> {
    let mut driver = match Glow::new(led, brightness) {
        Ok(driver) => driver,
        Err(err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("glow: led {} rejected brightness {}", led, brightness);
            return Err(err);
        }
    };

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "glow: led {} threshold {}",
        led,
        driver.threshold().ticks()
    );

    driver.run(output, ticks, stop);
    Ok(())
}
