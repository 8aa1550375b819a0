//! Core types shared by the PWM drivers and sequence players.

use crate::PERIOD;

/// Number of fast ticks an LED stays on within one PWM period.
///
/// Always within `[0, PERIOD]`. `Threshold::ZERO` keeps the LED off and
/// `Threshold::FULL` keeps it on for the whole period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Threshold(u32);

impl Threshold {
    /// LED always off.
    pub const ZERO: Self = Threshold(0);

    /// LED on for the whole period.
    pub const FULL: Self = Threshold(PERIOD);

    /// Creates a threshold from a tick count.
    ///
    /// # Errors
    /// * `ThresholdOutOfRange` - `ticks` is greater than [`PERIOD`]
    pub const fn new(ticks: u32) -> Result<Self, PwmError> {
        if ticks > PERIOD {
            return Err(PwmError::ThresholdOutOfRange { ticks });
        }
        Ok(Threshold(ticks))
    }

    /// Converts a brightness in `[0.0, 1.0]` to a threshold, rounding to the
    /// nearest tick.
    ///
    /// # Errors
    /// * `BrightnessOutOfRange` - brightness is below 0.0, above 1.0 or NaN
    pub fn from_brightness(brightness: f32) -> Result<Self, PwmError> {
        if !(0.0..=1.0).contains(&brightness) {
            return Err(PwmError::BrightnessOutOfRange);
        }

        let ticks = libm::roundf(PERIOD as f32 * brightness) as u32;
        Ok(Threshold(ticks.min(PERIOD)))
    }

    /// Returns the threshold in fast ticks.
    #[inline]
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Returns the duty cycle this threshold produces (0.0-1.0).
    pub fn duty_cycle(self) -> f32 {
        self.0 as f32 / PERIOD as f32
    }
}

impl From<Threshold> for u32 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// Errors reported by the PWM drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Brightness outside `[0.0, 1.0]`; the driver did not start.
    BrightnessOutOfRange,

    /// Threshold larger than the PWM period.
    ThresholdOutOfRange {
        /// The rejected tick count
        ticks: u32,
    },
}

impl core::fmt::Display for PwmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PwmError::BrightnessOutOfRange => {
                write!(f, "brightness must be between 0.0 and 1.0")
            }
            PwmError::ThresholdOutOfRange { ticks } => {
                write!(
                    f,
                    "threshold of {} ticks exceeds the PWM period of {} ticks",
                    ticks, PERIOD
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PwmError {}

/// Sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// No steps provided.
    EmptySequence,

    /// Sequence capacity exceeded.
    CapacityExceeded,

    /// Pattern uses bits above the four LEDs.
    InvalidPattern(u8),
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::EmptySequence => {
                write!(f, "sequence must have at least one step")
            }
            SequenceError::CapacityExceeded => {
                write!(f, "sequence capacity exceeded")
            }
            SequenceError::InvalidPattern(pattern) => {
                write!(
                    f,
                    "pattern {:#04x} addresses LEDs beyond the four available",
                    pattern
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn threshold_new_accepts_full_period() {
        assert_eq!(Threshold::new(PERIOD), Ok(Threshold::FULL));
        assert_eq!(Threshold::new(0), Ok(Threshold::ZERO));
    }

    #[test]
    fn threshold_new_rejects_values_past_period() {
        assert_eq!(
            Threshold::new(PERIOD + 1),
            Err(PwmError::ThresholdOutOfRange { ticks: PERIOD + 1 })
        );
    }

    #[test]
    fn brightness_rounds_to_nearest_tick() {
        assert_eq!(Threshold::from_brightness(0.0).unwrap().ticks(), 0);
        assert_eq!(Threshold::from_brightness(1.0).unwrap().ticks(), PERIOD);
        assert_eq!(Threshold::from_brightness(0.5).unwrap().ticks(), 250);
        assert_eq!(Threshold::from_brightness(0.001).unwrap().ticks(), 1);
        assert_eq!(Threshold::from_brightness(0.01).unwrap().ticks(), 5);
    }

    #[test]
    fn brightness_outside_unit_range_is_rejected() {
        for brightness in [-0.1, 1.1, f32::NAN, f32::INFINITY] {
            assert_eq!(
                Threshold::from_brightness(brightness),
                Err(PwmError::BrightnessOutOfRange)
            );
        }
    }

    #[test]
    fn duty_cycle_matches_threshold() {
        assert_eq!(Threshold::FULL.duty_cycle(), 1.0);
        assert_eq!(Threshold::new(125).unwrap().duty_cycle(), 0.25);
    }

    #[test]
    fn errors_have_readable_messages() {
        assert_eq!(
            PwmError::BrightnessOutOfRange.to_string(),
            "brightness must be between 0.0 and 1.0"
        );
        assert_eq!(
            SequenceError::InvalidPattern(0x10).to_string(),
            "pattern 0x10 addresses LEDs beyond the four available"
        );
    }
}
