//! LED output abstraction and ready-made adapters.
//!
//! Provides the [`LedOutput`] trait the drivers write through, plus two
//! implementations: [`PortLeds`] for LEDs wired to bits of one 8-bit output
//! port and [`PinLeds`] for four `embedded-hal` output pins.

use crate::NUM_LEDS;
use embedded_hal::digital::{OutputPin, PinState};

/// Output port bit for each logical LED on the reference board.
///
/// LED 0 is the most significant wired bit; every other port pin is skipped.
pub const LED_PORT_BITS: [u8; NUM_LEDS] = [0x80, 0x20, 0x08, 0x02];

/// Trait for abstracting the four-LED output hardware.
///
/// Implement this for your board to allow the drivers and sequence players
/// to control it.
pub trait LedOutput {
    /// Turns one LED on or off.
    ///
    /// `led` is a logical index in `0..4`. Indices outside that range must be
    /// ignored. Handle any hardware errors internally - this method cannot fail.
    fn set_led(&mut self, led: u8, on: bool);

    /// Writes all four LEDs from a nibble pattern (bit 0 = LED 0).
    fn show_pattern(&mut self, pattern: u8) {
        for led in 0..NUM_LEDS as u8 {
            self.set_led(led, pattern_has_led(pattern, led));
        }
    }
}

/// Returns true if `led` is set in the nibble `pattern`.
#[inline]
pub const fn pattern_has_led(pattern: u8, led: u8) -> bool {
    (led as usize) < NUM_LEDS && pattern & (1 << led) != 0
}

/// An 8-bit general purpose output port.
pub trait PortRegister {
    /// Reads the current output latch value.
    fn read(&self) -> u8;

    /// Writes a new output latch value.
    fn write(&mut self, value: u8);
}

/// Four LEDs sharing one output port.
///
/// Each write is a read-modify-write of the port, so pins not listed in the
/// bit map keep their state.
pub struct PortLeds<P: PortRegister> {
    port: P,
    bits: [u8; NUM_LEDS],
}

impl<P: PortRegister> PortLeds<P> {
    /// Creates LEDs wired as on the reference board ([`LED_PORT_BITS`]).
    pub fn new(port: P) -> Self {
        Self::with_bits(port, LED_PORT_BITS)
    }

    /// Creates LEDs with a custom logical-index-to-port-bit map.
    pub fn with_bits(port: P, bits: [u8; NUM_LEDS]) -> Self {
        Self { port, bits }
    }

    /// Returns the wrapped port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Consumes the adapter and returns the port.
    pub fn release(self) -> P {
        self.port
    }
}

impl<P: PortRegister> LedOutput for PortLeds<P> {
    fn set_led(&mut self, led: u8, on: bool) {
        let Some(&mask) = self.bits.get(led as usize) else {
            return;
        };

        let value = self.port.read();
        if on {
            self.port.write(value | mask);
        } else {
            self.port.write(value & !mask);
        }
    }
}

/// Four LEDs on individual `embedded-hal` output pins.
///
/// # Type Parameters
/// * `P` - Output pin type; all four pins must share it (use degraded or
///   type-erased pins from your HAL)
pub struct PinLeds<P: OutputPin> {
    pins: [P; NUM_LEDS],
    active_low: bool,
}

impl<P: OutputPin> PinLeds<P> {
    /// Create a new LED bank
    ///
    /// # Arguments
    /// * `pins` - Output pins for LEDs 0 to 3
    /// * `active_low` - true if an LED lights when its pin is driven low
    pub fn new(pins: [P; NUM_LEDS], active_low: bool) -> Self {
        Self { pins, active_low }
    }

    /// Consumes the bank and returns the pins.
    pub fn release(self) -> [P; NUM_LEDS] {
        self.pins
    }
}

impl<P: OutputPin> LedOutput for PinLeds<P> {
    fn set_led(&mut self, led: u8, on: bool) {
        let active_low = self.active_low;
        if let Some(pin) = self.pins.get_mut(led as usize) {
            let _ = pin.set_state(PinState::from(on != active_low));
        }
    }
}
