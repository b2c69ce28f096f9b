//! Fan-out control of several LEDs, e.g. the three channels of an RGB LED.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::config::LedConfig;
use crate::led::Led;
use crate::pwm::PwmChannel;
use crate::time::block_for;
use crate::types::{ChannelId, LedError, Targets};

/// An ordered, fixed-capacity group of LEDs driven together.
///
/// Every operation accepts [`Targets`]: either one value applied to every LED
/// or one value per LED in insertion order. Channel ids within a pack are
/// unique.
///
/// # Type Parameters
/// * `C` - PWM channel type (must be the same for all LEDs in the pack)
/// * `N` - Maximum number of LEDs this pack can hold
pub struct LedPack<C: PwmChannel, const N: usize> {
    leds: Vec<Led<C>, N>,
}

impl<C: PwmChannel, const N: usize> LedPack<C, N> {
    /// Creates an empty pack.
    pub fn new() -> Self {
        Self { leds: Vec::new() }
    }

    /// Builds a pack from LED configurations, creating each channel with `make_channel`.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - A duty ceiling is outside `1..=255`
    /// * `DuplicateChannel` - Two configurations share a pin
    /// * `CapacityExceeded` - More than `N` configurations
    pub fn from_configs<F>(configs: &[LedConfig], frequency: u32, mut make_channel: F) -> Result<Self, LedError>
    where
        F: FnMut(&LedConfig) -> C,
    {
        let mut pack = Self::new();
        for config in configs {
            let channel = make_channel(config);
            let led = Led::with_frequency(ChannelId(config.pin), channel, config.max_duty, frequency)?;
            pack.push(led)?;
        }
        Ok(pack)
    }

    /// Appends an LED to the pack.
    ///
    /// # Errors
    /// * `DuplicateChannel` - An LED with the same channel id is already present
    /// * `CapacityExceeded` - The pack already holds `N` LEDs
    pub fn push(&mut self, led: Led<C>) -> Result<(), LedError> {
        if self.leds.iter().any(|existing| existing.id() == led.id()) {
            return Err(LedError::DuplicateChannel(led.id()));
        }

        self.leds
            .push(led)
            .map_err(|_| LedError::CapacityExceeded)
    }

    /// Immediately sets the intensity of every LED. Values are clamped.
    ///
    /// # Errors
    /// * `TargetCountMismatch` - Per-channel targets do not match the LED count
    pub fn set_intensity(&mut self, targets: Targets<'_>) -> Result<(), LedError> {
        targets.check_count(self.leds.len())?;

        for (index, led) in self.leds.iter_mut().enumerate() {
            if let Some(percent) = targets.get(index) {
                led.set_intensity(percent);
            }
        }
        Ok(())
    }

    /// Programs a transition on every LED.
    ///
    /// All targets are validated before any LED is touched.
    ///
    /// # Errors
    /// * `TargetCountMismatch` - Per-channel targets do not match the LED count
    /// * `OutOfRange` - A target is outside `0..=100` or `steps` is zero
    pub fn begin_transition(&mut self, targets: Targets<'_>, steps: u32) -> Result<(), LedError> {
        targets.check_count(self.leds.len())?;

        let all_valid = (0..self.leds.len())
            .filter_map(|index| targets.get(index))
            .all(|target| (0.0..=100.0).contains(&target));
        if steps == 0 || !all_valid {
            return Err(LedError::OutOfRange);
        }

        for (index, led) in self.leds.iter_mut().enumerate() {
            if let Some(target) = targets.get(index) {
                led.begin_transition(target, steps)?;
            }
        }
        Ok(())
    }

    /// Advances every LED that is still transitioning by one step.
    ///
    /// Returns `true` only once every LED has reached its target.
    pub fn step(&mut self) -> bool {
        let mut done = true;
        for led in self.leds.iter_mut() {
            if led.is_transitioning() {
                done &= led.step();
            }
        }
        done
    }

    /// Immediately ends every LED's transition at its target.
    pub fn end_transition(&mut self) {
        for led in self.leds.iter_mut() {
            led.end_transition();
        }
    }

    /// Runs a full transition on every LED, blocking between steps.
    ///
    /// # Errors
    /// Same as [`begin_transition`](LedPack::begin_transition).
    pub fn transition_blocking<D: DelayNs>(
        &mut self,
        targets: Targets<'_>,
        duration: Duration,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), LedError> {
        self.begin_transition(targets, steps)?;
        let pause = duration / steps;

        while !self.step() {
            block_for(delay, pause);
        }
        Ok(())
    }

    /// Returns true while any LED is transitioning.
    pub fn is_transitioning(&self) -> bool {
        self.leds.iter().any(Led::is_transitioning)
    }

    /// Returns the current intensity of each LED, in order.
    pub fn intensities(&self) -> impl Iterator<Item = f32> + '_ {
        self.leds.iter().map(Led::intensity)
    }

    /// Returns the LEDs in this pack.
    pub fn leds(&self) -> &[Led<C>] {
        &self.leds
    }

    /// Returns the LEDs in this pack for individual control.
    pub fn leds_mut(&mut self) -> &mut [Led<C>] {
        &mut self.leds
    }

    /// Returns the LED bound to `id`, if any.
    pub fn get(&self, id: ChannelId) -> Option<&Led<C>> {
        self.leds.iter().find(|led| led.id() == id)
    }

    /// Returns the number of LEDs in the pack.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Returns true if the pack holds no LEDs.
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }
}

impl<C: PwmChannel, const N: usize> Default for LedPack<C, N> {
    fn default() -> Self {
        Self::new()
    }
}
