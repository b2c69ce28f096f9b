//! Single-channel LED driver with linear transitions.
//!
//! Provides [`Led`], which owns one [`PwmChannel`] and tracks the LED's
//! intensity in percent. Intensity is mapped to a duty value by squaring, which
//! roughly compensates for the eye's non-linear brightness response.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::pwm::{DEFAULT_FREQUENCY_HZ, PwmChannel};
use crate::time::block_for;
use crate::types::{ChannelId, LedError};

/// Number of steps used by blocking transitions unless told otherwise.
pub const DEFAULT_STEPS: u32 = 100;

/// A single PWM-driven LED.
///
/// The LED starts switched off. A transition is programmed with
/// [`begin_transition`](Led::begin_transition) and advanced one increment at a
/// time with [`step`](Led::step), or run to completion with
/// [`transition_blocking`](Led::transition_blocking).
pub struct Led<C: PwmChannel> {
    id: ChannelId,
    channel: C,
    max_duty: u8,
    frequency: u32,
    intensity: f32,
    duty: u16,
    target: f32,
    increment: f32,
    steps_remaining: u32,
}

impl<C: PwmChannel> Led<C> {
    /// Creates a switched-off LED running at the default PWM frequency.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - `max_duty` is outside `1..=255`
    pub fn new(id: ChannelId, channel: C, max_duty: u16) -> Result<Self, LedError> {
        Self::with_frequency(id, channel, max_duty, DEFAULT_FREQUENCY_HZ)
    }

    /// Creates a switched-off LED running at `frequency` hertz.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - `max_duty` is outside `1..=255`
    pub fn with_frequency(
        id: ChannelId,
        mut channel: C,
        max_duty: u16,
        frequency: u32,
    ) -> Result<Self, LedError> {
        let ceiling = match u8::try_from(max_duty) {
            Ok(ceiling) if ceiling > 0 => ceiling,
            _ => return Err(LedError::InvalidConfiguration { max_duty }),
        };

        channel.set_frequency(frequency);
        channel.set_duty(0);

        Ok(Self {
            id,
            channel,
            max_duty: ceiling,
            frequency,
            intensity: 0.0,
            duty: 0,
            target: 0.0,
            increment: 0.0,
            steps_remaining: 0,
        })
    }

    /// Immediately sets the intensity, clamped to `0..=100` percent.
    ///
    /// NaN is treated as 0.
    pub fn set_intensity(&mut self, percent: f32) {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };

        self.intensity = percent;
        self.duty = self.duty_for(percent);
        self.channel.set_duty(self.duty);
    }

    /// Programs a transition to `target` percent over `steps` calls to [`step`](Led::step).
    ///
    /// # Errors
    /// * `OutOfRange` - `target` is outside `0..=100` or `steps` is zero
    pub fn begin_transition(&mut self, target: f32, steps: u32) -> Result<(), LedError> {
        if steps == 0 || !(0.0..=100.0).contains(&target) {
            return Err(LedError::OutOfRange);
        }

        self.target = target;
        self.increment = (target - self.intensity) / steps as f32;
        self.steps_remaining = steps;
        Ok(())
    }

    /// Performs one non-blocking step of the current transition.
    ///
    /// The last step lands exactly on the target. Returns `true` once the
    /// target is reached, or if no transition is pending.
    pub fn step(&mut self) -> bool {
        if self.steps_remaining == 0 {
            return true;
        }

        self.steps_remaining -= 1;
        if self.steps_remaining == 0 {
            self.end_transition();
            return true;
        }

        self.set_intensity(self.intensity + self.increment);
        false
    }

    /// Immediately ends the current transition at its target.
    pub fn end_transition(&mut self) {
        self.set_intensity(self.target);
        self.increment = 0.0;
        self.steps_remaining = 0;
    }

    /// Runs a full transition to `target`, blocking between steps.
    ///
    /// Each of the `steps` increments is followed by a `duration / steps`
    /// pause, except the last one.
    ///
    /// # Errors
    /// * `OutOfRange` - `target` is outside `0..=100` or `steps` is zero
    pub fn transition_blocking<D: DelayNs>(
        &mut self,
        target: f32,
        duration: Duration,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), LedError> {
        self.begin_transition(target, steps)?;
        let pause = duration / steps;

        while !self.step() {
            block_for(delay, pause);
        }
        Ok(())
    }

    /// Returns the channel this LED is bound to.
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Returns the current intensity in percent.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Returns the last duty value written to the channel.
    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Returns the duty ceiling.
    pub fn max_duty(&self) -> u8 {
        self.max_duty
    }

    /// Returns the PWM frequency in hertz.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the target of the current (or last) transition.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns the number of steps left in the current transition.
    pub fn steps_remaining(&self) -> u32 {
        self.steps_remaining
    }

    /// Returns true while a transition is pending.
    pub fn is_transitioning(&self) -> bool {
        self.steps_remaining > 0
    }

    /// Returns a reference to the underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Releases the underlying channel.
    pub fn into_channel(self) -> C {
        self.channel
    }

    fn duty_for(&self, percent: f32) -> u16 {
        let value = libm::roundf(percent / 100.0 * f32::from(self.max_duty)) as u16;
        value * value
    }
}
