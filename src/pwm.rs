//! PWM channel abstraction.
//!
//! Defines the [`PwmChannel`] trait that LED drivers write to, and
//! [`HalChannel`], an adapter for any `embedded-hal` PWM output.

use embedded_hal::pwm::SetDutyCycle;

/// Largest duty value an LED driver ever writes (`255 * 255`).
pub const MAX_DUTY: u16 = 255 * 255;

/// Default PWM frequency in hertz.
pub const DEFAULT_FREQUENCY_HZ: u32 = 1000;

/// Trait for abstracting a single hardware PWM output.
///
/// Implement this for your PWM peripheral. Duty values passed to
/// [`set_duty`](PwmChannel::set_duty) are in the range `0..=MAX_DUTY`.
/// Handle any hardware errors internally - these methods cannot fail.
pub trait PwmChannel {
    /// Sets the PWM carrier frequency.
    fn set_frequency(&mut self, hz: u32);

    /// Writes a raw duty value in the range `0..=MAX_DUTY`.
    fn set_duty(&mut self, duty: u16);
}

impl<C: PwmChannel + ?Sized> PwmChannel for &mut C {
    fn set_frequency(&mut self, hz: u32) {
        (**self).set_frequency(hz);
    }

    fn set_duty(&mut self, duty: u16) {
        (**self).set_duty(duty);
    }
}

/// [`PwmChannel`] implementation for `embedded-hal` PWM outputs.
///
/// Duty values are rescaled from `0..=MAX_DUTY` onto the channel's own
/// `max_duty_cycle()`. The carrier frequency is fixed when the PWM slice is
/// configured, so [`set_frequency`](PwmChannel::set_frequency) only records
/// the requested value.
pub struct HalChannel<P: SetDutyCycle> {
    pwm: P,
    max_duty: u16,
    frequency: u32,
}

impl<P: SetDutyCycle> HalChannel<P> {
    /// Wraps an `embedded-hal` PWM output.
    pub fn new(pwm: P) -> Self {
        let max_duty = pwm.max_duty_cycle();

        Self {
            pwm,
            max_duty,
            frequency: DEFAULT_FREQUENCY_HZ,
        }
    }

    /// Returns the last frequency requested.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Releases the wrapped PWM output.
    pub fn into_inner(self) -> P {
        self.pwm
    }

    fn scale(&self, duty: u16) -> u16 {
        let duty = u32::from(duty.min(MAX_DUTY));
        (duty * u32::from(self.max_duty) / u32::from(MAX_DUTY)) as u16
    }
}

impl<P: SetDutyCycle> PwmChannel for HalChannel<P> {
    fn set_frequency(&mut self, hz: u32) {
        self.frequency = hz;
    }

    fn set_duty(&mut self, duty: u16) {
        let scaled = self.scale(duty);
        let _ = self.pwm.set_duty_cycle(scaled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct FakePwm {
        max: u16,
        duty: u16,
    }

    impl ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn full_duty_maps_to_channel_max() {
        let mut channel = HalChannel::new(FakePwm { max: 1000, duty: 0 });
        channel.set_duty(MAX_DUTY);
        assert_eq!(channel.into_inner().duty, 1000);
    }

    #[test]
    fn zero_duty_stays_zero() {
        let mut channel = HalChannel::new(FakePwm { max: 1000, duty: 7 });
        channel.set_duty(0);
        assert_eq!(channel.into_inner().duty, 0);
    }

    #[test]
    fn duty_is_scaled_proportionally() {
        let mut channel = HalChannel::new(FakePwm { max: 255, duty: 0 });
        // 128^2 = 16384, 16384 * 255 / 65025 = 64
        channel.set_duty(128 * 128);
        assert_eq!(channel.into_inner().duty, 64);
    }

    #[test]
    fn frequency_is_recorded() {
        let mut channel = HalChannel::new(FakePwm { max: 255, duty: 0 });
        assert_eq!(channel.frequency(), DEFAULT_FREQUENCY_HZ);
        channel.set_frequency(500);
        assert_eq!(channel.frequency(), 500);
    }
}
