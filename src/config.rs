//! Session and board configuration.

use core::time::Duration;

use crate::schedule::{ScheduleError, period_seconds};

/// Pin and duty ceiling of one LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// GPIO number the LED is soldered to.
    pub pin: u8,

    /// Duty ceiling in `1..=255`.
    pub max_duty: u16,
}

impl LedConfig {
    /// Creates an LED configuration.
    pub const fn new(pin: u8, max_duty: u16) -> Self {
        Self { pin, max_duty }
    }
}

/// The on-board LED of a Raspberry Pi Pico.
pub const ONBOARD_LED: LedConfig = LedConfig::new(25, 255);

/// An RGB LED soldered to GPIO13, GPIO14 and GPIO15.
///
/// Ceilings are tuned by hand so that 100 % on every channel appears white.
pub const RGB_LEDS: [LedConfig; 3] = [
    LedConfig::new(13, 255),
    LedConfig::new(14, 210),
    LedConfig::new(15, 160),
];

/// What each breath lights up to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BreathColor {
    /// Every channel ramps to the same intensity.
    Steady {
        /// Peak intensity in percent.
        percent: f32,
    },

    /// A three-channel LED ramps to a random hue each breath.
    RandomHue {
        /// HSV saturation, 0.0-1.0.
        saturation: f32,
        /// HSV value, 0.0-1.0. Caps overall brightness.
        value: f32,
    },
}

/// Parameters of a breathing session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreathConfig {
    /// Breaths per minute at the start of the session.
    pub start_rate: f32,

    /// Breaths per minute at the end of the session.
    pub end_rate: f32,

    /// Total session length.
    pub session: Duration,

    /// Number of steps per ramp.
    pub ramp_steps: u32,

    /// Time held at peak between ramp up and ramp down.
    pub hold: Duration,

    /// Length of the ramp back down to off.
    pub ramp_down: Duration,

    /// Peak color of each breath.
    pub color: BreathColor,
}

impl Default for BreathConfig {
    fn default() -> Self {
        Self {
            start_rate: 11.0,
            end_rate: 5.0,
            session: Duration::from_secs(10 * 60),
            ramp_steps: crate::led::DEFAULT_STEPS,
            hold: Duration::ZERO,
            ramp_down: Duration::from_secs(1),
            color: BreathColor::Steady { percent: 100.0 },
        }
    }
}

impl BreathConfig {
    /// Default session on an RGB LED, with a random hue per breath.
    pub fn rgb() -> Self {
        Self {
            color: BreathColor::RandomHue {
                saturation: 1.0,
                value: 0.6,
            },
            ..Self::default()
        }
    }

    /// Session length in minutes.
    pub fn session_minutes(&self) -> f32 {
        self.session.as_secs_f32() / 60.0
    }

    /// Returns the breath period at `elapsed` into the session.
    ///
    /// # Errors
    /// * `DegenerateSchedule` - See [`period_seconds`]
    pub fn period_at(&self, elapsed: Duration) -> Result<Duration, ScheduleError> {
        let seconds = period_seconds(
            elapsed.as_secs_f32(),
            self.start_rate,
            self.end_rate,
            self.session_minutes(),
        )?;
        Duration::try_from_secs_f32(seconds).map_err(|_| ScheduleError::DegenerateSchedule)
    }

    /// Checks that the schedule stays well-defined for the whole session.
    ///
    /// The rate is linear in time, so checking both ends covers every point
    /// in between.
    ///
    /// # Errors
    /// * `DegenerateSchedule` - Zero-length session, zero ramp steps, or a
    ///   non-positive rate at either end
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.ramp_steps == 0 {
            return Err(ScheduleError::DegenerateSchedule);
        }
        self.period_at(Duration::ZERO)?;
        self.period_at(self.session)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_ten_minute_session() {
        let config = BreathConfig::default();
        assert_eq!(config.start_rate, 11.0);
        assert_eq!(config.end_rate, 5.0);
        assert_eq!(config.session_minutes(), 10.0);
        assert_eq!(config.hold, Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rgb_preset_uses_random_hue() {
        let config = BreathConfig::rgb();
        assert!(matches!(config.color, BreathColor::RandomHue { .. }));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_end_rate() {
        let config = BreathConfig {
            end_rate: 0.0,
            ..BreathConfig::default()
        };
        assert_eq!(config.validate(), Err(ScheduleError::DegenerateSchedule));
    }

    #[test]
    fn rejects_empty_session() {
        let config = BreathConfig {
            session: Duration::ZERO,
            ..BreathConfig::default()
        };
        assert_eq!(config.validate(), Err(ScheduleError::DegenerateSchedule));
    }

    #[test]
    fn rejects_zero_ramp_steps() {
        let config = BreathConfig {
            ramp_steps: 0,
            ..BreathConfig::default()
        };
        assert_eq!(config.validate(), Err(ScheduleError::DegenerateSchedule));
    }

    #[test]
    fn rgb_preset_pins_are_distinct() {
        assert_ne!(RGB_LEDS[0].pin, RGB_LEDS[1].pin);
        assert_ne!(RGB_LEDS[1].pin, RGB_LEDS[2].pin);
        assert_ne!(RGB_LEDS[0].pin, RGB_LEDS[2].pin);
    }
}
