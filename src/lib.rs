#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PwmChannel`**: Trait to implement for your PWM hardware (`HalChannel` adapts `embedded-hal`)
//! - **`Led`**: One PWM channel with an intensity in percent and a steppable linear transition
//! - **`LedPack`**: Several LEDs driven together, e.g. the three channels of an RGB LED
//! - **`Targets`**: One intensity for every LED (`Uniform`) or one per LED (`PerChannel`)
//! - **`period_seconds`**: Breath length at a point in the session, from a linearly changing rate
//! - **`BreathConfig`**: Rates, session length and peak color of a breathing session
//! - **`run_session`**: Blocking loop that breathes a `Lamp` until the session is over
//! - **`TimeSource`**: Trait to implement for your clock
//!
//! Intensities are `f32` percentages in `0..=100`. Duty values written to the
//! hardware are the square of the percentage scaled by the LED's ceiling, so
//! they span `0..=65025`.

pub mod breath;
pub mod colors;
pub mod config;
#[cfg(feature = "std")]
pub mod host;
pub mod led;
pub mod pack;
pub mod pwm;
pub mod schedule;
pub mod time;
pub mod types;

pub use breath::{BreathError, Lamp, SessionSummary, run_session};
pub use config::{BreathColor, BreathConfig, LedConfig, ONBOARD_LED, RGB_LEDS};
pub use led::{DEFAULT_STEPS, Led};
pub use pack::LedPack;
pub use pwm::{DEFAULT_FREQUENCY_HZ, HalChannel, MAX_DUTY, PwmChannel};
pub use schedule::{ScheduleError, period_seconds};
pub use time::{TimeInstant, TimeSource, block_for};
pub use types::{ChannelId, LedError, Targets};

/// An LED pack sized for one RGB LED.
pub type RgbPack<C> = LedPack<C, 3>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_compile() {
        let _ = Targets::Uniform(50.0);
        let _ = Targets::PerChannel(&[10.0, 20.0, 30.0]);
        let _ = BreathColor::Steady { percent: 100.0 };
        let _ = ChannelId(25);
    }
}
