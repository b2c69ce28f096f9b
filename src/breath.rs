//! The breathing session driver.
//!
//! [`run_session`] pulses a [`Lamp`] on and off, one breath per schedule
//! period, until the configured session length has elapsed. Everything blocks:
//! waits go through an `embedded-hal` delay provider and the session clock is
//! only read between breaths.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use log::{debug, info};
use rand_core::RngCore;

use crate::colors::{hsv_percents, random_hue};
use crate::config::{BreathColor, BreathConfig};
use crate::led::Led;
use crate::pack::LedPack;
use crate::pwm::PwmChannel;
use crate::schedule::ScheduleError;
use crate::time::{TimeInstant, TimeSource, block_for};
use crate::types::{LedError, Targets};

/// Something a breathing session can drive: a single LED or an LED pack.
pub trait Lamp {
    /// Number of independently driven channels.
    fn channel_count(&self) -> usize;

    /// Immediately sets every channel.
    fn set_all(&mut self, targets: Targets<'_>) -> Result<(), LedError>;

    /// Ramps every channel to its target over `duration`, blocking.
    fn ramp<D: DelayNs>(
        &mut self,
        targets: Targets<'_>,
        duration: Duration,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), LedError>;
}

impl<C: PwmChannel> Lamp for Led<C> {
    fn channel_count(&self) -> usize {
        1
    }

    fn set_all(&mut self, targets: Targets<'_>) -> Result<(), LedError> {
        targets.check_count(1)?;
        if let Some(percent) = targets.get(0) {
            self.set_intensity(percent);
        }
        Ok(())
    }

    fn ramp<D: DelayNs>(
        &mut self,
        targets: Targets<'_>,
        duration: Duration,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), LedError> {
        targets.check_count(1)?;
        let target = targets.get(0).ok_or(LedError::TargetCountMismatch {
            expected: 1,
            actual: 0,
        })?;
        self.transition_blocking(target, duration, steps, delay)
    }
}

impl<C: PwmChannel, const N: usize> Lamp for LedPack<C, N> {
    fn channel_count(&self) -> usize {
        self.len()
    }

    fn set_all(&mut self, targets: Targets<'_>) -> Result<(), LedError> {
        self.set_intensity(targets)
    }

    fn ramp<D: DelayNs>(
        &mut self,
        targets: Targets<'_>,
        duration: Duration,
        steps: u32,
        delay: &mut D,
    ) -> Result<(), LedError> {
        self.transition_blocking(targets, duration, steps, delay)
    }
}

/// Errors that can end a breathing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BreathError {
    /// An LED operation failed.
    Led(LedError),

    /// The schedule produced no usable period.
    Schedule(ScheduleError),
}

impl core::fmt::Display for BreathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BreathError::Led(err) => write!(f, "led error: {}", err),
            BreathError::Schedule(err) => write!(f, "schedule error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BreathError {}

impl From<LedError> for BreathError {
    fn from(err: LedError) -> Self {
        BreathError::Led(err)
    }
}

impl From<ScheduleError> for BreathError {
    fn from(err: ScheduleError) -> Self {
        BreathError::Schedule(err)
    }
}

/// Outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionSummary {
    /// Number of full breaths performed.
    pub breaths: u32,

    /// Time measured from the start of the session to the end of the last breath.
    pub elapsed: Duration,
}

/// Runs a complete breathing session on `lamp`.
///
/// Each breath switches the lamp off, ramps up over half the period, holds for
/// `config.hold`, ramps down over `config.ramp_down`, and stays off for the
/// rest of the second half-period. The period is recomputed from the clock
/// after every breath; the session ends once `config.session` has elapsed.
///
/// # Errors
/// * `Schedule(DegenerateSchedule)` - The configuration yields a non-positive rate
/// * `Led(TargetCountMismatch)` - `RandomHue` on a lamp without exactly 3 channels
/// * `Led(OutOfRange)` - A `Steady` peak outside `0..=100`
pub fn run_session<L, I, T, D, R>(
    lamp: &mut L,
    config: &BreathConfig,
    clock: &T,
    delay: &mut D,
    rng: &mut R,
) -> Result<SessionSummary, BreathError>
where
    L: Lamp,
    I: TimeInstant,
    T: TimeSource<I>,
    D: DelayNs,
    R: RngCore,
{
    config.validate()?;
    if let BreathColor::RandomHue { .. } = config.color {
        Targets::PerChannel(&[0.0; 3]).check_count(lamp.channel_count())?;
    }

    debug!(
        "breathing from {} to {} per minute over {} s",
        config.start_rate,
        config.end_rate,
        config.session.as_secs()
    );

    let start = clock.now();
    let mut elapsed = Duration::ZERO;
    let mut breaths = 0;

    while elapsed < config.session {
        let period = config.period_at(elapsed)?;
        info!("seconds per breath = {}", period.as_secs_f32());

        let percents;
        let peak = match config.color {
            BreathColor::Steady { percent } => Targets::Uniform(percent),
            BreathColor::RandomHue { saturation, value } => {
                let hue = random_hue(rng);
                percents = hsv_percents(hue, saturation, value);
                debug!("hue {} -> {:?}", hue, percents);
                Targets::PerChannel(&percents)
            }
        };

        breathe(lamp, peak, period, config, delay)?;
        breaths += 1;
        elapsed = clock.now().duration_since(start);
    }

    debug!("session done: {} breaths in {} s", breaths, elapsed.as_secs());
    Ok(SessionSummary { breaths, elapsed })
}

fn breathe<L: Lamp, D: DelayNs>(
    lamp: &mut L,
    peak: Targets<'_>,
    period: Duration,
    config: &BreathConfig,
    delay: &mut D,
) -> Result<(), LedError> {
    let half = period / 2;

    lamp.set_all(Targets::Uniform(0.0))?;
    lamp.ramp(peak, half, config.ramp_steps, delay)?;
    block_for(delay, config.hold);
    lamp.ramp(Targets::Uniform(0.0), config.ramp_down, config.ramp_steps, delay)?;
    block_for(delay, half.saturating_sub(config.ramp_down));
    Ok(())
}
