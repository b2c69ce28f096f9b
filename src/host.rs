//! Host-side backends for running a session on a desktop machine.
//!
//! [`LogChannel`] stands in for a PWM output by logging every duty write,
//! [`StdClock`] and [`StdDelay`] map timing onto `std::time` and
//! `std::thread::sleep`.

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use log::trace;

use crate::pwm::PwmChannel;
use crate::time::{TimeInstant, TimeSource};

impl TimeInstant for Instant {
    fn duration_since(&self, earlier: Self) -> Duration {
        self.saturating_duration_since(earlier)
    }
}

/// Monotonic clock backed by [`std::time::Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl TimeSource<Instant> for StdClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Blocking delay backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

/// A PWM channel that only logs what it is told.
#[derive(Debug, Clone, Copy)]
pub struct LogChannel {
    pin: u8,
    frequency: u32,
    duty: u16,
}

impl LogChannel {
    /// Creates a channel labelled with `pin`.
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            frequency: 0,
            duty: 0,
        }
    }

    /// Returns the last duty written.
    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Returns the last frequency set.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}

impl PwmChannel for LogChannel {
    fn set_frequency(&mut self, hz: u32) {
        self.frequency = hz;
        trace!("pin {}: frequency {} Hz", self.pin, hz);
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
        trace!("pin {}: duty {}", self.pin, duty);
    }
}
