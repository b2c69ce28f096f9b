//! Shared test infrastructure for breathing-led integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::time::Duration;

use breathing_led::{ChannelId, Led, LedPack, PwmChannel, TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;

// ============================================================================
// Mock PWM Channel
// ============================================================================

/// Mock PWM channel that records duty writes for testing
pub struct MockChannel {
    frequency: u32,
    last_duty: u16,
    write_count: usize,
    duty_history: heapless::Vec<u16, 256>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self {
            frequency: 0,
            last_duty: 0,
            write_count: 0,
            duty_history: heapless::Vec::new(),
        }
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn last_duty(&self) -> u16 {
        self.last_duty
    }

    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// First 256 duty writes
    pub fn duty_history(&self) -> &[u16] {
        &self.duty_history
    }
}

impl PwmChannel for MockChannel {
    fn set_frequency(&mut self, hz: u32) {
        self.frequency = hz;
    }

    fn set_duty(&mut self, duty: u16) {
        self.last_duty = duty;
        self.write_count += 1;
        let _ = self.duty_history.push(duty);
    }
}

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock instant type for testing (wraps nanoseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    fn duration_since(&self, earlier: Self) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of nanoseconds
    pub fn advance_ns(&self, ns: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + ns));
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.current_time.get().0)
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

/// Delay that advances a mock clock instead of sleeping
pub struct MockDelay<'t> {
    clock: &'t MockTimeSource,
    calls: usize,
}

impl<'t> MockDelay<'t> {
    pub fn new(clock: &'t MockTimeSource) -> Self {
        Self { clock, calls: 0 }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.clock.advance_ns(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.clock.advance_ns(u64::from(ms) * 1_000_000);
    }
}

// ============================================================================
// Mock Random Source
// ============================================================================

/// Random source that always returns the same value
pub struct FixedRng(pub u32);

impl rand_core::RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.0)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0 as u8);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn led(pin: u8, max_duty: u16) -> Led<MockChannel> {
    Led::new(ChannelId(pin), MockChannel::new(), max_duty).unwrap()
}

pub fn rgb_pack() -> LedPack<MockChannel, 3> {
    let mut pack = LedPack::new();
    pack.push(led(13, 255)).unwrap();
    pack.push(led(14, 210)).unwrap();
    pack.push(led(15, 160)).unwrap();
    pack
}

/// Compare two intensities with floating-point tolerance
pub fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.001;
    (a - b).abs() < EPSILON
}
