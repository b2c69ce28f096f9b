//! Time abstraction traits for platform-agnostic timing.

use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Calculates the time elapsed since an earlier instant.
    ///
    /// Returns `Duration::ZERO` if `earlier` is actually later.
    fn duration_since(&self, earlier: Self) -> Duration;
}

/// Blocks the caller for `duration` using an `embedded-hal` delay provider.
///
/// Whole milliseconds go through `delay_ms`, the sub-millisecond remainder
/// through `delay_us`, so long waits cannot overflow the `u32` arguments.
pub fn block_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let millis = duration.as_millis().min(u128::from(u32::MAX)) as u32;
    let micros = duration.subsec_micros() % 1000;

    if millis > 0 {
        delay.delay_ms(millis);
    }
    if micros > 0 {
        delay.delay_us(micros);
    }
}
