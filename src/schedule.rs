//! Breathing-period schedule.
//!
//! The breathing rate (breaths per minute) moves linearly from a start rate to
//! an end rate over the session. [`period_seconds`] turns that rate into the
//! length of one full breath.

/// Errors raised by the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleError {
    /// The interpolated rate is not positive, or an input is not finite.
    DegenerateSchedule,
}

impl core::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScheduleError::DegenerateSchedule => {
                write!(f, "breathing rate must stay positive over a non-empty session")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScheduleError {}

/// Returns the number of seconds in one breath after `elapsed_seconds`.
///
/// `rate = start_rate + (end_rate - start_rate) * (elapsed_seconds / 60) / duration_minutes`,
/// and the period is `60 / rate`.
///
/// # Errors
/// * `DegenerateSchedule` - `duration_minutes` is not positive, an input is
///   not finite, or the rate at `elapsed_seconds` is not positive
pub fn period_seconds(
    elapsed_seconds: f32,
    start_rate: f32,
    end_rate: f32,
    duration_minutes: f32,
) -> Result<f32, ScheduleError> {
    let inputs = [elapsed_seconds, start_rate, end_rate, duration_minutes];
    if inputs.iter().any(|v| !v.is_finite()) || duration_minutes <= 0.0 {
        return Err(ScheduleError::DegenerateSchedule);
    }

    let rate = start_rate + (end_rate - start_rate) * (elapsed_seconds / 60.0) / duration_minutes;
    if rate <= 0.0 {
        return Err(ScheduleError::DegenerateSchedule);
    }

    Ok(60.0 / rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;

    #[test]
    fn start_of_session_uses_start_rate() {
        assert_eq!(period_seconds(0.0, 11.0, 5.0, 10.0), Ok(60.0 / 11.0));
    }

    #[test]
    fn end_of_session_uses_end_rate() {
        assert_eq!(period_seconds(600.0, 11.0, 5.0, 10.0), Ok(60.0 / 5.0));
    }

    #[test]
    fn midpoint_uses_mean_rate() {
        let period = period_seconds(300.0, 11.0, 5.0, 10.0).unwrap();
        assert!((period - 7.5).abs() < 1e-5);
    }

    #[test]
    fn constant_rate_gives_constant_period() {
        assert_eq!(period_seconds(123.0, 6.0, 6.0, 10.0), Ok(10.0));
    }

    #[test]
    fn zero_rate_is_degenerate() {
        assert_eq!(
            period_seconds(600.0, 11.0, 0.0, 10.0),
            Err(ScheduleError::DegenerateSchedule)
        );
    }

    #[test]
    fn negative_rate_is_degenerate() {
        assert_eq!(
            period_seconds(1200.0, 10.0, 5.0, 1.0),
            Err(ScheduleError::DegenerateSchedule)
        );
    }

    #[test]
    fn zero_duration_is_degenerate() {
        assert_eq!(
            period_seconds(0.0, 11.0, 5.0, 0.0),
            Err(ScheduleError::DegenerateSchedule)
        );
    }

    #[test]
    fn non_finite_input_is_degenerate() {
        assert_eq!(
            period_seconds(f32::NAN, 11.0, 5.0, 10.0),
            Err(ScheduleError::DegenerateSchedule)
        );
    }
}
