//! Core types shared by LEDs and LED packs.

/// Identifier of the hardware channel an LED is bound to (usually the GPIO number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

impl From<u8> for ChannelId {
    fn from(id: u8) -> Self {
        ChannelId(id)
    }
}

impl From<ChannelId> for u8 {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

/// Intensity targets for one or more LEDs, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Targets<'a> {
    /// The same value for every LED.
    Uniform(f32),

    /// One value per LED, matched by position.
    PerChannel(&'a [f32]),
}

impl<'a> Targets<'a> {
    /// Returns the target for the LED at `index`.
    ///
    /// `None` when a per-channel slice is too short.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        match self {
            Targets::Uniform(value) => Some(*value),
            Targets::PerChannel(values) => values.get(index).copied(),
        }
    }

    /// Checks that these targets address exactly `count` LEDs.
    pub fn check_count(&self, count: usize) -> Result<(), LedError> {
        match self {
            Targets::Uniform(_) => Ok(()),
            Targets::PerChannel(values) if values.len() == count => Ok(()),
            Targets::PerChannel(values) => Err(LedError::TargetCountMismatch {
                expected: count,
                actual: values.len(),
            }),
        }
    }
}

impl From<f32> for Targets<'_> {
    fn from(value: f32) -> Self {
        Targets::Uniform(value)
    }
}

impl<'a> From<&'a [f32]> for Targets<'a> {
    fn from(values: &'a [f32]) -> Self {
        Targets::PerChannel(values)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for Targets<'a> {
    fn from(values: &'a [f32; N]) -> Self {
        Targets::PerChannel(values)
    }
}

/// Errors raised by LED and LED pack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Duty ceiling outside `1..=255`.
    InvalidConfiguration {
        /// The rejected ceiling.
        max_duty: u16,
    },

    /// Transition target outside `0..=100` or a zero step count.
    OutOfRange,

    /// Two LEDs in a pack share the same channel.
    DuplicateChannel(ChannelId),

    /// The pack cannot hold more LEDs.
    CapacityExceeded,

    /// A per-channel target list does not match the number of LEDs.
    TargetCountMismatch {
        /// Number of LEDs addressed.
        expected: usize,
        /// Number of targets supplied.
        actual: usize,
    },
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::InvalidConfiguration { max_duty } => {
                write!(f, "bad value {} for max duty, should be in [1, 255]", max_duty)
            }
            LedError::OutOfRange => {
                write!(
                    f,
                    "transition target must be in [0, 100] with a non-zero step count"
                )
            }
            LedError::DuplicateChannel(id) => {
                write!(f, "channel {} is already used by another LED", id.0)
            }
            LedError::CapacityExceeded => {
                write!(f, "LED pack capacity exceeded")
            }
            LedError::TargetCountMismatch { expected, actual } => {
                write!(f, "expected {} targets, got {}", expected, actual)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LedError {}
