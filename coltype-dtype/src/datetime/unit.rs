use std::fmt::{Display, Formatter};

use coltype_error::{ColtypeResult, coltype_err};
use jiff::SignedDuration;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The resolution of temporal values.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TimeUnit {
    /// Nanoseconds
    Ns = 0,
    /// Microseconds
    Us = 1,
    /// Milliseconds
    Ms = 2,
    /// Seconds
    S = 3,
    /// Days
    D = 4,
}

impl TimeUnit {
    /// The number of nanoseconds in one unit.
    pub const fn nanos_per_unit(&self) -> i64 {
        match self {
            Self::Ns => 1,
            Self::Us => 1_000,
            Self::Ms => 1_000_000,
            Self::S => 1_000_000_000,
            Self::D => 86_400_000_000_000,
        }
    }

    /// Rescale `value` from this unit into `target`, which must be at least as fine.
    ///
    /// Returns `None` when the result does not fit in an `i64` or `target` is coarser.
    pub fn rescale(&self, value: i64, target: TimeUnit) -> Option<i64> {
        let from = self.nanos_per_unit();
        let to = target.nanos_per_unit();
        if from % to != 0 {
            return None;
        }
        value.checked_mul(from / to)
    }

    /// The span covered by `value` units.
    pub fn to_signed_duration(&self, value: i64) -> ColtypeResult<SignedDuration> {
        Ok(match self {
            Self::Ns => SignedDuration::from_nanos(value),
            Self::Us => SignedDuration::from_micros(value),
            Self::Ms => SignedDuration::from_millis(value),
            Self::S => SignedDuration::from_secs(value),
            Self::D => SignedDuration::from_secs(
                value
                    .checked_mul(86_400)
                    .ok_or_else(|| coltype_err!("{value} days overflows a duration"))?,
            ),
        })
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ns => write!(f, "ns"),
            Self::Us => write!(f, "µs"),
            Self::Ms => write!(f, "ms"),
            Self::S => write!(f, "s"),
            Self::D => write!(f, "days"),
        }
    }
}
