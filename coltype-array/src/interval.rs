use std::fmt::{Display, Formatter};

use coltype_error::{ColtypeResult, coltype_bail, coltype_err};
use jiff::Span;

/// Byte width of a stored interval.
pub const INTERVAL_WIDTH: usize = 12;

/// A calendar interval: months, days and milliseconds, each counted separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Whole months.
    pub months: u32,
    /// Whole days.
    pub days: u32,
    /// Milliseconds.
    pub millis: u32,
}

impl Interval {
    /// Create a new interval.
    pub const fn new(months: u32, days: u32, millis: u32) -> Self {
        Self {
            months,
            days,
            millis,
        }
    }

    /// Decode three little-endian unsigned 32-bit fields.
    pub fn try_from_le_bytes(bytes: &[u8]) -> ColtypeResult<Self> {
        let Ok(bytes) = <[u8; INTERVAL_WIDTH]>::try_from(bytes) else {
            coltype_bail!(
                SchemaMismatch: "interval needs {INTERVAL_WIDTH} bytes, got {}",
                bytes.len()
            );
        };
        let field = |i: usize| {
            u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Ok(Self::new(field(0), field(4), field(8)))
    }

    /// The interval as a calendar span.
    pub fn to_span(&self) -> ColtypeResult<Span> {
        Span::new()
            .try_months(i64::from(self.months))
            .and_then(|s| s.try_days(i64::from(self.days)))
            .and_then(|s| s.try_milliseconds(i64::from(self.millis)))
            .map_err(|e| coltype_err!("{self} is not a valid span: {e}"))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} months {} days {} ms",
            self.months, self.days, self.millis
        )
    }
}

/// Decoded intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalArray {
    values: Vec<Interval>,
}

impl IntervalArray {
    /// Create a new array.
    pub fn new(values: Vec<Interval>) -> Self {
        Self { values }
    }

    /// The intervals.
    pub fn values(&self) -> &[Interval] {
        &self.values
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Interval> for IntervalArray {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
