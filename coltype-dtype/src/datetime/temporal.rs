use std::fmt::{Display, Formatter};
use std::sync::Arc;

use coltype_error::{ColtypeResult, coltype_bail, coltype_err};
use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp, Zoned};

use crate::datetime::TimeUnit;

const EPOCH_DATE: Date = jiff::civil::date(1970, 1, 1);

/// Metadata describing how the integer values of a temporal array are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemporalMetadata {
    /// Calendar dates, counted in `TimeUnit` since 1970-01-01.
    Date(TimeUnit),
    /// Times of day, counted in `TimeUnit` since midnight.
    Time(TimeUnit),
    /// Instants, counted in `TimeUnit` since 1970-01-01T00:00:00 UTC, with an optional
    /// time zone attached by the caller for display.
    Timestamp(TimeUnit, Option<Arc<str>>),
}

impl TemporalMetadata {
    /// The unit of the stored values.
    pub fn time_unit(&self) -> TimeUnit {
        match self {
            Self::Date(unit) | Self::Time(unit) | Self::Timestamp(unit, _) => *unit,
        }
    }

    /// The time zone of a timestamp, if one has been attached.
    pub fn time_zone(&self) -> Option<&str> {
        match self {
            Self::Timestamp(_, tz) => tz.as_deref(),
            _ => None,
        }
    }

    /// Interpret a stored value as a calendar value.
    pub fn to_jiff(&self, v: i64) -> ColtypeResult<TemporalJiff> {
        match self {
            Self::Date(TimeUnit::D) => {
                let span = Span::new()
                    .try_days(v)
                    .map_err(|e| coltype_err!("{v} days is not a valid span: {e}"))?;
                EPOCH_DATE
                    .checked_add(span)
                    .map(TemporalJiff::Date)
                    .map_err(|e| coltype_err!("{v} days since epoch is out of range: {e}"))
            }
            Self::Date(unit) => coltype_bail!("Invalid TimeUnit {} for date", unit),
            Self::Time(unit @ (TimeUnit::Ns | TimeUnit::Us | TimeUnit::Ms | TimeUnit::S)) => {
                let since_midnight = unit.to_signed_duration(v)?;
                Time::midnight()
                    .checked_add(since_midnight)
                    .map(TemporalJiff::Time)
                    .map_err(|e| coltype_err!("{v}{unit} is not a time of day: {e}"))
            }
            Self::Time(unit) => coltype_bail!("Invalid TimeUnit {} for time", unit),
            Self::Timestamp(unit, tz) => {
                let ts = match unit {
                    TimeUnit::Ns => Timestamp::from_nanosecond(v as i128),
                    TimeUnit::Us => Timestamp::from_microsecond(v),
                    TimeUnit::Ms => Timestamp::from_millisecond(v),
                    TimeUnit::S => Timestamp::from_second(v),
                    TimeUnit::D => coltype_bail!("Invalid TimeUnit {} for timestamp", unit),
                }
                .map_err(|e| coltype_err!("{v}{unit} is out of range for a timestamp: {e}"))?;

                match tz {
                    None => Ok(TemporalJiff::Timestamp(ts)),
                    Some(tz) => Ok(TemporalJiff::Zoned(ts.to_zoned(lookup_time_zone(tz)?))),
                }
            }
        }
    }
}

fn lookup_time_zone(name: &str) -> ColtypeResult<TimeZone> {
    // UTC must resolve even where no tz database is installed.
    if name.eq_ignore_ascii_case("UTC") {
        return Ok(TimeZone::UTC);
    }
    TimeZone::get(name).map_err(|e| coltype_err!("unknown time zone {name}: {e}"))
}

impl Display for TemporalMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(unit) => write!(f, "date[{unit}]"),
            Self::Time(unit) => write!(f, "time[{unit}]"),
            Self::Timestamp(unit, None) => write!(f, "timestamp[{unit}]"),
            Self::Timestamp(unit, Some(tz)) => write!(f, "timestamp[{unit}, tz={tz}]"),
        }
    }
}

/// A calendar value produced from a temporal array element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalJiff {
    /// An instant without a time zone.
    Timestamp(Timestamp),
    /// An instant in a time zone.
    Zoned(Zoned),
    /// A calendar date.
    Date(Date),
    /// A time of day.
    Time(Time),
}

impl Display for TemporalJiff {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TemporalJiff::Timestamp(ts) => write!(f, "{ts}"),
            TemporalJiff::Zoned(zoned) => write!(f, "{zoned}"),
            TemporalJiff::Date(date) => write!(f, "{date}"),
            TemporalJiff::Time(time) => write!(f, "{time}"),
        }
    }
}
