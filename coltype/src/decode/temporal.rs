//! DATE, TIME and TIMESTAMP annotations, and legacy INT96 timestamps.

use coltype_array::{Int96, JULIAN_DAY_OF_EPOCH, LogicalArray, TemporalArray};
use coltype_dtype::LogicalType;
use coltype_dtype::datetime::TimeUnit;
use coltype_error::{ColtypeResult, coltype_bail, coltype_err};

use crate::ExecutionMode;
use crate::exec::decode_values;

const NANOS_PER_DAY: i64 = TimeUnit::D.nanos_per_unit();

pub(super) fn decode_date(values: &[i32]) -> LogicalArray {
    TemporalArray::new_date(values.iter().map(|&v| i64::from(v)).collect()).into()
}

pub(super) fn decode_time_millis(values: &[i32]) -> ColtypeResult<LogicalArray> {
    time(values.iter().map(|&v| i64::from(v)).collect(), TimeUnit::Ms)
}

pub(super) fn decode_time_micros(values: &[i64]) -> ColtypeResult<LogicalArray> {
    time(values.to_vec(), TimeUnit::Us)
}

fn time(values: Vec<i64>, unit: TimeUnit) -> ColtypeResult<LogicalArray> {
    TemporalArray::new_time(values, unit).map(LogicalArray::Temporal)
}

/// Normalise epoch offsets to nanoseconds.
pub(super) fn decode_timestamp(
    values: &[i64],
    logical: LogicalType,
    mode: ExecutionMode,
) -> ColtypeResult<LogicalArray> {
    let unit = match logical {
        LogicalType::TimestampMillis => TimeUnit::Ms,
        LogicalType::TimestampMicros => TimeUnit::Us,
        other => coltype_bail!("{other} is not a timestamp annotation"),
    };
    let nanos = decode_values(values.len(), mode, |i| {
        unit.rescale(values[i], TimeUnit::Ns).ok_or_else(|| {
            coltype_err!(
                Decode: i,
                logical,
                "{}{unit} is outside the nanosecond timestamp range",
                values[i]
            )
        })
    })?;
    timestamp(nanos)
}

/// Legacy timestamps: nanoseconds within a Julian day.
pub(super) fn decode_int96(values: &[Int96], mode: ExecutionMode) -> ColtypeResult<LogicalArray> {
    let nanos = decode_values(values.len(), mode, |i| {
        let value = values[i];
        (i64::from(value.julian_day()) - JULIAN_DAY_OF_EPOCH)
            .checked_mul(NANOS_PER_DAY)
            .and_then(|day_nanos| day_nanos.checked_add(value.nanos_of_day()))
            .ok_or_else(|| {
                coltype_err!(
                    Decode: i,
                    "INT96",
                    "{value} is outside the nanosecond timestamp range"
                )
            })
    })?;
    timestamp(nanos)
}

fn timestamp(nanos: Vec<i64>) -> ColtypeResult<LogicalArray> {
    TemporalArray::new_timestamp(nanos, TimeUnit::Ns, None).map(LogicalArray::Temporal)
}
