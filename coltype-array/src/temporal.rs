use std::sync::Arc;

use coltype_dtype::datetime::{TemporalJiff, TemporalMetadata, TimeUnit};
use coltype_error::{ColtypeResult, coltype_bail, coltype_err};

/// Dates, times and timestamps stored as 64-bit integers in one unit.
///
/// Values are never shifted by a time zone. Attaching one with [`with_time_zone`] changes only
/// how instants are presented.
///
/// [`with_time_zone`]: TemporalArray::with_time_zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalArray {
    values: Vec<i64>,
    metadata: TemporalMetadata,
}

impl TemporalArray {
    /// Days since 1970-01-01.
    pub fn new_date(values: Vec<i64>) -> Self {
        Self {
            values,
            metadata: TemporalMetadata::Date(TimeUnit::D),
        }
    }

    /// Times since midnight.
    pub fn new_time(values: Vec<i64>, time_unit: TimeUnit) -> ColtypeResult<Self> {
        if time_unit == TimeUnit::D {
            coltype_bail!("Invalid TimeUnit {} for time", time_unit);
        }
        Ok(Self {
            values,
            metadata: TemporalMetadata::Time(time_unit),
        })
    }

    /// Instants since the unix epoch.
    pub fn new_timestamp(
        values: Vec<i64>,
        time_unit: TimeUnit,
        time_zone: Option<Arc<str>>,
    ) -> ColtypeResult<Self> {
        if time_unit == TimeUnit::D {
            coltype_bail!("Invalid TimeUnit {} for timestamp", time_unit);
        }
        Ok(Self {
            values,
            metadata: TemporalMetadata::Timestamp(time_unit, time_zone),
        })
    }

    /// Attach a time zone to a timestamp array without changing its values.
    pub fn with_time_zone(self, time_zone: impl Into<Arc<str>>) -> ColtypeResult<Self> {
        match self.metadata {
            TemporalMetadata::Timestamp(unit, _) => Ok(Self {
                values: self.values,
                metadata: TemporalMetadata::Timestamp(unit, Some(time_zone.into())),
            }),
            other => coltype_bail!("cannot attach a time zone to {other}"),
        }
    }

    /// How the stored integers are interpreted.
    pub fn temporal_metadata(&self) -> &TemporalMetadata {
        &self.metadata
    }

    /// The stored integers.
    pub fn values(&self) -> &[i64] {
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

    /// The value at `index` as a calendar value.
    pub fn to_jiff(&self, index: usize) -> ColtypeResult<TemporalJiff> {
        let value = *self
            .values
            .get(index)
            .ok_or_else(|| coltype_err!(OutOfBounds: index, 0, self.len()))?;
        self.metadata.to_jiff(value)
    }
}
