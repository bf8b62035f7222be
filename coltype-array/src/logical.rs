use coltype_dtype::{LogicalDType, PType};
use coltype_error::{ColtypeResult, coltype_err};

use crate::{DecimalArray, IntervalArray, NativeValue, PhysicalArray, PrimitiveArray, TemporalArray};

/// The output of logical conversion for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalArray {
    /// Values passed through unchanged.
    Physical(PhysicalArray),
    /// Reinterpreted integers, or decimals decoded as floats.
    Primitive(PrimitiveArray),
    /// Exact decimals.
    Decimal(DecimalArray),
    /// Dates, times and timestamps.
    Temporal(TemporalArray),
    /// Text.
    Utf8(Vec<String>),
    /// Nested documents decoded from JSON text or BSON.
    Json(Vec<serde_json::Value>),
    /// Calendar intervals.
    Interval(IntervalArray),
}

impl LogicalArray {
    /// The number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Physical(a) => a.len(),
            Self::Primitive(a) => a.len(),
            Self::Decimal(a) => a.len(),
            Self::Temporal(a) => a.len(),
            Self::Utf8(a) => a.len(),
            Self::Json(a) => a.len(),
            Self::Interval(a) => a.len(),
        }
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The type of the values.
    pub fn dtype(&self) -> LogicalDType {
        match self {
            Self::Physical(a) => LogicalDType::Physical(a.physical_type()),
            Self::Primitive(a) => LogicalDType::Primitive(a.ptype()),
            Self::Decimal(a) => LogicalDType::Decimal(a.decimal_dtype()),
            Self::Temporal(a) => LogicalDType::Temporal(a.temporal_metadata().clone()),
            Self::Utf8(_) => LogicalDType::Utf8,
            Self::Json(_) => LogicalDType::Json,
            Self::Interval(_) => LogicalDType::Interval,
        }
    }

    /// The undecoded values of a pass-through column.
    pub fn as_physical(&self) -> ColtypeResult<&PhysicalArray> {
        match self {
            Self::Physical(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: "physical", other.dtype())),
        }
    }

    /// The values of a primitive column.
    pub fn as_primitive(&self) -> ColtypeResult<&PrimitiveArray> {
        match self {
            Self::Primitive(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: "primitive", other.dtype())),
        }
    }

    /// The values of a primitive column as native `T`.
    pub fn as_slice<T: NativeValue>(&self) -> ColtypeResult<&[T]> {
        match self {
            Self::Primitive(a) => a.as_slice::<T>(),
            other => Err(coltype_err!(MismatchedTypes: T::PTYPE, other.dtype())),
        }
    }

    /// Decimals decoded as floats.
    pub fn as_f64(&self) -> ColtypeResult<&[f64]> {
        self.as_slice::<f64>()
            .map_err(|_| coltype_err!(MismatchedTypes: PType::F64, self.dtype()))
    }

    /// The values of an exact decimal column.
    pub fn as_decimal(&self) -> ColtypeResult<&DecimalArray> {
        match self {
            Self::Decimal(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: "decimal", other.dtype())),
        }
    }

    /// The values of a temporal column.
    pub fn as_temporal(&self) -> ColtypeResult<&TemporalArray> {
        match self {
            Self::Temporal(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: "temporal", other.dtype())),
        }
    }

    /// The strings of a text column.
    pub fn as_utf8(&self) -> ColtypeResult<&[String]> {
        match self {
            Self::Utf8(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: LogicalDType::Utf8, other.dtype())),
        }
    }

    /// The documents of a JSON or BSON column.
    pub fn as_json(&self) -> ColtypeResult<&[serde_json::Value]> {
        match self {
            Self::Json(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: LogicalDType::Json, other.dtype())),
        }
    }

    /// The values of an interval column.
    pub fn as_interval(&self) -> ColtypeResult<&IntervalArray> {
        match self {
            Self::Interval(a) => Ok(a),
            other => Err(coltype_err!(MismatchedTypes: LogicalDType::Interval, other.dtype())),
        }
    }

    /// Attach a time zone to a timestamp column.
    pub fn with_time_zone(self, time_zone: &str) -> ColtypeResult<Self> {
        match self {
            Self::Temporal(a) => a.with_time_zone(time_zone).map(Self::Temporal),
            other => Err(coltype_err!("cannot attach a time zone to {}", other.dtype())),
        }
    }
}

impl From<PhysicalArray> for LogicalArray {
    fn from(value: PhysicalArray) -> Self {
        Self::Physical(value)
    }
}

impl From<PrimitiveArray> for LogicalArray {
    fn from(value: PrimitiveArray) -> Self {
        Self::Primitive(value)
    }
}

impl From<DecimalArray> for LogicalArray {
    fn from(value: DecimalArray) -> Self {
        Self::Decimal(value)
    }
}

impl From<TemporalArray> for LogicalArray {
    fn from(value: TemporalArray) -> Self {
        Self::Temporal(value)
    }
}

impl From<IntervalArray> for LogicalArray {
    fn from(value: IntervalArray) -> Self {
        Self::Interval(value)
    }
}
