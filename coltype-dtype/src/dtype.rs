use std::fmt::{Display, Formatter};

use crate::datetime::TemporalMetadata;
use crate::{DecimalDType, PType, PhysicalType};

/// The type of the values produced by decoding a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicalDType {
    /// Values passed through undecoded, of the given physical type.
    Physical(PhysicalType),
    /// Fixed-width native numbers.
    Primitive(PType),
    /// Exact decimals: unscaled 256-bit integers with the given precision and scale.
    Decimal(DecimalDType),
    /// Dates, times and timestamps stored as 64-bit integers.
    Temporal(TemporalMetadata),
    /// UTF-8 text.
    Utf8,
    /// Nested documents (objects, arrays, strings, numbers, booleans and nulls).
    Json,
    /// Calendar intervals of months, days and milliseconds.
    Interval,
}

impl LogicalDType {
    /// Whether this is a fixed-width native number type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Whether this is a temporal type.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Temporal(_))
    }

    /// The native type of primitive values, if this is a primitive type.
    pub fn as_ptype(&self) -> Option<PType> {
        match self {
            Self::Primitive(ptype) => Some(*ptype),
            _ => None,
        }
    }
}

impl Display for LogicalDType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical(physical) => write!(f, "physical({physical})"),
            Self::Primitive(ptype) => write!(f, "{ptype}"),
            Self::Decimal(decimal) => write!(f, "{decimal}"),
            Self::Temporal(temporal) => write!(f, "{temporal}"),
            Self::Utf8 => write!(f, "utf8"),
            Self::Json => write!(f, "json"),
            Self::Interval => write!(f, "interval"),
        }
    }
}
