use std::fmt::{Display, Formatter};

use num_enum::FromPrimitive;

use crate::PhysicalType;

/// The semantic interpretation a column's schema imposes on its physical values.
///
/// Discriminants of the known annotations match the converted-type wire codes of the column
/// metadata. Codes outside the catalog are kept as [`LogicalType::Unrecognized`] and decode as a
/// pass-through, the same as [`LogicalType::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(i32)]
pub enum LogicalType {
    /// No annotation. Never written to the wire; an absent converted type maps here.
    None = -1,
    /// UTF-8 encoded text.
    Utf8 = 0,
    /// Group annotation for maps.
    Map = 1,
    /// Group annotation for map entries.
    MapKeyValue = 2,
    /// Group annotation for lists.
    List = 3,
    /// Enumerated text values.
    Enum = 4,
    /// Unscaled integer plus a schema-level scale.
    Decimal = 5,
    /// Days since the unix epoch.
    Date = 6,
    /// Milliseconds since midnight.
    TimeMillis = 7,
    /// Microseconds since midnight.
    TimeMicros = 8,
    /// Milliseconds since the unix epoch.
    TimestampMillis = 9,
    /// Microseconds since the unix epoch.
    TimestampMicros = 10,
    /// Unsigned 8-bit integer stored in an INT32.
    #[cfg_attr(feature = "serde", serde(rename = "UINT_8"))]
    Uint8 = 11,
    /// Unsigned 16-bit integer stored in an INT32.
    #[cfg_attr(feature = "serde", serde(rename = "UINT_16"))]
    Uint16 = 12,
    /// Unsigned 32-bit integer stored in an INT32.
    #[cfg_attr(feature = "serde", serde(rename = "UINT_32"))]
    Uint32 = 13,
    /// Unsigned 64-bit integer stored in an INT64.
    #[cfg_attr(feature = "serde", serde(rename = "UINT_64"))]
    Uint64 = 14,
    /// Signed 8-bit integer stored in an INT32.
    #[cfg_attr(feature = "serde", serde(rename = "INT_8"))]
    Int8 = 15,
    /// Signed 16-bit integer stored in an INT32.
    #[cfg_attr(feature = "serde", serde(rename = "INT_16"))]
    Int16 = 16,
    /// Signed 32-bit integer stored in an INT32.
    #[cfg_attr(feature = "serde", serde(rename = "INT_32"))]
    Int32 = 17,
    /// Signed 64-bit integer stored in an INT64.
    #[cfg_attr(feature = "serde", serde(rename = "INT_64"))]
    Int64 = 18,
    /// UTF-8 encoded JSON document.
    Json = 19,
    /// BSON document.
    Bson = 20,
    /// Months, days and milliseconds packed in 12 bytes.
    Interval = 21,
    /// A converted-type code outside the known catalog.
    #[num_enum(catch_all)]
    Unrecognized(i32),
}

// num_enum treats `#[default]` as its fallback variant, which conflicts with `catch_all`.
#[allow(clippy::derivable_impls)]
impl Default for LogicalType {
    fn default() -> Self {
        Self::None
    }
}

impl LogicalType {
    /// Maps the optional converted-type code of a column's metadata onto the catalog.
    pub fn from_converted_type(code: Option<i32>) -> Self {
        code.map(Self::from).unwrap_or_default()
    }

    /// Whether values with this annotation pass through conversion unchanged.
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            Self::None | Self::Unrecognized(_) | Self::Map | Self::MapKeyValue | Self::List
        )
    }

    /// Whether the annotation can be applied to values stored as `physical`.
    pub fn accepts(&self, physical: PhysicalType) -> bool {
        use PhysicalType as P;

        match self {
            Self::None | Self::Unrecognized(_) | Self::Map | Self::MapKeyValue | Self::List => true,
            Self::Decimal => matches!(
                physical,
                P::Int32 | P::Int64 | P::ByteArray | P::FixedLenByteArray
            ),
            Self::Date
            | Self::TimeMillis
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Int8
            | Self::Int16
            | Self::Int32 => physical == P::Int32,
            Self::TimeMicros
            | Self::TimestampMillis
            | Self::TimestampMicros
            | Self::Uint64
            | Self::Int64 => physical == P::Int64,
            Self::Utf8 | Self::Enum | Self::Json | Self::Bson => physical == P::ByteArray,
            Self::Interval => physical == P::FixedLenByteArray,
        }
    }
}

impl Display for LogicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::Utf8 => "UTF8",
            Self::Map => "MAP",
            Self::MapKeyValue => "MAP_KEY_VALUE",
            Self::List => "LIST",
            Self::Enum => "ENUM",
            Self::Decimal => "DECIMAL",
            Self::Date => "DATE",
            Self::TimeMillis => "TIME_MILLIS",
            Self::TimeMicros => "TIME_MICROS",
            Self::TimestampMillis => "TIMESTAMP_MILLIS",
            Self::TimestampMicros => "TIMESTAMP_MICROS",
            Self::Uint8 => "UINT_8",
            Self::Uint16 => "UINT_16",
            Self::Uint32 => "UINT_32",
            Self::Uint64 => "UINT_64",
            Self::Int8 => "INT_8",
            Self::Int16 => "INT_16",
            Self::Int32 => "INT_32",
            Self::Int64 => "INT_64",
            Self::Json => "JSON",
            Self::Bson => "BSON",
            Self::Interval => "INTERVAL",
            Self::Unrecognized(code) => return write!(f, "UNRECOGNIZED({code})"),
        };
        write!(f, "{name}")
    }
}
