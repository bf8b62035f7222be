use std::fmt::{Display, Formatter};

use coltype_dtype::PhysicalType;

use crate::BinaryArray;

/// Julian day number of 1970-01-01.
pub const JULIAN_DAY_OF_EPOCH: i64 = 2_440_588;

/// A legacy 12-byte timestamp: little-endian nanoseconds within the day followed by a
/// little-endian Julian day number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Int96([u8; 12]);

impl Int96 {
    /// Wrap the raw little-endian bytes of a value.
    pub const fn from_le_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Assemble a value from its two fields.
    pub fn from_parts(nanos_of_day: i64, julian_day: i32) -> Self {
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&nanos_of_day.to_le_bytes());
        bytes[8..].copy_from_slice(&julian_day.to_le_bytes());
        Self(bytes)
    }

    /// The raw little-endian bytes.
    pub const fn to_le_bytes(self) -> [u8; 12] {
        self.0
    }

    /// Nanoseconds since midnight.
    pub fn nanos_of_day(&self) -> i64 {
        let [a, b, c, d, e, f, g, h, ..] = self.0;
        i64::from_le_bytes([a, b, c, d, e, f, g, h])
    }

    /// The Julian day number.
    pub fn julian_day(&self) -> i32 {
        let [.., a, b, c, d] = self.0;
        i32::from_le_bytes([a, b, c, d])
    }
}

impl Display for Int96 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "int96(day={}, nanos={})", self.julian_day(), self.nanos_of_day())
    }
}

/// The raw values of one column chunk, in their storage representation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalArray {
    /// Booleans.
    Boolean(Vec<bool>),
    /// 32-bit signed integers.
    Int32(Vec<i32>),
    /// 64-bit signed integers.
    Int64(Vec<i64>),
    /// Legacy 96-bit timestamps.
    Int96(Vec<Int96>),
    /// Single precision floats.
    Float(Vec<f32>),
    /// Double precision floats.
    Double(Vec<f64>),
    /// Variable-length byte strings.
    ByteArray(BinaryArray),
    /// Byte strings that should all share the schema's `type_length`.
    FixedLenByteArray(BinaryArray),
}

impl PhysicalArray {
    /// The storage kind of the values.
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            Self::Boolean(_) => PhysicalType::Boolean,
            Self::Int32(_) => PhysicalType::Int32,
            Self::Int64(_) => PhysicalType::Int64,
            Self::Int96(_) => PhysicalType::Int96,
            Self::Float(_) => PhysicalType::Float,
            Self::Double(_) => PhysicalType::Double,
            Self::ByteArray(_) => PhysicalType::ByteArray,
            Self::FixedLenByteArray(_) => PhysicalType::FixedLenByteArray,
        }
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Boolean(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Int96(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::ByteArray(v) | Self::FixedLenByteArray(v) => v.len(),
        }
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte strings of a binary array.
    pub fn as_binary(&self) -> Option<&BinaryArray> {
        match self {
            Self::ByteArray(v) | Self::FixedLenByteArray(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<bool>> for PhysicalArray {
    fn from(value: Vec<bool>) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<i32>> for PhysicalArray {
    fn from(value: Vec<i32>) -> Self {
        Self::Int32(value)
    }
}

impl From<Vec<i64>> for PhysicalArray {
    fn from(value: Vec<i64>) -> Self {
        Self::Int64(value)
    }
}

impl From<Vec<Int96>> for PhysicalArray {
    fn from(value: Vec<Int96>) -> Self {
        Self::Int96(value)
    }
}

impl From<Vec<f32>> for PhysicalArray {
    fn from(value: Vec<f32>) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<f64>> for PhysicalArray {
    fn from(value: Vec<f64>) -> Self {
        Self::Double(value)
    }
}

impl From<BinaryArray> for PhysicalArray {
    fn from(value: BinaryArray) -> Self {
        Self::ByteArray(value)
    }
}
