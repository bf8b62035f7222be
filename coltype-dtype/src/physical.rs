use std::fmt::{Display, Formatter};

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The on-disk storage kind of a column's values, independent of their meaning.
///
/// Discriminants match the wire codes used by the container's column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(i32)]
pub enum PhysicalType {
    /// Single-bit booleans.
    Boolean = 0,
    /// 32-bit signed integers.
    Int32 = 1,
    /// 64-bit signed integers.
    Int64 = 2,
    /// 96-bit values, used by legacy writers for nanosecond timestamps.
    Int96 = 3,
    /// IEEE 754 single precision floats.
    Float = 4,
    /// IEEE 754 double precision floats.
    Double = 5,
    /// Variable-length byte strings.
    ByteArray = 6,
    /// Byte strings of a width fixed by the column's `type_length`.
    FixedLenByteArray = 7,
}

impl PhysicalType {
    /// The width in bytes of one value, when the physical type alone determines it.
    ///
    /// Returns `None` for booleans (bit-packed), variable-length byte arrays, and fixed-length
    /// byte arrays, whose width comes from the schema.
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            Self::Int32 | Self::Float => Some(4),
            Self::Int64 | Self::Double => Some(8),
            Self::Int96 => Some(12),
            Self::Boolean | Self::ByteArray | Self::FixedLenByteArray => None,
        }
    }

    /// Whether values of this type are byte strings.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::ByteArray | Self::FixedLenByteArray)
    }
}

impl Display for PhysicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Boolean => "BOOLEAN",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::Int96 => "INT96",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::ByteArray => "BYTE_ARRAY",
            Self::FixedLenByteArray => "FIXED_LEN_BYTE_ARRAY",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, PhysicalType::Int32)]
    #[case(2, PhysicalType::Int64)]
    #[case(6, PhysicalType::ByteArray)]
    #[case(7, PhysicalType::FixedLenByteArray)]
    fn test_from_wire_code(#[case] code: i32, #[case] expected: PhysicalType) {
        assert_eq!(PhysicalType::try_from(code).unwrap(), expected);
        assert_eq!(i32::from(expected), code);
    }

    #[test]
    fn test_unknown_wire_code() {
        assert!(PhysicalType::try_from(8).is_err());
    }

    #[test]
    fn test_byte_width() {
        assert_eq!(PhysicalType::Int32.byte_width(), Some(4));
        assert_eq!(PhysicalType::Int96.byte_width(), Some(12));
        assert_eq!(PhysicalType::FixedLenByteArray.byte_width(), None);
    }
}
