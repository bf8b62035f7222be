//! Integer annotations. These reinterpret bit patterns and never fail on valid layouts.

use coltype_array::{LogicalArray, PrimitiveArray};
use coltype_dtype::LogicalType;
use coltype_error::{ColtypeResult, coltype_bail};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn decode_int32(values: &[i32], logical: LogicalType) -> ColtypeResult<LogicalArray> {
    let array = match logical {
        LogicalType::Uint8 => PrimitiveArray::U8(values.iter().map(|&v| v as u8).collect()),
        LogicalType::Uint16 => PrimitiveArray::U16(values.iter().map(|&v| v as u16).collect()),
        LogicalType::Uint32 => PrimitiveArray::U32(values.iter().map(|&v| v as u32).collect()),
        LogicalType::Int8 => PrimitiveArray::I8(values.iter().map(|&v| v as i8).collect()),
        LogicalType::Int16 => PrimitiveArray::I16(values.iter().map(|&v| v as i16).collect()),
        LogicalType::Int32 => PrimitiveArray::I32(values.to_vec()),
        other => coltype_bail!("{other} is not a 32-bit integer annotation"),
    };
    Ok(LogicalArray::Primitive(array))
}

#[allow(clippy::cast_sign_loss)]
pub(super) fn decode_int64(values: &[i64], logical: LogicalType) -> ColtypeResult<LogicalArray> {
    let array = match logical {
        LogicalType::Uint64 => PrimitiveArray::U64(values.iter().map(|&v| v as u64).collect()),
        LogicalType::Int64 => PrimitiveArray::I64(values.to_vec()),
        other => coltype_bail!("{other} is not a 64-bit integer annotation"),
    };
    Ok(LogicalArray::Primitive(array))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(LogicalType::Uint8, -1, 255.0)]
    #[case(LogicalType::Uint16, -3, 65533.0)]
    #[case(LogicalType::Uint16, 65539, 3.0)]
    #[case(LogicalType::Uint32, -6_884_376, 4_288_082_920.0)]
    #[case(LogicalType::Int8, 200, -56.0)]
    #[case(LogicalType::Int16, 40_000, -25_536.0)]
    #[case(LogicalType::Int32, -7, -7.0)]
    fn test_int32_reinterpretation(
        #[case] logical: LogicalType,
        #[case] raw: i32,
        #[case] expected: f64,
    ) {
        let LogicalArray::Primitive(array) = decode_int32(&[raw], logical).unwrap() else {
            panic!("expected primitive output");
        };
        assert_eq!(array.to_f64_vec(), vec![expected]);
    }

    #[test]
    fn test_uint64_reinterpretation() {
        let array = decode_int64(&[-6_884_376, 0], LogicalType::Uint64).unwrap();
        assert_eq!(
            array.as_slice::<u64>().unwrap(),
            &[18_446_744_073_702_667_240, 0]
        );
    }

    #[test]
    fn test_wrong_annotation() {
        assert!(decode_int32(&[1], LogicalType::Uint64).is_err());
        assert!(decode_int64(&[1], LogicalType::Uint16).is_err());
    }
}
