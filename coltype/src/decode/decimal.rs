//! DECIMAL over integers and big-endian byte strings.

use coltype_array::bigint::{ToI256, i256, i256_from_be_slice};
use coltype_array::{BinaryArray, DecimalArray, LogicalArray, PhysicalArray, PrimitiveArray, scale_to_f64};
use coltype_dtype::{DecimalDType, LogicalType, SchemaDescriptor};
use coltype_error::{ColtypeResult, coltype_bail, coltype_err};

use crate::exec::decode_values;
use crate::{ConvertOptions, DecimalOutput, ExecutionMode};

pub(super) fn decode(
    raw: &PhysicalArray,
    schema: &SchemaDescriptor,
    options: &ConvertOptions,
) -> ColtypeResult<LogicalArray> {
    let Some(decimal) = schema.decimal_dtype() else {
        coltype_bail!("DECIMAL column {schema} has no precision");
    };
    let mode = options.execution_mode();

    Ok(match (raw, options.decimal_output()) {
        (PhysicalArray::Int32(values), DecimalOutput::Float64) => {
            float(values.iter().map(|v| scale_int(i64::from(*v), decimal)))
        }
        (PhysicalArray::Int64(values), DecimalOutput::Float64) => {
            float(values.iter().map(|v| scale_int(*v, decimal)))
        }
        (PhysicalArray::Int32(values), DecimalOutput::Exact) => {
            exact(values.iter().map(ToI256::to_i256).collect(), decimal)
        }
        (PhysicalArray::Int64(values), DecimalOutput::Exact) => {
            exact(values.iter().map(ToI256::to_i256).collect(), decimal)
        }
        (
            PhysicalArray::ByteArray(values) | PhysicalArray::FixedLenByteArray(values),
            DecimalOutput::Float64,
        ) => float(decode_values(values.len(), mode, |i| {
            Ok(be_bytes_to_f64(values.value(i), decimal))
        })?),
        (
            PhysicalArray::ByteArray(values) | PhysicalArray::FixedLenByteArray(values),
            DecimalOutput::Exact,
        ) => exact(unscaled_values(values, mode)?, decimal),
        (other, _) => coltype_bail!(
            "DECIMAL cannot annotate a {} column",
            other.physical_type()
        ),
    })
}

fn float(values: impl IntoIterator<Item = f64>) -> LogicalArray {
    LogicalArray::Primitive(PrimitiveArray::F64(values.into_iter().collect()))
}

fn exact(values: Vec<i256>, decimal: DecimalDType) -> LogicalArray {
    LogicalArray::Decimal(DecimalArray::new(values, decimal))
}

#[allow(clippy::cast_precision_loss)]
fn scale_int(unscaled: i64, decimal: DecimalDType) -> f64 {
    unscaled as f64 / 10f64.powi(i32::from(decimal.scale()))
}

fn unscaled_values(values: &BinaryArray, mode: ExecutionMode) -> ColtypeResult<Vec<i256>> {
    decode_values(values.len(), mode, |i| {
        i256_from_be_slice(values.value(i)).ok_or_else(|| {
            coltype_err!(
                Decode: i,
                LogicalType::Decimal,
                "{}-byte unscaled value does not fit in 256 bits",
                values.value_len(i)
            )
        })
    })
}

/// The scaled value of a big-endian two's-complement integer of any width.
///
/// Values wider than 256 bits are accumulated directly in `f64`.
fn be_bytes_to_f64(bytes: &[u8], decimal: DecimalDType) -> f64 {
    if let Some(unscaled) = i256_from_be_slice(bytes) {
        return scale_to_f64(unscaled, decimal.scale());
    }
    let negative = bytes.first().is_some_and(|b| b & 0x80 != 0);
    let unscaled = if negative {
        // -(!x + 1) over the complemented bytes.
        -(bytes
            .iter()
            .fold(0f64, |acc, b| acc * 256.0 + f64::from(!b))
            + 1.0)
    } else {
        bytes.iter().fold(0f64, |acc, b| acc * 256.0 + f64::from(*b))
    };
    unscaled / 10f64.powi(i32::from(decimal.scale()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn padded(tail: &[u8], width: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; width - tail.len()];
        bytes.extend_from_slice(tail);
        bytes
    }

    #[rstest]
    #[case(&[0x1e, 0x5c], 777.2)]
    #[case(&[0x1d, 0x5c], 751.6)]
    #[case(&[0x0d, 0x7b], 345.1)]
    #[case(&[0x19, 0x29], 644.1)]
    #[case(&[], 0.0)]
    fn test_fixed_width_32(#[case] tail: &[u8], #[case] expected: f64) {
        let value = be_bytes_to_f64(&padded(tail, 32), DecimalDType::new(38, 1));
        assert!((value - expected).abs() < 1e-9, "{value} != {expected}");
    }

    #[test]
    fn test_negative_and_wide() {
        let decimal = DecimalDType::new(9, 2);
        assert!((be_bytes_to_f64(&[0xff, 0x85], decimal) + 1.23).abs() < 1e-12);

        // 40 bytes of sign extension around -1
        assert!((be_bytes_to_f64(&[0xff; 40], decimal) + 0.01).abs() < 1e-12);

        // A value that really needs more than 256 bits.
        let mut wide = vec![0u8; 40];
        wide[1] = 1;
        let expected = 2f64.powi(8 * 38) / 100.0;
        let value = be_bytes_to_f64(&wide, decimal);
        assert!(((value - expected) / expected).abs() < 1e-12);

        let mut negative_wide = vec![0xffu8; 40];
        negative_wide[1] = 0xfe;
        let value = be_bytes_to_f64(&negative_wide, decimal);
        assert!(((value + expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_exact_rejects_oversized_values() {
        let mut wide = vec![0u8; 40];
        wide[1] = 1;
        let values = BinaryArray::from_iter_values([vec![0x01], wide]);
        let err = unscaled_values(&values, ExecutionMode::Inline).unwrap_err();
        assert_eq!(err.element_index(), Some(1));
    }
}
