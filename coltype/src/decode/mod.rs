//! Per-annotation decode routines.

mod decimal;
mod integer;
mod interval;
mod temporal;
mod text;

use coltype_array::{LogicalArray, PhysicalArray};
use coltype_dtype::{LogicalType, SchemaDescriptor};
use coltype_error::{ColtypeResult, coltype_bail};

use crate::ConvertOptions;

pub(crate) fn decode(
    raw: &PhysicalArray,
    schema: &SchemaDescriptor,
    options: &ConvertOptions,
) -> ColtypeResult<LogicalArray> {
    check_layout(raw, schema)?;

    let mode = options.execution_mode();
    let logical = schema.logical_type();
    log::trace!("Decoding {} values of {schema}", raw.len());

    use LogicalType as L;
    use PhysicalArray as P;

    Ok(match (logical, raw) {
        (L::Decimal, _) => decimal::decode(raw, schema, options)?,
        (L::Date, P::Int32(values)) => temporal::decode_date(values),
        (L::TimeMillis, P::Int32(values)) => temporal::decode_time_millis(values)?,
        (L::TimeMicros, P::Int64(values)) => temporal::decode_time_micros(values)?,
        (L::TimestampMillis | L::TimestampMicros, P::Int64(values)) => {
            temporal::decode_timestamp(values, logical, mode)?
        }
        (L::None, P::Int96(values)) if options.int96_timestamps() => {
            temporal::decode_int96(values, mode)?
        }
        (L::Utf8 | L::Enum, P::ByteArray(values)) => text::decode_utf8(values, logical, mode)?,
        (L::Json, P::ByteArray(values)) => text::decode_json(values, mode)?,
        (L::Bson, P::ByteArray(values)) => text::decode_bson(values, mode)?,
        (
            L::Uint8 | L::Uint16 | L::Uint32 | L::Int8 | L::Int16 | L::Int32,
            P::Int32(values),
        ) => integer::decode_int32(values, logical)?,
        (L::Uint64 | L::Int64, P::Int64(values)) => integer::decode_int64(values, logical)?,
        (L::Interval, P::FixedLenByteArray(values)) => interval::decode(values, mode)?,
        (logical, raw) if logical.is_passthrough() => {
            if logical != L::None {
                log::debug!("{logical} passes through unconverted");
            }
            LogicalArray::Physical(raw.clone())
        }
        (logical, raw) => {
            coltype_bail!(
                "{logical} cannot annotate a {} column",
                raw.physical_type()
            )
        }
    })
}

/// Check that the raw values have the storage layout the schema declares.
fn check_layout(raw: &PhysicalArray, schema: &SchemaDescriptor) -> ColtypeResult<()> {
    if raw.physical_type() != schema.physical_type() {
        coltype_bail!(
            SchemaMismatch: "column is declared {} but holds {} values",
            schema.physical_type(),
            raw.physical_type()
        );
    }
    if let (PhysicalArray::FixedLenByteArray(values), Some(width)) = (raw, schema.type_length()) {
        values.check_fixed_width(width)?;
    }
    Ok(())
}
