#![deny(missing_docs)]

//! Decode the physical values of a column into the logical values its schema annotation
//! declares.
//!
//! ```
//! use coltype::convert;
//! use coltype_array::PhysicalArray;
//! use coltype_dtype::{LogicalType, PhysicalType, SchemaDescriptor};
//!
//! let schema = SchemaDescriptor::builder(PhysicalType::Int32)
//!     .with_logical_type(LogicalType::Uint16)
//!     .build()
//!     .unwrap();
//! let output = convert(&PhysicalArray::from(vec![-3i32]), &schema).unwrap();
//! assert_eq!(output.as_slice::<u16>().unwrap(), &[65533]);
//! ```
//!
//! Conversion is a pure function of the raw values and the schema. The input is never
//! modified, and the output has exactly one value per input value.

pub use options::*;

mod decode;
mod exec;
mod options;

use coltype_array::{LogicalArray, PhysicalArray};
use coltype_dtype::datetime::{TemporalMetadata, TimeUnit};
use coltype_dtype::{LogicalDType, LogicalType, PType, PhysicalType, SchemaDescriptor};
use coltype_error::{ColtypeExpect, ColtypeResult, ResultExt};

/// Convert a column with the default [`ConvertOptions`].
pub fn convert(raw: &PhysicalArray, schema: &SchemaDescriptor) -> ColtypeResult<LogicalArray> {
    convert_with(raw, schema, &ConvertOptions::default())
}

/// Convert a column.
///
/// Fails with a schema mismatch when `raw` is not of the schema's physical type or a
/// fixed-length value is not `type_length` bytes long, and with a decode error carrying the
/// ordinal of the first value that cannot be interpreted under the annotation.
pub fn convert_with(
    raw: &PhysicalArray,
    schema: &SchemaDescriptor,
    options: &ConvertOptions,
) -> ColtypeResult<LogicalArray> {
    decode::decode(raw, schema, options)
}

/// Convert the column at `column_index` of a table, naming the column in any error.
pub fn convert_column(
    column_index: usize,
    raw: &PhysicalArray,
    schema: &SchemaDescriptor,
    options: &ConvertOptions,
) -> ColtypeResult<LogicalArray> {
    convert_with(raw, schema, options).with_context(|| match schema.name() {
        Some(name) => format!("column {column_index} ({name})"),
        None => format!("column {column_index}"),
    })
}

/// The type of the values [`convert_with`] produces for `schema`.
pub fn output_dtype(schema: &SchemaDescriptor, options: &ConvertOptions) -> LogicalDType {
    use LogicalType as L;

    match schema.logical_type() {
        L::Decimal => match options.decimal_output() {
            DecimalOutput::Float64 => LogicalDType::Primitive(PType::F64),
            DecimalOutput::Exact => LogicalDType::Decimal(
                schema
                    .decimal_dtype()
                    .coltype_expect("DECIMAL descriptors carry precision and scale"),
            ),
        },
        L::Date => LogicalDType::Temporal(TemporalMetadata::Date(TimeUnit::D)),
        L::TimeMillis => LogicalDType::Temporal(TemporalMetadata::Time(TimeUnit::Ms)),
        L::TimeMicros => LogicalDType::Temporal(TemporalMetadata::Time(TimeUnit::Us)),
        L::TimestampMillis | L::TimestampMicros => {
            LogicalDType::Temporal(TemporalMetadata::Timestamp(TimeUnit::Ns, None))
        }
        L::Utf8 | L::Enum => LogicalDType::Utf8,
        L::Json | L::Bson => LogicalDType::Json,
        L::Uint8 => LogicalDType::Primitive(PType::U8),
        L::Uint16 => LogicalDType::Primitive(PType::U16),
        L::Uint32 => LogicalDType::Primitive(PType::U32),
        L::Uint64 => LogicalDType::Primitive(PType::U64),
        L::Int8 => LogicalDType::Primitive(PType::I8),
        L::Int16 => LogicalDType::Primitive(PType::I16),
        L::Int32 => LogicalDType::Primitive(PType::I32),
        L::Int64 => LogicalDType::Primitive(PType::I64),
        L::Interval => LogicalDType::Interval,
        L::None
            if schema.physical_type() == PhysicalType::Int96 && options.int96_timestamps() =>
        {
            LogicalDType::Temporal(TemporalMetadata::Timestamp(TimeUnit::Ns, None))
        }
        L::None | L::Unrecognized(_) | L::Map | L::MapKeyValue | L::List => {
            LogicalDType::Physical(schema.physical_type())
        }
    }
}
