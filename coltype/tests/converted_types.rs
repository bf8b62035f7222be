#![allow(clippy::unwrap_used, clippy::panic)]

use bytes::Bytes;
use coltype::{ConvertOptions, DecimalOutput, convert, convert_column, convert_with, output_dtype};
use coltype_array::bigint::{ToI256, i256};
use coltype_array::{BinaryArray, Int96, Interval, LogicalArray, PhysicalArray};
use coltype_dtype::datetime::{TemporalJiff, TemporalMetadata, TimeUnit};
use coltype_dtype::{DecimalDType, LogicalDType, LogicalType, PType, PhysicalType, SchemaDescriptor};
use coltype_error::ColtypeError;
use jiff::civil::{date, time};
use rstest::rstest;
use serde_json::json;

const BSON_DOC: &[u8] = b"&\x00\x00\x00\x04foo\x00\x1c\x00\x00\x00\x020\x00\x04\x00\x00\x00bar\x00\x021\x00\x05\x00\x00\x00\xf0\x9f\x91\xbe\x00\x00\x00";

fn schema(physical: PhysicalType, logical: LogicalType) -> SchemaDescriptor {
    SchemaDescriptor::builder(physical)
        .with_logical_type(logical)
        .build()
        .unwrap()
}

fn decimal_schema(physical: PhysicalType, precision: i32, scale: i32) -> SchemaDescriptor {
    let mut builder = SchemaDescriptor::builder(physical)
        .with_logical_type(LogicalType::Decimal)
        .with_precision(precision)
        .with_scale(scale);
    if physical == PhysicalType::FixedLenByteArray {
        builder = builder.with_type_length(32);
    }
    builder.build().unwrap()
}

fn big_decimals() -> PhysicalArray {
    let tails: [&[u8]; 5] = [&[0, 0], &[0x1e, 0x5c], &[0x1d, 0x5c], &[0x0d, 0x7b], &[0x19, 0x29]];
    let mut buffer = Vec::new();
    for tail in tails {
        buffer.extend_from_slice(&[0u8; 30]);
        buffer.extend_from_slice(tail);
    }
    PhysicalArray::FixedLenByteArray(
        BinaryArray::try_from_fixed_width(Bytes::from(buffer), 32).unwrap(),
    )
}

#[rstest]
#[case(LogicalType::Uint16, vec![-3, 0, 65535], PType::U16, vec![65533.0, 0.0, 65535.0])]
#[case(LogicalType::Uint32, vec![-6_884_376], PType::U32, vec![4_288_082_920.0])]
#[case(LogicalType::Uint8, vec![-1, 256], PType::U8, vec![255.0, 0.0])]
#[case(LogicalType::Int8, vec![-1, 128], PType::I8, vec![-1.0, -128.0])]
#[case(LogicalType::Int16, vec![32_768], PType::I16, vec![-32_768.0])]
#[case(LogicalType::Int32, vec![i32::MIN], PType::I32, vec![-2_147_483_648.0])]
fn int32_annotations(
    #[case] logical: LogicalType,
    #[case] raw: Vec<i32>,
    #[case] ptype: PType,
    #[case] expected: Vec<f64>,
) {
    let output = convert(&PhysicalArray::from(raw), &schema(PhysicalType::Int32, logical)).unwrap();
    let primitive = output.as_primitive().unwrap();
    assert_eq!(primitive.ptype(), ptype);
    assert_eq!(primitive.to_f64_vec(), expected);
}

#[test]
fn uint64_reinterprets_bits() {
    let output = convert(
        &PhysicalArray::from(vec![-6_884_376i64]),
        &schema(PhysicalType::Int64, LogicalType::Uint64),
    )
    .unwrap();
    assert_eq!(output.as_slice::<u64>().unwrap(), &[18_446_744_073_702_667_240]);
}

#[test]
fn int64_is_typed_identity() {
    let output = convert(
        &PhysicalArray::from(vec![i64::MIN, 7]),
        &schema(PhysicalType::Int64, LogicalType::Int64),
    )
    .unwrap();
    assert_eq!(output.as_slice::<i64>().unwrap(), &[i64::MIN, 7]);
}

#[test]
fn decimal_from_int64() {
    let output = convert(
        &PhysicalArray::from(vec![9_876_543_210i64, -1]),
        &decimal_schema(PhysicalType::Int64, 18, 10),
    )
    .unwrap();
    let values = output.as_f64().unwrap();
    assert!((values[0] - 0.987_654_321).abs() < 1e-12);
    assert!((values[1] + 1e-10).abs() < 1e-20);
}

#[test]
fn decimal_from_int32() {
    let output = convert(
        &PhysicalArray::from(vec![12_345i32, -5]),
        &decimal_schema(PhysicalType::Int32, 9, 2),
    )
    .unwrap();
    let values = output.as_f64().unwrap();
    assert!((values[0] - 123.45).abs() < 1e-9);
    assert!((values[1] + 0.05).abs() < 1e-12);
}

#[test]
fn big_decimal_as_float() {
    let output = convert(
        &big_decimals(),
        &decimal_schema(PhysicalType::FixedLenByteArray, 38, 1),
    )
    .unwrap();
    let values = output.as_f64().unwrap();
    for (value, expected) in values.iter().zip([0.0, 777.2, 751.6, 345.1, 644.1]) {
        assert!((value - expected).abs() < 1e-9, "{value} != {expected}");
    }
}

#[test]
fn big_decimal_exact() {
    let schema = decimal_schema(PhysicalType::FixedLenByteArray, 38, 1);
    let options = ConvertOptions::default().with_decimal_output(DecimalOutput::Exact);
    let output = convert_with(&big_decimals(), &schema, &options).unwrap();
    let decimals = output.as_decimal().unwrap();

    assert_eq!(decimals.decimal_dtype(), DecimalDType::new(38, 1));
    assert_eq!(decimals.unscaled_values()[1], 7772i64.to_i256());
    assert_eq!(decimals.unscaled_values()[0], i256::ZERO);
    assert_eq!(decimals.format_value(1).unwrap(), "777.2");
    assert_eq!(decimals.format_value(0).unwrap(), "0.0");
    assert_eq!(output.dtype(), output_dtype(&schema, &options));
}

#[test]
fn int_decimals_exact() {
    let options = ConvertOptions::default().with_decimal_output(DecimalOutput::Exact);

    let schema = decimal_schema(PhysicalType::Int64, 18, 2);
    let output =
        convert_with(&PhysicalArray::from(vec![i64::MIN, 5]), &schema, &options).unwrap();
    let decimals = output.as_decimal().unwrap();
    assert_eq!(decimals.decimal_dtype(), DecimalDType::new(18, 2));
    assert_eq!(decimals.unscaled_values()[0], i64::MIN.to_i256());
    assert_eq!(decimals.format_value(0).unwrap(), "-92233720368547758.08");
    assert_eq!(decimals.format_value(1).unwrap(), "0.05");
    assert_eq!(output.dtype(), output_dtype(&schema, &options));

    let schema = decimal_schema(PhysicalType::Int32, 9, 3);
    let output = convert_with(&PhysicalArray::from(vec![-1_234i32]), &schema, &options).unwrap();
    assert_eq!(output.as_decimal().unwrap().format_value(0).unwrap(), "-1.234");
}

#[test]
fn decimal_over_byte_array() {
    let raw = PhysicalArray::ByteArray(BinaryArray::from_iter_values([
        vec![],
        vec![0x1e, 0x5c],
        vec![0xff, 0x85],
    ]));
    let schema = SchemaDescriptor::builder(PhysicalType::ByteArray)
        .with_logical_type(LogicalType::Decimal)
        .with_precision(10)
        .with_scale(1)
        .build()
        .unwrap();

    let values = convert(&raw, &schema).unwrap();
    let values = values.as_f64().unwrap();
    assert_eq!(values[0], 0.0);
    assert!((values[1] - 777.2).abs() < 1e-9);
    assert!((values[2] + 12.3).abs() < 1e-9);

    let exact = convert_with(
        &raw,
        &schema,
        &ConvertOptions::default().with_decimal_output(DecimalOutput::Exact),
    )
    .unwrap();
    assert_eq!(exact.as_decimal().unwrap().format_value(2).unwrap(), "-12.3");
}

#[test]
fn date_days_since_epoch() {
    let output = convert(
        &PhysicalArray::from(vec![12_725i32, 0, -719_162]),
        &schema(PhysicalType::Int32, LogicalType::Date),
    )
    .unwrap();
    let dates = output.as_temporal().unwrap();
    assert_eq!(dates.to_jiff(0).unwrap(), TemporalJiff::Date(date(2004, 11, 3)));
    assert_eq!(dates.to_jiff(1).unwrap(), TemporalJiff::Date(date(1970, 1, 1)));
    assert_eq!(dates.to_jiff(2).unwrap(), TemporalJiff::Date(date(1, 1, 1)));
}

#[test]
fn time_millis_is_a_duration() {
    let output = convert(
        &PhysicalArray::from(vec![731_888i32]),
        &schema(PhysicalType::Int32, LogicalType::TimeMillis),
    )
    .unwrap();
    let times = output.as_temporal().unwrap();
    assert_eq!(
        times.temporal_metadata(),
        &TemporalMetadata::Time(TimeUnit::Ms)
    );
    assert_eq!(times.values(), &[731_888]);
    assert_eq!(
        times.to_jiff(0).unwrap(),
        TemporalJiff::Time(time(0, 12, 11, 888_000_000))
    );
}

#[test]
fn time_micros() {
    let output = convert(
        &PhysicalArray::from(vec![731_888_000i64]),
        &schema(PhysicalType::Int64, LogicalType::TimeMicros),
    )
    .unwrap();
    assert_eq!(
        output.as_temporal().unwrap().to_jiff(0).unwrap(),
        TemporalJiff::Time(time(0, 12, 11, 888_000_000))
    );
}

#[rstest]
#[case(LogicalType::TimestampMillis, 1_099_511_625_014)]
#[case(LogicalType::TimestampMicros, 1_099_511_625_014_000)]
fn timestamps_normalise_to_nanos(#[case] logical: LogicalType, #[case] raw: i64) {
    let output = convert(
        &PhysicalArray::from(vec![raw]),
        &schema(PhysicalType::Int64, logical),
    )
    .unwrap();
    let timestamps = output.as_temporal().unwrap();
    assert_eq!(timestamps.values(), &[1_099_511_625_014_000_000]);
    assert_eq!(timestamps.values()[0] % 1_000_000, 0);
    assert_eq!(
        timestamps.to_jiff(0).unwrap().to_string(),
        "2004-11-03T19:53:45.014Z"
    );
}

#[test]
fn timestamp_time_zone_attached_afterwards() {
    let output = convert(
        &PhysicalArray::from(vec![0i64]),
        &schema(PhysicalType::Int64, LogicalType::TimestampMillis),
    )
    .unwrap()
    .with_time_zone("UTC")
    .unwrap();
    let timestamps = output.as_temporal().unwrap();
    assert_eq!(timestamps.values(), &[0]);
    assert_eq!(timestamps.temporal_metadata().time_zone(), Some("UTC"));
}

#[test]
fn timestamp_overflow_is_a_decode_error() {
    let err = convert(
        &PhysicalArray::from(vec![0i64, i64::MAX]),
        &schema(PhysicalType::Int64, LogicalType::TimestampMillis),
    )
    .unwrap_err();
    assert!(matches!(err, ColtypeError::Decode(1, ..)));
}

#[test]
fn utf8_preserved() {
    let output = convert(
        &PhysicalArray::ByteArray(BinaryArray::from(vec!["Ördög"])),
        &schema(PhysicalType::ByteArray, LogicalType::Utf8),
    )
    .unwrap();
    assert_eq!(output.as_utf8().unwrap(), &["Ördög".to_string()]);
}

#[test]
fn enum_decodes_as_text() {
    let output = convert(
        &PhysicalArray::ByteArray(BinaryArray::from(vec!["RED", "GREEN"])),
        &schema(PhysicalType::ByteArray, LogicalType::Enum),
    )
    .unwrap();
    assert_eq!(output.dtype(), LogicalDType::Utf8);
    assert_eq!(output.as_utf8().unwrap()[1], "GREEN");
}

#[test]
fn json_documents() {
    let output = convert(
        &PhysicalArray::ByteArray(BinaryArray::from(vec![
            r#"{"foo": ["bar", "\ud83d\udc7e"]}"#,
        ])),
        &schema(PhysicalType::ByteArray, LogicalType::Json),
    )
    .unwrap();
    assert_eq!(output.as_json().unwrap(), &[json!({"foo": ["bar", "👾"]})]);
}

#[test]
fn bson_matches_json() {
    let json = convert(
        &PhysicalArray::ByteArray(BinaryArray::from(vec![r#"{"foo": ["bar", "👾"]}"#])),
        &schema(PhysicalType::ByteArray, LogicalType::Json),
    )
    .unwrap();
    let bson = convert(
        &PhysicalArray::ByteArray(BinaryArray::from(vec![BSON_DOC])),
        &schema(PhysicalType::ByteArray, LogicalType::Bson),
    )
    .unwrap();
    assert_eq!(json, bson);
}

#[test]
fn interval_fields() {
    let raw = PhysicalArray::FixedLenByteArray(BinaryArray::from_iter_values([[
        14u8, 0, 0, 0, 3, 0, 0, 0, 0x10, 0x27, 0, 0,
    ]]));
    let schema = SchemaDescriptor::builder(PhysicalType::FixedLenByteArray)
        .with_logical_type(LogicalType::Interval)
        .with_type_length(12)
        .build()
        .unwrap();
    let output = convert(&raw, &schema).unwrap();
    assert_eq!(
        output.as_interval().unwrap().values(),
        &[Interval::new(14, 3, 10_000)]
    );
}

#[test]
fn int96_passes_through_by_default() {
    let raw = PhysicalArray::from(vec![Int96::from_parts(0, 2_440_589)]);
    let schema = schema(PhysicalType::Int96, LogicalType::None);
    assert_eq!(convert(&raw, &schema).unwrap(), LogicalArray::Physical(raw.clone()));

    let options = ConvertOptions::default().with_int96_timestamps(true);
    let output = convert_with(&raw, &schema, &options).unwrap();
    assert_eq!(output.as_temporal().unwrap().values(), &[86_400_000_000_000]);
    assert_eq!(output.dtype(), output_dtype(&schema, &options));
}

#[test]
fn int96_overflow_is_a_decode_error() {
    let raw = PhysicalArray::from(vec![
        Int96::from_parts(0, 2_440_588),
        Int96::from_parts(0, i32::MAX),
    ]);
    let options = ConvertOptions::default().with_int96_timestamps(true);
    let err = convert_with(&raw, &schema(PhysicalType::Int96, LogicalType::None), &options)
        .unwrap_err();
    assert!(matches!(err.root_cause(), ColtypeError::Decode(1, ..)));
    assert_eq!(err.element_index(), Some(1));
}

#[rstest]
#[case(PhysicalArray::from(vec![1i32, -2]), PhysicalType::Int32, LogicalType::None)]
#[case(PhysicalArray::from(vec![1.5f64]), PhysicalType::Double, LogicalType::Unrecognized(77))]
#[case(PhysicalArray::from(vec![true, false]), PhysicalType::Boolean, LogicalType::List)]
#[case(
    PhysicalArray::ByteArray(BinaryArray::from(vec!["\u{0}raw"])),
    PhysicalType::ByteArray,
    LogicalType::MapKeyValue
)]
fn passthrough_is_identity(
    #[case] raw: PhysicalArray,
    #[case] physical: PhysicalType,
    #[case] logical: LogicalType,
) {
    let output = convert(&raw, &schema(physical, logical)).unwrap();
    assert_eq!(output.as_physical().unwrap(), &raw);
}

#[test]
fn empty_columns_stay_empty() {
    let output = convert(
        &PhysicalArray::ByteArray(BinaryArray::default()),
        &schema(PhysicalType::ByteArray, LogicalType::Json),
    )
    .unwrap();
    assert!(output.is_empty());
    assert_eq!(output.dtype(), LogicalDType::Json);
}

#[test]
fn fixed_len_width_mismatch() {
    let raw = PhysicalArray::FixedLenByteArray(BinaryArray::from_iter_values([
        vec![0u8; 32],
        vec![0u8; 31],
    ]));
    let err = convert(&raw, &decimal_schema(PhysicalType::FixedLenByteArray, 38, 1)).unwrap_err();
    assert!(matches!(err, ColtypeError::SchemaMismatch(..)));
}

#[test]
fn physical_kind_mismatch() {
    let err = convert(
        &PhysicalArray::from(vec![1i64]),
        &schema(PhysicalType::Int32, LogicalType::Uint16),
    )
    .unwrap_err();
    assert!(matches!(err, ColtypeError::SchemaMismatch(..)));
}

#[test]
fn column_context_names_the_column() {
    let schema = SchemaDescriptor::builder(PhysicalType::ByteArray)
        .with_name("payload")
        .with_logical_type(LogicalType::Utf8)
        .build()
        .unwrap();
    let raw = PhysicalArray::ByteArray(BinaryArray::from(vec![b"ok".as_slice(), b"\xc3".as_slice()]));
    let err = convert_column(2, &raw, &schema, &ConvertOptions::default()).unwrap_err();

    assert!(err.to_string().starts_with("column 2 (payload): cannot decode element 1 as UTF8"));
    assert_eq!(err.element_index(), Some(1));
    assert!(matches!(err.root_cause(), ColtypeError::Decode(1, ..)));
}

#[rstest]
#[case(PhysicalType::Int32, LogicalType::Date)]
#[case(PhysicalType::Int64, LogicalType::TimestampMicros)]
#[case(PhysicalType::Int32, LogicalType::Uint8)]
#[case(PhysicalType::ByteArray, LogicalType::Bson)]
#[case(PhysicalType::Float, LogicalType::None)]
fn output_dtype_predicts_conversion(#[case] physical: PhysicalType, #[case] logical: LogicalType) {
    let raw = match physical {
        PhysicalType::Int32 => PhysicalArray::from(vec![0i32]),
        PhysicalType::Int64 => PhysicalArray::from(vec![0i64]),
        PhysicalType::Float => PhysicalArray::from(vec![0f32]),
        _ => PhysicalArray::ByteArray(BinaryArray::from(vec![BSON_DOC])),
    };
    let schema = schema(physical, logical);
    let options = ConvertOptions::default();
    assert_eq!(
        convert(&raw, &schema).unwrap().dtype(),
        output_dtype(&schema, &options)
    );
}

#[cfg(feature = "rayon")]
#[test]
fn rayon_matches_inline() {
    use coltype::ExecutionMode;

    let values: Vec<String> = (0..10_000).map(|i| format!("{{\"n\": {i}}}")).collect();
    let mut corrupt = values.clone();
    corrupt[4_321] = "{".to_string();
    corrupt[9_000] = "}".to_string();

    let schema = schema(PhysicalType::ByteArray, LogicalType::Json);
    let inline = ConvertOptions::default();
    let parallel =
        ConvertOptions::default().with_execution_mode(ExecutionMode::Rayon { min_chunk_len: 64 });

    let raw = PhysicalArray::ByteArray(BinaryArray::from_iter_values(&values));
    assert_eq!(
        convert_with(&raw, &schema, &inline).unwrap(),
        convert_with(&raw, &schema, &parallel).unwrap()
    );

    let raw = PhysicalArray::ByteArray(BinaryArray::from_iter_values(&corrupt));
    let inline_err = convert_with(&raw, &schema, &inline).unwrap_err();
    let parallel_err = convert_with(&raw, &schema, &parallel).unwrap_err();
    assert_eq!(inline_err.element_index(), Some(4_321));
    assert_eq!(parallel_err.element_index(), Some(4_321));
}
