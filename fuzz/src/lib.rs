use coltype::{ConvertOptions, DecimalOutput, ExecutionMode};
use coltype_array::{BinaryArray, Int96, PhysicalArray};
use coltype_dtype::{PhysicalType, SchemaDescriptor};
use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};

/// One conversion to run: a column, the schema it is decoded under and the options to use.
#[derive(Debug)]
pub struct FuzzConversion {
    pub schema: SchemaDescriptor,
    pub raw: PhysicalArray,
    pub options: ConvertOptions,
}

impl<'a> Arbitrary<'a> for FuzzConversion {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let schema: SchemaDescriptor = u.arbitrary()?;
        // Mostly arrays of the declared kind, occasionally any kind at all.
        let physical = if u.ratio(1, 16)? {
            u.arbitrary()?
        } else {
            schema.physical_type()
        };
        let raw = random_physical_array(u, physical, schema.type_length())?;

        let mut options = ConvertOptions::default()
            .with_int96_timestamps(u.arbitrary()?)
            .with_decimal_output(if u.arbitrary()? {
                DecimalOutput::Exact
            } else {
                DecimalOutput::Float64
            });
        if u.arbitrary()? {
            options = options.with_execution_mode(ExecutionMode::Rayon {
                min_chunk_len: u.int_in_range(1..=8)?,
            });
        }

        Ok(Self {
            schema,
            raw,
            options,
        })
    }
}

fn random_physical_array(
    u: &mut Unstructured,
    physical: PhysicalType,
    type_length: Option<usize>,
) -> Result<PhysicalArray> {
    Ok(match physical {
        PhysicalType::Boolean => PhysicalArray::Boolean(u.arbitrary()?),
        PhysicalType::Int32 => PhysicalArray::Int32(u.arbitrary()?),
        PhysicalType::Int64 => PhysicalArray::Int64(u.arbitrary()?),
        PhysicalType::Int96 => {
            let values: Vec<[u8; 12]> = u.arbitrary()?;
            PhysicalArray::Int96(values.into_iter().map(Int96::from_le_bytes).collect())
        }
        PhysicalType::Float => PhysicalArray::Float(u.arbitrary()?),
        PhysicalType::Double => PhysicalArray::Double(u.arbitrary()?),
        PhysicalType::ByteArray => {
            let values: Vec<Vec<u8>> = u.arbitrary()?;
            PhysicalArray::ByteArray(BinaryArray::from_iter_values(values))
        }
        PhysicalType::FixedLenByteArray => {
            let width = type_length.unwrap_or(1);
            let len = u.arbitrary_len::<u8>()? / width.max(1);
            let values = (0..len)
                .map(|_| {
                    // Rarely produce a value of the wrong width.
                    let n = if u.ratio(1, 32)? { width + 1 } else { width };
                    u.bytes(n).map(<[u8]>::to_vec)
                })
                .collect::<Result<Vec<_>>>()?;
            PhysicalArray::FixedLenByteArray(BinaryArray::from_iter_values(values))
        }
    })
}
