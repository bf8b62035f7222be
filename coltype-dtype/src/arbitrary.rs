use arbitrary::{Arbitrary, Error, Result, Unstructured};

use crate::{LogicalType, PhysicalType, SchemaDescriptor};

impl<'a> Arbitrary<'a> for PhysicalType {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        PhysicalType::try_from(u.int_in_range(0..=7)?).map_err(|_| Error::IncorrectFormat)
    }
}

impl<'a> Arbitrary<'a> for LogicalType {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // -1 is NONE, 22 stands in for codes outside the catalog.
        Ok(LogicalType::from(u.int_in_range(-1..=22)?))
    }
}

impl<'a> Arbitrary<'a> for SchemaDescriptor {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let physical: PhysicalType = u.arbitrary()?;
        let logical: LogicalType = u.arbitrary()?;
        let mut builder = SchemaDescriptor::builder(physical).with_logical_type(logical);

        if physical == PhysicalType::FixedLenByteArray {
            let type_length = if logical == LogicalType::Interval {
                12
            } else {
                u.int_in_range(1..=40)?
            };
            builder = builder.with_type_length(type_length);
        }
        if logical == LogicalType::Decimal {
            builder = builder
                .with_precision(u.int_in_range(1..=18)?)
                .with_scale(u.int_in_range(0..=20)?);
        }

        builder.build().map_err(|_| Error::IncorrectFormat)
    }
}
