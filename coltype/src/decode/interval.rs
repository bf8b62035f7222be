//! INTERVAL over 12-byte fixed-width values.

use coltype_array::{BinaryArray, Interval, IntervalArray, LogicalArray};
use coltype_error::ColtypeResult;

use crate::ExecutionMode;
use crate::exec::decode_values;

pub(super) fn decode(values: &BinaryArray, mode: ExecutionMode) -> ColtypeResult<LogicalArray> {
    decode_values(values.len(), mode, |i| {
        Interval::try_from_le_bytes(values.value(i))
    })
    .map(|intervals| LogicalArray::Interval(IntervalArray::new(intervals)))
}
