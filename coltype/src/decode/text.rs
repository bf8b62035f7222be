//! Text and document annotations over BYTE_ARRAY.

use bson::{Bson, Document};
use coltype_array::{BinaryArray, LogicalArray};
use coltype_dtype::LogicalType;
use coltype_error::{ColtypeResult, coltype_bail, coltype_err};
use serde_json::Value;

use crate::ExecutionMode;
use crate::exec::decode_values;

/// Smallest well-formed document: a length prefix and the terminating nul.
const MIN_BSON_LEN: usize = 5;

pub(super) fn decode_utf8(
    values: &BinaryArray,
    logical: LogicalType,
    mode: ExecutionMode,
) -> ColtypeResult<LogicalArray> {
    decode_values(values.len(), mode, |i| {
        utf8(values.value(i), i, logical).map(str::to_owned)
    })
    .map(LogicalArray::Utf8)
}

pub(super) fn decode_json(values: &BinaryArray, mode: ExecutionMode) -> ColtypeResult<LogicalArray> {
    decode_values(values.len(), mode, |i| {
        let text = utf8(values.value(i), i, LogicalType::Json)?;
        serde_json::from_str::<Value>(text)
            .map_err(|e| coltype_err!(Decode: i, LogicalType::Json, "{e}"))
    })
    .map(LogicalArray::Json)
}

pub(super) fn decode_bson(values: &BinaryArray, mode: ExecutionMode) -> ColtypeResult<LogicalArray> {
    decode_values(values.len(), mode, |i| bson_document(values.value(i), i))
        .map(LogicalArray::Json)
}

fn utf8(bytes: &[u8], index: usize, logical: LogicalType) -> ColtypeResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| coltype_err!(Decode: index, logical, "{e}"))
}

/// Parse exactly one document spanning the whole value.
fn bson_document(bytes: &[u8], index: usize) -> ColtypeResult<Value> {
    if bytes.len() < MIN_BSON_LEN {
        coltype_bail!(
            Decode: index,
            LogicalType::Bson,
            "{} bytes is too short for a document",
            bytes.len()
        );
    }
    let declared = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if usize::try_from(declared).ok() != Some(bytes.len()) {
        coltype_bail!(
            Decode: index,
            LogicalType::Bson,
            "document declares {declared} bytes but the value holds {}",
            bytes.len()
        );
    }
    let document = Document::from_reader(bytes)
        .map_err(|e| coltype_err!(Decode: index, LogicalType::Bson, "{e}"))?;
    Ok(Bson::Document(document).into_relaxed_extjson())
}
