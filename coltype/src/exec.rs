use coltype_error::ColtypeResult;

use crate::ExecutionMode;

/// Decode the elements `0..len` in order.
///
/// When several elements fail, the error of the lowest ordinal is returned regardless of the
/// execution mode.
pub(crate) fn decode_values<T, F>(len: usize, mode: ExecutionMode, decode: F) -> ColtypeResult<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> ColtypeResult<T> + Sync,
{
    match mode {
        ExecutionMode::Inline => (0..len).map(decode).collect(),
        #[cfg(feature = "rayon")]
        ExecutionMode::Rayon { min_chunk_len } => decode_chunked(len, min_chunk_len, decode),
    }
}

#[cfg(feature = "rayon")]
fn decode_chunked<T, F>(len: usize, min_chunk_len: usize, decode: F) -> ColtypeResult<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> ColtypeResult<T> + Sync,
{
    use rayon::prelude::*;

    let min_chunk_len = min_chunk_len.max(1);
    if len <= min_chunk_len {
        return (0..len).map(decode).collect();
    }

    let chunk_len = min_chunk_len.max(len.div_ceil(rayon::current_num_threads()));
    log::debug!("Decoding {len} elements in chunks of {chunk_len}");

    let starts: Vec<usize> = (0..len).step_by(chunk_len).collect();
    let chunks: Vec<ColtypeResult<Vec<T>>> = starts
        .into_par_iter()
        .map(|start| (start..len.min(start + chunk_len)).map(&decode).collect())
        .collect();

    // Chunks come back in order and each stops at its first failure.
    let mut values = Vec::with_capacity(len);
    for chunk in chunks {
        values.extend(chunk?);
    }
    Ok(values)
}
