//! 256-bit integers for wide decimals.

pub use arrow_buffer::i256;

/// Lossless widening of native signed integers into an [`i256`].
pub trait ToI256 {
    /// Converts the value of `self` to an `i256`.
    fn to_i256(&self) -> i256;
}

macro_rules! impl_to_i256_lossless {
    ($typ:ty) => {
        impl ToI256 for $typ {
            #[inline]
            fn to_i256(&self) -> i256 {
                i256::from_i128(*self as i128)
            }
        }
    };
}

impl_to_i256_lossless!(i8);
impl_to_i256_lossless!(i16);
impl_to_i256_lossless!(i32);
impl_to_i256_lossless!(i64);
impl_to_i256_lossless!(i128);

/// Drop leading bytes of a big-endian two's-complement integer that only repeat the sign.
///
/// The result always keeps at least one byte of a non-empty input, and the most significant bit
/// of its first byte is still the sign of the value.
pub fn strip_sign_extension(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < bytes.len() {
        let (byte, next) = (bytes[start], bytes[start + 1]);
        let redundant = (byte == 0x00 && next & 0x80 == 0) || (byte == 0xFF && next & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    &bytes[start..]
}

/// Decode a big-endian two's-complement integer of any width.
///
/// An empty slice decodes to zero. Returns `None` when the value needs more than 256 bits.
pub fn i256_from_be_slice(bytes: &[u8]) -> Option<i256> {
    let Some(&first) = bytes.first() else {
        return Some(i256::ZERO);
    };
    let significant = strip_sign_extension(bytes);
    if significant.len() > 32 {
        return None;
    }

    let fill = if first & 0x80 != 0 { 0xFF } else { 0x00 };
    let mut buf = [fill; 32];
    buf[32 - significant.len()..].copy_from_slice(significant);
    Some(i256::from_be_bytes(buf))
}

/// The nearest `f64` to an `i256`.
pub fn i256_to_f64(value: i256) -> f64 {
    if value == i256::MIN {
        return -(2f64.powi(255));
    }
    if value < i256::ZERO {
        return -i256_to_f64(value.wrapping_neg());
    }
    let (low, high) = value.to_parts();
    let high = high.unsigned_abs();
    if high == 0 {
        return low as f64;
    }
    // Shift into 128 bits, folding the dropped bits into a sticky bit so the final cast is the
    // only rounding step.
    let shift = 128 - high.leading_zeros();
    let sticky = u128::from(low & ((1u128 << shift) - 1) != 0);
    let mantissa = (high << (128 - shift)) | (low >> shift) | sticky;
    mantissa as f64 * (1u128 << shift) as f64
}
