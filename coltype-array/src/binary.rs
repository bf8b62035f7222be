use bytes::Bytes;
use coltype_error::{ColtypeExpect, ColtypeResult, coltype_bail, coltype_err};
use itertools::Itertools;

/// Byte string values stored back to back in one buffer, delimited by offsets.
///
/// There is one more offset than there are values: value `i` spans
/// `bytes[offsets[i]..offsets[i + 1]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryArray {
    offsets: Vec<usize>,
    bytes: Bytes,
}

impl Default for BinaryArray {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            bytes: Bytes::new(),
        }
    }
}

impl BinaryArray {
    /// Build an array from offsets into `bytes`.
    ///
    /// Offsets must be non-empty, non-decreasing and end within `bytes`.
    pub fn try_new(offsets: Vec<usize>, bytes: Bytes) -> ColtypeResult<Self> {
        let Some(&last) = offsets.last() else {
            coltype_bail!("offsets must contain at least one entry");
        };
        if !offsets.iter().tuple_windows().all(|(a, b)| a <= b) {
            coltype_bail!("offsets must be non-decreasing");
        }
        if last > bytes.len() {
            coltype_bail!(OutOfBounds: last, 0, bytes.len());
        }
        Ok(Self { offsets, bytes })
    }

    /// Split a contiguous buffer into values of exactly `width` bytes.
    pub fn try_from_fixed_width(bytes: Bytes, width: usize) -> ColtypeResult<Self> {
        if width == 0 {
            coltype_bail!("fixed width must be positive");
        }
        if bytes.len() % width != 0 {
            coltype_bail!(
                SchemaMismatch: "buffer of {} bytes is not a whole number of {width}-byte values",
                bytes.len()
            );
        }
        let offsets = (0..=bytes.len()).step_by(width).collect();
        Ok(Self { offsets, bytes })
    }

    /// Build an array by copying each value.
    pub fn from_iter_values<T: AsRef<[u8]>, I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut offsets = Vec::with_capacity(iter.size_hint().0 + 1);
        let mut data = Vec::new();
        offsets.push(0);
        for value in iter {
            data.extend_from_slice(value.as_ref());
            offsets.push(data.len());
        }
        Self {
            offsets,
            bytes: Bytes::from(data),
        }
    }

    /// The number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether the array holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The offsets delimiting each value.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The backing buffer, including any bytes outside the first and last offset.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// The bytes of the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn value(&self, index: usize) -> &[u8] {
        &self.bytes[self.offsets[index]..self.offsets[index + 1]]
    }

    /// The value at `index` as a zero-copy buffer.
    pub fn bytes_at(&self, index: usize) -> ColtypeResult<Bytes> {
        if index >= self.len() {
            coltype_bail!(OutOfBounds: index, 0, self.len());
        }
        Ok(self.bytes.slice(self.offsets[index]..self.offsets[index + 1]))
    }

    /// The byte length of the value at `index`.
    #[inline]
    pub fn value_len(&self, index: usize) -> usize {
        self.offsets[index + 1] - self.offsets[index]
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.offsets
            .iter()
            .tuple_windows()
            .map(|(&start, &end)| &self.bytes[start..end])
    }

    /// Check that every value is exactly `width` bytes long.
    pub fn check_fixed_width(&self, width: usize) -> ColtypeResult<()> {
        match (0..self.len()).find(|&i| self.value_len(i) != width) {
            None => Ok(()),
            Some(i) => Err(coltype_err!(
                SchemaMismatch: "element {i} has {} bytes but type_length is {width}",
                self.value_len(i)
            )),
        }
    }

    /// The total number of value bytes between the first and last offset.
    pub fn nbytes(&self) -> usize {
        let first = *self.offsets.first().coltype_expect("offsets are never empty");
        let last = *self.offsets.last().coltype_expect("offsets are never empty");
        last - first
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for BinaryArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_values(iter)
    }
}

impl From<Vec<&[u8]>> for BinaryArray {
    fn from(value: Vec<&[u8]>) -> Self {
        Self::from_iter_values(value)
    }
}

impl From<Vec<&str>> for BinaryArray {
    fn from(value: Vec<&str>) -> Self {
        Self::from_iter_values(value)
    }
}

impl<'a> IntoIterator for &'a BinaryArray {
    type Item = &'a [u8];
    type IntoIter = Box<dyn Iterator<Item = &'a [u8]> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
