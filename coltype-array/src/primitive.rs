use coltype_dtype::{NativePType, PType};
use coltype_error::{ColtypeResult, coltype_err};

/// Match on every variant of a [`PrimitiveArray`], binding its values as a `Vec<T>` of the
/// matching native type.
#[macro_export]
macro_rules! match_each_primitive_array {
    ($self:expr, | $values:ident | $body:block) => {{
        use $crate::PrimitiveArray;
        match $self {
            PrimitiveArray::U8($values) => $body,
            PrimitiveArray::U16($values) => $body,
            PrimitiveArray::U32($values) => $body,
            PrimitiveArray::U64($values) => $body,
            PrimitiveArray::I8($values) => $body,
            PrimitiveArray::I16($values) => $body,
            PrimitiveArray::I32($values) => $body,
            PrimitiveArray::I64($values) => $body,
            PrimitiveArray::F64($values) => $body,
        }
    }};
}

/// Decoded values of one native type.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveArray {
    /// Unsigned 8-bit values.
    U8(Vec<u8>),
    /// Unsigned 16-bit values.
    U16(Vec<u16>),
    /// Unsigned 32-bit values.
    U32(Vec<u32>),
    /// Unsigned 64-bit values.
    U64(Vec<u64>),
    /// Signed 8-bit values.
    I8(Vec<i8>),
    /// Signed 16-bit values.
    I16(Vec<i16>),
    /// Signed 32-bit values.
    I32(Vec<i32>),
    /// Signed 64-bit values.
    I64(Vec<i64>),
    /// Double precision floats.
    F64(Vec<f64>),
}

impl PrimitiveArray {
    /// The native type of the values.
    pub fn ptype(&self) -> PType {
        match self {
            Self::U8(_) => PType::U8,
            Self::U16(_) => PType::U16,
            Self::U32(_) => PType::U32,
            Self::U64(_) => PType::U64,
            Self::I8(_) => PType::I8,
            Self::I16(_) => PType::I16,
            Self::I32(_) => PType::I32,
            Self::I64(_) => PType::I64,
            Self::F64(_) => PType::F64,
        }
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        match_each_primitive_array!(self, |values| { values.len() })
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The values as a slice of `T`, which must be the array's native type.
    pub fn as_slice<T: NativeValue>(&self) -> ColtypeResult<&[T]> {
        T::downcast(self).ok_or_else(|| coltype_err!(MismatchedTypes: T::PTYPE, self.ptype()))
    }

    /// Consume the array, returning its values as a `Vec<T>`.
    pub fn into_vec<T: NativeValue>(self) -> ColtypeResult<Vec<T>> {
        let ptype = self.ptype();
        T::downcast_owned(self).ok_or_else(|| coltype_err!(MismatchedTypes: T::PTYPE, ptype))
    }

    /// Every value converted to `f64`, possibly losing precision for 64-bit integers.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match_each_primitive_array!(self, |values| {
            values
                .iter()
                .map(|v| num_traits::ToPrimitive::to_f64(v).unwrap_or(f64::NAN))
                .collect()
        })
    }
}

/// A native type that can be stored in a [`PrimitiveArray`].
pub trait NativeValue: NativePType {
    /// Borrow the values of `array` if they are of this type.
    fn downcast(array: &PrimitiveArray) -> Option<&[Self]>;

    /// Take the values of `array` if they are of this type.
    fn downcast_owned(array: PrimitiveArray) -> Option<Vec<Self>>;

    /// Wrap values of this type in a [`PrimitiveArray`].
    fn into_array(values: Vec<Self>) -> PrimitiveArray;
}

macro_rules! native_value {
    ($T:ty, $variant:ident) => {
        impl NativeValue for $T {
            fn downcast(array: &PrimitiveArray) -> Option<&[Self]> {
                match array {
                    PrimitiveArray::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn downcast_owned(array: PrimitiveArray) -> Option<Vec<Self>> {
                match array {
                    PrimitiveArray::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn into_array(values: Vec<Self>) -> PrimitiveArray {
                PrimitiveArray::$variant(values)
            }
        }

        impl From<Vec<$T>> for PrimitiveArray {
            fn from(values: Vec<$T>) -> Self {
                PrimitiveArray::$variant(values)
            }
        }
    };
}

native_value!(u8, U8);
native_value!(u16, U16);
native_value!(u32, U32);
native_value!(u64, U64);
native_value!(i8, I8);
native_value!(i16, I16);
native_value!(i32, I32);
native_value!(i64, I64);
native_value!(f64, F64);

impl<T: NativeValue> FromIterator<T> for PrimitiveArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        T::into_array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use coltype_error::ColtypeError;

    use super::*;

    #[test]
    fn test_typed_access() {
        let array = PrimitiveArray::from(vec![65533u16, 1]);
        assert_eq!(array.ptype(), PType::U16);
        assert_eq!(array.len(), 2);
        assert_eq!(array.as_slice::<u16>().unwrap(), &[65533, 1]);
        assert_eq!(array.to_f64_vec(), vec![65533.0, 1.0]);
    }

    #[test]
    fn test_wrong_type() {
        let array: PrimitiveArray = [1i8, -1].into_iter().collect();
        let err = array.as_slice::<u8>().unwrap_err();
        assert!(matches!(err, ColtypeError::MismatchedTypes(..)));
        assert!(err.to_string().starts_with("expected type: u8 but instead got i8"));
        assert!(array.into_vec::<i8>().is_ok());
    }
}
