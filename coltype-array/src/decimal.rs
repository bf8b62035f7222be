use coltype_dtype::DecimalDType;
use coltype_error::{ColtypeResult, coltype_bail};

use crate::bigint::{i256, i256_to_f64};

/// Exact decimals: unscaled 256-bit integers sharing one precision and scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalArray {
    values: Vec<i256>,
    decimal_dtype: DecimalDType,
}

impl DecimalArray {
    /// Create a new array of unscaled values.
    pub fn new(values: Vec<i256>, decimal_dtype: DecimalDType) -> Self {
        Self {
            values,
            decimal_dtype,
        }
    }

    /// The precision and scale shared by every value.
    pub fn decimal_dtype(&self) -> DecimalDType {
        self.decimal_dtype
    }

    /// The unscaled values.
    pub fn unscaled_values(&self) -> &[i256] {
        &self.values
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index` as the nearest `f64`.
    pub fn value_f64(&self, index: usize) -> ColtypeResult<f64> {
        let Some(&unscaled) = self.values.get(index) else {
            coltype_bail!(OutOfBounds: index, 0, self.len());
        };
        Ok(scale_to_f64(unscaled, self.decimal_dtype.scale()))
    }

    /// The value at `index` in plain decimal notation with exactly `scale` fractional digits.
    pub fn format_value(&self, index: usize) -> ColtypeResult<String> {
        let Some(&unscaled) = self.values.get(index) else {
            coltype_bail!(OutOfBounds: index, 0, self.len());
        };
        Ok(format_unscaled(unscaled, self.decimal_dtype.scale()))
    }
}

/// `unscaled × 10^-scale` as an `f64`.
pub fn scale_to_f64(unscaled: i256, scale: i8) -> f64 {
    i256_to_f64(unscaled) / 10f64.powi(i32::from(scale))
}

fn format_unscaled(unscaled: i256, scale: i8) -> String {
    let digits = unscaled.to_string();
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let scale = usize::try_from(scale).unwrap_or(0);
    if scale == 0 {
        return format!("{sign}{digits}");
    }
    let padded = format!("{digits:0>width$}", width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::bigint::ToI256;

    #[rstest]
    #[case(7772, 1, "777.2")]
    #[case(-7772, 1, "-777.2")]
    #[case(5, 3, "0.005")]
    #[case(-5, 3, "-0.005")]
    #[case(42, 0, "42")]
    #[case(0, 2, "0.00")]
    fn test_format_value(#[case] unscaled: i64, #[case] scale: i8, #[case] expected: &str) {
        let array = DecimalArray::new(vec![unscaled.to_i256()], DecimalDType::new(38, scale));
        assert_eq!(array.format_value(0).unwrap(), expected);
    }

    #[test]
    fn test_value_f64() {
        let array = DecimalArray::new(
            vec![9_876_543_210i64.to_i256(), (-1i64).to_i256()],
            DecimalDType::new(18, 10),
        );
        assert!((array.value_f64(0).unwrap() - 0.987_654_321).abs() < 1e-12);
        assert!((array.value_f64(1).unwrap() + 1e-10).abs() < 1e-20);
        assert!(array.value_f64(2).is_err());
    }
}
