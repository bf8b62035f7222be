use std::fmt::{Display, Formatter};

use coltype_error::{ColtypeError, ColtypeExpect, ColtypeResult, coltype_bail};
use num_traits::ToPrimitive;

use crate::LogicalDType;

/// Maximum precision of a decimal whose unscaled value fits in 256 bits.
pub const DECIMAL256_MAX_PRECISION: u8 = 76;

/// Parameters that define the precision and scale of a decimal type.
///
/// The unscaled integer stored in a column is multiplied by `10^-scale` to recover the value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalDType {
    precision: u8,
    scale: i8,
}

impl DecimalDType {
    /// Constructor for a `DecimalDType`.
    ///
    /// # Panics
    ///
    /// Attempting to build a new instance with zero precision or a negative scale will panic.
    pub fn new(precision: u8, scale: i8) -> Self {
        Self::try_new(precision, scale).coltype_expect("invalid decimal parameters")
    }

    /// Checked constructor for a `DecimalDType`.
    ///
    /// Scale may exceed precision, in which case every value is a pure fraction.
    pub fn try_new(precision: u8, scale: i8) -> ColtypeResult<Self> {
        if precision == 0 {
            coltype_bail!("decimal precision must be at least 1");
        }
        if scale < 0 {
            coltype_bail!("decimal scale {} must not be negative", scale);
        }
        Ok(Self { precision, scale })
    }

    /// The precision is the number of significant figures that the decimal tracks.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// The scale is the number of digits after the decimal point.
    pub fn scale(&self) -> i8 {
        self.scale
    }

    /// Return the max number of bits required to fit a decimal with `precision` in.
    pub fn required_bit_width(&self) -> usize {
        (self.precision as f32 * 10.0f32.log(2.0))
            .ceil()
            .to_usize()
            .coltype_expect("too many bits required")
    }

    /// Whether every unscaled value of this precision fits a two's-complement integer of
    /// `bits` bits, one of which is the sign.
    pub fn fits_in_bits(&self, bits: usize) -> bool {
        self.required_bit_width() < bits
    }
}

impl Display for DecimalDType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "decimal({},{})", self.precision, self.scale)
    }
}

impl TryFrom<&LogicalDType> for DecimalDType {
    type Error = ColtypeError;

    fn try_from(value: &LogicalDType) -> Result<Self, Self::Error> {
        match value {
            LogicalDType::Decimal(dt) => Ok(*dt),
            _ => coltype_bail!("Cannot convert DType {value} into DecimalType"),
        }
    }
}
