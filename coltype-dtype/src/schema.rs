use std::fmt::{Display, Formatter};
use std::sync::Arc;

use coltype_error::{ColtypeError, ColtypeResult, coltype_bail, coltype_err};

use crate::{DecimalDType, LogicalType, PhysicalType};

/// Byte width of an INTERVAL value.
const INTERVAL_TYPE_LENGTH: usize = 12;

/// A name for a column.
pub type FieldName = Arc<str>;

/// The per-column metadata that drives logical conversion.
///
/// A descriptor can only be obtained through [`SchemaDescriptorBuilder::build`], which checks that
/// the logical annotation applies to the physical type and that the decimal and fixed-width
/// parameters are consistent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SchemaDescriptorBuilder", into = "SchemaDescriptorBuilder")
)]
pub struct SchemaDescriptor {
    name: Option<FieldName>,
    physical_type: PhysicalType,
    logical_type: LogicalType,
    type_length: Option<usize>,
    decimal: Option<DecimalDType>,
}

impl SchemaDescriptor {
    /// Start describing a column stored as `physical_type`.
    pub fn builder(physical_type: PhysicalType) -> SchemaDescriptorBuilder {
        SchemaDescriptorBuilder::new(physical_type)
    }

    /// The column name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The storage kind of the column's raw values.
    pub fn physical_type(&self) -> PhysicalType {
        self.physical_type
    }

    /// The logical annotation of the column.
    pub fn logical_type(&self) -> LogicalType {
        self.logical_type
    }

    /// The byte width of every value, for fixed-length byte array columns.
    pub fn type_length(&self) -> Option<usize> {
        self.type_length
    }

    /// Precision and scale, for decimal columns.
    pub fn decimal_dtype(&self) -> Option<DecimalDType> {
        self.decimal
    }

    /// The number of fractional decimal digits, for decimal columns.
    pub fn scale(&self) -> Option<i8> {
        self.decimal.map(|d| d.scale())
    }

    /// The number of significant decimal digits, for decimal columns.
    pub fn precision(&self) -> Option<u8> {
        self.decimal.map(|d| d.precision())
    }

    /// The byte width of every raw value, when the schema fixes one.
    pub fn value_width(&self) -> Option<usize> {
        match self.physical_type {
            PhysicalType::FixedLenByteArray => self.type_length,
            other => other.byte_width(),
        }
    }
}

impl Display for SchemaDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        match self.type_length {
            Some(len) => write!(f, "{}({len})", self.physical_type)?,
            None => write!(f, "{}", self.physical_type)?,
        }
        match (self.logical_type, self.decimal) {
            (LogicalType::None, _) => Ok(()),
            (LogicalType::Decimal, Some(decimal)) => write!(f, " {decimal}"),
            (logical, _) => write!(f, " {logical}"),
        }
    }
}

/// Builder for a [`SchemaDescriptor`].
///
/// Numeric parameters take the signed 32-bit values found in column metadata and are range
/// checked by [`build`](Self::build).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaDescriptorBuilder {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    name: Option<FieldName>,
    physical_type: PhysicalType,
    #[cfg_attr(feature = "serde", serde(default))]
    logical_type: LogicalType,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    type_length: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    precision: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    scale: Option<i32>,
}

impl SchemaDescriptorBuilder {
    /// A builder for an unannotated column stored as `physical_type`.
    pub fn new(physical_type: PhysicalType) -> Self {
        Self {
            name: None,
            physical_type,
            logical_type: LogicalType::None,
            type_length: None,
            precision: None,
            scale: None,
        }
    }

    /// Set the column name used in error messages.
    pub fn with_name(mut self, name: impl Into<FieldName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the logical annotation.
    pub fn with_logical_type(mut self, logical_type: LogicalType) -> Self {
        self.logical_type = logical_type;
        self
    }

    /// Set the logical annotation from an optional converted-type wire code.
    pub fn with_converted_type(self, code: Option<i32>) -> Self {
        self.with_logical_type(LogicalType::from_converted_type(code))
    }

    /// Set the byte width of fixed-length byte array values.
    pub fn with_type_length(mut self, type_length: i32) -> Self {
        self.type_length = Some(type_length);
        self
    }

    /// Set the decimal precision.
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the decimal scale. Defaults to zero for decimal columns.
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Validate the parameters and produce the descriptor.
    pub fn build(self) -> ColtypeResult<SchemaDescriptor> {
        let Self {
            name,
            physical_type,
            logical_type,
            type_length,
            precision,
            scale,
        } = self;

        if !logical_type.accepts(physical_type) {
            coltype_bail!("{logical_type} cannot annotate a {physical_type} column");
        }

        let type_length = match (physical_type, type_length) {
            (PhysicalType::FixedLenByteArray, Some(len)) => match usize::try_from(len) {
                Ok(len) if len >= 1 => Some(len),
                _ => coltype_bail!("type_length must be positive, got {len}"),
            },
            (PhysicalType::FixedLenByteArray, None) => {
                coltype_bail!("{physical_type} column requires a type_length")
            }
            (_, Some(len)) => {
                log::debug!("Ignoring type_length {len} on {physical_type} column");
                None
            }
            (_, None) => None,
        };

        if logical_type == LogicalType::Interval && type_length != Some(INTERVAL_TYPE_LENGTH) {
            coltype_bail!("INTERVAL requires a type_length of {INTERVAL_TYPE_LENGTH}");
        }

        let decimal = if logical_type == LogicalType::Decimal {
            let precision =
                precision.ok_or_else(|| coltype_err!("DECIMAL column requires a precision"))?;
            let precision = u8::try_from(precision)
                .map_err(|_| coltype_err!("decimal precision {precision} out of range"))?;
            let scale = scale.unwrap_or(0);
            let scale = i8::try_from(scale)
                .map_err(|_| coltype_err!("decimal scale {scale} out of range"))?;
            let decimal = DecimalDType::try_new(precision, scale)?;

            let width = match physical_type {
                PhysicalType::FixedLenByteArray => type_length,
                other => other.byte_width(),
            };
            if let Some(width) = width {
                if !decimal.fits_in_bits(width * 8) {
                    coltype_bail!(
                        "precision {} does not fit in {} bytes of {physical_type}",
                        decimal.precision(),
                        width
                    );
                }
            }
            Some(decimal)
        } else {
            if precision.is_some() || scale.is_some() {
                log::debug!("Ignoring precision/scale on {logical_type} column");
            }
            None
        };

        Ok(SchemaDescriptor {
            name,
            physical_type,
            logical_type,
            type_length,
            decimal,
        })
    }
}

impl TryFrom<SchemaDescriptorBuilder> for SchemaDescriptor {
    type Error = ColtypeError;

    fn try_from(value: SchemaDescriptorBuilder) -> Result<Self, Self::Error> {
        value.build()
    }
}

impl From<SchemaDescriptor> for SchemaDescriptorBuilder {
    fn from(value: SchemaDescriptor) -> Self {
        Self {
            name: value.name,
            physical_type: value.physical_type,
            logical_type: value.logical_type,
            type_length: value
                .type_length
                .map(|len| i32::try_from(len).unwrap_or(i32::MAX)),
            precision: value.decimal.map(|d| i32::from(d.precision())),
            scale: value.decimal.map(|d| i32::from(d.scale())),
        }
    }
}
