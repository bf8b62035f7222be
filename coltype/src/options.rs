/// How DECIMAL columns are represented after conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecimalOutput {
    /// The nearest `f64` to each value.
    #[default]
    Float64,
    /// Unscaled 256-bit integers together with the column's precision and scale.
    Exact,
}

/// The [`ExecutionMode`] describes how the elements of a column are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Decode every element on the calling thread.
    #[default]
    Inline,
    /// Split the column into contiguous chunks of at least `min_chunk_len` elements and decode
    /// them on the global rayon pool. Columns shorter than one chunk are decoded inline.
    #[cfg(feature = "rayon")]
    Rayon {
        /// The smallest number of elements handed to one task.
        min_chunk_len: usize,
    },
}

/// Options controlling logical conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    decimal_output: DecimalOutput,
    int96_timestamps: bool,
    execution_mode: ExecutionMode,
}

impl ConvertOptions {
    /// Configure how DECIMAL columns are represented.
    ///
    /// Defaults to [`DecimalOutput::Float64`].
    pub fn with_decimal_output(mut self, decimal_output: DecimalOutput) -> Self {
        self.decimal_output = decimal_output;
        self
    }

    /// Decode unannotated INT96 columns as legacy nanosecond timestamps instead of passing them
    /// through.
    pub fn with_int96_timestamps(mut self, int96_timestamps: bool) -> Self {
        self.int96_timestamps = int96_timestamps;
        self
    }

    /// Configure the execution mode.
    pub fn with_execution_mode(mut self, execution_mode: ExecutionMode) -> Self {
        self.execution_mode = execution_mode;
        self
    }

    /// How DECIMAL columns are represented.
    pub fn decimal_output(&self) -> DecimalOutput {
        self.decimal_output
    }

    /// Whether unannotated INT96 columns decode as timestamps.
    pub fn int96_timestamps(&self) -> bool {
        self.int96_timestamps
    }

    /// How elements are scheduled.
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }
}
