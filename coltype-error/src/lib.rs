#![deny(missing_docs)]

//! This crate defines the error & result types used across coltype.
//! It also contains the macros used to construct and raise those errors.

mod ext;

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

pub use ext::*;

/// A string error message.
#[derive(Debug)]
pub struct ErrString(Cow<'static, str>);

impl<T> From<T> for ErrString
where
    T: Into<Cow<'static, str>>,
{
    fn from(msg: T) -> Self {
        Self(msg.into())
    }
}

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The top-level error type for coltype.
#[derive(thiserror::Error)]
#[non_exhaustive]
pub enum ColtypeError {
    /// A function or schema was given an argument it cannot accept.
    #[error("{0}\nBacktrace:\n{1}")]
    InvalidArgument(ErrString, Box<Backtrace>),
    /// A raw array or one of its elements disagrees with the physical layout declared by the
    /// schema: wrong physical kind, or a fixed-width element of the wrong byte length.
    #[error("schema mismatch: {0}\nBacktrace:\n{1}")]
    SchemaMismatch(ErrString, Box<Backtrace>),
    /// The element at the given ordinal cannot be interpreted under the logical type.
    #[error("cannot decode element {0} as {1}: {2}\nBacktrace:\n{3}")]
    Decode(usize, ErrString, ErrString, Box<Backtrace>),
    /// An index is out of bounds.
    #[error("index {0} out of bounds from {1} to {2}\nBacktrace:\n{3}")]
    OutOfBounds(usize, usize, usize, Box<Backtrace>),
    /// An output of one kind was accessed as another.
    #[error("expected type: {0} but instead got {1}\nBacktrace:\n{2}")]
    MismatchedTypes(ErrString, ErrString, Box<Backtrace>),
    /// An internal invariant was violated.
    #[error("{0}\nBacktrace:\n{1}")]
    AssertionFailed(ErrString, Box<Backtrace>),
    /// Wraps an error with additional context.
    #[error("{0}: {1}")]
    Context(ErrString, Box<ColtypeError>),
}

impl ColtypeError {
    /// Adds additional context to an error.
    pub fn with_context<T: Into<ErrString>>(self, msg: T) -> Self {
        ColtypeError::Context(msg.into(), Box::new(self))
    }

    /// The ordinal of the element that failed to decode, looking through any context.
    pub fn element_index(&self) -> Option<usize> {
        match self {
            ColtypeError::Decode(idx, ..) => Some(*idx),
            ColtypeError::Context(_, inner) => inner.element_index(),
            _ => None,
        }
    }

    /// The error with all context layers removed.
    pub fn root_cause(&self) -> &ColtypeError {
        match self {
            ColtypeError::Context(_, inner) => inner.root_cause(),
            other => other,
        }
    }

    /// Panics with this error as the message.
    #[allow(clippy::panic)]
    pub fn panic(self) -> ! {
        panic!("{}", self)
    }
}

impl Debug for ColtypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A type alias for Results that return ColtypeErrors as their error type.
pub type ColtypeResult<T> = Result<T, ColtypeError>;

/// A trait for unwrapping a coltype result, panicking with a message describing the broken
/// invariant.
pub trait ColtypeExpect {
    /// The type of the value being unwrapped.
    type Output;

    /// Returns the value of the result if it is Ok, otherwise panics with the error.
    /// Should be called only in contexts where the error condition represents a bug.
    fn coltype_expect(self, msg: &str) -> Self::Output;
}

impl<T, E> ColtypeExpect for Result<T, E>
where
    E: Into<ColtypeError>,
{
    type Output = T;

    #[inline(always)]
    fn coltype_expect(self, msg: &str) -> Self::Output {
        self.map_err(|err| err.into())
            .unwrap_or_else(|e| e.with_context(msg.to_string()).panic())
    }
}

impl<T> ColtypeExpect for Option<T> {
    type Output = T;

    #[inline(always)]
    fn coltype_expect(self, msg: &str) -> Self::Output {
        self.unwrap_or_else(|| {
            ColtypeError::AssertionFailed(msg.to_string().into(), Box::new(Backtrace::capture()))
                .panic()
        })
    }
}

/// A convenient macro for creating a ColtypeError.
#[macro_export]
macro_rules! coltype_err {
    (Decode: $idx:expr, $logical:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        use std::backtrace::Backtrace;
        $crate::ColtypeError::Decode(
            $idx,
            $logical.to_string().into(),
            format!($fmt $(, $arg)*).into(),
            Box::new(Backtrace::capture()),
        )
    }};
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        use std::backtrace::Backtrace;
        $crate::ColtypeError::OutOfBounds($idx, $start, $stop, Box::new(Backtrace::capture()))
    }};
    (MismatchedTypes: $expected:expr, $actual:expr) => {{
        use std::backtrace::Backtrace;
        $crate::ColtypeError::MismatchedTypes(
            $expected.to_string().into(),
            $actual.to_string().into(),
            Box::new(Backtrace::capture()),
        )
    }};
    ($variant:ident: $fmt:literal $(, $arg:expr)* $(,)?) => {{
        use std::backtrace::Backtrace;
        $crate::ColtypeError::$variant(
            format!($fmt $(, $arg)*).into(),
            Box::new(Backtrace::capture()),
        )
    }};
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::coltype_err!(InvalidArgument: $fmt $(, $arg)*)
    };
}

/// A convenient macro for returning a ColtypeError.
#[macro_export]
macro_rules! coltype_bail {
    ($($tt:tt)+) => {
        return Err($crate::coltype_err!($($tt)+))
    };
}

/// A convenient macro for panicking with a ColtypeError in the presence of a programmer error
/// (e.g., an invariant has been violated).
#[macro_export]
macro_rules! coltype_panic {
    ($variant:ident: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::coltype_err!($variant: $fmt $(, $arg)*).panic()
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::coltype_panic!(AssertionFailed: $fmt $(, $arg)*)
    };
}
