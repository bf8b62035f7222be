//! Date, time and timestamp metadata.

mod temporal;
mod unit;

pub use temporal::*;
pub use unit::*;
