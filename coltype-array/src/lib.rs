#![deny(missing_docs)]

//! Raw physical column arrays and the logical arrays they decode into.

pub use binary::*;
pub use decimal::*;
pub use interval::*;
pub use logical::*;
pub use physical::*;
pub use primitive::*;
pub use temporal::*;

pub mod bigint;
mod binary;
mod decimal;
mod interval;
mod logical;
mod physical;
mod primitive;
mod temporal;
