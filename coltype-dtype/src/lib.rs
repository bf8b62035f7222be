#![deny(missing_docs)]

//! The type system for coltype.
//!
//! This crate describes the physical storage types of a column, the logical annotations that
//! give them meaning, the per-column [`SchemaDescriptor`] combining both, and the
//! [`LogicalDType`] of the values produced by decoding.

pub use decimal::*;
pub use dtype::*;
pub use logical::*;
pub use physical::*;
pub use ptype::*;
pub use schema::*;

#[cfg(feature = "arbitrary")]
mod arbitrary;
pub mod datetime;
mod decimal;
mod dtype;
mod logical;
mod physical;
mod ptype;
mod schema;
