#![forbid(unsafe_code)]
//! wcoj-core: the data model shared by every WCOJ crate.
//!
//! - `schema`: attribute names and ordered, duplicate-free schemas.
//! - `types`: the `Scalar` value carried by tuples.
//! - `tuple`: immutable attribute → value records, projection and equi-join.
//! - `relation`: named, deduplicated tuple sets conforming to a schema.
//!
//! Pure data and set algebra. No evaluation strategy lives here.

pub mod config;
pub mod error;
pub mod hash;
pub mod id;
pub mod prelude;
pub mod relation;
pub mod schema;
pub mod tuple;
pub mod types;

pub use error::{Error, Result};
