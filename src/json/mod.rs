//! JSON parsing: the value model, the grammar, and the entry points.
//!
//! [`parse`] applies the grammar's *element* rule and reports whatever it
//! did not consume; [`from_str`] is the complete-document surface on top of
//! it. Both construct the grammar once per process and reuse it.

pub mod grammar;
pub mod value;

pub use grammar::{from_str, parse};
pub use value::Value;
