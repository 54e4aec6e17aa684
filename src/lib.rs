//! Tantra: a small parser-combinator engine with a complete JSON grammar
//! woven from its primitives.
//!
//! The engine ([`combinators`]) supplies ordered alternation, repetition,
//! sequencing, optionality, separated lists, mapping, and deferred
//! construction over a cursor-style [`Input`]; the text primitives
//! ([`text`]) supply exact literals and character classes; the JSON grammar
//! ([`json`]) is assembled from nothing but the two.
//!
//! Parsing never throws and never partially consumes on failure: every
//! parser returns an [`Outcome`], and a failed parser always hands back the
//! exact input it was given, so alternation and sequencing can backtrack
//! freely.
//!
//! ```rust
//! use tantra::{json, Value};
//!
//! let value = json::from_str(r#"{"name": "tantra", "tests": [1, 2, 3]}"#).unwrap();
//! assert_eq!(value.as_object().unwrap()["name"], Value::String("tantra".into()));
//! ```

pub use crate::combinators::{
    choice, filter_map, lazy, many0, many1, map, optional, recognize, separated, sequence,
    Parser, SharedParser,
};
pub use crate::errors::ParseError;
pub use crate::input::Input;
pub use crate::json::Value;
pub use crate::outcome::Outcome;
pub use crate::text::{digit, hex_digit, letter, literal, satisfy, whitespace};

pub mod cli;
pub mod combinators;
pub mod errors;
pub mod input;
pub mod json;
pub mod outcome;
pub mod text;
