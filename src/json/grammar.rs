//! The JSON grammar, assembled purely from the combinators and the text
//! primitives.
//!
//! Rule shapes follow RFC 8259: element, value, object/members, array/
//! elements, string/characters, number. Alternation commits to the first
//! matching branch, so branch order inside `integer` and `value` is part of
//! the grammar; reordering it changes what parses.
//!
//! The whole grammar is built once, on first use, and shared behind
//! [`SharedParser`] handles; recursion (value → array/object → element →
//! value) is tied through [`lazy`].

use im::HashMap;
use once_cell::sync::Lazy;

use crate::combinators::{
    choice, filter_map, lazy, many0, many1, map, optional, recognize, separated, sequence,
    Parser, SharedParser,
};
use crate::errors::ParseError;
use crate::input::Input;
use crate::json::value::Value;
use crate::outcome::Outcome;
use crate::text::{digit, hex_digit, literal, satisfy, whitespace};

// === Entry points ===

/// Parses one JSON *element*: a value with optional surrounding
/// whitespace.
///
/// Anything after the element is left unconsumed in the outcome's rest;
/// deciding whether trailing text is acceptable belongs to the caller (or
/// to [`from_str`], which rejects it).
///
/// ```rust
/// use tantra::json;
///
/// let outcome = json::parse(" true tail");
/// assert!(outcome.is_success());
/// assert_eq!(outcome.rest().as_str(), "tail");
/// ```
pub fn parse(input: &str) -> Outcome<'_, Value> {
    DOCUMENT_RULE.parse(Input::new(input))
}

/// Parses a complete JSON document: one element covering the entire input.
///
/// ```rust
/// use tantra::{json, Value};
///
/// assert_eq!(json::from_str("null"), Ok(Value::Null));
/// assert!(json::from_str("null null").is_err());
/// assert!(json::from_str("{\"x\":}").is_err());
/// ```
pub fn from_str(input: &str) -> Result<Value, ParseError> {
    match parse(input) {
        Outcome::Success { value, rest } if rest.is_empty() => Ok(value),
        Outcome::Success { rest, .. } => Err(ParseError::trailing(rest.offset())),
        Outcome::Failure { .. } => Err(ParseError::Malformed),
    }
}

// === Grammar statics ===

static DOCUMENT_RULE: Lazy<SharedParser<Value>> = Lazy::new(|| element().shared());
static VALUE_RULE: Lazy<SharedParser<Value>> = Lazy::new(|| value().shared());

// === Structural rules ===

fn value() -> impl Parser<Output = Value> + Send + Sync {
    choice((
        map(object(), Value::Object),
        map(array(), Value::Array),
        map(string(), Value::String),
        map(number(), Value::Number),
        map(literal("true"), |_| Value::Bool(true)),
        map(literal("false"), |_| Value::Bool(false)),
        map(literal("null"), |_| Value::Null),
    ))
}

/// whitespace value whitespace, the shape shared by documents, array
/// elements, and member values.
fn element() -> impl Parser<Output = Value> + Send + Sync {
    map(
        sequence((whitespace0(), lazy(|| VALUE_RULE.clone()), whitespace0())),
        |(_, value, _)| value,
    )
}

fn object() -> impl Parser<Output = HashMap<String, Value>> + Send + Sync {
    // Collecting into the map realizes the duplicate-key rule: a later
    // occurrence of a key replaces the earlier one.
    let members = map(separated(literal(","), member()), |pairs| {
        pairs.into_iter().collect::<HashMap<String, Value>>()
    });
    let empty = map(whitespace0(), |_| HashMap::new());
    map(
        sequence((literal("{"), members.or(empty), literal("}"))),
        |(_, members, _)| members,
    )
}

fn member() -> impl Parser<Output = (String, Value)> + Send + Sync {
    map(
        sequence((whitespace0(), string(), whitespace0(), literal(":"), element())),
        |(_, key, _, _, value)| (key, value),
    )
}

fn array() -> impl Parser<Output = Vec<Value>> + Send + Sync {
    let elements = separated(literal(","), element());
    let empty = map(whitespace0(), |_| Vec::new());
    map(
        sequence((literal("["), elements.or(empty), literal("]"))),
        |(_, items, _)| items,
    )
}

fn whitespace0() -> impl Parser<Output = ()> + Send + Sync {
    map(many0(whitespace()), |_| ())
}

// === Strings ===

fn string() -> impl Parser<Output = String> + Send + Sync {
    map(
        sequence((literal("\""), many0(character()), literal("\""))),
        |(_, characters, _)| characters.into_iter().collect(),
    )
}

fn character() -> impl Parser<Output = char> + Send + Sync {
    let unescaped = satisfy(|c| c >= ' ' && c != '"' && c != '\\');
    unescaped.or(map(sequence((literal("\\"), escape())), |(_, decoded)| decoded))
}

/// The character after a backslash. Escapes decode to the character they
/// denote.
fn escape() -> impl Parser<Output = char> + Send + Sync {
    choice((
        map(literal("\""), |_| '"'),
        map(literal("\\"), |_| '\\'),
        map(literal("/"), |_| '/'),
        map(literal("b"), |_| '\u{0008}'),
        map(literal("f"), |_| '\u{000C}'),
        map(literal("n"), |_| '\n'),
        map(literal("r"), |_| '\r'),
        map(literal("t"), |_| '\t'),
        unicode_escape(),
    ))
}

/// `u` plus four hex digits. Surrogate code points are not characters, so
/// they fail the parse rather than produce a value.
fn unicode_escape() -> impl Parser<Output = char> + Send + Sync {
    filter_map(
        sequence((literal("u"), hex_digit(), hex_digit(), hex_digit(), hex_digit())),
        |(_, a, b, c, d)| {
            let code = [a, b, c, d]
                .into_iter()
                .try_fold(0u32, |acc, hex| Some(acc * 16 + hex.to_digit(16)?))?;
            char::from_u32(code)
        },
    )
}

// === Numbers ===

/// The number rule converts the full matched substring, so the value is
/// exactly what the text says rather than an assembly of parts.
fn number() -> impl Parser<Output = f64> + Send + Sync {
    filter_map(
        recognize(sequence((integer(), fraction(), exponent()))),
        |text| text.parse::<f64>().ok(),
    )
}

/// Branch order is load-bearing: the multi-digit forms must come before
/// their single-digit prefixes, and `0` never begins a longer integer.
fn integer() -> impl Parser<Output = ()> + Send + Sync {
    choice((
        map(sequence((literal("-"), one_nine(), many1(digit()))), |_| ()),
        map(sequence((literal("-"), digit())), |_| ()),
        map(sequence((one_nine(), many1(digit()))), |_| ()),
        map(digit(), |_| ()),
    ))
}

fn one_nine() -> impl Parser<Output = char> + Send + Sync {
    satisfy(|c| matches!(c, '1'..='9'))
}

fn fraction() -> impl Parser<Output = ()> + Send + Sync {
    map(optional(sequence((literal("."), many1(digit())))), |_| ())
}

fn exponent() -> impl Parser<Output = ()> + Send + Sync {
    let marker = literal("e").or(literal("E"));
    let sign = optional(literal("+").or(literal("-")));
    map(optional(sequence((marker, sign, many1(digit())))), |_| ())
}
