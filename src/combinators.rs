//! The combinator engine: higher-order parsers over an [`Input`] cursor.
//!
//! Every combinator here is a pure *construction* function: building a
//! parser never consumes input, and the built parser can be invoked any
//! number of times. The combinators treat the input as an opaque cursor:
//! they thread it, store it, and restore it, but never inspect characters.
//! Character awareness lives entirely in [`crate::text`].
//!
//! The contract they all share: on failure, return the exact input that was
//! received. No combinator ever surfaces a partially-consumed cursor through
//! a failure, which is what makes ordered alternation and full backtracking
//! composable.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::input::Input;
use crate::outcome::Outcome;

// === The parser abstraction ===

/// A parsing strategy: a pure function from an input cursor to an
/// [`Outcome`].
///
/// Implementations are stateless. Constructing a parser never parses;
/// invoking one never mutates it.
pub trait Parser {
    type Output;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Self::Output>;

    /// Transforms this parser's output with a pure function.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        map(self, f)
    }

    /// Ordered binary alternation: `self` first, `other` only if `self`
    /// fails.
    fn or<P>(self, other: P) -> Choice<(Self, P)>
    where
        Self: Sized,
        P: Parser<Output = Self::Output>,
    {
        choice((self, other))
    }

    /// Erases the concrete type behind a cheaply clonable handle.
    fn shared(self) -> SharedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

/// A type-erased, shareable parser handle.
///
/// Recursive grammars need indirection somewhere; this is it. A
/// `SharedParser` can sit in a `static`, be cloned into [`lazy`] producers,
/// and be invoked like any other parser.
pub type SharedParser<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

impl<T> Parser for SharedParser<T> {
    type Output = T;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, T> {
        (**self).parse(input)
    }
}

// === Ordered alternation ===

/// See [`choice`].
pub struct Choice<T> {
    parsers: T,
}

/// Ordered alternation over a tuple of parsers with a common output type.
///
/// Alternatives are tried **in the given order** against the same input;
/// the first success wins, even when a later alternative would consume
/// more. This is what makes alternation order load-bearing in grammars.
///
/// ```rust
/// use tantra::{choice, literal, Input, Parser};
///
/// let p = choice((literal("a"), literal("ab")));
/// let outcome = p.parse(Input::new("ab"));
/// assert_eq!(outcome.value(), Some(&"a"));
/// assert_eq!(outcome.rest().as_str(), "b");
/// ```
pub fn choice<T>(parsers: T) -> Choice<T> {
    Choice { parsers }
}

macro_rules! impl_choice_for_tuple {
    ($($P:ident => $idx:tt),+) => {
        impl<Out, $($P: Parser<Output = Out>),+> Parser for Choice<($($P,)+)> {
            type Output = Out;

            fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Out> {
                $(
                    if let Outcome::Success { value, rest } = self.parsers.$idx.parse(input) {
                        return Outcome::success(value, rest);
                    }
                )+
                Outcome::failure(input)
            }
        }
    };
}

impl_choice_for_tuple!(P0 => 0, P1 => 1);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3, P4 => 4);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3, P4 => 4, P5 => 5);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3, P4 => 4, P5 => 5, P6 => 6);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3, P4 => 4, P5 => 5, P6 => 6, P7 => 7);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3, P4 => 4, P5 => 5, P6 => 6, P7 => 7, P8 => 8);
impl_choice_for_tuple!(P0 => 0, P1 => 1, P2 => 2, P3 => 3, P4 => 4, P5 => 5, P6 => 6, P7 => 7, P8 => 8, P9 => 9);

// === Sequencing ===

/// See [`sequence`].
pub struct Sequence<T> {
    parsers: T,
}

/// Runs a tuple of parsers in order, threading the rest through each, and
/// yields the tuple of their outputs.
///
/// If **any** step fails, the whole sequence fails with the input it
/// originally received; consumption by earlier steps is never observable
/// through a failure.
pub fn sequence<T>(parsers: T) -> Sequence<T> {
    Sequence { parsers }
}

macro_rules! impl_sequence_for_tuple {
    ($($val:ident: $P:ident => $idx:tt),+) => {
        impl<$($P: Parser),+> Parser for Sequence<($($P,)+)> {
            type Output = ($($P::Output,)+);

            fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Self::Output> {
                let mut rest = input;
                $(
                    let $val = match self.parsers.$idx.parse(rest) {
                        Outcome::Success { value, rest: after } => {
                            rest = after;
                            value
                        }
                        Outcome::Failure { .. } => return Outcome::failure(input),
                    };
                )+
                Outcome::success(($($val,)+), rest)
            }
        }
    };
}

impl_sequence_for_tuple!(a: P0 => 0, b: P1 => 1);
impl_sequence_for_tuple!(a: P0 => 0, b: P1 => 1, c: P2 => 2);
impl_sequence_for_tuple!(a: P0 => 0, b: P1 => 1, c: P2 => 2, d: P3 => 3);
impl_sequence_for_tuple!(a: P0 => 0, b: P1 => 1, c: P2 => 2, d: P3 => 3, e: P4 => 4);
impl_sequence_for_tuple!(a: P0 => 0, b: P1 => 1, c: P2 => 2, d: P3 => 3, e: P4 => 4, f: P5 => 5);
impl_sequence_for_tuple!(a: P0 => 0, b: P1 => 1, c: P2 => 2, d: P3 => 3, e: P4 => 4, f: P5 => 5, g: P6 => 6);

// === Optionality and repetition ===

/// See [`optional`].
pub struct Optional<P> {
    parser: P,
}

/// Wraps a parser so absence is a success: `Some(value)` if the inner
/// parser matches, `None` with the input untouched if it does not. Never
/// fails.
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional { parser }
}

impl<P: Parser> Parser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Self::Output> {
        match self.parser.parse(input) {
            Outcome::Success { value, rest } => Outcome::success(Some(value), rest),
            Outcome::Failure { .. } => Outcome::success(None, input),
        }
    }
}

/// See [`many0`].
pub struct Many0<P> {
    parser: P,
}

/// Applies a parser repeatedly until it first fails, accumulating every
/// value. Never fails; zero matches yield an empty vector.
///
/// The inner parser must consume input when it succeeds. Repetition over a
/// parser that can succeed on nothing (such as another `many0`) never
/// terminates; the engine does not check this in release builds, but debug
/// builds assert progress on every turn.
pub fn many0<P: Parser>(parser: P) -> Many0<P> {
    Many0 { parser }
}

impl<P: Parser> Parser for Many0<P> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Self::Output> {
        let (values, rest) = collect_repeated(&self.parser, input);
        Outcome::success(values, rest)
    }
}

/// See [`many1`].
pub struct Many1<P> {
    parser: P,
}

/// Like [`many0`], but zero matches is a failure (with the original
/// input). One or more matches succeed exactly as `many0` would.
pub fn many1<P: Parser>(parser: P) -> Many1<P> {
    Many1 { parser }
}

impl<P: Parser> Parser for Many1<P> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Self::Output> {
        let (values, rest) = collect_repeated(&self.parser, input);
        if values.is_empty() {
            Outcome::failure(input)
        } else {
            Outcome::success(values, rest)
        }
    }
}

fn collect_repeated<'a, P: Parser>(parser: &P, input: Input<'a>) -> (Vec<P::Output>, Input<'a>) {
    let mut values = Vec::new();
    let mut rest = input;
    while let Outcome::Success { value, rest: after } = parser.parse(rest) {
        debug_assert!(
            after.offset() > rest.offset(),
            "repetition over a parser that succeeds without consuming"
        );
        values.push(value);
        rest = after;
    }
    (values, rest)
}

// === Separated lists ===

/// See [`separated`].
pub struct Separated<S, P> {
    separator: S,
    item: P,
}

/// One or more items divided by a separator.
///
/// Separator values are discarded. If a separator matches but the item
/// after it does not, the list ends successfully with the input positioned
/// **before** that dangling separator, leaving the caller to decide whether
/// an unconsumed separator is acceptable. If the first item fails, the
/// whole list fails.
pub fn separated<S: Parser, P: Parser>(separator: S, item: P) -> Separated<S, P> {
    Separated { separator, item }
}

impl<S: Parser, P: Parser> Parser for Separated<S, P> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, Self::Output> {
        let (first, mut rest) = match self.item.parse(input) {
            Outcome::Success { value, rest } => (value, rest),
            Outcome::Failure { .. } => return Outcome::failure(input),
        };
        let mut values = vec![first];
        loop {
            let after_separator = match self.separator.parse(rest) {
                Outcome::Success { rest, .. } => rest,
                Outcome::Failure { .. } => break,
            };
            match self.item.parse(after_separator) {
                Outcome::Success { value, rest: after_item } => {
                    values.push(value);
                    rest = after_item;
                }
                // Dangling separator: stop before it.
                Outcome::Failure { .. } => break,
            }
        }
        Outcome::success(values, rest)
    }
}

// === Transformation ===

/// See [`map`].
pub struct Map<P, F> {
    parser: P,
    f: F,
}

/// Applies a pure function to the success value; failure passes through.
pub fn map<P, F, U>(parser: P, f: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map { parser, f }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, U> {
        self.parser.parse(input).map(&self.f)
    }
}

/// See [`filter_map`].
pub struct FilterMap<P, F> {
    parser: P,
    f: F,
}

/// Like [`map`], but the function can reject: `None` converts the success
/// into a failure with the input `filter_map` originally received, undoing
/// whatever the inner parser consumed.
///
/// This is the seam for conversions that are almost always valid but not
/// quite total, such as text to number or escape code to character.
pub fn filter_map<P, F, U>(parser: P, f: F) -> FilterMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<U>,
{
    FilterMap { parser, f }
}

impl<P, F, U> Parser for FilterMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<U>,
{
    type Output = U;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, U> {
        match self.parser.parse(input) {
            Outcome::Success { value, rest } => match (self.f)(value) {
                Some(mapped) => Outcome::success(mapped, rest),
                None => Outcome::failure(input),
            },
            Outcome::Failure { .. } => Outcome::failure(input),
        }
    }
}

/// See [`recognize`].
pub struct Recognize<P> {
    parser: P,
}

/// Runs a parser for its *extent* rather than its value: on success the
/// output is the full matched substring, copied once out of the buffer.
///
/// ```rust
/// use tantra::{digit, many1, recognize, Input, Parser};
///
/// let digits = recognize(many1(digit()));
/// let outcome = digits.parse(Input::new("204 no-content"));
/// assert_eq!(outcome.value(), Some(&"204".to_string()));
/// ```
pub fn recognize<P: Parser>(parser: P) -> Recognize<P> {
    Recognize { parser }
}

impl<P: Parser> Parser for Recognize<P> {
    type Output = String;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, String> {
        match self.parser.parse(input) {
            Outcome::Success { rest, .. } => {
                Outcome::success(input.text_until(rest).to_owned(), rest)
            }
            Outcome::Failure { .. } => Outcome::failure(input),
        }
    }
}

// === Deferred construction ===

/// See [`lazy`].
pub struct Lazy<T> {
    cell: OnceCell<SharedParser<T>>,
    producer: Box<dyn Fn() -> SharedParser<T> + Send + Sync>,
}

/// Defers parser construction until first use.
///
/// Recursive grammars cannot be built eagerly: a value parser that
/// contains an array parser that contains the value parser again would
/// recurse at construction time. `lazy` stores the producer instead; the
/// first invocation runs it (exactly once) and caches the built parser.
pub fn lazy<T, F>(producer: F) -> Lazy<T>
where
    F: Fn() -> SharedParser<T> + Send + Sync + 'static,
{
    Lazy { cell: OnceCell::new(), producer: Box::new(producer) }
}

impl<T> Parser for Lazy<T> {
    type Output = T;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, T> {
        self.cell.get_or_init(|| (self.producer)()).parse(input)
    }
}
