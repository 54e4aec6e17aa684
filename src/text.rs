//! Character and text primitives, the only parsers that look at actual
//! characters.
//!
//! Everything here consumes either an exact string or a single character
//! matching a predicate. Grammars build every other character-level rule by
//! composing these with the combinators.

use crate::combinators::Parser;
use crate::input::Input;
use crate::outcome::Outcome;

/// See [`literal`].
#[derive(Debug, Clone, Copy)]
pub struct Literal {
    expected: &'static str,
}

/// Matches `expected` exactly at the current position and consumes it.
///
/// ```rust
/// use tantra::{literal, Input, Parser};
///
/// let p = literal("null");
/// assert_eq!(p.parse(Input::new("nullable")).rest().as_str(), "able");
/// assert!(p.parse(Input::new("nil")).is_failure());
/// ```
pub fn literal(expected: &'static str) -> Literal {
    Literal { expected }
}

impl Parser for Literal {
    type Output = &'static str;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, &'static str> {
        if input.as_str().starts_with(self.expected) {
            Outcome::success(self.expected, input.advance(self.expected.len()))
        } else {
            Outcome::failure(input)
        }
    }
}

/// See [`satisfy`].
#[derive(Debug, Clone, Copy)]
pub struct Satisfy {
    predicate: fn(char) -> bool,
}

/// Matches one character for which the predicate holds.
///
/// This is the generator behind every character class below; grammars use
/// it directly for their own classes.
pub fn satisfy(predicate: fn(char) -> bool) -> Satisfy {
    Satisfy { predicate }
}

impl Parser for Satisfy {
    type Output = char;

    fn parse<'a>(&self, input: Input<'a>) -> Outcome<'a, char> {
        match input.next_char() {
            Some(c) if (self.predicate)(c) => Outcome::success(c, input.advance(c.len_utf8())),
            _ => Outcome::failure(input),
        }
    }
}

/// One ASCII alphabetic character.
pub fn letter() -> Satisfy {
    satisfy(|c| c.is_ascii_alphabetic())
}

/// One decimal digit, `0` through `9`.
pub fn digit() -> Satisfy {
    satisfy(|c| c.is_ascii_digit())
}

/// One hexadecimal digit, upper or lower case.
pub fn hex_digit() -> Satisfy {
    satisfy(|c| c.is_ascii_hexdigit())
}

/// One whitespace character: space, tab, line feed, or carriage return.
/// This is the full JSON whitespace set.
pub fn whitespace() -> Satisfy {
    satisfy(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_consumes_exact_prefix() {
        let outcome = literal("tr").parse(Input::new("true"));
        assert_eq!(outcome.value(), Some(&"tr"));
        assert_eq!(outcome.rest().as_str(), "ue");
    }

    #[test]
    fn test_literal_mismatch_restores_input() {
        let input = Input::new("false");
        assert_eq!(literal("true").parse(input), Outcome::failure(input));
    }

    #[test]
    fn test_literal_fails_on_truncated_input() {
        let input = Input::new("tr");
        assert!(literal("true").parse(input).is_failure());
    }

    #[test]
    fn test_satisfy_consumes_multibyte_characters_whole() {
        let p = satisfy(|c| !c.is_ascii());
        let outcome = p.parse(Input::new("é!"));
        assert_eq!(outcome.value(), Some(&'é'));
        assert_eq!(outcome.rest().as_str(), "!");
    }

    #[test]
    fn test_letter_is_ascii_only() {
        assert!(letter().parse(Input::new("a")).is_success());
        assert!(letter().parse(Input::new("Z")).is_success());
        assert!(letter().parse(Input::new("é")).is_failure());
        assert!(letter().parse(Input::new("1")).is_failure());
    }

    #[test]
    fn test_digit_bounds() {
        assert!(digit().parse(Input::new("0")).is_success());
        assert!(digit().parse(Input::new("9")).is_success());
        assert!(digit().parse(Input::new("a")).is_failure());
    }

    #[test]
    fn test_hex_digit_accepts_both_cases() {
        for text in ["0", "9", "a", "f", "A", "F"] {
            assert!(hex_digit().parse(Input::new(text)).is_success());
        }
        for text in ["g", "G", " "] {
            assert!(hex_digit().parse(Input::new(text)).is_failure());
        }
    }

    #[test]
    fn test_whitespace_covers_the_full_set() {
        for text in [" ", "\t", "\n", "\r"] {
            assert!(whitespace().parse(Input::new(text)).is_success());
        }
        // Vertical tab and form feed are not JSON whitespace.
        assert!(whitespace().parse(Input::new("\u{000B}")).is_failure());
        assert!(whitespace().parse(Input::new("\u{000C}")).is_failure());
    }

    #[test]
    fn test_empty_input_fails_every_primitive() {
        let input = Input::new("");
        assert!(literal("x").parse(input).is_failure());
        assert!(letter().parse(input).is_failure());
        assert!(digit().parse(input).is_failure());
        assert!(hex_digit().parse(input).is_failure());
        assert!(whitespace().parse(input).is_failure());
    }
}
