//! The two-case result model every parser returns.
//!
//! An [`Outcome`] is either a success carrying a value and the rest of the
//! input, or a failure carrying only the rest. There is deliberately nothing
//! else: no messages, no expected-token sets, no error chains. The one
//! invariant the whole engine leans on is that a failure's `rest` is the
//! *exact* input the failing parser was given, which is what makes
//! backtracking safe everywhere.

use crate::input::Input;

/// The result of applying a parser to an input.
///
/// ```rust
/// use tantra::{Input, Outcome};
///
/// let input = Input::new("abc");
/// let won: Outcome<char> = Outcome::success('a', input.advance(1));
/// assert!(won.is_success());
/// assert_eq!(won.rest().as_str(), "bc");
///
/// let lost: Outcome<char> = Outcome::failure(input);
/// assert!(lost.is_failure());
/// assert_eq!(lost.rest().as_str(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a, T> {
    /// The parse matched: the produced value and the input after it.
    Success { value: T, rest: Input<'a> },
    /// The parse did not match. `rest` is the input the parser received.
    Failure { rest: Input<'a> },
}

impl<'a, T> Outcome<'a, T> {
    /// Builds the success case.
    pub fn success(value: T, rest: Input<'a>) -> Self {
        Outcome::Success { value, rest }
    }

    /// Builds the failure case.
    pub fn failure(rest: Input<'a>) -> Self {
        Outcome::Failure { rest }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// The remaining input, for either case.
    pub fn rest(&self) -> Input<'a> {
        match self {
            Outcome::Success { rest, .. } | Outcome::Failure { rest } => *rest,
        }
    }

    /// The produced value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Consumes the outcome, yielding the value and rest of a success.
    pub fn into_success(self) -> Option<(T, Input<'a>)> {
        match self {
            Outcome::Success { value, rest } => Some((value, rest)),
            Outcome::Failure { .. } => None,
        }
    }

    /// Transforms the success value; failures pass through untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<'a, U> {
        match self {
            Outcome::Success { value, rest } => Outcome::Success { value: f(value), rest },
            Outcome::Failure { rest } => Outcome::Failure { rest },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let input = Input::new("xy");
        let outcome = Outcome::success(7, input.advance(1));
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&7));
        assert_eq!(outcome.rest().as_str(), "y");
        assert_eq!(outcome.into_success().map(|(v, _)| v), Some(7));
    }

    #[test]
    fn test_failure_accessors() {
        let input = Input::new("xy");
        let outcome: Outcome<i32> = Outcome::failure(input);
        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.rest(), input);
    }

    #[test]
    fn test_map_only_touches_success() {
        let input = Input::new("xy");
        let doubled = Outcome::success(2, input).map(|n| n * 2);
        assert_eq!(doubled.value(), Some(&4));

        let still_failed: Outcome<i32> = Outcome::<i32>::failure(input).map(|n| n * 2);
        assert!(still_failed.is_failure());
    }
}
