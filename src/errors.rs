//! Caller-facing errors for the convenience parsing surface.
//!
//! The engine itself never produces these. Its outcomes are success or a
//! flat positional failure, and that stays the whole story inside the
//! combinators and the grammar. `ParseError` exists at the one boundary
//! where a caller asks for a *complete* document and wants a reportable
//! answer, and it carries miette metadata so binaries can render it against
//! the source text.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors returned by [`crate::json::from_str`].
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ParseError {
    /// The text does not contain a JSON element. Parsing backtracks to the
    /// start of the input on failure, so no narrower position exists.
    #[error("input is not a valid JSON document")]
    #[diagnostic(
        code(tantra::json::malformed),
        help("check for unbalanced brackets, stray commas, or unquoted keys")
    )]
    Malformed,

    /// A complete element was parsed, but text remains after it.
    #[error("unexpected trailing input at byte {offset}")]
    #[diagnostic(
        code(tantra::json::trailing),
        help("the document ended before the input did; remove the extra text, or use `json::parse` to accept a prefix")
    )]
    TrailingInput {
        offset: usize,
        #[label("unparsed text starts here")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Builds the trailing-input case with its label span pointed at
    /// `offset`.
    pub fn trailing(offset: usize) -> Self {
        ParseError::TrailingInput { offset, span: SourceSpan::from(offset..offset) }
    }

    /// The byte offset where parsing stopped, when one exists.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Malformed => None,
            ParseError::TrailingInput { offset, .. } => Some(*offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParseError::Malformed.to_string(), "input is not a valid JSON document");
        assert_eq!(
            ParseError::trailing(4).to_string(),
            "unexpected trailing input at byte 4"
        );
    }

    #[test]
    fn test_offset_is_only_meaningful_for_trailing_input() {
        assert_eq!(ParseError::Malformed.offset(), None);
        assert_eq!(ParseError::trailing(7).offset(), Some(7));
    }

    #[test]
    fn test_diagnostic_codes_are_stable() {
        assert_eq!(
            ParseError::Malformed.code().map(|c| c.to_string()),
            Some("tantra::json::malformed".to_string())
        );
        assert_eq!(
            ParseError::trailing(0).code().map(|c| c.to_string()),
            Some("tantra::json::trailing".to_string())
        );
    }
}
