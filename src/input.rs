//! Cursor-style view of the text being parsed.
//!
//! An [`Input`] is a borrowed reference to the *entire* original buffer plus
//! a byte offset. Consuming text never copies a substring; it returns a new
//! cursor with a larger offset into the same buffer. Because `Input` is
//! `Copy`, backtracking is simply holding on to an earlier cursor and using
//! it again.

/// An immutable cursor into the text being parsed.
///
/// The remaining text is always a suffix slice of the original buffer. The
/// offset doubles as the position a failure was abandoned at.
///
/// ```rust
/// use tantra::Input;
///
/// let input = Input::new("hello");
/// let rest = input.advance(2);
/// assert_eq!(rest.as_str(), "llo");
/// assert_eq!(rest.offset(), 2);
/// assert_eq!(rest.source(), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    offset: usize,
    source: &'a str,
}

impl<'a> Input<'a> {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { offset: 0, source }
    }

    /// The byte offset of this cursor into the original buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The entire original buffer, regardless of position.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The remaining (not yet consumed) text.
    pub fn as_str(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// True if no text remains.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The next character, without consuming it.
    pub fn next_char(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// A cursor advanced by `bytes`. Must land on a character boundary.
    pub fn advance(&self, bytes: usize) -> Input<'a> {
        let offset = self.offset + bytes;
        debug_assert!(self.source.is_char_boundary(offset));
        Input { offset, source: self.source }
    }

    /// The text consumed between this cursor and a later one on the same
    /// buffer.
    pub(crate) fn text_until(&self, end: Input<'a>) -> &'a str {
        debug_assert!(end.offset >= self.offset);
        &self.source[self.offset..end.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cursor_covers_whole_source() {
        let input = Input::new("abc");
        assert_eq!(input.offset(), 0);
        assert_eq!(input.as_str(), "abc");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_advance_is_non_destructive() {
        let input = Input::new("abc");
        let later = input.advance(1);
        assert_eq!(input.as_str(), "abc");
        assert_eq!(later.as_str(), "bc");
        assert_eq!(later.source(), "abc");
    }

    #[test]
    fn test_empty_at_end() {
        let input = Input::new("x").advance(1);
        assert!(input.is_empty());
        assert_eq!(input.next_char(), None);
    }

    #[test]
    fn test_text_until() {
        let start = Input::new("12345");
        let end = start.advance(3);
        assert_eq!(start.text_until(end), "123");
    }

    #[test]
    fn test_multibyte_peek() {
        let input = Input::new("éx");
        assert_eq!(input.next_char(), Some('é'));
        assert_eq!(input.advance('é'.len_utf8()).as_str(), "x");
    }
}
