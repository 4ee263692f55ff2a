//! Read position over a borrowed source text.
//!
//! The cursor tracks a byte offset into the source plus the 1-based line
//! and column of that offset, with columns counted in characters. It knows
//! nothing about token semantics: lookahead never mutates, advancement is
//! explicit, and only [`advance_newline`](Cursor::advance_newline) may
//! change the line. The cursor is [`Copy`], so a speculative scan is a
//! snapshot that can simply be dropped.

/// Mutable scan position over the input text.
///
/// Created once per tokenization, owned exclusively by the scan loop, and
/// discarded when scanning ends. The source is borrowed and never copied.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    /// Byte offset of the read position. Always on a character boundary.
    offset: usize,
    /// Characters between the read position and end of input.
    remaining: u32,
    /// 1-based line of the read position.
    line: u32,
    /// 1-based column of the read position, counted in characters.
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at offset 0, line 1, column 1.
    ///
    /// Character counts saturate at `u32::MAX` for pathologically large
    /// sources; positions past that point are not meaningful.
    pub(crate) fn new(source: &'src str) -> Self {
        let remaining = u32::try_from(source.chars().count()).unwrap_or(u32::MAX);
        Self {
            source,
            offset: 0,
            remaining,
            line: 1,
            column: 1,
        }
    }

    /// The unread tail of the source.
    #[inline]
    fn rest(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// The character at the read position, or `None` at end of input.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` positions ahead of the read position, or `None`
    /// past end of input. `peek_by(0)` is equivalent to [`peek`](Self::peek).
    /// Never mutates.
    pub(crate) fn peek_by(&self, n: u32) -> Option<char> {
        self.rest().chars().nth(n as usize)
    }

    /// Characters left before end of input; 0 means end of input.
    #[inline]
    pub(crate) fn remaining(&self) -> u32 {
        self.remaining
    }

    /// 1-based line of the read position.
    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the read position.
    #[inline]
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    /// Move the read position forward by `n` characters, adding `n` to the
    /// column. Never adjusts the line — a caller consuming a line ending
    /// must use [`advance_newline`](Self::advance_newline) instead.
    pub(crate) fn advance_by(&mut self, n: u32) {
        debug_assert!(n <= self.remaining(), "advance past end of input");
        let mut bytes = 0usize;
        let mut taken = 0u32;
        for c in self.rest().chars() {
            if taken == n {
                break;
            }
            bytes += c.len_utf8();
            taken += 1;
        }
        self.offset += bytes;
        self.remaining -= taken;
        self.column += taken;
    }

    /// Consume one line ending of `n` characters (1 for LF, 2 for CRLF):
    /// the line goes up by one and the column resets to 1. This is the only
    /// path that changes the line.
    pub(crate) fn advance_newline(&mut self, n: u32) {
        self.advance_by(n);
        self.line += 1;
        self.column = 1;
    }

    /// Consume a maximal run of characters satisfying `pred`, returning the
    /// run's character count.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> u32 {
        let mut bytes = 0usize;
        let mut count = 0u32;
        for c in self.rest().chars() {
            if !pred(c) {
                break;
            }
            bytes += c.len_utf8();
            count += 1;
        }
        self.offset += bytes;
        self.remaining -= count;
        self.column += count;
        count
    }

    /// Consume up to, not including, the next `\n` or `\r`, or to end of
    /// input. Returns the character count consumed. Used by the comment
    /// scanner to skip comment bodies with a SIMD-accelerated search.
    pub(crate) fn eat_until_line_break(&mut self) -> u32 {
        let rest = self.rest();
        let stop = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        // Both needles are ASCII, so `stop` lands on a character boundary.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the skipped character count never exceeds remaining(), which fits in u32"
        )]
        let count = rest[..stop].chars().count() as u32;
        self.offset += stop;
        self.remaining -= count;
        self.column += count;
        count
    }
}
