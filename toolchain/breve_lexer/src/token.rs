//! Token, token kind, and tokenization result types.
//!
//! A token is a classified span: a length, a kind, and the 1-based row and
//! column where the span starts. Tokens never borrow the source text — they
//! record positions and lengths only, so producing one is O(1) regardless of
//! how much text it covers.

/// A classified, positioned span of source text.
///
/// Equality and hashing are structural over all four fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    length: u32,
    kind: TokenKind,
    row: u32,
    column: u32,
}

/// Size assertion: a token is two words on 64-bit platforms.
/// 3 x u32 + one-byte kind, padded to 16.
const _: () = assert!(std::mem::size_of::<Token>() <= 16);

impl Token {
    /// Create a token.
    ///
    /// `row` and `column` are 1-based; `length` is a character count.
    /// A length of 0 is reserved for a synthetic [`Eof`](TokenKind::Eof)
    /// marker — every scanned token covers at least one character.
    pub fn new(length: u32, kind: TokenKind, row: u32, column: u32) -> Self {
        debug_assert!(row >= 1, "rows are 1-based");
        debug_assert!(column >= 1, "columns are 1-based");
        Self {
            length,
            kind,
            row,
            column,
        }
    }

    /// Length of the span in characters.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// What kind of token this is.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// 1-based row where the span starts.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column where the span starts. Columns count characters,
    /// not bytes.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` unless this token is [`Unknown`](TokenKind::Unknown).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.kind.is_valid()
    }
}

/// The closed set of token kinds.
///
/// Discriminants are grouped by category so a kind's class is readable off
/// its byte value: values 0–15, signs 32–47, structure 80–95, trivia
/// 112–127, errors at 240, control at 255.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Values: 0-15 ===
    /// A bare word: a key, a keyword such as `import` or `empty`, or a
    /// `$name` variable reference.
    Ident = 0,
    /// A numeric literal run — decimal, float, or `0x`/`0o`/`0b` based.
    /// Digit validity inside the run is checked at parse time, not here.
    Number = 1,
    /// A `"…"` string value. Recognized but not scanned yet.
    BasicString = 2,
    /// A `'…'` string value. Recognized but not scanned yet.
    LiteralString = 3,

    // === Signs: 32-47 ===
    /// `+`. Always its own token, never fused with a following numeral.
    Plus = 32,
    /// `-`. Same single-token rule as `+`.
    Minus = 33,

    // === Structure: 80-95 ===
    /// `[` opening an array value.
    LeftBracket = 80,
    /// `]` closing an array value.
    RightBracket = 81,
    /// `:` separating a key from its value.
    Colon = 82,
    /// `,` separating array entries.
    Comma = 83,

    // === Trivia: 112-127 ===
    /// A run of space characters.
    SpaceWs = 112,
    /// A run of tab characters.
    TabWs = 113,
    /// One line ending: LF (length 1) or CRLF (length 2).
    Newline = 114,
    /// A `#` comment, up to but not including the line ending.
    Comment = 115,

    // === Errors: 240 ===
    /// Lexically unrecognized input. The only invalid kind.
    Unknown = 240,

    // === Control: 255 ===
    /// Synthetic end-of-input marker, length 0. The tokenizer ends the
    /// stream instead of emitting one; the kind exists for consumers that
    /// want an explicit terminator.
    Eof = 255,
}

impl TokenKind {
    /// Returns `true` for every kind except [`Unknown`](Self::Unknown).
    #[inline]
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns `true` for the two horizontal-whitespace kinds.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(self, Self::SpaceWs | Self::TabWs)
    }

    /// The fixed spelling of this kind, or `None` for variable-width kinds.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::Colon => Some(":"),
            Self::Comma => Some(","),
            _ => None,
        }
    }

    /// Human-readable description for messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number literal",
            Self::BasicString => "basic string",
            Self::LiteralString => "literal string",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::SpaceWs => "space whitespace",
            Self::TabWs => "tab whitespace",
            Self::Newline => "newline",
            Self::Comment => "comment",
            Self::Unknown => "unknown token",
            Self::Eof => "end of file",
        }
    }
}

/// Everything one tokenization produced.
///
/// Holds the full token sequence in document order plus the derived subset
/// of invalid tokens. The subset is computed once at construction as a pure
/// filter — it never removes or reorders entries relative to the full list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizationResult {
    tokens: Vec<Token>,
    invalid: Vec<Token>,
}

impl TokenizationResult {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        let invalid = tokens.iter().copied().filter(|t| !t.is_valid()).collect();
        Self { tokens, invalid }
    }

    /// All tokens in document order.
    ///
    /// May contain invalid tokens — guard with [`success()`](Self::success)
    /// when those are unwelcome.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The invalid subset of [`tokens()`](Self::tokens), in document order.
    /// Empty when tokenization succeeded.
    pub fn invalid_tokens(&self) -> &[Token] {
        &self.invalid
    }

    /// Returns `true` if no invalid tokens were produced.
    pub fn success(&self) -> bool {
        self.invalid.is_empty()
    }
}

#[cfg(test)]
mod tests;
