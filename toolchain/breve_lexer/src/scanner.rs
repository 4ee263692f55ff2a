//! Hand-written scanner: dispatch, per-kind scan rules, and the public
//! tokenize drivers.
//!
//! The scanner classifies each token by its first character, falling back
//! to a free-form identifier run for anything unrecognized. Every rule is
//! maximal-munch: a token consumes the longest run its character class
//! allows before the next token starts. The scanner delimits runs only —
//! it never validates their content. `0x` with no digits is a complete
//! number token here; digit-range and grouping checks belong to the parser.
//!
//! # Dispatch
//!
//! | Lead character | Token |
//! |---|---|
//! | space / tab | whitespace run of that character |
//! | `[` `]` `,` `:` | single-character structure |
//! | `#` | comment to end of line (exclusive) |
//! | `'` / `"` | unsupported-construct fault (see below) |
//! | LF, CRLF | one newline token; lone CR is ordinary run content |
//! | `+` / `-` | sign, never fused with a following numeral |
//! | `0`–`9` | numeric literal run |
//! | anything else | identifier / free-form value run |
//!
//! # Unsupported constructs
//!
//! Quoted strings are recognized but not scanned yet. [`Scanner::next_token`]
//! reports them as [`Scan::Unsupported`] without consuming anything, and the
//! two drivers apply the two policies: [`tokenize`] substitutes a length-1
//! [`Unknown`](TokenKind::Unknown) token for the quote and continues, so the
//! rest of the document still tokenizes; [`try_tokenize`] aborts with the
//! typed fault.

use crate::cursor::Cursor;
use crate::lex_error::{LexError, StringFlavor};
use crate::token::{Token, TokenKind, TokenizationResult};

/// One step of scanning: a token, or a recognized-but-unimplemented
/// construct left unconsumed for the driver to handle.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Scan {
    Token(Token),
    Unsupported(LexError),
}

/// Character-dispatch scanner over a cursor.
///
/// Produces one [`Scan`] step at a time; holds no state besides the cursor,
/// so two scanners over the same text are fully independent.
pub(crate) struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `source`.
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Scan the next token.
    ///
    /// Returns `None` at end of input. The returned token's row and column
    /// are the cursor position before this call.
    pub(crate) fn next_token(&mut self) -> Option<Scan> {
        if self.cursor.remaining() == 0 {
            return None;
        }
        let c = self.cursor.peek()?;

        let scan = match c {
            ' ' => Scan::Token(self.whitespace(' ', TokenKind::SpaceWs)),
            '\t' => Scan::Token(self.whitespace('\t', TokenKind::TabWs)),
            '[' => Scan::Token(self.single(TokenKind::LeftBracket)),
            ']' => Scan::Token(self.single(TokenKind::RightBracket)),
            ',' => Scan::Token(self.single(TokenKind::Comma)),
            ':' => Scan::Token(self.single(TokenKind::Colon)),
            '#' => Scan::Token(self.comment()),
            '\'' => Scan::Unsupported(LexError::unsupported_string(
                StringFlavor::Literal,
                self.cursor.line(),
                self.cursor.column(),
            )),
            '"' => Scan::Unsupported(LexError::unsupported_string(
                StringFlavor::Basic,
                self.cursor.line(),
                self.cursor.column(),
            )),
            '\n' => Scan::Token(self.newline(1)),
            // CRLF is one token of length 2, not two tokens.
            '\r' if self.cursor.peek_by(1) == Some('\n') => Scan::Token(self.newline(2)),
            '+' => Scan::Token(self.single(TokenKind::Plus)),
            '-' => Scan::Token(self.single(TokenKind::Minus)),
            '0'..='9' => Scan::Token(self.number()),
            // Everything else — keywords, `$` references, bare words, and a
            // lone `\r`, which is not a line terminator — is run content.
            _ => Scan::Token(self.identifier()),
        };
        Some(scan)
    }

    /// Consume a single character without classifying it. Used by the
    /// lenient driver to step over an unsupported construct's quote.
    fn skip_char(&mut self) {
        self.cursor.advance_by(1);
    }

    /// Row and column of the token about to be scanned.
    #[inline]
    fn start(&self) -> (u32, u32) {
        (self.cursor.line(), self.cursor.column())
    }

    /// Maximal run of one whitespace character.
    #[inline]
    fn whitespace(&mut self, ws: char, kind: TokenKind) -> Token {
        let (row, column) = self.start();
        let length = self.cursor.eat_while(|c| c == ws);
        Token::new(length, kind, row, column)
    }

    /// Single-character token: advance one position and emit `kind`.
    fn single(&mut self, kind: TokenKind) -> Token {
        let (row, column) = self.start();
        self.cursor.advance_by(1);
        Token::new(1, kind, row, column)
    }

    /// `#` up to, but not including, the first `\n` or `\r`, or end of
    /// input. A comment cut short by end of input is still a complete
    /// comment token.
    fn comment(&mut self) -> Token {
        let (row, column) = self.start();
        self.cursor.advance_by(1); // consume '#'
        let length = 1 + self.cursor.eat_until_line_break();
        Token::new(length, TokenKind::Comment, row, column)
    }

    /// One line ending of `length` characters. Consuming it bumps the line
    /// and resets the column, the only path that does either.
    fn newline(&mut self, length: u32) -> Token {
        let (row, column) = self.start();
        self.cursor.advance_newline(length);
        Token::new(length, TokenKind::Newline, row, column)
    }

    /// Numeric literal run. Two regimes:
    ///
    /// - a zero lead whose successor could open a base prefix, exponent,
    ///   fraction, or grouping (`b o x e E . + - _`): consume both, then a
    ///   maximal run of hex digits and `_`;
    /// - any other digit lead: a maximal run of digits, `.`, `e`/`E`, `_`.
    ///
    /// Either way the first out-of-class character ends the token, and end
    /// of input keeps everything accepted so far: `0x` alone is a length-2
    /// number whose missing digits are the parser's problem.
    fn number(&mut self) -> Token {
        let (row, column) = self.start();
        let base_marked = self.cursor.peek() == Some('0')
            && self.cursor.peek_by(1).is_some_and(is_base_marker);
        let length = if base_marked {
            self.cursor.advance_by(2); // consume '0' and the marker
            2 + self.cursor.eat_while(is_base_run_char)
        } else {
            self.cursor.eat_while(is_decimal_run_char)
        };
        Token::new(length, TokenKind::Number, row, column)
    }

    /// Free-form identifier/value run: the default branch.
    ///
    /// Consumes the lead character, then extends the run exactly while the
    /// next position would not start some other token. The boundary set in
    /// [`at_run_boundary`](Self::at_run_boundary) is precisely the set of
    /// characters the dispatch resolves to a non-identifier token, so this
    /// single forward loop produces the same boundaries as re-dispatching
    /// at every position, in linear time.
    fn identifier(&mut self) -> Token {
        let (row, column) = self.start();
        self.cursor.advance_by(1);
        let mut length = 1;
        while !self.at_run_boundary() {
            self.cursor.advance_by(1);
            length += 1;
        }
        Token::new(length, TokenKind::Ident, row, column)
    }

    /// Would the next position start a non-identifier token?
    ///
    /// A `\r` ends the run only as part of a CRLF pair; a lone `\r` is not
    /// a line terminator and stays inside the run.
    fn at_run_boundary(&self) -> bool {
        match self.cursor.peek() {
            None => true,
            Some('\r') => self.cursor.peek_by(1) == Some('\n'),
            Some(
                ' ' | '\t' | '\n' | '[' | ']' | ',' | ':' | '#' | '\'' | '"' | '+' | '-'
                | '0'..='9',
            ) => true,
            Some(_) => false,
        }
    }
}

/// Characters that, after a leading zero, commit the run to the based
/// regime: base prefixes, exponent markers, the decimal point, exponent
/// signs, and grouping.
fn is_base_marker(c: char) -> bool {
    matches!(c, 'b' | 'o' | 'x' | 'e' | 'E' | '.' | '+' | '-' | '_')
}

/// Digit class of a based run: ASCII hex digits and grouping. Broad enough
/// for any base; whether each digit fits the base is decided at parse time.
fn is_base_run_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}

/// Digit class of a decimal or float run.
fn is_decimal_run_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '_')
}

/// Tokenize `content`, degrading unsupported constructs to
/// [`Unknown`](TokenKind::Unknown) tokens.
///
/// Total over all inputs: the whole document is always scanned and the
/// token lengths partition it exactly. An opening quote (string scanning
/// is unimplemented) becomes a length-1 `Unknown` token and scanning
/// resumes after it, so [`success()`](TokenizationResult::success) is
/// false but the remainder still tokenizes faithfully.
///
/// ```
/// use breve_lexer::tokenize;
///
/// let result = tokenize("greeting: 'hello'");
/// assert!(!result.success());
/// assert_eq!(result.invalid_tokens().len(), 2);
/// ```
pub fn tokenize(content: &str) -> TokenizationResult {
    let mut scanner = Scanner::new(content);
    let mut tokens = Vec::new();

    while let Some(step) = scanner.next_token() {
        match step {
            Scan::Token(token) => tokens.push(token),
            Scan::Unsupported(fault) => {
                let (row, column) = fault.position();
                tokens.push(Token::new(1, TokenKind::Unknown, row, column));
                scanner.skip_char();
            }
        }
    }

    TokenizationResult::new(tokens)
}

/// Tokenize `content`, treating unsupported constructs as fatal.
///
/// Identical to [`tokenize`] until the first opening quote, where it
/// aborts with the typed fault instead of substituting an `Unknown` token.
///
/// ```
/// use breve_lexer::{try_tokenize, LexError, StringFlavor};
///
/// let fault = try_tokenize("name: \"breve\"").unwrap_err();
/// assert_eq!(
///     fault,
///     LexError::UnsupportedString {
///         flavor: StringFlavor::Basic,
///         row: 1,
///         column: 7,
///     }
/// );
/// ```
pub fn try_tokenize(content: &str) -> Result<TokenizationResult, LexError> {
    let mut scanner = Scanner::new(content);
    let mut tokens = Vec::new();

    while let Some(step) = scanner.next_token() {
        match step {
            Scan::Token(token) => tokens.push(token),
            Scan::Unsupported(fault) => return Err(fault),
        }
    }

    Ok(TokenizationResult::new(tokens))
}
