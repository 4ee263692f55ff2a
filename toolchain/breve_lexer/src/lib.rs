//! Tokenizer for Breve configuration files.
//!
//! Breve is a line-oriented configuration language: `key: value` entries,
//! `#` line comments, `$name` variable references, bracketed arrays, and
//! numeric literals in decimal, hex (`0x`), octal (`0o`), and binary (`0b`).
//! This crate is the front end of the toolchain — it turns source text into
//! a flat stream of typed, position-annotated tokens and nothing more.
//! Parsing, import resolution, and variable substitution belong to future
//! crates that consume the token stream.
//!
//! # Layers
//!
//! - Cursor (internal): a `Copy` read position over the borrowed source —
//!   non-consuming lookahead plus explicit advancement.
//! - Scanner (internal): single-character dispatch into per-kind scan rules,
//!   maximal-munch throughout.
//! - [`tokenize`] / [`try_tokenize`]: drive the scanner to end of input and
//!   collect a [`TokenizationResult`].
//!
//! # Positions
//!
//! Rows and columns are 1-based and counted in characters, not bytes, so a
//! multi-byte character occupies a single column. Token lengths use the same
//! unit: the lengths of a tokenization always sum to the character count of
//! the input.
//!
//! # Quoted strings
//!
//! String value scanning is not implemented yet. The dispatch recognizes
//! both quoting styles and fails distinctly rather than mis-tokenizing:
//! [`tokenize`] substitutes an [`Unknown`](TokenKind::Unknown) token for the
//! quote and keeps scanning, [`try_tokenize`] aborts with a [`LexError`].
//!
//! ```
//! use breve_lexer::{tokenize, TokenKind};
//!
//! let result = tokenize("retries: 3\n");
//! assert!(result.success());
//! let kinds: Vec<_> = result.tokens().iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Ident,
//!         TokenKind::Colon,
//!         TokenKind::SpaceWs,
//!         TokenKind::Number,
//!         TokenKind::Newline,
//!     ]
//! );
//! ```

mod cursor;
mod lex_error;
mod scanner;
mod token;

pub use lex_error::{LexError, StringFlavor};
pub use scanner::{tokenize, try_tokenize};
pub use token::{Token, TokenKind, TokenizationResult};
