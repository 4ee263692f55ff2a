use super::*;

// === TokenKind layout ===

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn repr_u8_semantic_ranges() {
    // Values: 0-15
    assert_eq!(TokenKind::Ident as u8, 0);
    assert_eq!(TokenKind::Number as u8, 1);
    assert_eq!(TokenKind::BasicString as u8, 2);
    assert_eq!(TokenKind::LiteralString as u8, 3);

    // Signs: 32-47
    assert_eq!(TokenKind::Plus as u8, 32);
    assert_eq!(TokenKind::Minus as u8, 33);

    // Structure: 80-95
    assert_eq!(TokenKind::LeftBracket as u8, 80);
    assert_eq!(TokenKind::RightBracket as u8, 81);
    assert_eq!(TokenKind::Colon as u8, 82);
    assert_eq!(TokenKind::Comma as u8, 83);

    // Trivia: 112-127
    assert_eq!(TokenKind::SpaceWs as u8, 112);
    assert_eq!(TokenKind::TabWs as u8, 113);
    assert_eq!(TokenKind::Newline as u8, 114);
    assert_eq!(TokenKind::Comment as u8, 115);

    // Errors: 240
    assert_eq!(TokenKind::Unknown as u8, 240);

    // Control: 255
    assert_eq!(TokenKind::Eof as u8, 255);
}

// === Classification ===

#[test]
fn unknown_is_the_only_invalid_kind() {
    let kinds = [
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::BasicString,
        TokenKind::LiteralString,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::SpaceWs,
        TokenKind::TabWs,
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::Eof,
    ];
    for kind in kinds {
        assert!(kind.is_valid(), "{} should be valid", kind.name());
    }
    assert!(!TokenKind::Unknown.is_valid());
}

#[test]
fn space_and_tab_are_jointly_whitespace() {
    assert!(TokenKind::SpaceWs.is_whitespace());
    assert!(TokenKind::TabWs.is_whitespace());

    assert!(!TokenKind::Newline.is_whitespace());
    assert!(!TokenKind::Comment.is_whitespace());
    assert!(!TokenKind::Ident.is_whitespace());
    assert!(!TokenKind::Eof.is_whitespace());
}

#[test]
fn fixed_lexemes() {
    assert_eq!(TokenKind::Plus.lexeme(), Some("+"));
    assert_eq!(TokenKind::Minus.lexeme(), Some("-"));
    assert_eq!(TokenKind::LeftBracket.lexeme(), Some("["));
    assert_eq!(TokenKind::RightBracket.lexeme(), Some("]"));
    assert_eq!(TokenKind::Colon.lexeme(), Some(":"));
    assert_eq!(TokenKind::Comma.lexeme(), Some(","));
}

#[test]
fn variable_width_kinds_have_no_lexeme() {
    assert_eq!(TokenKind::Ident.lexeme(), None);
    assert_eq!(TokenKind::Number.lexeme(), None);
    assert_eq!(TokenKind::BasicString.lexeme(), None);
    assert_eq!(TokenKind::LiteralString.lexeme(), None);
    assert_eq!(TokenKind::SpaceWs.lexeme(), None);
    assert_eq!(TokenKind::TabWs.lexeme(), None);
    assert_eq!(TokenKind::Newline.lexeme(), None);
    assert_eq!(TokenKind::Comment.lexeme(), None);
    assert_eq!(TokenKind::Unknown.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

#[test]
fn name_returns_readable_description() {
    assert_eq!(TokenKind::Ident.name(), "identifier");
    assert_eq!(TokenKind::Number.name(), "number literal");
    assert_eq!(TokenKind::Colon.name(), "`:`");
    assert_eq!(TokenKind::Newline.name(), "newline");
    assert_eq!(TokenKind::Eof.name(), "end of file");
}

// === Token ===

#[test]
fn token_fits_in_two_words() {
    assert!(std::mem::size_of::<Token>() <= 16);
}

#[test]
fn accessors_return_construction_values() {
    let token = Token::new(14, TokenKind::Comment, 3, 7);
    assert_eq!(token.length(), 14);
    assert_eq!(token.kind(), TokenKind::Comment);
    assert_eq!(token.row(), 3);
    assert_eq!(token.column(), 7);
    assert!(token.is_valid());
}

#[test]
fn equality_is_structural_over_all_fields() {
    let token = Token::new(3, TokenKind::Ident, 1, 1);
    assert_eq!(token, Token::new(3, TokenKind::Ident, 1, 1));
    assert_ne!(token, Token::new(4, TokenKind::Ident, 1, 1));
    assert_ne!(token, Token::new(3, TokenKind::Number, 1, 1));
    assert_ne!(token, Token::new(3, TokenKind::Ident, 2, 1));
    assert_ne!(token, Token::new(3, TokenKind::Ident, 1, 2));
}

#[test]
fn hashing_matches_equality() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Token::new(3, TokenKind::Ident, 1, 1));
    set.insert(Token::new(3, TokenKind::Ident, 1, 1));
    set.insert(Token::new(1, TokenKind::Colon, 1, 4));
    assert_eq!(set.len(), 2);
}

#[test]
fn unknown_token_is_invalid() {
    let token = Token::new(1, TokenKind::Unknown, 1, 6);
    assert!(!token.is_valid());
}

// === TokenizationResult ===

#[test]
fn result_with_no_tokens_succeeds() {
    let result = TokenizationResult::new(Vec::new());
    assert!(result.success());
    assert!(result.tokens().is_empty());
    assert!(result.invalid_tokens().is_empty());
}

#[test]
fn result_with_only_valid_tokens_succeeds() {
    let tokens = vec![
        Token::new(3, TokenKind::Ident, 1, 1),
        Token::new(1, TokenKind::Colon, 1, 4),
    ];
    let result = TokenizationResult::new(tokens.clone());
    assert!(result.success());
    assert_eq!(result.tokens(), tokens.as_slice());
    assert!(result.invalid_tokens().is_empty());
}

#[test]
fn invalid_subset_is_an_order_preserving_filter() {
    let first_unknown = Token::new(1, TokenKind::Unknown, 1, 2);
    let second_unknown = Token::new(1, TokenKind::Unknown, 1, 5);
    let tokens = vec![
        Token::new(1, TokenKind::Ident, 1, 1),
        first_unknown,
        Token::new(2, TokenKind::Number, 1, 3),
        second_unknown,
    ];
    let result = TokenizationResult::new(tokens);

    assert!(!result.success());
    assert_eq!(result.invalid_tokens(), [first_unknown, second_unknown]);
    // The full sequence is untouched by the filter.
    assert_eq!(result.tokens().len(), 4);
}
