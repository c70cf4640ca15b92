use pretty_assertions::assert_eq;
use tala_ir::{Span, StringInterner, TokenKind};

use super::*;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    (output.tokens.kinds(), interner)
}

#[test]
fn lambda_with_where_clause() {
    let (tokens, interner) = kinds("fn(x) where (y = x * 2) => y + 1");
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Fn,
            TokenKind::LParen,
            TokenKind::Ident(x),
            TokenKind::RParen,
            TokenKind::Where,
            TokenKind::LParen,
            TokenKind::Ident(y),
            TokenKind::Eq,
            TokenKind::Ident(x),
            TokenKind::Star,
            TokenKind::Int(2),
            TokenKind::RParen,
            TokenKind::FatArrow,
            TokenKind::Ident(y),
            TokenKind::Plus,
            TokenKind::Int(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multi_char_operators_win() {
    let (tokens, _) = kinds("== != <= >= && || => = & !");
    assert_eq!(
        tokens,
        vec![
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::AmpAmp,
            TokenKind::PipePipe,
            TokenKind::FatArrow,
            TokenKind::Eq,
            TokenKind::Amp,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_versus_identifiers() {
    let (tokens, interner) = kinds("where wherever int integer fn fnord");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Where,
            TokenKind::Ident(interner.intern("wherever")),
            TokenKind::IntType,
            TokenKind::Ident(interner.intern("integer")),
            TokenKind::Fn,
            TokenKind::Ident(interner.intern("fnord")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_and_newlines_are_skipped() {
    let (tokens, _) = kinds("1 // one\n// nothing\n  2");
    assert_eq!(tokens, vec![TokenKind::Int(1), TokenKind::Int(2), TokenKind::Eof]);
}

#[test]
fn number_literals() {
    let (tokens, _) = kinds("1_000 2.5 1e");
    assert_eq!(tokens[0], TokenKind::Int(1000));
    assert_eq!(tokens[1], TokenKind::Float(2.5f64.to_bits()));
    // `1e` is an integer followed by an identifier.
    assert_eq!(tokens[2], TokenKind::Int(1));
    assert!(matches!(tokens[3], TokenKind::Ident(_)));
}

#[test]
fn string_escapes_are_decoded() {
    let (tokens, interner) = kinds(r#""a\tb\n""#);
    let TokenKind::String(name) = tokens[0] else {
        panic!("expected string, got {:?}", tokens[0]);
    };
    assert_eq!(interner.lookup(name), "a\tb\n");
}

#[test]
fn spans_cover_source_bytes() {
    let interner = StringInterner::new();
    let output = lex("let sq = n", &interner);
    let spans: Vec<Span> = output.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(4, 6),
            Span::new(7, 8),
            Span::new(9, 10),
            Span::point(10),
        ]
    );
}

#[test]
fn invalid_character_reported_once() {
    let interner = StringInterner::new();
    let output = lex("x # y", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter("#".into()));
    assert_eq!(output.errors[0].span, Span::new(2, 3));
    assert_eq!(output.errors[0].code(), tala_diagnostic::ErrorCode::E0001);
    assert_eq!(output.tokens[1].kind, TokenKind::Error);
}

#[test]
fn unterminated_string() {
    let interner = StringInterner::new();
    let output = lex("\"open\nx", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].span, Span::new(0, 5));
    let diag = output.errors[0].to_diagnostic();
    assert_eq!(diag.code, tala_diagnostic::ErrorCode::E0002);
}

#[test]
fn integer_overflow_reported() {
    let interner = StringInterner::new();
    let output = lex("99999999999999999999", &interner);
    assert!(matches!(output.errors[0].kind, LexErrorKind::IntegerTooLarge(_)));
    assert_eq!(output.tokens[0].kind, TokenKind::Error);
}

#[test]
fn invalid_escape_still_produces_string() {
    let interner = StringInterner::new();
    let output = lex(r#""\q""#, &interner);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidEscape('q'));
    assert!(matches!(output.tokens[0].kind, TokenKind::String(_)));
}

#[test]
fn empty_source_is_just_eof() {
    let (tokens, _) = kinds("");
    assert_eq!(tokens, vec![TokenKind::Eof]);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_source_is_an_error_not_a_panic() {
    let too_long = u32::MAX as usize + 1;
    let Err(err) = whole_source(too_long) else {
        panic!("a source past u32::MAX bytes must be rejected");
    };
    assert_eq!(err.kind, LexErrorKind::SourceTooLarge(too_long));
    assert_eq!(err.code(), tala_diagnostic::ErrorCode::E0005);
    assert_eq!(err.to_diagnostic().code, tala_diagnostic::ErrorCode::E0005);

    assert_eq!(whole_source(12), Ok(Span::new(0, 12)));
}
