use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    tokenize(source)
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_texts(source: &str) -> Vec<(RawTag, String)> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut out = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        out.push((tok.tag, scanner.text(tok).to_owned()));
    }
    out
}

// ─── Structural Properties ────────────────────────────────────

#[test]
fn token_ranges_are_increasing_and_disjoint() {
    let sources = [
        "",
        "x",
        "let five = 5;",
        "fn(x, y) { x + y; }",
        "  \t\n  \r\n  ",
        "!-/*5; 5 < 10 > 5;",
        "a\u{e9}b @ #",
    ];
    for source in sources {
        let mut last_end = 0;
        for tok in scan(source) {
            assert!(tok.start >= last_end, "overlap at {tok:?} in {source:?}");
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
            last_end = tok.end();
        }
        assert!(last_end as usize <= source.len());
    }
}

#[test]
fn eof_has_zero_length_at_source_end() {
    let buf = SourceBuffer::new("ab  ");
    let mut scanner = RawScanner::new(buf.cursor());
    scanner.next_token();
    let eof = scanner.next_token();
    assert_eq!(eof.tag, RawTag::Eof);
    assert_eq!(eof.len, 0);
    assert_eq!(eof.start, 4);
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
        assert_eq!(scanner.pos(), 1);
    }
}

#[test]
fn iterator_stops_before_eof() {
    let buf = SourceBuffer::new("a b");
    let tags: Vec<RawTag> = RawScanner::new(buf.cursor()).map(|t| t.tag).collect();
    assert_eq!(tags, vec![RawTag::Ident, RawTag::Ident]);
}

#[test]
fn resumes_from_cursor_position() {
    let buf = SourceBuffer::new("let x");
    let mut first = RawScanner::new(buf.cursor());
    first.next_token();
    let mut second = RawScanner::new(buf.cursor_at(first.pos()));
    let tok = second.next_token();
    assert_eq!(tok.tag, RawTag::Ident);
    assert_eq!(second.text(tok), "x");
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn whitespace_produces_no_tokens() {
    assert!(scan(" \t\r\n").is_empty());
}

#[test]
fn whitespace_skipped_before_each_token() {
    assert_eq!(
        scan_tags("\n\t+ \r\n-"),
        vec![RawTag::Plus, RawTag::Minus]
    );
}

// ─── Punctuation ───────────────────────────────────────────────

#[test]
fn single_char_delimiters() {
    assert_eq!(
        scan_tags("=+(){},;"),
        vec![
            RawTag::Equal,
            RawTag::Plus,
            RawTag::LeftParen,
            RawTag::RightParen,
            RawTag::LeftBrace,
            RawTag::RightBrace,
            RawTag::Comma,
            RawTag::Semicolon,
        ]
    );
}

#[test]
fn single_char_operators() {
    assert_eq!(
        scan_tags("!-/*<>"),
        vec![
            RawTag::Bang,
            RawTag::Minus,
            RawTag::Slash,
            RawTag::Star,
            RawTag::Less,
            RawTag::Greater,
        ]
    );
}

#[test]
fn fixed_tags_cover_their_lexeme() {
    for (tag, text) in scan_texts("= == ! != + - * / < > ( ) { } , ;") {
        assert_eq!(tag.lexeme(), Some(text.as_str()));
    }
}

// ─── Two-char Operators ────────────────────────────────────────

#[test]
fn equal_equal_is_one_token() {
    assert_eq!(scan_tags("=="), vec![RawTag::EqualEqual]);
}

#[test]
fn bang_equal_is_one_token() {
    assert_eq!(scan_tags("!="), vec![RawTag::BangEqual]);
}

#[test]
fn triple_equal_is_pair_then_single() {
    assert_eq!(scan_tags("==="), vec![RawTag::EqualEqual, RawTag::Equal]);
}

#[test]
fn bang_bang_equal() {
    assert_eq!(scan_tags("!!="), vec![RawTag::Bang, RawTag::BangEqual]);
}

#[test]
fn separated_equals_are_two_assigns() {
    assert_eq!(scan_tags("= ="), vec![RawTag::Equal, RawTag::Equal]);
}

#[test]
fn equal_at_end_of_input() {
    assert_eq!(scan_tags("x ="), vec![RawTag::Ident, RawTag::Equal]);
    assert_eq!(scan_tags("!"), vec![RawTag::Bang]);
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn identifier_letters_and_underscores() {
    assert_eq!(
        scan_texts("foo_bar _x X_"),
        vec![
            (RawTag::Ident, "foo_bar".to_owned()),
            (RawTag::Ident, "_x".to_owned()),
            (RawTag::Ident, "X_".to_owned()),
        ]
    );
}

#[test]
fn digits_end_an_identifier() {
    assert_eq!(
        scan_texts("foo123bar"),
        vec![
            (RawTag::Ident, "foo".to_owned()),
            (RawTag::Int, "123".to_owned()),
            (RawTag::Ident, "bar".to_owned()),
        ]
    );
}

#[test]
fn keywords_are_plain_identifiers_here() {
    assert_eq!(
        scan_tags("fn let true false if else return"),
        vec![RawTag::Ident; 7]
    );
}

// ─── Integers ──────────────────────────────────────────────────

#[test]
fn integer_run() {
    assert_eq!(scan_texts("1234567890"), vec![(RawTag::Int, "1234567890".to_owned())]);
}

#[test]
fn minus_is_never_part_of_integer() {
    assert_eq!(
        scan_texts("-5"),
        vec![(RawTag::Minus, "-".to_owned()), (RawTag::Int, "5".to_owned())]
    );
}

#[test]
fn decimal_point_is_not_part_of_integer() {
    assert_eq!(
        scan_tags("1.5"),
        vec![RawTag::Int, RawTag::InvalidByte, RawTag::Int]
    );
}

#[test]
fn integer_followed_by_letters() {
    assert_eq!(scan_tags("10abc"), vec![RawTag::Int, RawTag::Ident]);
}

// ─── Errors ────────────────────────────────────────────────────

#[test]
fn unknown_ascii_is_invalid_byte() {
    assert_eq!(
        scan_texts("@"),
        vec![(RawTag::InvalidByte, "@".to_owned())]
    );
}

#[test]
fn each_unknown_byte_is_its_own_token() {
    assert_eq!(
        scan_tags("@#$"),
        vec![RawTag::InvalidByte, RawTag::InvalidByte, RawTag::InvalidByte]
    );
}

#[test]
fn non_ascii_consumes_whole_character() {
    assert_eq!(
        scan_texts("a\u{e9}b"),
        vec![
            (RawTag::Ident, "a".to_owned()),
            (RawTag::InvalidByte, "\u{e9}".to_owned()),
            (RawTag::Ident, "b".to_owned()),
        ]
    );
}

#[test]
fn interior_null_is_not_eof() {
    assert_eq!(
        scan_tags("a\0b"),
        vec![RawTag::Ident, RawTag::InteriorNull, RawTag::Ident]
    );
}

#[test]
fn control_characters_are_invalid() {
    assert_eq!(scan_tags("\x0b\x0c"), vec![RawTag::InvalidByte, RawTag::InvalidByte]);
}

// ─── Full Programs ─────────────────────────────────────────────

#[test]
fn let_statement() {
    assert_eq!(
        scan_tags("let five = 5;"),
        vec![
            RawTag::Ident,
            RawTag::Ident,
            RawTag::Equal,
            RawTag::Int,
            RawTag::Semicolon,
        ]
    );
}

#[test]
fn comparison_statements() {
    assert_eq!(
        scan_tags("10 == 10; 10 != 9;"),
        vec![
            RawTag::Int,
            RawTag::EqualEqual,
            RawTag::Int,
            RawTag::Semicolon,
            RawTag::Int,
            RawTag::BangEqual,
            RawTag::Int,
            RawTag::Semicolon,
        ]
    );
}

#[allow(
    clippy::arc_with_non_send_sync,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::super::tokenize;
    use crate::RawTag;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics_and_ends_in_bounds(source in "\\PC{0,64}") {
            let total: u32 = tokenize(&source).iter().map(|t| t.len).sum();
            prop_assert!(total as usize <= source.len());
        }

        #[test]
        fn digit_runs_are_single_ints(digits in "[0-9]{1,20}") {
            let toks = tokenize(&digits);
            prop_assert_eq!(toks.len(), 1);
            prop_assert_eq!(toks[0].tag, RawTag::Int);
            prop_assert_eq!(toks[0].len as usize, digits.len());
        }

        #[test]
        fn letter_runs_are_single_idents(word in "[a-zA-Z_]{1,20}") {
            let toks = tokenize(&word);
            prop_assert_eq!(toks.len(), 1);
            prop_assert_eq!(toks[0].tag, RawTag::Ident);
            prop_assert_eq!(toks[0].len as usize, word.len());
        }
    }
}
