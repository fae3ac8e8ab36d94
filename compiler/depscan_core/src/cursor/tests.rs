use super::*;
use pretty_assertions::assert_eq;

/// Helper: advance until the current character is `target`.
fn advance_to(cursor: &mut Cursor<'_>, target: char) {
    while cursor.current() != Some(target) {
        assert!(cursor.current().is_some(), "{target:?} not reached");
        cursor.advance();
    }
}

/// Helper: collect every character the cursor visits.
fn visited(source: &str) -> String {
    let mut cursor = Cursor::new(source);
    let mut out = String::new();
    while let Some(c) = cursor.current() {
        out.push(c);
        cursor.advance();
    }
    out
}

// === Basic Navigation ===

#[test]
fn starts_on_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.prev(), None);
    assert_eq!(cursor.line(), 1);
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert_eq!(cursor.current(), None);
    assert!(!cursor.current_is_escaped());
}

#[test]
fn advance_decodes_multibyte_chars() {
    let mut cursor = Cursor::new("é→x");
    assert_eq!(cursor.current(), Some('é'));
    cursor.advance();
    assert_eq!(cursor.current(), Some('→'));
    assert_eq!(cursor.offset(), 2);
    cursor.advance();
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.prev(), Some('→'));
    cursor.advance();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.offset(), "é→x".len());
}

#[test]
fn advance_at_eof_stays_at_eof() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), None);
}

// === Line Counting ===

#[test]
fn lf_increments_line() {
    let mut cursor = Cursor::new("a\nb\nc");
    advance_to(&mut cursor, 'c');
    assert_eq!(cursor.line(), 3);
}

#[test]
fn crlf_counts_once() {
    let mut cursor = Cursor::new("a\r\nb\r\nc");
    advance_to(&mut cursor, 'c');
    assert_eq!(cursor.line(), 3);
}

#[test]
fn lone_cr_counts() {
    let mut cursor = Cursor::new("a\rb\rc");
    advance_to(&mut cursor, 'c');
    assert_eq!(cursor.line(), 3);
}

#[test]
fn lf_cr_counts_twice() {
    let mut cursor = Cursor::new("a\n\rb");
    advance_to(&mut cursor, 'b');
    assert_eq!(cursor.line(), 3);
}

#[test]
fn unicode_separators_count() {
    let mut cursor = Cursor::new("a\u{2028}b\u{2029}c");
    advance_to(&mut cursor, 'c');
    assert_eq!(cursor.line(), 3);
}

#[test]
fn leading_newline_counts() {
    let cursor = Cursor::new("\nx");
    assert_eq!(cursor.current(), Some('\n'));
    assert_eq!(cursor.line(), 2);
}

// === Escapes ===

#[test]
fn backslash_escapes_next_char() {
    let mut cursor = Cursor::new(r"\'");
    assert!(!cursor.current_is_escaped());
    cursor.advance();
    assert_eq!(cursor.current(), Some('\''));
    assert!(cursor.current_is_escaped());
}

#[test]
fn double_backslash_does_not_escape_quote() {
    let mut cursor = Cursor::new(r"\\'");
    cursor.advance();
    assert_eq!(cursor.current(), Some('\\'));
    assert!(cursor.current_is_escaped());
    cursor.advance();
    assert_eq!(cursor.current(), Some('\''));
    assert!(!cursor.current_is_escaped());
    assert!(cursor.prev_is_escaped());
}

#[test]
fn triple_backslash_escapes_quote() {
    let mut cursor = Cursor::new(r"\\\'");
    advance_to(&mut cursor, '\'');
    assert!(cursor.current_is_escaped());
}

#[test]
fn trailing_backslash_does_not_escape_eof() {
    let mut cursor = Cursor::new("\\");
    cursor.advance();
    assert_eq!(cursor.current(), None);
    assert!(!cursor.current_is_escaped());
}

// === Comments ===

#[test]
fn line_comment_is_skipped_with_its_newline() {
    let mut cursor = Cursor::new("a// comment\nb");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.prev(), Some('\n'));
    assert_eq!(cursor.line(), 2);
}

#[test]
fn block_comment_is_skipped() {
    assert_eq!(visited("a/* x */b"), "ab");
}

#[test]
fn consecutive_comments_are_skipped() {
    assert_eq!(visited("a/* x *//* y */// z\nb"), "ab");
}

#[test]
fn leading_comment_is_skipped() {
    let cursor = Cursor::new("// header\nx");
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.line(), 2);
}

#[test]
fn block_comment_counts_lines() {
    let mut cursor = Cursor::new("a/*\n\n*/b");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.line(), 3);
}

#[test]
fn block_comment_needs_distinct_close() {
    // `/*/` does not close the comment it opens.
    assert_eq!(visited("a/*/ b */c"), "ac");
}

#[test]
fn unterminated_comments_run_to_eof() {
    assert_eq!(visited("a/* never closed"), "a");
    assert_eq!(visited("a// no newline"), "a");
}

#[test]
fn lone_slash_is_not_a_comment() {
    assert_eq!(visited("a / b"), "a / b");
}

#[test]
fn escaped_slash_is_not_a_comment() {
    assert_eq!(visited(r"\//x"), r"\//x");
}

#[test]
fn in_string_suspends_comment_skipping() {
    let mut cursor = Cursor::new("'//x'");
    cursor.set_in_string(true);
    cursor.advance();
    assert_eq!(cursor.current(), Some('/'));
    cursor.advance();
    assert_eq!(cursor.current(), Some('/'));
}

// === Matching Helpers ===

#[test]
fn eat_literal_consumes_on_match() {
    let mut cursor = Cursor::new("import x");
    assert!(cursor.eat_literal("import"));
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn eat_literal_keeps_partial_progress() {
    let mut cursor = Cursor::new("impart");
    assert!(!cursor.eat_literal("import"));
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn eat_literal_sees_through_comments() {
    let mut cursor = Cursor::new("im/* x */port");
    assert!(cursor.eat_literal("import"));
    assert_eq!(cursor.current(), None);
}

#[test]
fn skip_helpers_stop_at_targets() {
    let mut cursor = Cursor::new(" \t\n x,y z}");
    cursor.skip_whitespace();
    assert_eq!(cursor.current(), Some('x'));
    cursor.skip_until_whitespace_or_comma();
    assert_eq!(cursor.current(), Some(','));
    cursor.advance();
    cursor.skip_until_whitespace();
    assert_eq!(cursor.current(), Some(' '));
    cursor.skip_until('}');
    assert_eq!(cursor.current(), Some('}'));
}

#[test]
fn skip_helpers_stop_at_eof() {
    let mut cursor = Cursor::new("abc");
    cursor.skip_until_whitespace();
    assert_eq!(cursor.current(), None);

    let mut cursor = Cursor::new("abc");
    cursor.skip_until_whitespace_or_comma();
    assert_eq!(cursor.current(), None);

    let mut cursor = Cursor::new("abc");
    cursor.skip_until('}');
    assert_eq!(cursor.current(), None);
}

// === Boundaries ===

#[test]
fn call_boundary() {
    for (source, expected) in [
        ("require", true),
        (" require", true),
        (";require", true),
        ("=require", true),
        ("(require", true),
        (".require", false),
        ("xrequire", false),
        (",require", false),
    ] {
        let mut cursor = Cursor::new(source);
        advance_to(&mut cursor, 'r');
        assert_eq!(cursor.follows_call_boundary(), expected, "{source:?}");
    }
}

#[test]
fn statement_start() {
    for (source, expected) in [
        ("import", true),
        ("\nimport", true),
        ("\r\nimport", true),
        ("x;import", true),
        ("x; import", true),
        ("x;\t  import", true),
        ("x\n    import", true),
        ("    import", true),
        ("x import", false),
        ("x =import", false),
        ("`import", false),
        ("{ import", false),
        ("/* c */ import", true),
        ("x; /* a */ /* b */import", true),
        ("x // c\nimport", true),
        ("x /* ; */ import", false),
        ("x/* c */ import", false),
    ] {
        let mut cursor = Cursor::new(source);
        advance_to(&mut cursor, 'i');
        assert_eq!(cursor.at_statement_start(), expected, "{source:?}");
    }
}

// === State ===

#[test]
fn set_state_rewinds_everything() {
    let mut cursor = Cursor::new("a\\\nb");
    cursor.advance();
    let saved = cursor.state();
    cursor.set_in_string(true);
    advance_to(&mut cursor, 'b');
    assert_eq!(cursor.line(), 2);

    cursor.set_state(saved);
    assert_eq!(cursor.state(), saved);
    assert_eq!(cursor.current(), Some('\\'));
    assert_eq!(cursor.line(), 1);
    cursor.advance();
    assert_eq!(cursor.current(), Some('\n'));
    assert!(cursor.current_is_escaped());
}
