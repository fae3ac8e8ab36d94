//! Character cursor with escape tracking and transparent comment skipping.
//!
//! The cursor walks the decoded `char`s of a source string. End of input is
//! `None`, which can never collide with a real character.
//!
//! # Comments
//!
//! [`Cursor::advance`] swallows `//` line comments and `/* */` block
//! comments before returning, unless the cursor is inside a string literal.
//! Comments may appear anywhere between the keywords of an import or export
//! statement, and recognizers never see them.
//!
//! # Escapes
//!
//! A character is escaped when the character before it is a backslash that
//! is not itself escaped. Parity alternates across runs of backslashes:
//! in `\\'` the quote is *not* escaped.
//!
//! # Snapshots
//!
//! All mutable scan state lives in [`CursorState`], which is [`Copy`].
//! Backtracking (see [`crate::snapshot`]) saves and restores that value
//! wholesale; the source itself is never mutated.

/// Returns `true` for characters that terminate a line.
#[inline]
pub(crate) fn is_newline(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for line terminators, spaces, and tabs.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    is_newline(c) || c == ' ' || c == '\t'
}

/// Returns `true` for the three characters that open a string literal.
#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Returns `true` for characters that can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Returns `true` for characters after which a new statement may begin.
#[inline]
fn ends_statement(c: char) -> bool {
    is_newline(c) || c == ';'
}

/// Complete mutable state of a [`Cursor`].
///
/// Restoring a saved `CursorState` rewinds position, line number, escape
/// flags, and the inside-string flag in one assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CursorState {
    /// Character under the cursor; `None` at end of input.
    current: Option<char>,
    /// `current` is preceded by an unescaped backslash.
    current_escaped: bool,
    /// Character visited before `current`; `None` at start of input.
    prev: Option<char>,
    /// Escape flag `prev` had when it was current.
    prev_escaped: bool,
    /// Byte offset of the next character to decode (one past `current`).
    pos: usize,
    /// 1-based line of `current`.
    line: u32,
    /// Comment skipping is suspended while extracting a string literal.
    in_string: bool,
    /// A statement may begin at `current`: only spaces, tabs, and comments
    /// lie between it and the start of input, a line terminator, or `;`.
    statement_start: bool,
}

/// Cursor over the decoded characters of an immutable source string.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    state: CursorState,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned on the first character of `source`.
    ///
    /// A comment at the very start of the input is already skipped.
    pub(crate) fn new(source: &'src str) -> Self {
        let mut cursor = Cursor {
            source,
            state: CursorState {
                current: None,
                current_escaped: false,
                prev: None,
                prev_escaped: false,
                pos: 0,
                line: 1,
                in_string: false,
                statement_start: true,
            },
        };
        cursor.advance();
        cursor
    }

    /// Character under the cursor, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.state.current
    }

    /// Character visited immediately before the current one.
    #[inline]
    pub(crate) fn prev(&self) -> Option<char> {
        self.state.prev
    }

    /// Whether the current character is escaped by a preceding backslash.
    #[inline]
    pub(crate) fn current_is_escaped(&self) -> bool {
        self.state.current_escaped
    }

    /// Whether the previous character was itself escaped.
    #[inline]
    pub(crate) fn prev_is_escaped(&self) -> bool {
        self.state.prev_escaped
    }

    /// 1-based line number of the current character.
    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.state.line
    }

    /// Byte offset of the current character (source length at end of input).
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.state.pos - self.state.current.map_or(0, char::len_utf8)
    }

    /// Source text from byte offset `start` up to the current character.
    ///
    /// `start` must come from [`offset()`](Self::offset) at an earlier point
    /// of the same scan, which keeps it on a character boundary.
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        debug_assert!(start <= self.offset(), "slice start {start} is ahead of the cursor");
        &self.source[start..self.offset()]
    }

    /// Suspend (`true`) or resume (`false`) comment skipping.
    #[inline]
    pub(crate) fn set_in_string(&mut self, in_string: bool) {
        self.state.in_string = in_string;
    }

    /// Copy of the complete scan state.
    #[inline]
    pub(crate) fn state(&self) -> CursorState {
        self.state
    }

    /// Overwrite the complete scan state with a previously saved copy.
    #[inline]
    pub(crate) fn set_state(&mut self, state: CursorState) {
        self.state = state;
    }

    /// Decode the character after `current` without moving.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.state.pos..].chars().next()
    }

    /// Move to the next character, updating line and escape tracking.
    ///
    /// At end of input this only shifts `current` into `prev`.
    fn step(&mut self) {
        let next = self.peek();
        let state = &mut self.state;

        let crlf_tail = next == Some('\n') && state.current == Some('\r');
        if next.is_some_and(is_newline) && !crlf_tail {
            state.line += 1;
        }

        let escaped = next.is_some() && state.current == Some('\\') && !state.current_escaped;
        if let Some(c) = state.current {
            state.statement_start =
                ends_statement(c) || (matches!(c, ' ' | '\t') && state.statement_start);
        }
        state.prev = state.current;
        state.prev_escaped = state.current_escaped;
        state.current = next;
        state.current_escaped = escaped;
        state.pos += next.map_or(0, char::len_utf8);
    }

    /// Advance one character, then swallow any comments that follow.
    pub(crate) fn advance(&mut self) {
        self.step();
        if !self.state.in_string {
            self.skip_comments();
        }
    }

    /// Swallow consecutive comments starting at the current character.
    ///
    /// A block comment leaves the statement-start flag as it found it; a
    /// line comment ends on a line terminator, which sets it.
    fn skip_comments(&mut self) {
        while self.state.current == Some('/') && !self.state.current_escaped {
            match self.peek() {
                Some('/') => self.skip_line_comment(),
                Some('*') => {
                    let statement_start = self.state.statement_start;
                    self.skip_block_comment();
                    self.state.statement_start = statement_start;
                }
                _ => break,
            }
        }
    }

    /// Consume a `//` comment through its line terminator.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.state.current {
            self.step();
            if is_newline(c) {
                break;
            }
        }
    }

    /// Consume a `/* */` comment through its closing `*/`, or to end of input.
    fn skip_block_comment(&mut self) {
        // Opening `/*`.
        self.step();
        self.step();
        while let Some(c) = self.state.current {
            if c == '*' && self.peek() == Some('/') {
                self.step();
                self.step();
                return;
            }
            self.step();
        }
    }

    /// Consume `literal` if the input continues with exactly those characters.
    ///
    /// Matching stops at the first mismatch. Characters matched before it
    /// stay consumed, so a failed attempt still makes progress.
    pub(crate) fn eat_literal(&mut self, literal: &str) -> bool {
        for expected in literal.chars() {
            if self.state.current != Some(expected) {
                return false;
            }
            self.advance();
        }
        true
    }

    /// Advance past spaces, tabs, and line terminators.
    pub(crate) fn skip_whitespace(&mut self) {
        while self.state.current.is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Advance to the next whitespace character or end of input.
    pub(crate) fn skip_until_whitespace(&mut self) {
        while self.state.current.is_some_and(|c| !is_whitespace(c)) {
            self.advance();
        }
    }

    /// Advance to the next whitespace character, `,`, or end of input.
    pub(crate) fn skip_until_whitespace_or_comma(&mut self) {
        while self.state.current.is_some_and(|c| !is_whitespace(c) && c != ',') {
            self.advance();
        }
    }

    /// Advance to the next occurrence of `target` or end of input.
    pub(crate) fn skip_until(&mut self, target: char) {
        while self.state.current.is_some_and(|c| c != target) {
            self.advance();
        }
    }

    /// Whether a call-like construct may start at the current character.
    ///
    /// True after start of input, whitespace, `;`, `=`, or `(`. Anything
    /// else (`.` in particular) means the keyword is part of a longer
    /// expression such as a property access.
    pub(crate) fn follows_call_boundary(&self) -> bool {
        match self.state.prev {
            None => true,
            Some(c) => is_whitespace(c) || matches!(c, ';' | '=' | '('),
        }
    }

    /// Whether a statement may start at the current character.
    ///
    /// True at start of input and right after a line terminator or `;`,
    /// with any spaces, tabs, and comments in between.
    #[inline]
    pub(crate) fn at_statement_start(&self) -> bool {
        self.state.statement_start
    }
}

#[cfg(test)]
mod tests;
