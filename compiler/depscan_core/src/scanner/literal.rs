//! Module specifier string extraction.

use crate::cursor::is_quote;
use crate::diagnostic::DiagnosticKind;

use super::Scanner;

impl Scanner<'_, '_> {
    /// Extract the string literal opened by the quote under the cursor.
    ///
    /// The text between the quotes is returned verbatim: escapes are not
    /// interpreted and backslashes are kept. The closing quote is the first
    /// unescaped occurrence of the opening one. On success the cursor sits
    /// just past the closing quote.
    ///
    /// A `{` or `+` inside the literal means the specifier is interpolated
    /// or concatenated, and end of input means it is unterminated. Both
    /// report a diagnostic, leave the cursor on the opening quote, and
    /// return `None`.
    pub(super) fn string_literal(&mut self) -> Option<String> {
        let quote = self.cursor.current()?;
        debug_assert!(is_quote(quote), "string literal must start at a quote, found {quote:?}");

        self.snapshots.save(&self.cursor);
        self.cursor.set_in_string(true);
        self.cursor.advance();
        let start = self.cursor.offset();

        loop {
            match self.cursor.current() {
                Some(c) if c == quote && !self.cursor.current_is_escaped() => break,
                Some('{' | '+') => return self.reject_literal(DiagnosticKind::DynamicSpecifier),
                Some(_) => self.cursor.advance(),
                None => return self.reject_literal(DiagnosticKind::UnterminatedSpecifier),
            }
        }

        let text = self.cursor.slice_from(start).to_owned();
        self.snapshots.discard();
        // Leave string mode first so a comment right after the quote is skipped.
        self.cursor.set_in_string(false);
        self.cursor.advance();
        Some(text)
    }

    fn reject_literal(&mut self, kind: DiagnosticKind) -> Option<String> {
        self.snapshots.restore(&mut self.cursor);
        self.report(kind);
        None
    }
}
