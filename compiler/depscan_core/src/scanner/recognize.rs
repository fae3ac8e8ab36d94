//! Speculative recognizers, one per statement shape.
//!
//! Each recognizer starts on the lead character the driver dispatched on
//! and returns a [`Recognized`]. On [`Recognized::NoMatch`] the cursor may
//! have moved; the driver rewinds it when another shape is still worth
//! trying. Every other outcome commits to the shape.
//!
//! Keyword matching is exact and case-sensitive, and sees through comments
//! (the cursor skips them).

use crate::cursor::{is_ident_continue, is_quote, is_whitespace};
use crate::diagnostic::{DiagnosticKind, Statement};

use super::Scanner;

pub(super) const IMPORT: &str = "import";
pub(super) const REQUIRE: &str = "require";
pub(super) const REQUIRE_RESOLVE: &str = "require.resolve";
const EXPORT: &str = "export";
const FROM: &str = "from";
const TYPE: &str = "type";
const OF: &str = "of";
const AS: &str = "as";

/// Outcome of one recognition attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Recognized {
    /// A static module reference.
    Module(String),
    /// The input does not have this shape; try another one.
    NoMatch,
    /// Type-only import or export, with no runtime dependency.
    TypeOnly,
    /// The shape was recognized but yields no static reference: the target
    /// is computed, or the statement is malformed (a diagnostic was reported).
    Rejected,
}

/// How an import binding clause ended.
enum Bindings {
    /// Clause consumed; `from` should follow.
    Complete,
    /// `${`: the "statement" is inside a template literal interpolation.
    Interpolated,
    /// `*` not followed by `as`.
    NamespaceWithoutAlias,
    /// End of input inside the clause.
    Unterminated,
}

impl Scanner<'_, '_> {
    /// `import(...)`, `require(...)`, or `require.resolve(...)`, per `callee`.
    pub(super) fn dynamic_call(&mut self, callee: &str) -> Recognized {
        if !self.cursor.follows_call_boundary() {
            self.cursor.advance();
            return Recognized::NoMatch;
        }
        if !self.cursor.eat_literal(callee) || !self.cursor.eat_literal("(") {
            return Recognized::NoMatch;
        }

        self.cursor.skip_whitespace();
        if !self.current_is_quote() {
            // Computed argument, e.g. `require(name)`.
            return Recognized::Rejected;
        }
        let Some(module) = self.string_literal() else {
            return Recognized::Rejected;
        };

        self.cursor.skip_whitespace();
        if self.cursor.current() == Some('+') {
            self.report(DiagnosticKind::DynamicSpecifier);
            return Recognized::Rejected;
        }
        Recognized::Module(module)
    }

    /// `import 'm'`, `import x from 'm'`, `import { a, b as c } from 'm'`,
    /// `import * as ns from 'm'`, and combinations of these.
    pub(super) fn static_import(&mut self) -> Recognized {
        if !self.cursor.at_statement_start() {
            self.cursor.advance();
            return Recognized::NoMatch;
        }
        if !self.cursor.eat_literal(IMPORT) || !self.at_keyword_end() {
            return Recognized::NoMatch;
        }

        self.cursor.skip_whitespace();
        if !self.current_is_quote() {
            // `import type ...` / `import typeof ...` with no braces.
            if self.cursor.eat_literal(TYPE) {
                self.cursor.eat_literal(OF);
                if self.current_is_whitespace() {
                    return Recognized::TypeOnly;
                }
            }

            if !self.import_bindings() {
                return Recognized::Rejected;
            }
            if !self.cursor.eat_literal(FROM) {
                self.report(DiagnosticKind::MissingFrom);
                return Recognized::Rejected;
            }
            self.cursor.skip_whitespace();
        }

        self.specifier(Statement::Import)
    }

    /// `export { a } from 'm'`, `export * from 'm'`, `export * as ns from 'm'`.
    ///
    /// Exports that declare something (`export function f() {}`) and local
    /// re-exports without `from` are not matched, and are not reported.
    pub(super) fn export_from(&mut self) -> Recognized {
        if !self.cursor.at_statement_start() {
            self.cursor.advance();
            return Recognized::NoMatch;
        }
        if !self.cursor.eat_literal(EXPORT) || !self.at_keyword_end() {
            return Recognized::NoMatch;
        }

        self.cursor.skip_whitespace();
        if self.cursor.eat_literal(TYPE) && self.current_is_whitespace() {
            return Recognized::TypeOnly;
        }

        match self.cursor.current() {
            Some('{') => {
                self.snapshots.save(&self.cursor);
                self.cursor.skip_until('}');
                if self.cursor.current().is_none() {
                    // Unclosed braces: resume just past `{`.
                    self.snapshots.restore(&mut self.cursor);
                    self.cursor.advance();
                    return Recognized::NoMatch;
                }
                self.snapshots.discard();
                self.cursor.advance();
                self.cursor.skip_whitespace();
            }
            Some('*') => {
                self.cursor.advance();
                self.cursor.skip_whitespace();
                if self.cursor.eat_literal(AS) {
                    self.cursor.skip_whitespace();
                    self.cursor.skip_until_whitespace();
                    self.cursor.skip_whitespace();
                }
            }
            _ => return Recognized::NoMatch,
        }

        if !self.cursor.eat_literal(FROM) {
            return Recognized::NoMatch;
        }
        self.cursor.skip_whitespace();
        self.specifier(Statement::Export)
    }

    /// Skip an import binding clause, reporting malformed ones.
    ///
    /// Returns `true` when the clause was consumed and `from` may follow.
    /// If input ends inside the clause, the cursor rewinds to the clause
    /// start and steps one character past it.
    fn import_bindings(&mut self) -> bool {
        self.snapshots.save(&self.cursor);
        match self.scan_bindings() {
            Bindings::Complete => {
                self.snapshots.discard();
                true
            }
            Bindings::Interpolated => {
                self.snapshots.discard();
                false
            }
            Bindings::NamespaceWithoutAlias => {
                self.snapshots.discard();
                self.report(DiagnosticKind::NamespaceWithoutAlias);
                false
            }
            Bindings::Unterminated => {
                self.snapshots.restore(&mut self.cursor);
                self.report(DiagnosticKind::UnterminatedImport);
                self.cursor.advance();
                false
            }
        }
    }

    fn scan_bindings(&mut self) -> Bindings {
        loop {
            if self.cursor.current() == Some(',') {
                self.cursor.advance();
                self.cursor.skip_whitespace();
            }

            match self.cursor.current() {
                None => return Bindings::Unterminated,
                Some('{') => {
                    if self.cursor.prev() == Some('$') && !self.cursor.prev_is_escaped() {
                        self.cursor.advance();
                        return Bindings::Interpolated;
                    }
                    self.cursor.skip_until('}');
                    if self.cursor.current().is_none() {
                        return Bindings::Unterminated;
                    }
                    self.cursor.advance();
                }
                Some('*') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                    if !self.cursor.eat_literal(AS) {
                        return Bindings::NamespaceWithoutAlias;
                    }
                    self.cursor.skip_whitespace();
                    // The alias is consumed by the next iteration.
                    continue;
                }
                Some(_) => self.cursor.skip_until_whitespace_or_comma(),
            }

            self.cursor.skip_whitespace();
            if self.cursor.current() != Some(',') {
                return Bindings::Complete;
            }
        }
    }

    /// The module specifier string that must follow `from`.
    fn specifier(&mut self, statement: Statement) -> Recognized {
        if !self.current_is_quote() {
            self.report(DiagnosticKind::MissingSpecifier { statement });
            return Recognized::Rejected;
        }
        self.string_literal()
            .map_or(Recognized::Rejected, Recognized::Module)
    }

    /// A keyword just matched is a whole word, not the head of
    /// `importantValue`, `exports.x`, or `import.meta`.
    fn at_keyword_end(&self) -> bool {
        !self
            .cursor
            .current()
            .is_some_and(|c| is_ident_continue(c) || c == '.')
    }

    fn current_is_quote(&self) -> bool {
        self.cursor.current().is_some_and(is_quote)
    }

    fn current_is_whitespace(&self) -> bool {
        self.cursor.current().is_some_and(is_whitespace)
    }
}
