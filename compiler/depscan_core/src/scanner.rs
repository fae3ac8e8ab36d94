//! Single-pass driver over the source.
//!
//! The driver dispatches on the lead character under the cursor:
//!
//! | Lead | Attempts, in order                         |
//! |------|--------------------------------------------|
//! | `r`  | `require.resolve(...)`, then `require(...)` |
//! | `i`  | `import(...)`, then `import ... from '...'` |
//! | `e`  | `export ... from '...'`                    |
//!
//! Any other character is stepped over. A failed attempt always leaves the
//! cursor at least one character past where it started, so the scan
//! terminates in a number of steps bounded by the input length.

mod literal;
mod recognize;

use tracing::trace;

use crate::cursor::Cursor;
use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::snapshot::SnapshotStack;
use recognize::{Recognized, IMPORT, REQUIRE, REQUIRE_RESOLVE};

/// Owns all state of one scan. Not reusable across sources.
pub(crate) struct Scanner<'src, 'a> {
    cursor: Cursor<'src>,
    snapshots: SnapshotStack,
    /// Label used for diagnostics only.
    file: &'a str,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'src, 'a> Scanner<'src, 'a> {
    pub(crate) fn new(source: &'src str, file: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            snapshots: SnapshotStack::new(),
            file,
            sink,
        }
    }

    /// Scan to end of input, returning module references in source order.
    pub(crate) fn run(mut self) -> Vec<String> {
        let mut modules = Vec::new();

        while let Some(lead) = self.cursor.current() {
            let line = self.cursor.line();
            let outcome = match lead {
                'r' => self.first_of(
                    |s| s.dynamic_call(REQUIRE_RESOLVE),
                    |s| s.dynamic_call(REQUIRE),
                ),
                'i' => self.first_of(|s| s.dynamic_call(IMPORT), Self::static_import),
                'e' => self.export_from(),
                _ => {
                    self.cursor.advance();
                    continue;
                }
            };

            match outcome {
                Recognized::Module(module) => {
                    trace!(line, %module, "module reference");
                    modules.push(module);
                }
                Recognized::TypeOnly => trace!(line, "type-only statement skipped"),
                Recognized::Rejected => trace!(line, "statement rejected"),
                Recognized::NoMatch => {}
            }
        }

        debug_assert_eq!(self.snapshots.depth(), 0, "unbalanced snapshot stack");
        modules
    }

    /// Try `first`; if it does not match at all, rewind and try `second`.
    ///
    /// An outcome other than [`Recognized::NoMatch`] commits to `first`.
    fn first_of(
        &mut self,
        first: impl FnOnce(&mut Self) -> Recognized,
        second: impl FnOnce(&mut Self) -> Recognized,
    ) -> Recognized {
        self.snapshots.save(&self.cursor);
        match first(self) {
            Recognized::NoMatch => {
                self.snapshots.restore(&mut self.cursor);
                second(self)
            }
            outcome => {
                self.snapshots.discard();
                outcome
            }
        }
    }

    /// Report a diagnostic at the cursor's current line.
    fn report(&mut self, kind: DiagnosticKind) {
        let line = self.cursor.line();
        trace!(line, ?kind, "diagnostic");
        self.sink.report(Diagnostic::new(kind, self.file, line));
    }
}
