//! Module reference scanner for JavaScript-family sources.
//!
//! Extracts the statically resolvable module specifiers of a `.js`, `.jsx`,
//! `.mjs`, `.cjs`, or TypeScript file, in source order and with duplicates
//! kept:
//!
//! - `import x from 'm'`, `import { a } from 'm'`, `import * as ns from 'm'`,
//!   and side-effect imports `import 'm'`
//! - `export { a } from 'm'`, `export * from 'm'`, `export * as ns from 'm'`
//! - dynamic `import('m')`
//! - CommonJS `require('m')` and `require.resolve('m')`
//!
//! Type-only imports and exports are skipped. Specifiers computed at
//! runtime (template interpolation, concatenation, variables) are not
//! references; the first two are reported as diagnostics.
//!
//! # Architecture
//!
//! There is no tokenizer and no syntax tree. A single cursor walks the
//! characters, skipping comments transparently, and a small set of
//! recognizers try each statement shape speculatively, rewinding through a
//! snapshot stack when a shape does not match.
//!
//! # Modules
//!
//! - `cursor`: character cursor with escape tracking and comment skipping
//! - `snapshot`: save/restore stack of cursor states
//! - `scanner`: the driver, string literal extraction, and recognizers
//! - [`diagnostic`]: diagnostic types and the [`DiagnosticSink`] seam

mod cursor;
pub mod diagnostic;
mod scanner;
mod snapshot;

use memchr::memmem;
use tracing::debug;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink, Statement};

use scanner::Scanner;

/// Every recognizer starts by matching one of these.
const KEYWORDS: [&str; 3] = ["import", "export", "require"];

/// Extract the module references of `source`, in source order.
///
/// `file` labels diagnostics and is not otherwise interpreted. Each
/// diagnostic is handed to `sink` as soon as it is found; scanning always
/// runs to the end of the input.
///
/// # Example
///
/// ```
/// use depscan_core::{extract_module_references, Diagnostic, DiagnosticKind};
///
/// let source = "import a from 'a'\nconst b = require(`./b/${name}`)\n";
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let modules = extract_module_references(source, "main.js", &mut diagnostics);
///
/// assert_eq!(modules, ["a"]);
/// assert_eq!(diagnostics[0].kind, DiagnosticKind::DynamicSpecifier);
/// assert_eq!(diagnostics[0].line, 2);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(file = %file, bytes = source.len()))]
pub fn extract_module_references(
    source: &str,
    file: &str,
    sink: &mut dyn DiagnosticSink,
) -> Vec<String> {
    if !mentions_keyword(source) {
        debug!("no module keyword in source");
        return Vec::new();
    }

    let modules = Scanner::new(source, file, sink).run();
    debug!(count = modules.len(), "module references extracted");
    modules
}

/// [`extract_module_references`] with diagnostics logged through `tracing`
/// at warn level.
pub fn extract_module_references_logged(source: &str, file: &str) -> Vec<String> {
    extract_module_references(source, file, &mut LogSink)
}

/// Whether any recognizer could possibly match in `source`.
fn mentions_keyword(source: &str) -> bool {
    let haystack = source.as_bytes();
    KEYWORDS
        .iter()
        .any(|keyword| memmem::find(haystack, keyword.as_bytes()).is_some())
}
