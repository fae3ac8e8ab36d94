//! Diagnostics for malformed or unresolvable module references.
//!
//! A diagnostic never aborts a scan: the offending construct is skipped and
//! scanning resumes after it. Diagnostics are handed to a caller-supplied
//! [`DiagnosticSink`], so the scanner itself has no global logging state.

use std::fmt;

/// The statement that owned a `from` clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Statement {
    Import,
    Export,
}

impl Statement {
    pub fn as_str(self) -> &'static str {
        match self {
            Statement::Import => "import",
            Statement::Export => "export",
        }
    }
}

/// What was wrong with the construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Module specifier string runs to end of input.
    UnterminatedSpecifier,
    /// Specifier uses `${}` interpolation or `+` concatenation, so its value
    /// is only known at runtime.
    DynamicSpecifier,
    /// `import *` without `as <name>`.
    NamespaceWithoutAlias,
    /// Import binding clause not followed by `from`.
    MissingFrom,
    /// `from` not followed by a string literal.
    MissingSpecifier { statement: Statement },
    /// Import binding clause runs to end of input.
    UnterminatedImport,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnterminatedSpecifier => {
                f.write_str("unterminated module specifier string")
            }
            DiagnosticKind::DynamicSpecifier => {
                f.write_str("unsupported dynamic module specifier")
            }
            DiagnosticKind::NamespaceWithoutAlias => {
                f.write_str("namespace import `*` is missing `as <name>`")
            }
            DiagnosticKind::MissingFrom => f.write_str("import has no `from` clause"),
            DiagnosticKind::MissingSpecifier { statement } => write!(
                f,
                "{} `from` is not followed by a module specifier string",
                statement.as_str()
            ),
            DiagnosticKind::UnterminatedImport => {
                f.write_str("import bindings run to end of input")
            }
        }
    }
}

/// A located diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Label the caller gave the scanned source, usually its path.
    pub file: String,
    /// 1-based line the construct was on.
    pub line: u32,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, file: impl Into<String>, line: u32) -> Self {
        Diagnostic {
            kind,
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.kind, self.file, self.line)
    }
}

/// Receiver for diagnostics produced during a scan.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in report order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards every diagnostic to `tracing` at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            file = %diagnostic.file,
            line = diagnostic.line,
            kind = ?diagnostic.kind,
            "{}",
            diagnostic.kind
        );
    }
}
