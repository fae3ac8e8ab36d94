//! Per-file results and their plain-text and JSON renderings.

use std::collections::HashSet;
use std::fmt::Write as _;

use depscan_core::{Diagnostic, DiagnosticKind};

use crate::error::CliError;

/// Everything found in one scanned source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// Path as given or discovered, or `<stdin>`.
    pub path: String,
    /// Module references in source order.
    pub modules: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Drop repeated references, keeping the first occurrence of each.
    pub fn dedup_modules(&mut self) {
        let mut seen = HashSet::new();
        self.modules.retain(|module| seen.insert(module.clone()));
    }
}

/// One `<path>: <module>` line per reference.
pub fn render_plain(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for module in &report.modules {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}: {module}", report.path);
        }
    }
    out
}

/// One `warning: <diagnostic>` line per diagnostic.
pub fn render_warnings(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for diagnostic in reports.iter().flat_map(|r| &r.diagnostics) {
        let _ = writeln!(out, "warning: {diagnostic}");
    }
    out
}

/// A pretty-printed JSON array with one object per file.
pub fn render_json(reports: &[FileReport]) -> Result<String, CliError> {
    let files: Vec<FileReportJson<'_>> = reports.iter().map(FileReportJson::from).collect();
    let mut json = serde_json::to_string_pretty(&files)?;
    json.push('\n');
    Ok(json)
}

#[derive(serde::Serialize)]
struct FileReportJson<'a> {
    path: &'a str,
    modules: &'a [String],
    diagnostics: Vec<DiagnosticJson>,
}

#[derive(serde::Serialize)]
struct DiagnosticJson {
    kind: &'static str,
    message: String,
    line: u32,
}

impl<'a> From<&'a FileReport> for FileReportJson<'a> {
    fn from(report: &'a FileReport) -> Self {
        FileReportJson {
            path: &report.path,
            modules: &report.modules,
            diagnostics: report.diagnostics.iter().map(DiagnosticJson::from).collect(),
        }
    }
}

impl From<&Diagnostic> for DiagnosticJson {
    fn from(diagnostic: &Diagnostic) -> Self {
        DiagnosticJson {
            kind: kind_name(diagnostic.kind),
            message: diagnostic.kind.to_string(),
            line: diagnostic.line,
        }
    }
}

/// Stable machine-readable name of a diagnostic kind.
fn kind_name(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::UnterminatedSpecifier => "unterminated-specifier",
        DiagnosticKind::DynamicSpecifier => "dynamic-specifier",
        DiagnosticKind::NamespaceWithoutAlias => "namespace-without-alias",
        DiagnosticKind::MissingFrom => "missing-from",
        DiagnosticKind::MissingSpecifier { .. } => "missing-specifier",
        DiagnosticKind::UnterminatedImport => "unterminated-import",
    }
}
