//! Reading sources and running the scanner over them.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use depscan_core::{extract_module_references, Diagnostic};
use rayon::prelude::*;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::CliError;
use crate::report::FileReport;

/// Label used for standard input in output and diagnostics.
pub const STDIN_LABEL: &str = "<stdin>";

/// Scan one in-memory source.
pub fn scan_source(label: &str, source: &str, unique: bool) -> FileReport {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let modules = extract_module_references(source, label, &mut diagnostics);
    let mut report = FileReport {
        path: label.to_owned(),
        modules,
        diagnostics,
    };
    if unique {
        report.dedup_modules();
    }
    report
}

/// Read and scan one file.
pub fn scan_file(path: &Path, unique: bool) -> Result<FileReport, CliError> {
    let source = read_file(path)?;
    Ok(scan_source(&path.display().to_string(), &source, unique))
}

/// Scan `files`, returning reports in the same order.
///
/// The first file that cannot be read aborts the scan.
pub fn scan_files(files: &[PathBuf], config: &ScanConfig) -> Result<Vec<FileReport>, CliError> {
    let reports: Vec<FileReport> = if config.parallel {
        files
            .par_iter()
            .map(|path| scan_file(path, config.unique))
            .collect::<Result<_, _>>()?
    } else {
        files
            .iter()
            .map(|path| scan_file(path, config.unique))
            .collect::<Result<_, _>>()?
    };

    debug!(
        files = reports.len(),
        modules = reports.iter().map(|r| r.modules.len()).sum::<usize>(),
        diagnostics = reports.iter().map(|r| r.diagnostics.len()).sum::<usize>(),
        "scan finished"
    );
    Ok(reports)
}

/// Read all of standard input and scan it.
pub fn scan_stdin(unique: bool) -> Result<FileReport, CliError> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| CliError::io(STDIN_LABEL, e))?;
    Ok(scan_source(STDIN_LABEL, &source, unique))
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}
