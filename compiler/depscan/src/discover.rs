//! Source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;

/// Extensions of the files a directory search selects.
pub const EXTENSIONS: [&str; 8] = ["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Whether `path` has one of the [`EXTENSIONS`].
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Expand `paths` into the sorted list of files to scan.
///
/// A file named directly is always scanned, whatever its extension.
/// Directories are searched recursively; hidden entries and `node_modules`
/// are skipped unless `no_ignore` is set. Symbolic links to directories are
/// not followed.
pub fn discover(paths: &[PathBuf], no_ignore: bool) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        let metadata = fs::metadata(path).map_err(|e| CliError::io(path, e))?;
        if metadata.is_dir() {
            visit_dir(path, no_ignore, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    debug!(count = files.len(), "discovered source files");
    Ok(files)
}

fn visit_dir(dir: &Path, no_ignore: bool, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CliError::io(dir, e))?;
        let path = entry.path();

        if !no_ignore && is_ignored(&path) {
            continue;
        }

        let file_type = entry.file_type().map_err(|e| CliError::io(&path, e))?;
        if file_type.is_dir() {
            visit_dir(&path, no_ignore, files)?;
        } else if is_source_file(&path) && path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}

/// Hidden entries and installed packages.
fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') || name == "node_modules")
}
