//! Command-line configuration.

#![allow(
    clippy::struct_excessive_bools,
    reason = "ScanConfig has standard CLI config bool fields"
)]

use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Usage: depscan [options] [paths...]

List the module references (imports, re-exports, dynamic imports, and
require calls) of JavaScript and TypeScript files. Directories are searched
recursively for .js .jsx .mjs .cjs .ts .tsx .mts .cts files.

Options:
  --json          Print results as a JSON array
  --stdin         Scan standard input instead of paths
  --no-warnings   Do not print diagnostics to stderr
  --unique        Report each module once per file
  --no-parallel   Scan files one at a time
  --no-ignore     Also search hidden directories and node_modules
  -v, --verbose   Log scanner activity to stderr
  -h, --help      Print this help
  -V, --version   Print the version";

/// Configuration for a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Files and directories to scan. Empty with `stdin`.
    pub paths: Vec<PathBuf>,
    /// Print one JSON document instead of one line per reference.
    pub json: bool,
    /// Read the source from stdin.
    pub stdin: bool,
    /// Suppress diagnostics on stderr.
    pub no_warnings: bool,
    /// Collapse duplicate references within a file.
    pub unique: bool,
    /// Scan files in parallel.
    pub parallel: bool,
    /// Descend into hidden directories and `node_modules`.
    pub no_ignore: bool,
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            paths: Vec::new(),
            json: false,
            stdin: false,
            no_warnings: false,
            unique: false,
            parallel: true,
            no_ignore: false,
            verbose: false,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scan(ScanConfig),
    Help,
    Version,
}

/// Parse the arguments after the program name.
///
/// Parsing stops at the first `--help` or `--version`.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut config = ScanConfig::default();

    for arg in args {
        match arg.as_str() {
            "--json" => config.json = true,
            "--stdin" => config.stdin = true,
            "--no-warnings" => config.no_warnings = true,
            "--unique" => config.unique = true,
            "--no-parallel" => config.parallel = false,
            "--no-ignore" => config.no_ignore = true,
            "--verbose" | "-v" => config.verbose = true,
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            option if option.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option: {option}")));
            }
            path => config.paths.push(PathBuf::from(path)),
        }
    }

    if config.stdin {
        if !config.paths.is_empty() {
            return Err(CliError::Usage(
                "cannot specify paths with --stdin".to_owned(),
            ));
        }
    } else if config.paths.is_empty() {
        config.paths.push(PathBuf::from("."));
    }

    Ok(Command::Scan(config))
}
