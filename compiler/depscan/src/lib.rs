//! `depscan`: list the module references of JavaScript-family files.
//!
//! Thin driver over [`depscan_core`]: discovers files, reads them, scans
//! them (in parallel by default), and prints one line per reference or a
//! JSON document.

pub mod config;
pub mod discover;
pub mod error;
pub mod report;
pub mod scan;

use std::io::{self, Write};
use std::sync::Once;

pub use config::{parse_args, Command, ScanConfig, USAGE};
pub use error::CliError;
pub use report::FileReport;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "DEPSCAN_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber (call once at startup).
///
/// Uses `DEPSCAN_LOG`, falling back to `RUST_LOG`, for filter directives.
/// `verbose` adds `depscan_core=debug`. Without either, no subscriber is
/// installed and logging costs nothing.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let env = std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        if let Some(directives) = filter_directives(env, verbose) {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(EnvFilter::new(directives))
                .init();
        }
    });
}

/// Filter directives for [`init_tracing`], or `None` to stay silent.
fn filter_directives(env: Option<String>, verbose: bool) -> Option<String> {
    const VERBOSE: &str = "depscan_core=debug";
    match (env, verbose) {
        (Some(env), true) if !env.is_empty() => Some(format!("{env},{VERBOSE}")),
        (Some(env), false) if !env.is_empty() => Some(env),
        (_, true) => Some(VERBOSE.to_owned()),
        (_, false) => None,
    }
}

/// Run a scan and print its results.
pub fn run(config: &ScanConfig) -> Result<(), CliError> {
    let reports = if config.stdin {
        vec![scan::scan_stdin(config.unique)?]
    } else {
        let files = discover::discover(&config.paths, config.no_ignore)?;
        scan::scan_files(&files, config)?
    };
    emit(&reports, config)
}

/// Print results to stdout and, unless suppressed, diagnostics to stderr.
fn emit(reports: &[FileReport], config: &ScanConfig) -> Result<(), CliError> {
    let output = if config.json {
        report::render_json(reports)?
    } else {
        report::render_plain(reports)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes()).map_err(CliError::Output)?;
    stdout.flush().map_err(CliError::Output)?;

    if !config.no_warnings {
        eprint!("{}", report::render_warnings(reports));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
