//! depscan CLI
//!
//! Lists module references of JavaScript and TypeScript files.

use depscan::{init_tracing, parse_args, run, Command, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Command::Scan(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Version) => {
            println!("depscan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run 'depscan --help' for usage");
            std::process::exit(e.exit_code());
        }
    };

    init_tracing(config.verbose);

    if let Err(e) = run(&config) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
