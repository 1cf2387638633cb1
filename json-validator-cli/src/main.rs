// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: fatal errors are reported on stderr before exiting.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

use clap::Parser;
use json_validator_cli::cli::{self, Cli, EXIT_FATAL};
use json_validator_cli::logging;

fn main() {
    let args = Cli::parse();
    logging::init(args.verbose);

    let code = match cli::run(&args, &mut std::io::stdout(), &mut std::io::stderr()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };
    std::process::exit(code);
}
