//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use barris_cli::CliError;

fn main() {
    if let Err(err) = barris_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("barris: {err}");
        std::process::exit(1);
    }
}
