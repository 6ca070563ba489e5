//! Propdash ships with a fully fledged CLI client, but the binary is
//! intentionally thin: the CLI lives in `src/propdash/cli/`, while this file
//! only invokes `cli::run()` and handles process termination. Everything
//! from the `Dashboard` facade inward is UI agnostic; the CLI layer owns
//! argument parsing, dispatch, error handling and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
