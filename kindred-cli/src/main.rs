//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = kindred_cli::run() {
        eprintln!("kindred: {err}");
        std::process::exit(1);
    }
}
