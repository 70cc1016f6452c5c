//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = taste_cli::run() {
        eprintln!("taste: {err}");
        std::process::exit(1);
    }
}
