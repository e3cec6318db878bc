//! reqtrace CLI binary
//!
//! This is the minimal entrypoint for the reqtrace CLI.
//! All logic is in the library; main.rs only invokes cli::run().

fn main() {
    // cli::run() handles ALL output including errors.
    // main only maps the returned code to the process exit status.
    if let Err(code) = reqtrace::cli::run() {
        std::process::exit(code.as_i32());
    }
}
