// src/main.rs
//! mbrgen entry point

fn main() {
    if let Err(e) = mbrgen::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
