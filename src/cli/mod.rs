// src/cli/mod.rs
pub mod commands;
pub mod parser;

pub fn run() -> Result<(), String> {
    let cli = parser::Cli::parse();

    commands::write_image(cli.verbose, cli.quiet)
}
