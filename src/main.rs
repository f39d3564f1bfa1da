use std::process::ExitCode;

// Module declarations
mod assets;
mod builder;
mod cli;
mod config;
mod layout;
mod markdown;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    // Run the CLI
    cli::run().await
}
