use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "podbay")]
#[command(about = "Static site generator for the pod bay doors blog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only print warnings and errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build your site
    #[command(alias = "b")]
    Build {},

    /// Convert one Markdown file, optionally again on every change
    #[command(alias = "w")]
    Watch {
        /// Markdown file to convert
        input: PathBuf,

        /// HTML file to write
        output: PathBuf,

        /// Keep running and re-convert when the input changes
        #[arg(long, default_value_t = false)]
        live: bool,
    },
}
