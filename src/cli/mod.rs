pub mod types;
pub mod commands;
pub mod logging;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config;

/// Single-dash spelling of `--live`
const LEGACY_LIVE_FLAG: &str = "-live";

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = types::Cli::parse_from(normalize_args(std::env::args_os()));

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    let site_root = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));

    let config = match config::load_config(&site_root, cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Some(types::Commands::Watch { input, output, live }) => {
            commands::handle_watch_command(input, output, *live, &config).await
        }
        // Default to build command if none provided
        Some(types::Commands::Build {}) | None => {
            commands::handle_build_command(&site_root, &config)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Accept `-live` as a spelling of `--live`
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == LEGACY_LIVE_FLAG {
                OsString::from("--live")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::types::{Cli, Commands};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_no_subcommand_means_build() {
        let cli = parse(&["podbay"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_build_with_source() {
        let cli = parse(&["podbay", "build", "--source", "site"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Build {})));
        assert_eq!(cli.source, Some(PathBuf::from("site")));
    }

    #[test]
    fn test_watch_legacy_live_flag() {
        let cli = parse(&["podbay", "watch", "in.md", "out.html", "-live"]).unwrap();
        match cli.command {
            Some(Commands::Watch { input, output, live }) => {
                assert_eq!(input, PathBuf::from("in.md"));
                assert_eq!(output, PathBuf::from("out.html"));
                assert!(live);
            }
            _ => panic!("expected watch command"),
        }
    }

    #[test]
    fn test_watch_defaults_to_single_conversion() {
        let cli = parse(&["podbay", "watch", "in.md", "out.html"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Watch { live: false, .. })));
    }

    #[test]
    fn test_watch_requires_both_paths() {
        let err = parse(&["podbay", "watch", "in.md"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
