//! Command-line interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wordgames: widgets and words over HTTP.
#[derive(Debug, Parser)]
#[command(name = "wordgames", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Apply pending database migrations.
    Migrate(ConfigArgs),
    /// Show applied and pending database migrations.
    Info(ConfigArgs),
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Directory of extra `*.toml` files layered over `./config`.
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Keep data in process memory instead of PostgreSQL.
    #[arg(long)]
    pub in_memory: bool,
}

impl Command {
    /// The configuration options of whichever command was given.
    #[must_use]
    pub fn config_args(&self) -> &ConfigArgs {
        match self {
            Self::Serve(args) => &args.config,
            Self::Migrate(args) | Self::Info(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_flags() {
        let cli = Cli::try_parse_from(["wordgames", "serve", "--config-dir", "/etc/wordgames", "--in-memory"])
            .unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert!(args.in_memory);
                assert_eq!(args.config.config_dir, Some(PathBuf::from("/etc/wordgames")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["wordgames", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve(ServeArgs { in_memory: false, .. })));
        assert!(cli.command.config_args().config_dir.is_none());
    }

    #[test]
    fn test_migrate_and_info_take_config_dir() {
        let cli = Cli::try_parse_from(["wordgames", "migrate", "--config-dir", "conf.d"]).unwrap();
        assert_eq!(cli.command.config_args().config_dir, Some(PathBuf::from("conf.d")));

        let cli = Cli::try_parse_from(["wordgames", "info"]).unwrap();
        assert!(matches!(cli.command, Command::Info(_)));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["wordgames"]).is_err());
    }

    #[test]
    fn test_migrate_rejects_in_memory() {
        assert!(Cli::try_parse_from(["wordgames", "migrate", "--in-memory"]).is_err());
    }
}
