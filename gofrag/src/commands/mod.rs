mod completions;
mod fmt;
mod testvars;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fmt::FmtCommand;
use gofrag_code::{Gofmt, GofmtConfig};
use testvars::TestvarsCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gofrag_code::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Formatter options shared by the commands that canonicalize code.
#[derive(Args)]
pub(crate) struct FormatterArgs {
    /// Formatter configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// gofmt binary to use (overrides the config file and GOFRAG_GOFMT)
    #[arg(long)]
    pub gofmt: Option<PathBuf>,

    /// Simplify code (gofmt -s)
    #[arg(short, long)]
    pub simplify: bool,
}

impl FormatterArgs {
    pub fn formatter(&self) -> Gofmt {
        let mut config = match &self.config {
            Some(path) => GofmtConfig::load(path).unwrap_or_exit().with_env(),
            None => GofmtConfig::from_env(),
        };
        if let Some(binary) = &self.gofmt {
            config = config.binary(binary);
        }
        if self.simplify {
            config = config.simplify(true);
        }
        Gofmt::new(config)
    }
}

#[derive(Parser)]
#[command(name = "gofrag")]
#[command(version)]
#[command(about = "Assemble and canonicalize Go source fragments")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Fmt(cmd) => cmd.run(),
            Commands::Testvars(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Format Go source in canonical gofmt style
    Fmt(FmtCommand),

    /// Print predeclared variables for Go unit tests
    Testvars(TestvarsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
