use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result};
use gofrag_code::{Code, Emit};
use tracing::info;

use super::{FormatterArgs, UnwrapOrExit};

#[derive(Args)]
pub struct FmtCommand {
    /// Go source file to format (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Check if the source is formatted without making changes (exit 1 if not)
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub formatter: FormatterArgs,
}

impl FmtCommand {
    pub fn run(&self) -> Result<()> {
        let source = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read '{}'", path.display()))?,
            None => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .wrap_err("failed to read stdin")?;
                source
            }
        };

        let mut code = Code::new().ident(&source);
        code.format_with(&self.formatter.formatter())
            .unwrap_or_exit();
        let formatted = code.text();
        let name = self
            .file
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());

        if self.check {
            if source != formatted {
                eprintln!("error: {} is not formatted", name);
                eprintln!("Run `gofrag fmt` to fix.");
                std::process::exit(1);
            }
            println!("{} is formatted", name);
            return Ok(());
        }

        match &self.file {
            Some(path) if source == formatted => {
                info!(file = %path.display(), "already formatted");
                println!("{} is already formatted", name);
            }
            Some(path) => {
                std::fs::write(path, formatted)
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                println!("Formatted {}", name);
            }
            None => io::stdout().write_all(formatted.as_bytes())?,
        }

        Ok(())
    }
}
