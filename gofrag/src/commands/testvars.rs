use std::io::{self, Write};

use clap::Args;
use eyre::Result;
use gofrag_code::{Code, Emit, TestVars};

use super::{FormatterArgs, UnwrapOrExit};

#[derive(Args)]
pub struct TestvarsCommand {
    /// Declare strFoo of type string
    #[arg(long)]
    pub string: bool,

    /// Declare errFoo of type error
    #[arg(long)]
    pub error: bool,

    /// Declare intFoo of type int64
    #[arg(long)]
    pub int: bool,

    /// Declare floatFoo of type float64
    #[arg(long)]
    pub float: bool,

    /// Print the declarations without formatting them
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub formatter: FormatterArgs,
}

impl TestvarsCommand {
    fn vars(&self) -> TestVars {
        TestVars {
            string: self.string,
            error: self.error,
            int: self.int,
            float: self.float,
        }
    }

    pub fn run(&self) -> Result<()> {
        let mut code = Code::new().test_variables(&self.vars());
        if !self.raw {
            code.format_with(&self.formatter.formatter())
                .unwrap_or_exit();
        }
        io::stdout().write_all(code.text().as_bytes())?;
        Ok(())
    }
}
