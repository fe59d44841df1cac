//! Canonical formatting of accumulated source.

use std::{
    io::{self, Write},
    process::{Command, Stdio},
    thread,
};

use tracing::debug;

use crate::{FormatterError, GofmtConfig};

/// Turns source text into its canonical form, or rejects it.
///
/// What counts as valid source is decided entirely by the implementation.
pub trait Formatter {
    fn format_source(&self, src: &[u8]) -> Result<Vec<u8>, FormatterError>;
}

impl<F> Formatter for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, FormatterError>,
{
    fn format_source(&self, src: &[u8]) -> Result<Vec<u8>, FormatterError> {
        self(src)
    }
}

/// Formats Go source by piping it through `gofmt`.
///
/// Source goes to stdin, so partial files (declaration or statement lists)
/// are accepted the same way `go/format` accepts them.
#[derive(Debug, Clone, Default)]
pub struct Gofmt {
    config: GofmtConfig,
}

impl Gofmt {
    pub fn new(config: GofmtConfig) -> Self {
        Self { config }
    }

    /// Use the default configuration with the `GOFRAG_GOFMT` override applied.
    pub fn from_env() -> Self {
        Self::new(GofmtConfig::from_env())
    }

    pub fn config(&self) -> &GofmtConfig {
        &self.config
    }
}

impl Formatter for Gofmt {
    fn format_source(&self, src: &[u8]) -> Result<Vec<u8>, FormatterError> {
        let binary = &self.config.binary;
        debug!(binary = %binary.display(), bytes = src.len(), "running gofmt");

        let mut child = Command::new(binary)
            .args(self.config.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatterError::Spawn {
                binary: binary.clone(),
                source,
            })?;

        let io_error = |source: io::Error| FormatterError::Io {
            binary: binary.clone(),
            source,
        };
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io_error(io::Error::other("stdin was not captured")))?;

        // stdin is fed from its own thread so a large output cannot block on
        // a full stdout pipe while we are still writing.
        let (written, output) = thread::scope(|s| {
            let writer = s.spawn(move || stdin.write_all(src));
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output.map_err(io_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.trim();
            let message = if message.is_empty() {
                format!("gofmt exited with {}", output.status)
            } else {
                message.to_string()
            };
            return Err(FormatterError::rejected(message));
        }

        match written {
            Ok(Ok(())) => Ok(output.stdout),
            Ok(Err(source)) => Err(io_error(source)),
            Err(_) => Err(io_error(io::Error::other("stdin writer panicked"))),
        }
    }
}
