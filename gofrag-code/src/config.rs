//! Formatter configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Environment variable that overrides the gofmt binary.
pub const GOFMT_ENV: &str = "GOFRAG_GOFMT";

/// How [`Gofmt`](crate::Gofmt) is invoked.
///
/// ```toml
/// binary = "/usr/local/go/bin/gofmt"
/// simplify = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GofmtConfig {
    /// Path or name of the gofmt binary, resolved through `PATH`.
    pub binary: PathBuf,
    /// Pass `-s` to simplify code.
    pub simplify: bool,
}

impl Default for GofmtConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("gofmt"),
            simplify: false,
        }
    }
}

impl GofmtConfig {
    /// Default configuration with the binary taken from `GOFRAG_GOFMT` when set.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Parse a TOML configuration.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Self::from_toml_str_with_filename(src, "gofrag.toml")
    }

    fn from_toml_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::config(e, src, filename))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_toml_str_with_filename(&content, &path.display().to_string())
    }

    /// Apply the `GOFRAG_GOFMT` override, if set and non-empty.
    pub fn with_env(self) -> Self {
        match std::env::var_os(GOFMT_ENV) {
            Some(binary) if !binary.is_empty() => self.binary(binary),
            _ => self,
        }
    }

    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Command-line flags passed to the binary.
    pub(crate) fn args(&self) -> Vec<&'static str> {
        if self.simplify {
            vec!["-s"]
        } else {
            Vec::new()
        }
    }
}
