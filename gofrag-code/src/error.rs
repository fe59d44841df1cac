use std::{path::PathBuf, string::FromUtf8Error};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for gofrag-code operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("nil pointer")]
    #[diagnostic(
        code(gofrag::nil_pointer),
        help("the code chain was absent before this call; check the operation that returned None")
    )]
    NilPointer,

    #[error("{op} failed for {target}")]
    #[diagnostic(code(gofrag::format))]
    Op {
        op: &'static str,
        target: &'static str,
        #[source]
        #[diagnostic_source]
        source: FormatterError,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(gofrag::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse formatter configuration")]
    #[diagnostic(code(gofrag::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Wrap a formatter failure raised while formatting the accumulated code.
    pub fn format_source(source: FormatterError) -> Box<Self> {
        Box::new(Error::Op {
            op: "format source",
            target: "code",
            source,
        })
    }

    /// Create a configuration parse error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Failure reported by a [`Formatter`](crate::Formatter).
#[derive(Debug, Error, Diagnostic)]
pub enum FormatterError {
    #[error("failed to run '{binary}'")]
    #[diagnostic(
        code(gofrag::formatter::spawn),
        help("install Go, or set GOFRAG_GOFMT to the gofmt binary")
    )]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o with '{binary}' failed")]
    #[diagnostic(code(gofrag::formatter::io))]
    Io {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(gofrag::formatter::rejected))]
    Rejected { message: String },

    #[error("formatter produced invalid UTF-8")]
    #[diagnostic(code(gofrag::formatter::utf8))]
    Utf8(#[from] FromUtf8Error),
}

impl FormatterError {
    /// Create a rejection carrying the formatter's own diagnostic.
    pub fn rejected(message: impl Into<String>) -> Self {
        FormatterError::Rejected {
            message: message.into(),
        }
    }
}
