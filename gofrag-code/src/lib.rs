//! Chainable accumulator for Go source fragments.
//!
//! [`Code`] collects text fragments (function headers, type declarations,
//! control flow, composite literals, selectors) through the operations of
//! [`Emit`], then [`Emit::format`] turns the result into canonical gofmt
//! output or reports why it could not.
//!
//! # Module Organization
//!
//! - [`args`] - Argument records taken by the emission operations
//! - [`template`] - Pure fragment templates
//! - [`format`] - The [`Formatter`] seam and the [`Gofmt`] implementation
//! - [`config`] - Formatter configuration
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod args;
mod code;
pub mod config;
mod error;
pub mod format;
pub mod template;
mod testvars;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use args::*;
pub use code::{Code, Emit};
pub use config::GofmtConfig;
pub use error::{Error, FormatterError, Result};
pub use format::{Formatter, Gofmt};
pub use testvars::TestVars;
