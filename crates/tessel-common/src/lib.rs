//! Common utilities for the Tessel fragment parser.
//!
//! This crate provides shared infrastructure used by all Tessel components:
//! - **Errors** - the fatal [`ParseError`] raised by the scanner and parser
//! - **Warning System** - colored terminal output for suspicious input

pub mod error;
pub mod warning;

pub use error::{ErrorCategory, ParseError, ParseErrorKind};
