//! Common utilities for the Wren layout engine.
//!
//! This crate provides shared infrastructure used by both parsers and the
//! later pipeline stages:
//! - **Cursor** - forward-only character scanner over the input text
//! - **Parse errors** - the single error taxonomy both parsers report
//! - **Warning System** - deduplicated diagnostics for recoverable oddities

pub mod cursor;
pub mod error;
pub mod warning;

pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};
