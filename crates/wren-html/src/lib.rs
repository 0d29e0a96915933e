//! HTML parser for the Wren layout engine.
//!
//! # Scope
//!
//! This crate implements a small recursive-descent parser for a strict
//! subset of HTML:
//! - Elements with explicit closing tags (`<p>...</p>`) or self-closing
//!   (`<br/>`)
//! - Attributes written as `name="value"` or `name='value'`
//! - Text runs
//!
//! # Not Yet Implemented
//!
//! - Comments and DOCTYPE
//! - Character references (`&amp;`)
//! - Unquoted or valueless attributes
//! - Implied end tags and error recovery: the first malformed construct
//!   fails the whole document

/// HTML parser and tree construction.
pub mod parser;

pub use parser::{HTMLParser, MAX_DEPTH, parse_html};
