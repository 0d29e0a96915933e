//! Parse errors shared by the HTML and CSS parsers.
//!
//! Parsing is fail-fast: the first error aborts the whole document and is
//! returned to the caller. There is no per-rule or per-element recovery.

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing markup or a stylesheet.
///
/// Every variant carries the cursor offset (in characters) at which the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ended where another character was required.
    #[error("unexpected end of input at {position}")]
    UnexpectedEndOfInput {
        /// Offset of the end of input.
        position: usize,
    },

    /// A structural character (tag delimiter, selector separator, quote)
    /// was not what the grammar requires.
    #[error("expected {expected} but found {found:?} at {position}")]
    UnexpectedCharacter {
        /// Human-readable description of what was expected.
        expected: String,
        /// The character actually found.
        found: char,
        /// Offset of `found`.
        position: usize,
    },

    /// A closing tag did not name the element it closes.
    #[error("closing tag </{closed}> does not match <{opened}> at {position}")]
    MismatchedClosingTag {
        /// Tag name of the open element.
        opened: String,
        /// Tag name found in the closing tag.
        closed: String,
        /// Offset just past the closing tag name.
        position: usize,
    },

    /// Input ended inside a start tag, a quoted attribute value, or before
    /// an element's closing tag.
    #[error("unterminated <{tag}> element at {position}")]
    UnterminatedElement {
        /// Tag name of the element being parsed.
        tag: String,
        /// Offset where input ran out.
        position: usize,
    },

    /// A length literal is not a valid number.
    #[error("invalid number {literal:?} at {position}")]
    InvalidNumber {
        /// The offending numeral text.
        literal: String,
        /// Offset of the start of the numeral.
        position: usize,
    },

    /// A length used a unit other than `px`.
    #[error("unrecognized unit {unit:?} at {position}")]
    UnrecognizedUnit {
        /// The unit text as written.
        unit: String,
        /// Offset of the start of the unit.
        position: usize,
    },

    /// A `#rrggbb` literal contained a pair that is not two hex digits.
    #[error("invalid color literal {literal:?} at {position}")]
    InvalidColorLiteral {
        /// The offending hex pair.
        literal: String,
        /// Offset of the start of the pair.
        position: usize,
    },

    /// A declaration is missing its `:` or `;`.
    #[error("expected '{expected}' in declaration but found {found:?} at {position}")]
    MissingDeclarationPunctuation {
        /// The punctuation that was required.
        expected: char,
        /// What was found instead, `None` at end of input.
        found: Option<char>,
        /// Offset where the punctuation was expected.
        position: usize,
    },

    /// Elements were nested deeper than the parser allows.
    #[error("elements nested deeper than {limit} levels at {position}")]
    NestingTooDeep {
        /// The maximum element depth.
        limit: usize,
        /// Offset of the start tag that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// The input offset at which this error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedCharacter { position, .. }
            | Self::MismatchedClosingTag { position, .. }
            | Self::UnterminatedElement { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnrecognizedUnit { position, .. }
            | Self::InvalidColorLiteral { position, .. }
            | Self::MissingDeclarationPunctuation { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
