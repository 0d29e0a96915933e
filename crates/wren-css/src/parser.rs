//! CSS parser.
//!
//! Grammar:
//!
//! ```text
//! stylesheet    := rule*
//! rule          := selector-list '{' declaration* '}'
//! selector-list := simple-selector (',' simple-selector)*
//! simple        := ( ident | '#' ident | '.' ident | '*' )*
//! declaration   := ident ':' value ';'
//! value         := length | color | keyword
//! length        := [0-9.]+ 'px'
//! color         := '#' hex hex hex hex hex hex
//! ident         := [A-Za-z0-9_-]+
//! ```
//!
//! Parsing is fail-fast: the first malformed construct aborts the whole
//! stylesheet.

use std::cmp::Reverse;

use wren_common::{Cursor, ParseError, ParseResult};

use crate::selector::{Selector, SimpleSelector};
use crate::values::{Color, Unit, Value};

/// A CSS declaration (e.g., `margin: 8px`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The declared value.
    pub value: Value,
}

/// A CSS style rule (selectors + declarations).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The selector list, sorted by descending specificity. Selectors of
    /// equal specificity keep their source order.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block, in source order.
    pub declarations: Vec<Declaration>,
}

/// A parsed CSS stylesheet. Rule order is significant for the cascade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<Rule>,
}

/// Parse `input` into a [`Stylesheet`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_css(input: &str) -> ParseResult<Stylesheet> {
    CSSParser::new(input).parse_stylesheet()
}

/// CSS parser over a [`Cursor`].
pub struct CSSParser {
    cursor: Cursor,
}

impl CSSParser {
    /// Create a new parser for `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse every rule up to end of input.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed rule.
    pub fn parse_stylesheet(&mut self) -> ParseResult<Stylesheet> {
        let mut rules = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.at_end() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        tracing::debug!(rules = rules.len(), "parsed stylesheet");
        Ok(Stylesheet { rules })
    }

    fn parse_rule(&mut self) -> ParseResult<Rule> {
        let selectors = self.parse_selectors()?;
        let declarations = self.parse_declarations()?;
        Ok(Rule {
            selectors,
            declarations,
        })
    }

    fn parse_selectors(&mut self) -> ParseResult<Vec<Selector>> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(Selector::Simple(self.parse_simple_selector()));
            self.cursor.skip_whitespace();
            match self.cursor.peek()? {
                ',' => {
                    self.cursor.expect(',')?;
                    self.cursor.skip_whitespace();
                }
                '{' => break,
                found => {
                    return Err(ParseError::UnexpectedCharacter {
                        expected: "',' or '{' in selector list".to_string(),
                        found,
                        position: self.cursor.position(),
                    });
                }
            }
        }

        // Highest specificity first; matching relies on this to pick the
        // most specific selector of a rule. sort_by_key is stable.
        selectors.sort_by_key(|selector| Reverse(selector.specificity()));
        Ok(selectors)
    }

    fn parse_simple_selector(&mut self) -> SimpleSelector {
        let mut selector = SimpleSelector::default();
        while let Some(c) = self.cursor.current() {
            if is_identifier_char(c) {
                selector.tag_name = Some(self.parse_identifier());
                continue;
            }
            match c {
                '#' => {
                    let _ = self.cursor.advance_by(1);
                    selector.id = Some(self.parse_identifier());
                }
                '.' => {
                    let _ = self.cursor.advance_by(1);
                    let _ = selector.classes.insert(self.parse_identifier());
                }
                '*' => {
                    // Universal selector
                    let _ = self.cursor.advance_by(1);
                }
                _ => break,
            }
        }
        selector
    }

    fn parse_declarations(&mut self) -> ParseResult<Vec<Declaration>> {
        self.cursor.expect('{')?;
        let mut declarations = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek()? == '}' {
                self.cursor.expect('}')?;
                break;
            }
            declarations.push(self.parse_declaration()?);
        }
        Ok(declarations)
    }

    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let name = self.parse_identifier();
        self.cursor.skip_whitespace();
        self.expect_punctuation(':')?;
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        self.expect_punctuation(';')?;
        Ok(Declaration { name, value })
    }

    fn expect_punctuation(&mut self, expected: char) -> ParseResult<()> {
        let found = self.cursor.current();
        if found != Some(expected) {
            return Err(ParseError::MissingDeclarationPunctuation {
                expected,
                found,
                position: self.cursor.position(),
            });
        }
        self.cursor.expect(expected)
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        match self.cursor.peek()? {
            '0'..='9' => self.parse_length(),
            '#' => self.parse_color(),
            _ => Ok(Value::Keyword(self.parse_identifier())),
        }
    }

    fn parse_length(&mut self) -> ParseResult<Value> {
        Ok(Value::Length(self.parse_float()?, self.parse_unit()?))
    }

    fn parse_float(&mut self) -> ParseResult<f64> {
        let position = self.cursor.position();
        let literal = self.cursor.consume_while(|c| c.is_ascii_digit() || c == '.');
        literal
            .parse()
            .map_err(|_| ParseError::InvalidNumber { literal, position })
    }

    fn parse_unit(&mut self) -> ParseResult<Unit> {
        let position = self.cursor.position();
        let unit = self.parse_identifier();
        if unit.eq_ignore_ascii_case("px") {
            Ok(Unit::Px)
        } else {
            Err(ParseError::UnrecognizedUnit { unit, position })
        }
    }

    fn parse_color(&mut self) -> ParseResult<Value> {
        self.cursor.expect('#')?;
        Ok(Value::Color(Color {
            r: self.parse_hex_pair()?,
            g: self.parse_hex_pair()?,
            b: self.parse_hex_pair()?,
            a: 255,
        }))
    }

    fn parse_hex_pair(&mut self) -> ParseResult<u8> {
        let position = self.cursor.position();
        let literal = self.cursor.advance_by(2);
        // from_str_radix accepts a leading '+', which is not a hex digit.
        if literal.len() != 2 || !literal.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidColorLiteral { literal, position });
        }
        u8::from_str_radix(&literal, 16)
            .map_err(|_| ParseError::InvalidColorLiteral { literal, position })
    }

    fn parse_identifier(&mut self) -> String {
        self.cursor.consume_while(is_identifier_char)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
