//! Recursive-descent HTML parser.
//!
//! Grammar:
//!
//! ```text
//! nodes     := node*              (stops at end of input or "</")
//! node      := element | text
//! text      := chars-until('<')
//! element   := '<' tag-name attribute* '>' nodes '</' tag-name '>'
//!            | '<' tag-name attribute* '/>'
//! tag-name  := [A-Za-z]+
//! attribute := attr-name '=' ( '"' [^"]* '"' | "'" [^']* "'" )
//! attr-name := [A-Za-z0-9_-]+
//! ```

use wren_common::{Cursor, ParseError, ParseResult};
use wren_dom::{AttributesMap, Node};

/// Maximum element nesting depth. Parsing, styling and layout all recurse
/// once per level, so deeper input is rejected instead of exhausting the
/// stack.
pub const MAX_DEPTH: usize = 256;

/// Parse `input` into a single-rooted DOM tree.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is
/// produced.
pub fn parse_html(input: &str) -> ParseResult<Node> {
    HTMLParser::new(input).run()
}

/// HTML parser over a [`Cursor`].
pub struct HTMLParser {
    cursor: Cursor,
    /// Number of currently open elements.
    depth: usize,
}

impl HTMLParser {
    /// Create a new parser for `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: 0,
        }
    }

    /// Parse the whole input.
    ///
    /// If the input holds exactly one top-level node it becomes the root;
    /// otherwise the top-level nodes are wrapped in a synthetic `<html>`
    /// element so a single root is always returned.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed construct, or on a closing tag with no
    /// open element at the top level.
    pub fn run(mut self) -> ParseResult<Node> {
        let nodes = self.parse_nodes()?;

        // parse_nodes only stops early at "</"; at the top level nothing is
        // open for it to close.
        if !self.cursor.at_end() {
            return Err(ParseError::UnexpectedCharacter {
                expected: "end of input".to_string(),
                found: '<',
                position: self.cursor.position(),
            });
        }

        let root = match <[Node; 1]>::try_from(nodes) {
            Ok([root]) => root,
            Err(nodes) => Node::element("html", AttributesMap::new(), nodes),
        };
        tracing::debug!(nodes = root.subtree_len(), "parsed HTML document");
        Ok(root)
    }

    fn parse_nodes(&mut self) -> ParseResult<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.at_end() || self.cursor.starts_with("</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> ParseResult<Node> {
        if self.cursor.current() == Some('<') {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    fn parse_text(&mut self) -> Node {
        Node::text(self.cursor.consume_while(|c| c != '<'))
    }

    fn parse_element(&mut self) -> ParseResult<Node> {
        let start = self.cursor.position();
        self.cursor.expect('<')?;
        // The tag name is unknown yet; a truncated "<" still reports an
        // unterminated element.
        let tag = self.parse_tag_name().map_err(|e| unterminated(e, ""))?;

        let (attrs, self_closing) = self.parse_attributes(&tag)?;
        if self_closing {
            return Ok(Node::element(tag, attrs, Vec::new()));
        }

        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_DEPTH,
                position: start,
            });
        }
        self.depth += 1;
        let children = self.parse_nodes();
        self.depth -= 1;
        let children = children?;

        // STEP: closing tag. parse_nodes stopped either at "</" or at end
        // of input; the latter means this element was never closed.
        if self.cursor.at_end() {
            return Err(ParseError::UnterminatedElement {
                tag,
                position: self.cursor.position(),
            });
        }
        self.cursor.expect('<')?;
        self.cursor.expect('/')?;
        let closed = self.parse_tag_name().map_err(|e| unterminated(e, &tag))?;
        if closed != tag {
            return Err(ParseError::MismatchedClosingTag {
                opened: tag,
                closed,
                position: self.cursor.position(),
            });
        }
        self.cursor.skip_whitespace();
        self.cursor.expect('>').map_err(|e| unterminated(e, &tag))?;

        Ok(Node::element(tag, attrs, children))
    }

    fn parse_tag_name(&mut self) -> ParseResult<String> {
        let position = self.cursor.position();
        let name = self.cursor.consume_while(|c| c.is_ascii_alphabetic());
        if name.is_empty() {
            return Err(ParseError::UnexpectedCharacter {
                expected: "tag name".to_string(),
                found: self.cursor.peek()?,
                position,
            });
        }
        Ok(name)
    }

    /// Parse attributes up to and including the end of the start tag.
    ///
    /// Returns the attributes and whether the tag was self-closing (`/>`).
    fn parse_attributes(&mut self, tag: &str) -> ParseResult<(AttributesMap, bool)> {
        let mut attrs = AttributesMap::new();
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                None => {
                    return Err(ParseError::UnterminatedElement {
                        tag: tag.to_string(),
                        position: self.cursor.position(),
                    });
                }
                Some('>') => {
                    self.cursor.expect('>')?;
                    return Ok((attrs, false));
                }
                Some('/') if self.cursor.starts_with("/>") => {
                    let _ = self.cursor.advance_by(2);
                    return Ok((attrs, true));
                }
                Some(_) => {
                    let (name, value) = self.parse_attribute(tag)?;
                    // Last occurrence of a duplicated attribute wins.
                    let _ = attrs.insert(name, value);
                }
            }
        }
    }

    fn parse_attribute(&mut self, tag: &str) -> ParseResult<(String, String)> {
        let position = self.cursor.position();
        let name = self
            .cursor
            .consume_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if name.is_empty() {
            return Err(ParseError::UnexpectedCharacter {
                expected: "attribute name".to_string(),
                found: self.cursor.peek()?,
                position,
            });
        }
        self.cursor.expect('=').map_err(|e| unterminated(e, tag))?;
        let value = self.parse_attribute_value(tag)?;
        Ok((name, value))
    }

    fn parse_attribute_value(&mut self, tag: &str) -> ParseResult<String> {
        let position = self.cursor.position();
        let open_quote = self.cursor.advance().map_err(|e| unterminated(e, tag))?;
        if open_quote != '"' && open_quote != '\'' {
            return Err(ParseError::UnexpectedCharacter {
                expected: "quoted attribute value".to_string(),
                found: open_quote,
                position,
            });
        }
        let value = self.cursor.consume_while(|c| c != open_quote);
        self.cursor
            .expect(open_quote)
            .map_err(|e| unterminated(e, tag))?;
        Ok(value)
    }
}

/// Running out of input inside an element is reported against the element.
fn unterminated(err: ParseError, tag: &str) -> ParseError {
    match err {
        ParseError::UnexpectedEndOfInput { position } => ParseError::UnterminatedElement {
            tag: tag.to_string(),
            position,
        },
        other => other,
    }
}
