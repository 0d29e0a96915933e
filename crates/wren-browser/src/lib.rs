//! High-level pipeline API for the Wren engine.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - read HTML and CSS from files or strings
//! - **Style Computation** - run the cascade over the parsed DOM
//! - **Layout** - build and lay out the box tree inside a viewport
//! - **Painting** - produce a display list for an external renderer
//!
//! ```text
//! HTML text ──► DOM ─┐
//!                    ├──► Styled tree ──► Box tree ──► DisplayList
//! CSS text ──► Sheet ┘
//! ```

pub use wren_css as css;
pub use wren_dom as dom;
pub use wren_html as html;

use std::fs;
use std::path::{Path, PathBuf};

use strum_macros::Display;
use wren_common::ParseError;
use wren_common::warning::clear_warnings;
use wren_css::{BoxSnapshot, DisplayList, Rect, StyledNode, Stylesheet};
use wren_dom::Node;

/// Which input document a parse error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SourceKind {
    /// The HTML document.
    #[strum(serialize = "HTML")]
    Html,
    /// The stylesheet.
    #[strum(serialize = "CSS")]
    Css,
}

/// Error type for document loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read a file.
    #[error("failed to read '{}'", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// One of the documents failed to parse.
    #[error("{source_kind} parse error")]
    Parse {
        /// Which document failed.
        source_kind: SourceKind,
        /// The parse error.
        source: ParseError,
    },
}

/// Size of the initial containing block.
///
/// Only the width constrains layout; the height is carried for renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    /// The viewport as a rectangle anchored at the origin.
    #[must_use]
    pub const fn rect(self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// A parsed document: the DOM and the stylesheet that applies to it.
///
/// The styled tree and the box tree borrow from the DOM, so they are
/// produced on demand rather than stored.
#[derive(Debug, Clone)]
pub struct Document {
    /// Parsed DOM tree
    pub dom: Node,
    /// Parsed stylesheet
    pub stylesheet: Stylesheet,
}

impl Document {
    /// Parse an HTML document and a stylesheet.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] naming the document that failed. HTML is
    /// parsed first, so an error in both reports the HTML one.
    pub fn parse(html: &str, css: &str) -> Result<Self, LoadError> {
        // Warnings are deduplicated per document.
        clear_warnings();
        let dom = wren_html::parse_html(html).map_err(|source| LoadError::Parse {
            source_kind: SourceKind::Html,
            source,
        })?;
        let stylesheet = wren_css::parse_css(css).map_err(|source| LoadError::Parse {
            source_kind: SourceKind::Css,
            source,
        })?;
        Ok(Self {
            dom,
            stylesheet,
        })
    }

    /// Run the cascade over the DOM.
    #[must_use]
    pub fn style_tree(&self) -> StyledNode<'_> {
        wren_css::style_tree(&self.dom, &self.stylesheet)
    }

    /// Style and lay out the document, returning an owned copy of the box
    /// tree. `None` if the root element is `display: none`.
    #[must_use]
    pub fn layout(&self, viewport: Viewport) -> Option<BoxSnapshot> {
        let styled = self.style_tree();
        let root = wren_css::layout_tree(&styled, viewport.rect())?;
        Some(root.snapshot())
    }

    /// Style, lay out and paint the document. An empty list if the root
    /// element is `display: none`.
    #[must_use]
    pub fn display_list(&self, viewport: Viewport) -> DisplayList {
        let styled = self.style_tree();
        let Some(root) = wren_css::layout_tree(&styled, viewport.rect()) else {
            return DisplayList::new();
        };
        wren_css::build_display_list(&root)
    }
}

/// Load a document from an HTML file and an optional CSS file.
///
/// Without a CSS file the document is styled by an empty stylesheet, so
/// every element is `display: inline`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if a file cannot be read and
/// [`LoadError::Parse`] if either document is malformed.
pub fn load_document(html_path: &Path, css_path: Option<&Path>) -> Result<Document, LoadError> {
    let html = read_file(html_path)?;
    let css = css_path.map(read_file).transpose()?.unwrap_or_default();
    let document = Document::parse(&html, &css)?;
    tracing::debug!(
        html = %html_path.display(),
        rules = document.stylesheet.rules.len(),
        "loaded document"
    );
    Ok(document)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
