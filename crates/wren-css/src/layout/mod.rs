//! Layout Engine
//!
//! Turns a styled tree into a box tree and resolves block geometry.
//!
//! # Relevant Specifications
//!
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Visual Formatting Model Details](https://www.w3.org/TR/CSS2/visudet.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`values`] - Auto-or-length values
//! - [`layout_box`] - Box generation and the block layout algorithm

pub mod box_model;
pub mod layout_box;
pub mod values;

pub use box_model::{Dimensions, EdgeSizes, Rect};
pub use layout_box::{BoxSnapshot, BoxType, LayoutBox};
pub use values::AutoOr;

use crate::style::StyledNode;

/// Build the box tree for `root` and lay it out inside `viewport`.
///
/// The initial containing block has `viewport` as its content rectangle
/// and zero edges. Its height does not constrain layout. Returns `None`
/// when the root is `display: none`.
#[must_use]
pub fn layout_tree<'a>(root: &'a StyledNode<'a>, viewport: Rect) -> Option<LayoutBox<'a>> {
    let mut root_box = LayoutBox::build_layout_tree(root)?;
    let containing_block = Dimensions {
        content: viewport,
        ..Dimensions::default()
    };
    root_box.layout(containing_block);
    tracing::debug!(
        boxes = root_box.box_count(),
        height = root_box.dimensions.content.height,
        "layout complete"
    );
    Some(root_box)
}
