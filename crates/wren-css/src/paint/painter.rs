//! Display list generation from a laid-out box tree.
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)

use crate::layout::{LayoutBox, Rect};
use crate::style::StyledNode;

use super::{DisplayCommand, DisplayList};

/// Paint a layout tree and return the display list.
///
/// Boxes are visited in tree order. For each box with a styled node:
/// 1. `background` fills the border box
/// 2. `border-color` fills the four border edges (left, right, top, bottom)
///
/// Anonymous boxes paint nothing themselves but their children are visited.
#[must_use]
pub fn build_display_list(root: &LayoutBox<'_>) -> DisplayList {
    let mut list = DisplayList::new();
    paint_box(root, &mut list);
    list
}

fn paint_box(layout_box: &LayoutBox<'_>, list: &mut DisplayList) {
    paint_background(layout_box, list);
    paint_borders(layout_box, list);
    for child in &layout_box.children {
        paint_box(child, list);
    }
}

/// [§ 3.10 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
///
/// The background painting area defaults to the border box.
fn paint_background(layout_box: &LayoutBox<'_>, list: &mut DisplayList) {
    let Some(color) = layout_box.styled_node().and_then(StyledNode::background) else {
        return;
    };
    list.push(DisplayCommand::SolidColor {
        color,
        rect: layout_box.dimensions.border_box(),
    });
}

/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
fn paint_borders(layout_box: &LayoutBox<'_>, list: &mut DisplayList) {
    let Some(color) = layout_box.styled_node().and_then(StyledNode::border_color) else {
        return;
    };

    let d = &layout_box.dimensions;
    let border_box = d.border_box();

    let edges = [
        // left
        Rect {
            x: border_box.x,
            y: border_box.y,
            width: d.border.left,
            height: border_box.height,
        },
        // right
        Rect {
            x: border_box.x + border_box.width - d.border.right,
            y: border_box.y,
            width: d.border.right,
            height: border_box.height,
        },
        // top
        Rect {
            x: border_box.x,
            y: border_box.y,
            width: border_box.width,
            height: d.border.top,
        },
        // bottom
        Rect {
            x: border_box.x,
            y: border_box.y + border_box.height - d.border.bottom,
            width: border_box.width,
            height: d.border.bottom,
        },
    ];

    for rect in edges {
        list.push(DisplayCommand::SolidColor { color, rect });
    }
}
