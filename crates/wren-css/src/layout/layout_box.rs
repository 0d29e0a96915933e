//! Layout box types, box generation, and the block layout algorithm.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use serde::Serialize;
use wren_common::warning::warn_once;

use crate::style::{Display, StyledNode};
use crate::values::Value;

use super::box_model::Dimensions;
use super::values::AutoOr;

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "A box's type affects, in part, its behavior in the visual formatting
/// model."
#[derive(Debug, Clone, Copy)]
pub enum BoxType<'a> {
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    Block(&'a StyledNode<'a>),

    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    Inline(&'a StyledNode<'a>),

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Wraps a run of consecutive inline-level children so that a block
    /// container only ever holds block-level children.
    AnonymousBlock,
}

impl BoxType<'_> {
    /// Short lowercase name: `block`, `inline` or `anonymous`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Block(_) => "block",
            Self::Inline(_) => "inline",
            Self::AnonymousBlock => "anonymous",
        }
    }
}

/// A node in the box tree.
///
/// Built by [`LayoutBox::build_layout_tree`]; `dimensions` stay zero until
/// [`LayoutBox::layout`] runs.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    /// Used geometry, filled in by layout.
    pub dimensions: Dimensions,
    /// The type of box and the styled node that generated it.
    pub box_type: BoxType<'a>,
    /// Child boxes in the layout tree.
    pub children: Vec<LayoutBox<'a>>,
}

/// An owned, serializable copy of a laid-out box subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSnapshot {
    /// `block`, `inline` or `anonymous`.
    pub kind: &'static str,
    /// Tag name of the generating element; `None` for text and anonymous
    /// boxes.
    pub tag: Option<String>,
    /// Used geometry.
    pub dimensions: Dimensions,
    /// Child snapshots.
    pub children: Vec<BoxSnapshot>,
}

impl<'a> LayoutBox<'a> {
    /// A box of the given type with zero dimensions and no children.
    #[must_use]
    pub fn new(box_type: BoxType<'a>) -> Self {
        Self {
            dimensions: Dimensions::default(),
            box_type,
            children: Vec::new(),
        }
    }

    /// The styled node that generated this box; `None` for anonymous boxes.
    #[must_use]
    pub const fn styled_node(&self) -> Option<&'a StyledNode<'a>> {
        match self.box_type {
            BoxType::Block(node) | BoxType::Inline(node) => Some(node),
            BoxType::AnonymousBlock => None,
        }
    }

    /// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
    ///
    /// "The display property, determines the type of box or boxes that
    /// are generated for an element."
    ///
    /// Returns `None` when `root` itself is `display: none`.
    #[must_use]
    pub fn build_layout_tree(root: &'a StyledNode<'a>) -> Option<Self> {
        let box_type = match root.display() {
            Display::Block => BoxType::Block(root),
            Display::Inline => BoxType::Inline(root),
            // [§ 2.6 display: none](https://www.w3.org/TR/css-display-3/#valdef-display-none)
            // "The element and its descendants generate no boxes or text runs."
            Display::None => return None,
        };
        Some(Self::build_box(root, box_type))
    }

    fn build_box(styled: &'a StyledNode<'a>, box_type: BoxType<'a>) -> Self {
        let mut layout_box = Self::new(box_type);
        for child in &styled.children {
            match child.display() {
                Display::Block => {
                    layout_box
                        .children
                        .push(Self::build_box(child, BoxType::Block(child)));
                }
                Display::Inline => {
                    layout_box
                        .inline_container()
                        .children
                        .push(Self::build_box(child, BoxType::Inline(child)));
                }
                Display::None => {}
            }
        }
        layout_box
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Where a new inline child goes: the trailing anonymous block if the
    /// last child already is one, otherwise a fresh anonymous block.
    fn inline_container(&mut self) -> &mut Self {
        let reuse_last = matches!(
            self.children.last(),
            Some(Self {
                box_type: BoxType::AnonymousBlock,
                ..
            })
        );
        if !reuse_last {
            self.children.push(Self::new(BoxType::AnonymousBlock));
        }
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Lay out this box and its descendants within `containing_block`.
    ///
    /// Only block boxes are laid out. Inline and anonymous boxes keep zero
    /// dimensions and their subtrees are not visited: inline layout (line
    /// boxes, text measurement) is not implemented.
    pub fn layout(&mut self, containing_block: Dimensions) {
        match self.box_type {
            BoxType::Block(style) => self.layout_block(style, containing_block),
            BoxType::Inline(_) | BoxType::AnonymousBlock => {}
        }
    }

    fn layout_block(&mut self, style: &StyledNode<'_>, containing_block: Dimensions) {
        // STEP 1: Width depends on the containing block's width.
        self.calculate_block_width(style, containing_block);

        // STEP 2: Position depends on the resolved horizontal edges.
        self.calculate_block_position(style, containing_block);

        // STEP 3: Children stack below our content top.
        self.layout_block_children();

        // STEP 4: An explicit height overrides the stacked height.
        self.calculate_block_height(style);

        tracing::trace!(
            tag = ?style.tag_name(),
            x = self.dimensions.content.x,
            y = self.dimensions.content.y,
            width = self.dimensions.content.width,
            height = self.dimensions.content.height,
            "laid out block"
        );
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// "The following constraints must hold among the used values of the
    /// other properties:
    ///
    ///   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
    ///   'padding-right' + 'border-right-width' + 'margin-right'
    ///   = width of containing block"
    fn calculate_block_width(&mut self, style: &StyledNode<'_>, containing_block: Dimensions) {
        let zero = Value::px(0.0);

        // STEP 1: Read the specified values. Border and padding cannot be
        // 'auto'; width and the horizontal margins can.
        let mut width = style.value("width").map_or(AutoOr::Auto, AutoOr::from);
        let mut margin_left = AutoOr::from(&style.lookup("margin-left", "margin", &zero));
        let mut margin_right = AutoOr::from(&style.lookup("margin-right", "margin", &zero));

        let border_left = style.lookup("border-left-width", "border-width", &zero).to_px();
        let border_right = style.lookup("border-right-width", "border-width", &zero).to_px();

        let padding_left = style.lookup("padding-left", "padding", &zero).to_px();
        let padding_right = style.lookup("padding-right", "padding", &zero).to_px();

        let total = margin_left.to_px_or(0.0)
            + margin_right.to_px_or(0.0)
            + border_left
            + border_right
            + padding_left
            + padding_right
            + width.to_px_or(0.0);

        // STEP 2: Over-constrained with a fixed width.
        // "If 'width' is not 'auto' and ... is larger than the width of the
        // containing block, then any 'auto' values for 'margin-left' or
        // 'margin-right' are, for the following rules, treated as zero."
        if !width.is_auto() && total > containing_block.content.width {
            if margin_left.is_auto() {
                margin_left = AutoOr::Length(0.0);
            }
            if margin_right.is_auto() {
                margin_right = AutoOr::Length(0.0);
            }
        }

        // STEP 3: Distribute the remaining space. May be negative.
        let underflow = containing_block.content.width - total;

        match (width.is_auto(), margin_left.is_auto(), margin_right.is_auto()) {
            // "If all of the above have a computed value other than 'auto',
            // the values are said to be 'over-constrained'... the specified
            // value of 'margin-right' is ignored and the value is calculated
            // so as to make the equality true."
            (false, false, false) => {
                margin_right = AutoOr::Length(margin_right.to_px_or(0.0) + underflow);
            }

            // "If there is exactly one value specified as 'auto', its used
            // value follows from the equality."
            (false, false, true) => margin_right = AutoOr::Length(underflow),
            (false, true, false) => margin_left = AutoOr::Length(underflow),

            // "If 'width' is set to 'auto', any other 'auto' values become
            // '0' and 'width' follows from the resulting equality."
            (true, _, _) => {
                if margin_left.is_auto() {
                    margin_left = AutoOr::Length(0.0);
                }
                if margin_right.is_auto() {
                    margin_right = AutoOr::Length(0.0);
                }
                if underflow >= 0.0 {
                    width = AutoOr::Length(underflow);
                } else {
                    // Width can't be negative; take it out of the right margin.
                    width = AutoOr::Length(0.0);
                    margin_right = AutoOr::Length(margin_right.to_px_or(0.0) + underflow);
                }
            }

            // "If both 'margin-left' and 'margin-right' are 'auto', their
            // used values are equal."
            (false, true, true) => {
                margin_left = AutoOr::Length(underflow / 2.0);
                margin_right = AutoOr::Length(underflow / 2.0);
            }
        }

        // STEP 4: Store the used values.
        let d = &mut self.dimensions;
        d.content.width = width.to_px_or(0.0);

        d.padding.left = padding_left;
        d.padding.right = padding_right;

        d.border.left = border_left;
        d.border.right = border_right;

        d.margin.left = margin_left.to_px_or(0.0);
        d.margin.right = margin_right.to_px_or(0.0);
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "Each box's left outer edge touches the left edge of the containing
    /// block." The containing block's `y` already accounts for earlier
    /// siblings.
    fn calculate_block_position(&mut self, style: &StyledNode<'_>, containing_block: Dimensions) {
        let zero = Value::px(0.0);
        let d = &mut self.dimensions;

        d.margin.top = style.lookup("margin-top", "margin", &zero).to_px();
        d.margin.bottom = style.lookup("margin-bottom", "margin", &zero).to_px();

        d.border.top = style.lookup("border-top-width", "border-width", &zero).to_px();
        d.border.bottom = style.lookup("border-bottom-width", "border-width", &zero).to_px();

        d.padding.top = style.lookup("padding-top", "padding", &zero).to_px();
        d.padding.bottom = style.lookup("padding-bottom", "padding", &zero).to_px();

        d.content.x = containing_block.content.x + d.margin.left + d.border.left + d.padding.left;
        d.content.y = containing_block.content.y + d.margin.top + d.border.top + d.padding.top;
    }

    /// [§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "In a block formatting context, boxes are laid out one after the
    /// other, vertically, beginning at the top of a containing block."
    ///
    /// No margin collapsing: each child's full margin box is stacked.
    fn layout_block_children(&mut self) {
        self.dimensions.content.height = 0.0;
        let mut cursor = self.dimensions;
        for child in &mut self.children {
            child.layout(cursor);
            let child_height = child.dimensions.margin_box().height;
            cursor.content.y += child_height;
            self.dimensions.content.height += child_height;
        }
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// A pixel `height` replaces the height accumulated from children.
    fn calculate_block_height(&mut self, style: &StyledNode<'_>) {
        match style.value("height") {
            Some(Value::Length(height, _)) => self.dimensions.content.height = *height,
            Some(other) if !other.is_auto() => {
                warn_once("Layout", &format!("height '{other}' ignored; only px is supported"));
            }
            _ => {}
        }
    }

    /// Copy this subtree into an owned [`BoxSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> BoxSnapshot {
        BoxSnapshot {
            kind: self.box_type.name(),
            tag: self
                .styled_node()
                .and_then(StyledNode::tag_name)
                .map(str::to_string),
            dimensions: self.dimensions,
            children: self.children.iter().map(Self::snapshot).collect(),
        }
    }

    /// Number of boxes in this subtree, including `self`.
    #[must_use]
    pub fn box_count(&self) -> usize {
        1 + self.children.iter().map(Self::box_count).sum::<usize>()
    }
}
