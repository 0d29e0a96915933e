//! Integration tests for box generation and block layout.

#![allow(clippy::float_cmp)]

use wren_css::{
    BoxSnapshot, Dimensions, EdgeSizes, LayoutBox, Rect, StyledNode, layout_tree, parse_css,
    style_tree,
};
use wren_html::parse_html;

const VIEWPORT_WIDTH: f64 = 300.0;

fn viewport() -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width: VIEWPORT_WIDTH,
        height: 0.0,
    }
}

/// Run the whole pipeline and return an owned copy of the laid-out tree.
fn layout(html: &str, css: &str) -> Option<BoxSnapshot> {
    let dom = parse_html(html).unwrap();
    let sheet = parse_css(css).unwrap();
    let styled = style_tree(&dom, &sheet);
    layout_tree(&styled, viewport()).as_ref().map(LayoutBox::snapshot)
}

fn block(css: &str) -> Dimensions {
    layout("<div></div>", &format!("div {{ display: block; {css} }}"))
        .unwrap()
        .dimensions
}

fn kinds(snapshot: &BoxSnapshot) -> Vec<&'static str> {
    snapshot.children.iter().map(|c| c.kind).collect()
}

#[test]
fn test_auto_width_and_auto_margins_fill_container() {
    let d = block("width: auto; margin-left: auto; margin-right: auto; padding: 0px; border-width: 0px;");
    assert_eq!(d.content.width, 300.0);
    assert_eq!(d.margin.left, 0.0);
    assert_eq!(d.margin.right, 0.0);
}

#[test]
fn test_auto_margins_center_fixed_width() {
    let d = block("width: 100px; margin-left: auto; margin-right: auto;");
    assert_eq!(d.content.width, 100.0);
    assert_eq!(d.margin.left, 100.0);
    assert_eq!(d.margin.right, 100.0);
    assert_eq!(d.content.x, 100.0);
}

#[test]
fn test_only_right_margin_auto() {
    let d = block("width: 100px; margin-left: 20px; margin-right: auto;");
    assert_eq!(d.margin.left, 20.0);
    assert_eq!(d.margin.right, 180.0);
}

#[test]
fn test_only_left_margin_auto() {
    let d = block("width: 100px; margin-left: auto; margin-right: 20px;");
    assert_eq!(d.margin.left, 180.0);
    assert_eq!(d.margin.right, 20.0);
    assert_eq!(d.content.x, 180.0);
}

#[test]
fn test_over_constrained_adjusts_right_margin() {
    let d = block("width: 200px; margin-left: 50px; margin-right: 100px;");
    assert_eq!(d.content.width, 200.0);
    assert_eq!(d.margin.left, 50.0);
    assert_eq!(d.margin.right, 50.0);
}

#[test]
fn test_too_wide_treats_auto_margins_as_zero() {
    let d = block("width: 400px; margin-left: auto; margin-right: auto;");
    assert_eq!(d.content.width, 400.0);
    assert_eq!(d.margin.left, 0.0);
    assert_eq!(d.margin.right, -100.0);
}

#[test]
fn test_auto_width_never_goes_negative() {
    let d = block("margin-left: 200px; margin-right: 150px;");
    assert_eq!(d.content.width, 0.0);
    assert_eq!(d.margin.left, 200.0);
    assert_eq!(d.margin.right, 100.0);
}

#[test]
fn test_padding_and_border_shrink_auto_width() {
    let d = block("padding: 10px; border-width: 5px;");
    assert_eq!(d.content.width, 270.0);
    assert_eq!(d.padding, EdgeSizes::uniform(10.0));
    assert_eq!(d.border, EdgeSizes::uniform(5.0));
    assert_eq!(d.content.x, 15.0);
    assert_eq!(d.content.y, 15.0);
    assert_eq!(d.border_box().width, 300.0);
}

#[test]
fn test_longhands_override_shorthands() {
    let d = block("margin: 10px; margin-top: 4px; padding: 2px; padding-left: 6px;");
    assert_eq!(d.margin.top, 4.0);
    assert_eq!(d.margin.bottom, 10.0);
    assert_eq!(d.padding.left, 6.0);
    assert_eq!(d.padding.right, 2.0);
    assert_eq!(d.content.x, 16.0);
    assert_eq!(d.content.y, 6.0);
    assert_eq!(d.content.width, 300.0 - 20.0 - 8.0);
}

#[test]
fn test_children_stack_by_margin_box_height() {
    let html = r#"<div><div class="a"></div><div class="b"></div></div>"#;
    let css = "div { display: block; } .a { height: 20px; margin: 10px; } .b { height: 80px; }";
    let root = layout(html, css).unwrap();

    assert_eq!(root.dimensions.content.height, 120.0);

    let a = &root.children[0].dimensions;
    assert_eq!(a.margin_box().height, 40.0);
    assert_eq!(a.content.y, 10.0);
    assert_eq!(a.content.width, 280.0);

    let b = &root.children[1].dimensions;
    assert_eq!(b.content.y, 40.0);
    assert_eq!(b.content.height, 80.0);
}

#[test]
fn test_nested_children_are_offset_by_parent_edges() {
    let html = r#"<div class="outer"><div class="inner"></div></div>"#;
    let css = "div { display: block; } .outer { padding: 7px; margin: 3px; } .inner { height: 5px; }";
    let root = layout(html, css).unwrap();
    let inner = &root.children[0].dimensions;
    assert_eq!(inner.content.x, 10.0);
    assert_eq!(inner.content.y, 10.0);
    assert_eq!(inner.content.width, 300.0 - 20.0);
    assert_eq!(root.dimensions.content.height, 5.0);
}

#[test]
fn test_explicit_height_overrides_children() {
    let html = "<div><p></p><p></p></div>";
    let css = "div, p { display: block; } p { height: 100px; } div { height: 50px; }";
    let root = layout(html, css).unwrap();
    assert_eq!(root.dimensions.content.height, 50.0);
    assert_eq!(root.children[1].dimensions.content.y, 100.0);
}

#[test]
fn test_non_pixel_height_keeps_accumulated_height() {
    let html = "<div><p></p></div>";
    let css = "div, p { display: block; } p { height: 30px; } div { height: auto; }";
    let root = layout(html, css).unwrap();
    assert_eq!(root.dimensions.content.height, 30.0);
}

#[test]
fn test_display_none_generates_no_boxes() {
    let html = r#"<div><p class="hidden"><p></p></p><p></p></div>"#;
    let css = "div, p { display: block; height: 10px; } div { height: auto; } .hidden { display: none; height: 50px; }";
    let root = layout(html, css).unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.dimensions.content.height, 10.0);
    assert_eq!(root.children[0].dimensions.content.y, 0.0);
}

#[test]
fn test_display_none_root_has_no_layout() {
    assert!(layout("<div><p></p></div>", "div { display: none; }").is_none());
}

#[test]
fn test_inline_children_are_grouped_in_anonymous_blocks() {
    let html = "<div><span></span><span></span><p></p><span></span>text</div>";
    let css = "div, p { display: block; }";
    let root = layout(html, css).unwrap();

    assert_eq!(kinds(&root), vec!["anonymous", "block", "anonymous"]);
    assert_eq!(root.children[0].children.len(), 2);
    assert_eq!(kinds(&root.children[2]), vec!["inline", "inline"]);
    assert_eq!(root.children[2].children[1].tag, None);
    assert_eq!(root.children[0].tag, None);
    assert_eq!(root.children[1].tag.as_deref(), Some("p"));
}

#[test]
fn test_inline_content_has_no_geometry() {
    let html = r#"<div><span class="s"></span></div>"#;
    let css = "div { display: block; } .s { height: 40px; width: 10px; }";
    let root = layout(html, css).unwrap();
    assert_eq!(root.dimensions.content.height, 0.0);
    let anonymous = &root.children[0];
    assert_eq!(anonymous.dimensions, Dimensions::default());
    assert_eq!(anonymous.children[0].dimensions, Dimensions::default());
}

#[test]
fn test_inline_root_is_not_laid_out() {
    let root = layout("<span><p></p></span>", "p { display: block; height: 10px; }").unwrap();
    assert_eq!(root.kind, "inline");
    assert_eq!(kinds(&root), vec!["block"]);
    assert_eq!(root.dimensions, Dimensions::default());
    assert_eq!(root.children[0].dimensions, Dimensions::default());
}

#[test]
fn test_box_tree_references_styled_nodes() {
    let dom = parse_html(r#"<div id="x"><em></em></div>"#).unwrap();
    let sheet = parse_css("div { display: block; }").unwrap();
    let styled = style_tree(&dom, &sheet);
    let root = LayoutBox::build_layout_tree(&styled).unwrap();

    assert_eq!(root.styled_node().and_then(StyledNode::tag_name), Some("div"));
    assert!(root.children[0].styled_node().is_none());
    let em = &root.children[0].children[0];
    assert_eq!(em.styled_node().and_then(StyledNode::tag_name), Some("em"));
    assert_eq!(root.box_count(), 3);
}

#[test]
fn test_layout_is_deterministic() {
    let html = r#"<div><div class="a"></div>x<div class="b"></div></div>"#;
    let css = "div { display: block; margin: 3px; } .a { height: 4px; } .b { width: 50px; margin-left: auto; }";
    assert_eq!(layout(html, css), layout(html, css));
}
