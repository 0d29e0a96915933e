//! The styled tree: each DOM node paired with its specified values.

use std::collections::HashMap;

use strum_macros::{Display as StrumDisplay, EnumString};
use wren_common::warning::warn_once;
use wren_dom::Node;

use crate::values::{Color, Value};

/// Map from property name to its winning declared value.
pub type PropertyMap = HashMap<String, Value>;

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The subset of `display` values that affect box generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Display {
    /// `display: inline` (the initial value)
    Inline,
    /// `display: block`
    Block,
    /// `display: none` - no boxes are generated for the subtree.
    None,
}

/// A DOM node together with its specified values and styled children.
///
/// The shape of the styled tree mirrors the DOM exactly. Text nodes carry an
/// empty [`PropertyMap`].
#[derive(Debug, Clone)]
pub struct StyledNode<'a> {
    /// The DOM node this style belongs to.
    pub node: &'a Node,
    /// Specified values after the cascade.
    pub specified_values: PropertyMap,
    /// Styled children, one per DOM child.
    pub children: Vec<StyledNode<'a>>,
}

impl StyledNode<'_> {
    /// The specified value of `name`, if any rule set it.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.specified_values.get(name)
    }

    /// Value of `name`, falling back to the shorthand `fallback`, then to
    /// `default`. Used for `margin-left` → `margin` and the like.
    #[must_use]
    pub fn lookup(&self, name: &str, fallback: &str, default: &Value) -> Value {
        self.value(name)
            .or_else(|| self.value(fallback))
            .unwrap_or(default)
            .clone()
    }

    /// The used `display` value. Anything other than a recognised keyword
    /// is treated as `inline`.
    #[must_use]
    pub fn display(&self) -> Display {
        match self.value("display") {
            Some(Value::Keyword(keyword)) => keyword.parse().unwrap_or_else(|_| {
                warn_once(
                    "CSS",
                    &format!("unsupported display '{keyword}' treated as inline"),
                );
                Display::Inline
            }),
            _ => Display::Inline,
        }
    }

    /// The colour stored under `name`, if it is a colour value.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        match self.value(name) {
            Some(Value::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// The `background` colour.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.color("background")
    }

    /// The `border-color` colour.
    #[must_use]
    pub fn border_color(&self) -> Option<Color> {
        self.color("border-color")
    }

    /// Tag name of the underlying element, `None` for text.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.node.as_element().map(|e| e.tag_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wren_dom::AttributesMap;

    fn styled<'a>(node: &'a Node, values: &[(&str, Value)]) -> StyledNode<'a> {
        StyledNode {
            node,
            specified_values: values
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_prefers_longhand() {
        let node = Node::element("div", AttributesMap::new(), vec![]);
        let s = styled(
            &node,
            &[("margin", Value::px(5.0)), ("margin-left", Value::px(7.0))],
        );
        let zero = Value::px(0.0);
        assert_eq!(s.lookup("margin-left", "margin", &zero), Value::px(7.0));
        assert_eq!(s.lookup("margin-right", "margin", &zero), Value::px(5.0));
        assert_eq!(s.lookup("padding-left", "padding", &zero), zero);
    }

    #[test]
    fn test_display_keywords() {
        let node = Node::element("div", AttributesMap::new(), vec![]);
        assert_eq!(styled(&node, &[]).display(), Display::Inline);
        assert_eq!(
            styled(&node, &[("display", Value::keyword("block"))]).display(),
            Display::Block
        );
        assert_eq!(
            styled(&node, &[("display", Value::keyword("none"))]).display(),
            Display::None
        );
        assert_eq!(
            styled(&node, &[("display", Value::keyword("flex"))]).display(),
            Display::Inline
        );
        assert_eq!(
            styled(&node, &[("display", Value::px(3.0))]).display(),
            Display::Inline
        );
    }

    #[test]
    fn test_colors() {
        let node = Node::element("div", AttributesMap::new(), vec![]);
        let red = Color::rgba(255, 0, 0, 255);
        let s = styled(
            &node,
            &[
                ("background", Value::Color(red)),
                ("border-color", Value::keyword("red")),
            ],
        );
        assert_eq!(s.background(), Some(red));
        assert_eq!(s.border_color(), None);
    }

    #[test]
    fn test_display_round_trips_through_strum() {
        assert_eq!(Display::Block.to_string(), "block");
        assert_eq!("none".parse::<Display>(), Ok(Display::None));
    }
}
