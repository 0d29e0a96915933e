//! CSS Cascading and Style Computation
//!
//! This module implements the cascade per
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/),
//! restricted to author rules with simple selectors and no inheritance.

use wren_dom::{ElementData, Node, NodeType};

use crate::parser::{Rule, Stylesheet};
use crate::selector::Specificity;
use crate::style::{PropertyMap, StyledNode};

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// A matched rule with the specificity of the selector that matched.
type MatchedRule<'a> = (Specificity, &'a Rule);

/// Build the styled tree for `root` against `stylesheet`.
///
/// The result has exactly the shape of the DOM; text nodes get an empty
/// property map.
#[must_use]
pub fn style_tree<'a>(root: &'a Node, stylesheet: &Stylesheet) -> StyledNode<'a> {
    let styled = style_node(root, stylesheet);
    tracing::debug!(
        nodes = root.subtree_len(),
        rules = stylesheet.rules.len(),
        "computed styles"
    );
    styled
}

fn style_node<'a>(node: &'a Node, stylesheet: &Stylesheet) -> StyledNode<'a> {
    let specified_values = match &node.node_type {
        NodeType::Element(element) => specified_values(element, stylesheet),
        NodeType::Text(_) => PropertyMap::new(),
    };
    StyledNode {
        node,
        specified_values,
        children: node
            .children
            .iter()
            .map(|child| style_node(child, stylesheet))
            .collect(),
    }
}

/// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// Apply every matching rule's declarations from lowest to highest
/// precedence, so the last write for a property wins. Precedence is
/// specificity first, then source order: the sort is stable, so among rules
/// of equal specificity the later rule in the stylesheet is applied later.
#[must_use]
pub fn specified_values(element: &ElementData, stylesheet: &Stylesheet) -> PropertyMap {
    let mut values = PropertyMap::new();
    let mut rules = matching_rules(element, stylesheet);
    rules.sort_by_key(|(specificity, _)| *specificity);

    for (_, rule) in rules {
        for declaration in &rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    values
}

/// All rules with at least one selector matching `element`, in stylesheet
/// order.
fn matching_rules<'a>(element: &ElementData, stylesheet: &'a Stylesheet) -> Vec<MatchedRule<'a>> {
    stylesheet
        .rules
        .iter()
        .filter_map(|rule| match_rule(element, rule))
        .collect()
}

/// A rule's selectors are sorted most specific first, so the first match is
/// the most specific match in the rule.
fn match_rule<'a>(element: &ElementData, rule: &'a Rule) -> Option<MatchedRule<'a>> {
    rule.selectors
        .iter()
        .find(|selector| selector.matches(element))
        .map(|selector| (selector.specificity(), rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_css;
    use crate::values::Value;
    use wren_dom::AttributesMap;

    fn element(tag: &str, id: Option<&str>, class: Option<&str>) -> ElementData {
        let mut attrs = AttributesMap::new();
        if let Some(id) = id {
            let _ = attrs.insert("id".to_string(), id.to_string());
        }
        if let Some(class) = class {
            let _ = attrs.insert("class".to_string(), class.to_string());
        }
        ElementData {
            tag_name: tag.to_string(),
            attrs,
        }
    }

    #[test]
    fn test_match_rule_uses_most_specific_selector() {
        let sheet = parse_css("p, #x, .c { width: 1px; }").unwrap();
        let rule = &sheet.rules[0];

        let (specificity, _) = match_rule(&element("p", Some("x"), Some("c")), rule).unwrap();
        assert_eq!(specificity, Specificity(1, 0, 0));

        let (specificity, _) = match_rule(&element("p", None, Some("c")), rule).unwrap();
        assert_eq!(specificity, Specificity(0, 1, 0));

        let (specificity, _) = match_rule(&element("p", None, None), rule).unwrap();
        assert_eq!(specificity, Specificity(0, 0, 1));

        assert!(match_rule(&element("div", None, None), rule).is_none());
    }

    #[test]
    fn test_text_nodes_have_no_values() {
        let sheet = parse_css("* { display: block; }").unwrap();
        let dom = Node::element("p", AttributesMap::new(), vec![Node::text("hi")]);
        let styled = style_tree(&dom, &sheet);
        assert_eq!(styled.value("display"), Some(&Value::keyword("block")));
        assert!(styled.children[0].specified_values.is_empty());
    }
}
