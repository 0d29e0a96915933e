//! Integration tests for the HTML parser.

use quickcheck_macros::quickcheck;
use wren_common::ParseError;
use wren_dom::{Node, NodeType};
use wren_html::{MAX_DEPTH, parse_html};

fn tag(node: &Node) -> &str {
    &node.as_element().expect("element node").tag_name
}

#[test]
fn test_round_trip_attributes_and_self_closing_child() {
    let root = parse_html(r#"<a id="x" class="c1 c2"><b/></a>"#).unwrap();
    assert_eq!(tag(&root), "a");

    let element = root.as_element().unwrap();
    assert_eq!(element.id(), Some("x"));
    let classes = element.classes();
    assert_eq!(classes.len(), 2);
    assert!(classes.contains("c1") && classes.contains("c2"));

    assert_eq!(root.children.len(), 1);
    assert_eq!(tag(&root.children[0]), "b");
    assert!(root.children[0].children.is_empty());
}

#[test]
fn test_nested_document() {
    let html = r#"
        <html>
            <div id="head" class="border"></div>
            <div class="body">
                <div class="center border"></div>
                <div class="center border bottom"></div>
            </div>
        </html>
    "#;
    let root = parse_html(html).unwrap();
    assert_eq!(tag(&root), "html");
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].as_element().unwrap().id(), Some("head"));
    assert_eq!(root.children[1].children.len(), 2);
    assert!(
        root.children[1].children[1]
            .as_element()
            .unwrap()
            .classes()
            .contains("bottom")
    );
}

#[test]
fn test_single_quoted_attribute_may_contain_double_quote() {
    let root = parse_html(r#"<p title='say "hi"'></p>"#).unwrap();
    let element = root.as_element().unwrap();
    assert_eq!(element.attrs.get("title").map(String::as_str), Some(r#"say "hi""#));
}

#[test]
fn test_hyphenated_attribute_name() {
    let root = parse_html(r#"<p data-role="note"></p>"#).unwrap();
    assert_eq!(
        root.as_element().unwrap().attrs.get("data-role").map(String::as_str),
        Some("note")
    );
}

#[test]
fn test_mixed_text_and_elements() {
    let root = parse_html("<p>Hello <em>world</em>!</p>").unwrap();
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.children[0].as_text(), Some("Hello "));
    assert_eq!(tag(&root.children[1]), "em");
    assert_eq!(root.children[1].children[0].as_text(), Some("world"));
    assert!(matches!(&root.children[2].node_type, NodeType::Text(t) if t == "!"));
}

#[test]
fn test_whitespace_before_closing_bracket() {
    let root = parse_html("<div ></div >").unwrap();
    assert_eq!(tag(&root), "div");
}

#[test]
fn test_mismatched_closing_tag() {
    let err = parse_html("<div><p></div></p>").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MismatchedClosingTag { ref opened, ref closed, .. }
            if opened == "p" && closed == "div"
    ));
}

#[test]
fn test_missing_closing_tag_is_unterminated() {
    let err = parse_html("<div><p></p>").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnterminatedElement {
            tag: "div".to_string(),
            position: 12,
        }
    );
}

#[test]
fn test_missing_end_of_start_tag_is_unterminated() {
    let err = parse_html(r#"<div id="x""#).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedElement { ref tag, .. } if tag == "div"));
}

#[test]
fn test_unmatched_quote_is_unterminated() {
    let err = parse_html(r#"<div id="x></div>"#).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedElement { ref tag, .. } if tag == "div"));
}

#[test]
fn test_unquoted_attribute_value_is_rejected() {
    let err = parse_html("<div id=x></div>").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCharacter {
            expected: "quoted attribute value".to_string(),
            found: 'x',
            position: 8,
        }
    );
}

#[test]
fn test_attribute_without_equals_is_rejected() {
    let err = parse_html("<input disabled></input>").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedCharacter { found: '>', .. }
    ));
}

#[test]
fn test_stray_closing_tag_at_top_level() {
    let err = parse_html("<p></p></div>").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCharacter {
            expected: "end of input".to_string(),
            found: '<',
            position: 7,
        }
    );
}

#[test]
fn test_empty_tag_name_is_rejected() {
    let err = parse_html("< p></p>").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedCharacter { ref expected, found: ' ', position: 1 }
            if expected == "tag name"
    ));
}

#[test]
fn test_truncated_start_tag_is_unterminated() {
    assert_eq!(
        parse_html("<").unwrap_err(),
        ParseError::UnterminatedElement {
            tag: String::new(),
            position: 1,
        }
    );
    assert!(matches!(
        parse_html("<div").unwrap_err(),
        ParseError::UnterminatedElement { ref tag, position: 4 } if tag == "div"
    ));
    assert!(matches!(
        parse_html("<p><").unwrap_err(),
        ParseError::UnterminatedElement { ref tag, position: 4 } if tag.is_empty()
    ));
}

fn nested(depth: usize) -> String {
    format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth))
}

#[test]
fn test_nesting_up_to_limit_is_accepted() {
    let mut node = parse_html(&nested(MAX_DEPTH)).unwrap();
    let mut depth = 1;
    while let Some(child) = node.children.pop() {
        node = child;
        depth += 1;
    }
    assert_eq!(depth, MAX_DEPTH);
}

#[test]
fn test_nesting_past_limit_is_rejected() {
    let err = parse_html(&nested(MAX_DEPTH * 40)).unwrap_err();
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            limit: MAX_DEPTH,
            position: MAX_DEPTH * 3,
        }
    );
}

#[test]
fn test_self_closing_element_at_limit_is_accepted() {
    let html = format!("{}<b/>{}", "<a>".repeat(MAX_DEPTH), "</a>".repeat(MAX_DEPTH));
    assert!(parse_html(&html).is_ok());
}

#[test]
fn test_parsing_is_deterministic() {
    let html = r#"<ul class="a b"><li id="1">one</li><li>two</li></ul>"#;
    assert_eq!(parse_html(html).unwrap(), parse_html(html).unwrap());
}

#[quickcheck]
fn prop_parse_is_deterministic(input: String) -> bool {
    parse_html(&input) == parse_html(&input)
}

#[quickcheck]
fn prop_text_only_input_parses(words: Vec<u8>) -> bool {
    let text: String = words
        .iter()
        .map(|b| char::from(b'a' + b % 26))
        .collect();
    match parse_html(&text) {
        Ok(root) if text.is_empty() => root.children.is_empty(),
        Ok(root) => root.as_text() == Some(text.as_str()),
        Err(_) => false,
    }
}
