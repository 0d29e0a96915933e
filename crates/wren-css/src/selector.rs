//! CSS selector representation, specificity, and matching.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//!
//! Only simple selectors are supported: an optional type, an optional id,
//! and any number of classes. There are no combinators.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use wren_dom::ElementData;

/// [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "A selector's specificity is calculated for a given element as follows:
/// - count the number of ID selectors in the selector (= A)
/// - count the number of class selectors, attributes selectors, and
///   pseudo-classes in the selector (= B)
/// - count the number of type selectors and pseudo-elements in the selector (= C)"
///
/// Ordered through [`Specificity::packed`], so each component occupies one
/// byte. Class counts above 255 saturate and no longer rank correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Specificity(pub u8, pub u8, pub u8);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u8, b: u8, c: u8) -> Self {
        Self(a, b, c)
    }

    /// `A * 65536 + B * 256 + C`.
    #[must_use]
    pub fn packed(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }
}

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.packed().cmp(&other.packed())
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// A simple selector. All fields empty is the universal selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    /// Type selector, e.g. `div`.
    pub tag_name: Option<String>,
    /// ID selector, e.g. `#main`.
    pub id: Option<String>,
    /// Class selectors, e.g. `.a.b`.
    pub classes: BTreeSet<String>,
}

/// A selector in a rule's selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A simple selector.
    Simple(SimpleSelector),
}

impl Selector {
    /// The specificity of this selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Simple(simple) => Specificity::new(
                u8::from(simple.id.is_some()),
                u8::try_from(simple.classes.len()).unwrap_or(u8::MAX),
                u8::from(simple.tag_name.is_some()),
            ),
        }
    }

    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// NOTE: a selector with several classes matches when the element has
    /// *any* of them, not all. `.a.b` matches `class="b"`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Simple(simple) => matches_simple(simple, element),
        }
    }
}

fn matches_simple(selector: &SimpleSelector, element: &ElementData) -> bool {
    if selector
        .tag_name
        .as_ref()
        .is_some_and(|tag| *tag != element.tag_name)
    {
        return false;
    }

    if let Some(id) = &selector.id
        && element.id() != Some(id.as_str())
    {
        return false;
    }

    if selector.classes.is_empty() {
        return true;
    }
    let element_classes = element.classes();
    selector
        .classes
        .iter()
        .any(|class| element_classes.contains(class.as_str()))
}
