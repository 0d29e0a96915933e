//! CSS parsing, the style cascade, box generation, block layout, and
//! painting for the Wren engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Parser**: a recursive-descent parser for a small CSS subset
//!   (simple selectors, keyword / px / hex colour values)
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID, and universal selectors
//!   - Specificity calculation
//!
//! - **CSS Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Selector matching
//!   - Specificity ordering with source order as the tie-break
//!
//! - **Layout Engine** ([CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html))
//!   - Box generation with anonymous block wrappers
//!   - Block width, position, and height resolution
//!
//! - **Painting**: a display list of solid rectangles for backgrounds and
//!   borders
//!
//! # Not Yet Implemented
//!
//! - Inheritance and initial values beyond `display`
//! - Units other than `px`, functional colour notations
//! - Combinators, pseudo-classes, attribute selectors
//! - Inline layout, margin collapsing, text measurement

/// Style cascade per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Box model and block layout per [CSS 2.1 § 10](https://www.w3.org/TR/CSS2/visudet.html).
pub mod layout;
/// Display list and painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// CSS stylesheet parser.
pub mod parser;
/// Simple selectors and specificity per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// The styled tree.
pub mod style;
/// Declared value types.
pub mod values;

// Re-exports for convenience
pub use cascade::{specified_values, style_tree};
pub use layout::{BoxSnapshot, BoxType, Dimensions, EdgeSizes, LayoutBox, Rect, layout_tree};
pub use paint::{DisplayCommand, DisplayList, build_display_list};
pub use parser::{CSSParser, Declaration, Rule, Stylesheet, parse_css};
pub use selector::{Selector, SimpleSelector, Specificity};
pub use style::{Display, PropertyMap, StyledNode};
pub use values::{Color, Unit, Value};
