//! Tag tables for the rich-text schema.

use richdoc_core::{ElementType, Mark};

use super::Rule;

/// Element tags and the node types they build
pub fn element_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("P", Rule::element_type(ElementType::Paragraph)),
        ("H1", Rule::element_type(ElementType::HeadingOne)),
        ("H2", Rule::element_type(ElementType::HeadingTwo)),
        ("BLOCKQUOTE", Rule::element_type(ElementType::Quote)),
        ("LI", Rule::element_type(ElementType::ListItem)),
        ("OL", Rule::element_type(ElementType::NumberedList)),
        ("UL", Rule::element_type(ElementType::BulletedList)),
        ("LINK", Rule::element_with_url(ElementType::Link, "href")),
        ("IMG", Rule::element_with_url(ElementType::Image, "src")),
    ]
}

/// The anchor tag, mapped to links unless disabled in the codec options
pub fn anchor_rule() -> (&'static str, Rule) {
    ("A", Rule::element_with_url(ElementType::Link, "href"))
}

/// Text-decorating tags and the marks they apply
pub fn mark_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("CODE", Rule::mark(Mark::Code)),
        ("DEL", Rule::mark(Mark::Strikethrough)),
        ("B", Rule::mark(Mark::Bold)),
        ("EM", Rule::mark(Mark::Italic)),
        ("I", Rule::mark(Mark::Italic)),
        ("S", Rule::mark(Mark::Strikethrough)),
        ("STRONG", Rule::mark(Mark::Bold)),
        ("U", Rule::mark(Mark::Underlined)),
    ]
}
