//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and converts the
//! result to the [`DomNode`] structure the importer walks.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::dom::{DomNode, HtmlParser};

/// Standards-compliant HTML parser backed by html5ever.
///
/// Input is parsed as a full document, so fragments get the implied
/// `html`/`head`/`body` wrappers a browser would add.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Parser;

impl HtmlParser for Html5Parser {
    fn parse(&self, html: &str) -> DomNode {
        parse_html(html)
    }
}

/// Parse an HTML string into a [`DomNode`] document.
///
/// # Example
///
/// ```rust
/// use richdoc::parse_html;
///
/// let document = parse_html("<h1>Hello <em>World</em></h1>");
/// let body = document.find_element("body").unwrap();
/// assert_eq!(body.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> DomNode {
    let document = Html::parse_document(html);
    DomNode::document().with_child(scraper_to_node(document.root_element()))
}

/// Convert a scraper ElementRef to our DomNode structure
fn scraper_to_node(element: ElementRef) -> DomNode {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        DomNode::element(tag)
    } else {
        DomNode::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(DomNode::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(DomNode::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
