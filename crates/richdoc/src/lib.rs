//! # richdoc
//!
//! Convert HTML to a rich-text editor document and back.
//!
//! The document schema is small and fixed: paragraphs, two heading levels,
//! quotes, numbered and bulleted lists, links, images, and the inline marks
//! bold, italic, code, underlined and strikethrough.
//!
//! ## Design
//!
//! HTML is parsed into a parser-agnostic [`DomNode`] tree, then converted to
//! the document tree with a table of tag [`Rules`]. This allows:
//!
//! - **Parser injection**: any [`HtmlParser`] can feed the importer
//! - **Extensible schema**: tags can be added, dropped, or made transparent
//! - **No failure modes**: unknown markup degrades to its text
//!
//! The toolbar side lives in [`format`]: block and mark toggles written
//! against small editor capability traits.
//!
//! ## Example
//!
//! ```rust
//! use richdoc::{ElementType, HtmlCodec, Node};
//!
//! let codec = HtmlCodec::new();
//!
//! let fragment = codec.deserialize("<ul><li>a</li><li>b</li></ul>");
//! let list = fragment[0].as_element().unwrap();
//! assert_eq!(list.ty, ElementType::BulletedList);
//!
//! assert_eq!(codec.serialize(&fragment), "<ul><li>a</li><li>b</li></ul>");
//! ```

#[cfg(feature = "html")]
use once_cell::sync::Lazy;

mod deserialize;
pub mod dom;
pub mod format;
#[cfg(feature = "html")]
pub mod html;
mod rules;
mod service;

pub use dom::{DomNode, HtmlParser, NodeType};
#[cfg(feature = "html")]
pub use html::{parse_html, Html5Parser};
pub use richdoc_core::{
    escape_html, Element, ElementType, Fragment, Mark, MarkStyle, Marks, Node, Options, Text,
};
pub use rules::{ElementFn, Rule, Rules};
pub use service::{CodecOptions, HtmlCodec};

#[cfg(feature = "html")]
static DEFAULT_CODEC: Lazy<HtmlCodec> = Lazy::new(HtmlCodec::new);

/// Convert HTML to a document fragment with the default codec
#[cfg(feature = "html")]
pub fn deserialize(html: &str) -> Fragment {
    DEFAULT_CODEC.deserialize(html)
}

/// Convert document nodes to HTML with the default options
pub fn serialize(nodes: &[Node]) -> String {
    richdoc_core::serialize(nodes, &Options::default())
}

/// Error type for richdoc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] richdoc_core::Error),

    #[error("Path does not point at a text node: {0:?}")]
    InvalidPath(Vec<usize>),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_without_codec() {
        let nodes = [Node::element(
            ElementType::Quote,
            vec![Node::marked("q", Marks::only(Mark::Italic))],
        )];
        assert_eq!(serialize(&nodes), "<blockquote><em>q</em></blockquote>");
    }
}
