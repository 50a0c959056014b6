//! richdoc-core - rich-text document tree and HTML serialization
//!
//! This crate provides the document model shared by the HTML importer in
//! `richdoc` and the editor toolbar, and the serializer that renders a
//! document back to HTML.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parse──▶ ┌───────────────┐
//!                        │               │
//!                        │ Document Tree │ ──serialize──▶ HTML String
//! Editor JSON ─────────▶ │               │
//!                        └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richdoc_core::{serialize, ElementType, Mark, Marks, Node, Options};
//!
//! let doc = vec![Node::element(
//!     ElementType::Paragraph,
//!     vec![
//!         Node::text("This is "),
//!         Node::marked("bold", Marks::only(Mark::Bold)),
//!         Node::text(" text."),
//!     ],
//! )];
//!
//! let html = serialize(&doc, &Options::default());
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{merge_adjacent_text, Element, ElementType, Fragment, Mark, Marks, Node, Text};
pub use options::{MarkStyle, Options};
pub use serialize::{escape_html, serialize};

/// Error type for document model operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown mark: {0}")]
    UnknownMark(String),
}

pub type Result<T> = std::result::Result<T, Error>;
