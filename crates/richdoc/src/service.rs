//! HtmlCodec - the main entry point for HTML import and export.

use richdoc_core::{Fragment, MarkStyle, Node, Options};

use crate::dom::{DomNode, HtmlParser};
use crate::rules::{Rule, Rules};

/// Options for HtmlCodec
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Map `<a href>` to link elements in addition to `<link href>`
    pub anchor_links: bool,

    /// Inline tag style for marked text on export
    pub mark_style: MarkStyle,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            anchor_links: true,
            mark_style: MarkStyle::Single,
        }
    }
}

impl CodecOptions {
    fn serialize_options(&self) -> Options {
        Options {
            mark_style: self.mark_style,
        }
    }
}

/// Converts HTML to document trees and back
pub struct HtmlCodec {
    options: CodecOptions,
    rules: Rules,
    parser: Box<dyn HtmlParser + Send + Sync>,
}

impl HtmlCodec {
    /// Create an HtmlCodec with default options and the html5ever parser
    #[cfg(feature = "html")]
    pub fn new() -> Self {
        Self::with_options(CodecOptions::default())
    }

    /// Create an HtmlCodec with custom options and the html5ever parser
    #[cfg(feature = "html")]
    pub fn with_options(options: CodecOptions) -> Self {
        Self::with_parser(crate::html::Html5Parser, options)
    }

    /// Create an HtmlCodec that parses HTML with the given parser
    pub fn with_parser<P>(parser: P, options: CodecOptions) -> Self
    where
        P: HtmlParser + Send + Sync + 'static,
    {
        Self {
            rules: Rules::new(options.anchor_links),
            options,
            parser: Box::new(parser),
        }
    }

    /// Convert HTML to a document fragment
    pub fn deserialize(&self, html: &str) -> Fragment {
        let document = self.parser.parse(html);
        self.deserialize_dom(&document)
    }

    /// Convert an already parsed DOM tree to a document fragment
    pub fn deserialize_dom(&self, document: &DomNode) -> Fragment {
        crate::deserialize::deserialize(document, &self.rules)
    }

    /// Convert document nodes to HTML
    pub fn serialize(&self, nodes: &[Node]) -> String {
        richdoc_core::serialize(nodes, &self.options.serialize_options())
    }

    /// Add or replace the import rule for a tag
    pub fn add_rule(&mut self, tag: &str, rule: Rule) -> &mut Self {
        self.rules.add(tag, rule);
        self
    }

    /// Drop elements with this tag, including their content
    pub fn drop_tag(&mut self, tag: &str) -> &mut Self {
        self.rules.add(tag, Rule::Drop);
        self
    }

    /// Make a tag transparent: only its children are imported
    pub fn pass_through(&mut self, tag: &str) -> &mut Self {
        self.rules.remove(tag);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Get the import rules
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

#[cfg(feature = "html")]
impl Default for HtmlCodec {
    fn default() -> Self {
        Self::new()
    }
}
