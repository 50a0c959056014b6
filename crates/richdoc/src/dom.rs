//! Parser-agnostic DOM structure for HTML import.
//!
//! The importer walks this tree instead of a concrete parser's output. Any
//! HTML parser can produce it by implementing [`HtmlParser`]; the default
//! scraper-backed parser lives in [`crate::html`].

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Doctype node (nodeType = 10)
    Doctype = 10,
}

/// A DOM node
#[derive(Debug, Clone)]
pub struct DomNode {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "P", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in source order
    pub attributes: Vec<(String, String)>,

    /// Child nodes
    pub children: Vec<DomNode>,
}

impl DomNode {
    fn new(node_type: NodeType, node_name: &str, node_value: Option<&str>) -> Self {
        Self {
            node_type,
            node_name: node_name.to_string(),
            node_value: node_value.map(str::to_string),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element, &tag_name.to_uppercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::new(NodeType::Text, "#text", Some(content))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::new(NodeType::Comment, "#comment", Some(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::new(NodeType::Document, "#document", None)
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this is an element with the given tag name (case-insensitive)
    pub fn is_tag(&self, tag_name: &str) -> bool {
        self.is_element() && self.node_name.eq_ignore_ascii_case(tag_name)
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &DomNode> {
        self.children.iter()
    }

    /// First child node of any type
    pub fn first_child(&self) -> Option<&DomNode> {
        self.children.first()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: DomNode) {
        self.children.push(child);
    }

    /// Builder form of [`DomNode::add_child`]
    pub fn with_child(mut self, child: DomNode) -> Self {
        self.add_child(child);
        self
    }

    /// Depth-first search for the first element with the given tag name
    pub fn find_element(&self, tag_name: &str) -> Option<&DomNode> {
        if self.is_tag(tag_name) {
            return Some(self);
        }
        self.children().find_map(|child| child.find_element(tag_name))
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Comment | NodeType::Doctype => String::new(),
            _ => self.children().map(DomNode::text_content).collect(),
        }
    }
}

/// A capability that turns HTML text into a [`DomNode`] tree.
///
/// The returned tree should be a document (or any node) containing a
/// `BODY` element; when no body is present the root itself is imported.
pub trait HtmlParser {
    fn parse(&self, html: &str) -> DomNode;
}

impl<F> HtmlParser for F
where
    F: Fn(&str) -> DomNode,
{
    fn parse(&self, html: &str) -> DomNode {
        self(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = DomNode::element("blockquote");
        assert!(node.is_element());
        assert!(node.is_tag("BLOCKQUOTE"));
        assert_eq!(node.tag_name(), "blockquote");
        assert_eq!(node.node_name, "BLOCKQUOTE");
    }

    #[test]
    fn test_create_text() {
        let node = DomNode::text("Hello World");
        assert!(node.is_text());
        assert!(!node.is_tag("#text"));
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = DomNode::element_with_attrs("a", vec![("HREF", "http://x"), ("title", "X")]);
        assert_eq!(node.attr("href"), Some("http://x"));
        assert_eq!(node.attr("title"), Some("X"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_find_element() {
        let doc = DomNode::document().with_child(
            DomNode::element("html")
                .with_child(DomNode::element("head"))
                .with_child(DomNode::element("body").with_child(DomNode::text("x"))),
        );
        let body = doc.find_element("body").unwrap();
        assert_eq!(body.text_content(), "x");
        assert!(doc.find_element("table").is_none());
    }

    #[test]
    fn test_text_content_skips_comments() {
        let p = DomNode::element("p")
            .with_child(DomNode::text("a"))
            .with_child(DomNode::comment("hidden"))
            .with_child(DomNode::element("b").with_child(DomNode::text("b")));
        assert_eq!(p.text_content(), "ab");
    }

    #[test]
    fn test_closure_parser() {
        let parser = |html: &str| DomNode::element("body").with_child(DomNode::text(html));
        let node = parser.parse("raw");
        assert_eq!(node.text_content(), "raw");
    }
}
