//! Rich-text document tree
//!
//! This module defines the nodes of the editor document: typed elements with
//! ordered children, and text leaves carrying independent formatting marks.
//! The serde representation matches the editor's JSON value shape.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Block (or inline container) type of an element node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    Quote,
    ListItem,
    NumberedList,
    BulletedList,
    Link,
    Image,
    /// Any type name outside the schema, kept verbatim
    Other(String),
}

impl ElementType {
    /// The type name as it appears in the document value
    pub fn as_str(&self) -> &str {
        match self {
            ElementType::Paragraph => "paragraph",
            ElementType::HeadingOne => "heading-one",
            ElementType::HeadingTwo => "heading-two",
            ElementType::Quote => "quote",
            ElementType::ListItem => "list-item",
            ElementType::NumberedList => "numbered-list",
            ElementType::BulletedList => "bulleted-list",
            ElementType::Link => "link",
            ElementType::Image => "image",
            ElementType::Other(name) => name,
        }
    }

    /// Check if this is a list container type
    pub fn is_list(&self) -> bool {
        matches!(self, ElementType::NumberedList | ElementType::BulletedList)
    }

    /// Inline elements (links and void images) live inside blocks and are
    /// never block-formatted
    pub fn is_inline(&self) -> bool {
        matches!(self, ElementType::Link | ElementType::Image)
    }
}

impl From<&str> for ElementType {
    fn from(name: &str) -> Self {
        match name {
            "paragraph" => ElementType::Paragraph,
            "heading-one" => ElementType::HeadingOne,
            "heading-two" => ElementType::HeadingTwo,
            "quote" | "block-quote" => ElementType::Quote,
            "list-item" => ElementType::ListItem,
            "numbered-list" => ElementType::NumberedList,
            "bulleted-list" => ElementType::BulletedList,
            "link" => ElementType::Link,
            "image" => ElementType::Image,
            other => ElementType::Other(other.to_string()),
        }
    }
}

impl From<String> for ElementType {
    fn from(name: String) -> Self {
        match ElementType::from(name.as_str()) {
            ElementType::Other(_) => ElementType::Other(name),
            known => known,
        }
    }
}

impl From<ElementType> for String {
    fn from(ty: ElementType) -> Self {
        match ty {
            ElementType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inline formatting mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Underlined,
    Strikethrough,
}

impl Mark {
    pub const ALL: [Mark; 5] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Code,
        Mark::Underlined,
        Mark::Strikethrough,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Code => "code",
            Mark::Underlined => "underlined",
            Mark::Strikethrough => "strikethrough",
        }
    }
}

impl FromStr for Mark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mark::ALL
            .into_iter()
            .find(|mark| mark.as_str() == s)
            .ok_or_else(|| Error::UnknownMark(s.to_string()))
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The set of marks on a text node. Absent flags are false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Marks {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
}

impl Marks {
    /// A mark set with exactly one flag set
    pub fn only(mark: Mark) -> Self {
        Self::default().with(mark)
    }

    pub fn get(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Code => self.code,
            Mark::Underlined => self.underlined,
            Mark::Strikethrough => self.strikethrough,
        }
    }

    pub fn set(&mut self, mark: Mark, value: bool) {
        let flag = match mark {
            Mark::Bold => &mut self.bold,
            Mark::Italic => &mut self.italic,
            Mark::Code => &mut self.code,
            Mark::Underlined => &mut self.underlined,
            Mark::Strikethrough => &mut self.strikethrough,
        };
        *flag = value;
    }

    pub fn with(mut self, mark: Mark) -> Self {
        self.set(mark, true);
        self
    }

    /// Flags set in either mark set
    pub fn union(self, other: Marks) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            code: self.code || other.code,
            underlined: self.underlined || other.underlined,
            strikethrough: self.strikethrough || other.strikethrough,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Marks::default()
    }

    /// Iterate over the set marks in precedence order
    pub fn iter(self) -> impl Iterator<Item = Mark> {
        Mark::ALL.into_iter().filter(move |mark| self.get(*mark))
    }
}

/// A text leaf
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(flatten)]
    pub marks: Marks,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
        }
    }

    pub fn with_marks(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

/// A typed container node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub ty: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "deserialize_children")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element holding only the empty-text placeholder
    pub fn new(ty: ElementType) -> Self {
        Self::with_children(ty, Vec::new())
    }

    /// Create an element; an empty child list gets a placeholder text child
    pub fn with_children(ty: ElementType, children: Vec<Node>) -> Self {
        Self {
            ty,
            url: None,
            children: with_placeholder(children),
        }
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    /// Check if this element only contains other blocks. Any text or inline
    /// child makes it a leaf block.
    pub fn has_block_children(&self) -> bool {
        !self.children.is_empty()
            && self
                .children
                .iter()
                .all(|child| matches!(child, Node::Element(el) if !el.ty.is_inline()))
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    /// Create an unmarked text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    /// Create a text node with marks
    pub fn marked(content: impl Into<String>, marks: Marks) -> Self {
        Node::Text(Text::with_marks(content, marks))
    }

    /// Create an element node (placeholder rule applies)
    pub fn element(ty: ElementType, children: Vec<Node>) -> Self {
        Node::Element(Element::with_children(ty, children))
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::with_children(ElementType::Link, children).with_url(Some(url.into())))
    }

    pub fn image(url: impl Into<String>) -> Self {
        Node::Element(Element::new(ElementType::Image).with_url(Some(url.into())))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of all leaves beneath this node
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Number of text leaves beneath (or at) this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Text(_) => 1,
            Node::Element(el) => el.children.iter().map(Node::leaf_count).sum(),
        }
    }

    /// Add `marks` to every text leaf beneath this node
    pub fn apply_marks(&mut self, marks: Marks) {
        match self {
            Node::Text(text) => text.marks = text.marks.union(marks),
            Node::Element(el) => {
                for child in &mut el.children {
                    child.apply_marks(marks);
                }
            }
        }
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// The top-level node sequence of a document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(Vec<Node>);

impl Fragment {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.0
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.0
    }

    /// Parse the editor's JSON value form
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the editor's JSON value form
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Deref for Fragment {
    type Target = [Node];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Node>> for Fragment {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl IntoIterator for Fragment {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn with_placeholder(children: Vec<Node>) -> Vec<Node> {
    if children.is_empty() {
        vec![Node::text("")]
    } else {
        children
    }
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Node>::deserialize(deserializer).map(with_placeholder)
}

/// Merge adjacent text siblings that carry the same marks
pub fn merge_adjacent_text(children: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());

    for child in children {
        if let (Some(Node::Text(prev)), Node::Text(next)) = (merged.last_mut(), &child) {
            if prev.marks == next.marks {
                prev.text.push_str(&next.text);
                continue;
            }
        }
        merged.push(child);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_child() {
        let el = Element::new(ElementType::Paragraph);
        assert_eq!(el.children, vec![Node::text("")]);
    }

    #[test]
    fn test_element_type_names() {
        assert_eq!(ElementType::from("heading-two"), ElementType::HeadingTwo);
        assert_eq!(ElementType::from("block-quote"), ElementType::Quote);
        assert_eq!(ElementType::Quote.as_str(), "quote");
        assert_eq!(
            ElementType::from("table"),
            ElementType::Other("table".to_string())
        );
        assert_eq!(ElementType::Other("table".to_string()).as_str(), "table");
    }

    #[test]
    fn test_mark_from_str() {
        assert_eq!("underlined".parse::<Mark>().unwrap(), Mark::Underlined);
        assert!(matches!(
            "underline".parse::<Mark>(),
            Err(Error::UnknownMark(name)) if name == "underline"
        ));
    }

    #[test]
    fn test_marks_union() {
        let marks = Marks::only(Mark::Bold).union(Marks::only(Mark::Italic));
        assert!(marks.bold);
        assert!(marks.italic);
        assert!(!marks.code);
        assert_eq!(marks.iter().collect::<Vec<_>>(), vec![Mark::Bold, Mark::Italic]);
    }

    #[test]
    fn test_merge_adjacent_text() {
        let merged = merge_adjacent_text(vec![
            Node::text("a"),
            Node::text("\n"),
            Node::text("b"),
            Node::marked("c", Marks::only(Mark::Bold)),
            Node::marked("d", Marks::only(Mark::Bold)),
            Node::text("e"),
        ]);
        assert_eq!(
            merged,
            vec![
                Node::text("a\nb"),
                Node::marked("cd", Marks::only(Mark::Bold)),
                Node::text("e"),
            ]
        );
    }

    #[test]
    fn test_apply_marks_to_descendants() {
        let mut node = Node::element(
            ElementType::Paragraph,
            vec![Node::text("a"), Node::marked("b", Marks::only(Mark::Code))],
        );
        node.apply_marks(Marks::only(Mark::Bold));

        let el = node.as_element().unwrap();
        assert_eq!(el.children[0], Node::marked("a", Marks::only(Mark::Bold)));
        assert_eq!(
            el.children[1],
            Node::marked("b", Marks::only(Mark::Code).with(Mark::Bold))
        );
    }

    #[test]
    fn test_json_shape() {
        let fragment = Fragment::new(vec![
            Node::element(
                ElementType::Paragraph,
                vec![Node::text("plain"), Node::marked("bold", Marks::only(Mark::Bold))],
            ),
            Node::link("http://x", vec![Node::text("t")]),
        ]);

        let json = fragment.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"type":"paragraph","children":[{"text":"plain"},{"text":"bold","bold":true}]},{"type":"link","url":"http://x","children":[{"text":"t"}]}]"#
        );
        assert_eq!(Fragment::from_json(&json).unwrap(), fragment);
    }

    #[test]
    fn test_json_unknown_type_kept() {
        let fragment = Fragment::from_json(r#"[{"type":"block-quote","children":[{"text":"q"}]},{"type":"table","children":[]}]"#).unwrap();
        assert_eq!(fragment[0].as_element().unwrap().ty, ElementType::Quote);
        let table = fragment[1].as_element().unwrap();
        assert_eq!(table.ty, ElementType::Other("table".to_string()));
        assert_eq!(table.children, vec![Node::text("")]);
    }

    #[test]
    fn test_json_empty_children_get_placeholder() {
        let fragment = Fragment::from_json(
            r#"[{"type":"bulleted-list","children":[{"type":"list-item","children":[]}]}]"#,
        )
        .unwrap();
        assert_eq!(
            fragment.to_vec(),
            vec![Node::element(
                ElementType::BulletedList,
                vec![Node::element(ElementType::ListItem, vec![])]
            )]
        );
        assert_eq!(
            fragment.to_json().unwrap(),
            r#"[{"type":"bulleted-list","children":[{"type":"list-item","children":[{"text":""}]}]}]"#
        );
    }

    #[test]
    fn test_block_children() {
        let list = Element::with_children(
            ElementType::BulletedList,
            vec![Node::element(ElementType::ListItem, vec![Node::text("a")])],
        );
        assert!(list.has_block_children());

        let paragraph = Element::with_children(
            ElementType::Paragraph,
            vec![Node::image("x.png")],
        );
        assert!(!paragraph.has_block_children());

        let mixed = Element::with_children(
            ElementType::Quote,
            vec![Node::text("a"), Node::element(ElementType::Paragraph, vec![])],
        );
        assert!(!mixed.has_block_children());
    }

    #[test]
    fn test_json_malformed() {
        assert!(matches!(Fragment::from_json("[{"), Err(Error::Json(_))));
    }
}
