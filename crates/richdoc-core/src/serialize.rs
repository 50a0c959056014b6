//! HTML serialization
//!
//! Renders a document tree as HTML text. Output is a single concatenated
//! string with no pretty-printing.

use tracing::trace;

use crate::ast::{Element, ElementType, Mark, Node, Text};
use crate::options::{MarkStyle, Options};

/// Serialize a sequence of top-level nodes to HTML.
///
/// The nodes are treated as the children of an implicit, untagged root.
pub fn serialize(nodes: &[Node], options: &Options) -> String {
    let mut output = String::with_capacity(256);
    serialize_children(nodes, options, &mut output);
    output
}

fn serialize_node(node: &Node, options: &Options, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(&text.text, out),
        Node::Element(el) => serialize_element(el, options, out),
    }
}

fn serialize_children(children: &[Node], options: &Options, out: &mut String) {
    for child in children {
        match child {
            Node::Text(text) if !text.marks.is_empty() => serialize_marked(text, options, out),
            _ => serialize_node(child, options, out),
        }
    }
}

fn serialize_element(el: &Element, options: &Options, out: &mut String) {
    let Some(tag) = block_tag(&el.ty) else {
        trace!(element_type = %el.ty, "no tag for element type, emitting children only");
        serialize_children(&el.children, options, out);
        return;
    };

    push_open(tag, out);
    serialize_children(&el.children, options, out);
    push_close(tag, out);
}

fn serialize_marked(text: &Text, options: &Options, out: &mut String) {
    match options.mark_style {
        MarkStyle::Single => {
            let tag = [Mark::Bold, Mark::Italic, Mark::Code, Mark::Underlined]
                .into_iter()
                .find(|mark| text.marks.get(*mark))
                .and_then(mark_tag);

            match tag {
                Some(tag) => {
                    push_open(tag, out);
                    escape_into(&text.text, out);
                    push_close(tag, out);
                }
                None => escape_into(&text.text, out),
            }
        }

        MarkStyle::Nested => {
            let tags: Vec<&str> = text.marks.iter().filter_map(mark_tag).collect();
            for tag in &tags {
                push_open(tag, out);
            }
            escape_into(&text.text, out);
            for tag in tags.iter().rev() {
                push_close(tag, out);
            }
        }
    }
}

/// The HTML tag for an element type, if it has one
fn block_tag(ty: &ElementType) -> Option<&'static str> {
    match ty {
        ElementType::Quote => Some("blockquote"),
        ElementType::BulletedList => Some("ul"),
        ElementType::HeadingOne => Some("h1"),
        ElementType::HeadingTwo => Some("h2"),
        ElementType::ListItem => Some("li"),
        ElementType::NumberedList => Some("ol"),
        ElementType::Paragraph => Some("p"),
        _ => None,
    }
}

fn mark_tag(mark: Mark) -> Option<&'static str> {
    match mark {
        Mark::Bold => Some("b"),
        Mark::Italic => Some("em"),
        Mark::Code => Some("code"),
        Mark::Underlined => Some("u"),
        Mark::Strikethrough => Some("s"),
    }
}

fn push_open(tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn push_close(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escape HTML special characters in text content
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    escape_into(text, &mut result);
    result
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Marks;

    fn default_options() -> Options {
        Options::default()
    }

    fn paragraph(children: Vec<Node>) -> Node {
        Node::element(ElementType::Paragraph, children)
    }

    #[test]
    fn test_escape_all_special_characters() {
        let result = serialize(&[Node::text(r#"<a href="x">Tom & Jerry's</a>"#)], &default_options());
        assert_eq!(
            result,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_paragraph() {
        let result = serialize(&[paragraph(vec![Node::text("Hello World")])], &default_options());
        assert_eq!(result, "<p>Hello World</p>");
    }

    #[test]
    fn test_tag_table() {
        let cases = [
            (ElementType::Quote, "<blockquote>x</blockquote>"),
            (ElementType::BulletedList, "<ul>x</ul>"),
            (ElementType::HeadingOne, "<h1>x</h1>"),
            (ElementType::HeadingTwo, "<h2>x</h2>"),
            (ElementType::ListItem, "<li>x</li>"),
            (ElementType::NumberedList, "<ol>x</ol>"),
            (ElementType::Paragraph, "<p>x</p>"),
        ];

        for (ty, expected) in cases {
            let result = serialize(&[Node::element(ty, vec![Node::text("x")])], &default_options());
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_block_quote_alias() {
        let node = Node::element(ElementType::from("block-quote"), vec![Node::text("q")]);
        assert_eq!(serialize(&[node], &default_options()), "<blockquote>q</blockquote>");
    }

    #[test]
    fn test_unmapped_types_unwrapped() {
        let nodes = [
            Node::element(ElementType::Other("table".to_string()), vec![Node::text("a")]),
            Node::link("http://x", vec![Node::text("b")]),
            Node::image("img.png"),
        ];
        assert_eq!(serialize(&nodes, &default_options()), "ab");
    }

    #[test]
    fn test_mark_precedence() {
        let marks = Marks::only(Mark::Bold).with(Mark::Italic);
        let result = serialize(&[paragraph(vec![Node::marked("text", marks)])], &default_options());
        assert_eq!(result, "<p><b>text</b></p>");
    }

    #[test]
    fn test_single_marks() {
        let cases = [
            (Mark::Italic, "<em>t</em>"),
            (Mark::Code, "<code>t</code>"),
            (Mark::Underlined, "<u>t</u>"),
            (Mark::Strikethrough, "t"),
        ];

        for (mark, expected) in cases {
            let result = serialize(&[Node::marked("t", Marks::only(mark))], &default_options());
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_code_over_underline() {
        let marks = Marks::only(Mark::Underlined).with(Mark::Code);
        let result = serialize(&[Node::marked("t", marks)], &default_options());
        assert_eq!(result, "<code>t</code>");
    }

    #[test]
    fn test_marked_text_is_escaped() {
        let result = serialize(
            &[Node::marked("a < b", Marks::only(Mark::Code))],
            &default_options(),
        );
        assert_eq!(result, "<code>a &lt; b</code>");
    }

    #[test]
    fn test_nested_mark_style() {
        let options = Options {
            mark_style: MarkStyle::Nested,
        };
        let marks = Marks::only(Mark::Bold)
            .with(Mark::Italic)
            .with(Mark::Strikethrough);
        let result = serialize(&[Node::marked("t", marks)], &options);
        assert_eq!(result, "<b><em><s>t</s></em></b>");
    }

    #[test]
    fn test_nested_list() {
        let list = Node::element(
            ElementType::BulletedList,
            vec![
                Node::element(ElementType::ListItem, vec![Node::text("One")]),
                Node::element(ElementType::ListItem, vec![Node::text("Two")]),
            ],
        );
        let result = serialize(&[list], &default_options());
        assert_eq!(result, "<ul><li>One</li><li>Two</li></ul>");
    }

    #[test]
    fn test_no_separators_between_blocks() {
        let nodes = [
            Node::element(ElementType::HeadingOne, vec![Node::text("Title")]),
            paragraph(vec![Node::text("Body")]),
        ];
        assert_eq!(serialize(&nodes, &default_options()), "<h1>Title</h1><p>Body</p>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize(&[], &default_options()), "");
    }
}
