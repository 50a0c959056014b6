//! Convert a DOM tree to a rich-text document tree
//!
//! The walk is bottom-up: each DOM node converts to zero or more document
//! nodes, which the enclosing element either wraps, marks, or passes through.

use richdoc_core::{merge_adjacent_text, Element, Fragment, Node};
use tracing::{debug, trace};

use crate::dom::{DomNode, NodeType};
use crate::rules::{Rule, Rules};

/// Convert a parsed document to a [`Fragment`], starting at its `BODY`.
///
/// When the tree has no body element the root node's children are used.
pub fn deserialize(root: &DomNode, rules: &Rules) -> Fragment {
    let body = root.find_element("body").unwrap_or(root);
    let children = convert_children(body, rules);
    debug!(nodes = children.len(), "imported document body");
    Fragment::new(merge_adjacent_text(children))
}

fn convert_children(node: &DomNode, rules: &Rules) -> Vec<Node> {
    node.children()
        .flat_map(|child| convert_node(child, rules))
        .collect()
}

fn convert_node(node: &DomNode, rules: &Rules) -> Vec<Node> {
    match node.node_type {
        NodeType::Text => {
            let text = node.node_value.as_deref().unwrap_or("");
            return vec![Node::text(text)];
        }
        NodeType::Element => {}
        _ => return Vec::new(),
    }

    if node.is_tag("br") {
        return vec![Node::text("\n")];
    }

    // <pre><code>..</code></pre> imports exactly like the inner <code>
    if node.is_tag("pre") {
        if let Some(code) = node.first_child().filter(|c| c.is_tag("code")) {
            return convert_node(code, rules);
        }
    }

    match rules.for_node(node) {
        Some(Rule::Drop) => {
            trace!(tag = %node.node_name, "dropping tag");
            Vec::new()
        }

        Some(Rule::Element(build)) => {
            let children = merge_adjacent_text(convert_children(node, rules));
            let el = build(node);
            vec![Node::Element(Element::with_children(el.ty, children).with_url(el.url))]
        }

        Some(Rule::Marks(marks)) => {
            let mut children = convert_children(node, rules);
            for child in &mut children {
                child.apply_marks(*marks);
            }
            children
        }

        None => {
            trace!(tag = %node.node_name, "transparent tag");
            let children = convert_children(node, rules);
            if children.is_empty() {
                vec![Node::text("")]
            } else {
                children
            }
        }
    }
}
