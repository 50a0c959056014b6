//! In-memory editor handle.
//!
//! The selection covers whole text leaves and is stored as a range of leaf
//! ordinals (document order). Wrapping, unwrapping and retyping never add,
//! remove or reorder leaves, so the selection stays valid across them.

use richdoc_core::{Element, ElementType, Fragment, Mark, Marks, Node, Text};

use super::{MarkSet, NodeMatcher, TreeMutator};
use crate::{Error, Result};

/// Child indices from the document root down to a node
pub type Path = Vec<usize>;

/// Inclusive range of selected leaf ordinals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeafRange {
    start: usize,
    end: usize,
}

impl LeafRange {
    fn intersects(&self, offset: usize, count: usize) -> bool {
        offset <= self.end && offset + count > self.start
    }
}

/// A document plus a selection, implementing the toolbar capabilities
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    children: Vec<Node>,
    selection: Option<LeafRange>,
}

impl MemoryEditor {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            children: fragment.into_inner(),
            selection: None,
        }
    }

    /// Load a document from the editor's JSON value form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Fragment::from_json(json)?))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_fragment(self) -> Fragment {
        Fragment::new(self.children)
    }

    /// Select the text leaves from `anchor` to `focus`, in either order
    pub fn select(&mut self, anchor: Path, focus: Path) -> Result<()> {
        let anchor = leaf_ordinal(&self.children, &anchor).ok_or(Error::InvalidPath(anchor))?;
        let focus = leaf_ordinal(&self.children, &focus).ok_or(Error::InvalidPath(focus))?;
        self.selection = Some(LeafRange {
            start: anchor.min(focus),
            end: anchor.max(focus),
        });
        Ok(())
    }

    /// Select every leaf in the document
    pub fn select_all(&mut self) {
        let count: usize = self.children.iter().map(Node::leaf_count).sum();
        self.selection = (count > 0).then(|| LeafRange {
            start: 0,
            end: count - 1,
        });
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    fn set_mark(&mut self, mark: Mark, value: bool) {
        let Some(range) = self.selection else {
            return;
        };
        let mut offset = 0;
        let mut apply = |ordinal: usize, text: &mut Text| {
            if ordinal >= range.start && ordinal <= range.end {
                text.marks.set(mark, value);
            }
        };
        for_each_leaf_mut(&mut self.children, &mut offset, &mut apply);
    }
}

impl NodeMatcher for MemoryEditor {
    fn any_selected(&self, predicate: &dyn Fn(&Element) -> bool) -> bool {
        match self.selection {
            Some(range) => any_in(&self.children, 0, range, predicate),
            None => false,
        }
    }
}

impl TreeMutator for MemoryEditor {
    fn unwrap_nodes(&mut self, predicate: &dyn Fn(&Element) -> bool) {
        if let Some(range) = self.selection {
            let children = std::mem::take(&mut self.children);
            self.children = unwrap_in(children, 0, range, predicate).0;
        }
    }

    fn set_block_type(&mut self, ty: &ElementType) {
        if let Some(range) = self.selection {
            set_type_in(&mut self.children, 0, range, ty);
        }
    }

    fn wrap_blocks(&mut self, ty: &ElementType) {
        if let Some(range) = self.selection {
            wrap_in(&mut self.children, 0, range, ty);
        }
    }
}

impl MarkSet for MemoryEditor {
    fn marks(&self) -> Option<Marks> {
        let range = self.selection?;
        leaf_at(&self.children, range.start).map(|text| text.marks)
    }

    fn add_mark(&mut self, mark: Mark) {
        self.set_mark(mark, true);
    }

    fn remove_mark(&mut self, mark: Mark) {
        self.set_mark(mark, false);
    }
}

fn leaf_ordinal(nodes: &[Node], path: &[usize]) -> Option<usize> {
    let (&index, rest) = path.split_first()?;
    let node = nodes.get(index)?;
    let before: usize = nodes[..index].iter().map(Node::leaf_count).sum();

    match node {
        Node::Text(_) if rest.is_empty() => Some(before),
        Node::Element(el) if !rest.is_empty() => {
            leaf_ordinal(&el.children, rest).map(|inner| before + inner)
        }
        _ => None,
    }
}

fn leaf_at(nodes: &[Node], ordinal: usize) -> Option<&Text> {
    let mut offset = 0;
    for node in nodes {
        let count = node.leaf_count();
        if ordinal < offset + count {
            return match node {
                Node::Text(text) => Some(text),
                Node::Element(el) => leaf_at(&el.children, ordinal - offset),
            };
        }
        offset += count;
    }
    None
}

fn for_each_leaf_mut(
    nodes: &mut [Node],
    offset: &mut usize,
    f: &mut dyn FnMut(usize, &mut Text),
) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                f(*offset, text);
                *offset += 1;
            }
            Node::Element(el) => for_each_leaf_mut(&mut el.children, offset, f),
        }
    }
}

fn any_in(
    nodes: &[Node],
    mut offset: usize,
    range: LeafRange,
    predicate: &dyn Fn(&Element) -> bool,
) -> bool {
    for node in nodes {
        let count = node.leaf_count();
        if let Node::Element(el) = node {
            if range.intersects(offset, count)
                && (predicate(el) || any_in(&el.children, offset, range, predicate))
            {
                return true;
            }
        }
        offset += count;
    }
    false
}

fn set_type_in(nodes: &mut [Node], mut offset: usize, range: LeafRange, ty: &ElementType) {
    for node in nodes {
        let count = node.leaf_count();
        if let Node::Element(el) = node {
            if range.intersects(offset, count) && !el.ty.is_inline() {
                if el.has_block_children() {
                    set_type_in(&mut el.children, offset, range, ty);
                } else {
                    el.ty = ty.clone();
                }
            }
        }
        offset += count;
    }
}

/// Unwrap the lowest selected elements matching `predicate`: an element is
/// kept when a descendant on the same branch was already unwrapped. Returns
/// the new nodes and whether anything matched.
fn unwrap_in(
    nodes: Vec<Node>,
    mut offset: usize,
    range: LeafRange,
    predicate: &dyn Fn(&Element) -> bool,
) -> (Vec<Node>, bool) {
    let mut out = Vec::with_capacity(nodes.len());
    let mut matched = false;

    for node in nodes {
        let count = node.leaf_count();
        let start = offset;
        offset += count;

        match node {
            Node::Element(mut el) if range.intersects(start, count) => {
                let children = std::mem::take(&mut el.children);
                let (children, inner) = unwrap_in(children, start, range, predicate);
                el.children = children;
                if !inner && predicate(&el) {
                    out.extend(split_around(el, start, range));
                    matched = true;
                } else {
                    out.push(Node::Element(el));
                }
                matched |= inner;
            }
            other => out.push(other),
        }
    }

    (out, matched)
}

/// Lift the selected children out of `el`, keeping the unselected runs on
/// either side in copies of `el`
fn split_around(el: Element, mut offset: usize, range: LeafRange) -> Vec<Node> {
    let mut before = Vec::new();
    let mut inside = Vec::new();
    let mut after = Vec::new();

    for child in el.children {
        let count = child.leaf_count();
        if offset + count <= range.start {
            before.push(child);
        } else if offset > range.end {
            after.push(child);
        } else {
            inside.push(child);
        }
        offset += count;
    }

    let mut out = Vec::with_capacity(inside.len() + 2);
    if !before.is_empty() {
        out.push(Node::Element(Element {
            ty: el.ty.clone(),
            url: el.url.clone(),
            children: before,
        }));
    }
    out.extend(inside);
    if !after.is_empty() {
        out.push(Node::Element(Element {
            ty: el.ty,
            url: el.url,
            children: after,
        }));
    }
    out
}

fn wrap_in(nodes: &mut Vec<Node>, offset: usize, range: LeafRange, ty: &ElementType) {
    let mut hits = Vec::new();
    let mut child_offset = offset;
    for (i, node) in nodes.iter().enumerate() {
        let count = node.leaf_count();
        if range.intersects(child_offset, count) {
            hits.push((i, child_offset));
        }
        child_offset += count;
    }

    let (Some(&(first, first_offset)), Some(&(last, _))) = (hits.first(), hits.last()) else {
        return;
    };

    // A single selected container: wrap the blocks inside it instead
    if first == last {
        if let Node::Element(el) = &mut nodes[first] {
            if el.has_block_children() {
                wrap_in(&mut el.children, first_offset, range, ty);
                return;
            }
        }
    }

    let wrapped: Vec<Node> = nodes.drain(first..=last).collect();
    nodes.insert(first, Node::element(ty.clone(), wrapped));
}
