//! Toolbar formatting operations.
//!
//! Block and mark toggles decide *what* to change; the editor handle does
//! the tree surgery through three small capability traits. Any editor that
//! implements them gets the toolbar behaviour, and [`MemoryEditor`] provides
//! an in-memory implementation.

mod memory;

pub use memory::{MemoryEditor, Path};

use richdoc_core::{Element, ElementType, Mark, Marks};
use tracing::debug;

/// Selection-scoped node matching
pub trait NodeMatcher {
    /// Whether any element touched by the selection, ancestors included,
    /// satisfies `predicate`. False when there is no selection.
    fn any_selected(&self, predicate: &dyn Fn(&Element) -> bool) -> bool;
}

/// Selection-scoped structural edits
pub trait TreeMutator {
    /// Lift the selected children out of the lowest selected elements
    /// matching `predicate`, splitting each at the selection boundary.
    fn unwrap_nodes(&mut self, predicate: &dyn Fn(&Element) -> bool);

    /// Set the type of the lowest selected blocks
    fn set_block_type(&mut self, ty: &ElementType);

    /// Wrap the selected blocks in a new element of type `ty`
    fn wrap_blocks(&mut self, ty: &ElementType);
}

/// Marks at the selection
pub trait MarkSet {
    /// The active marks, or `None` without a selection
    fn marks(&self) -> Option<Marks>;

    fn add_mark(&mut self, mark: Mark);

    fn remove_mark(&mut self, mark: Mark);
}

/// An editor handle the toolbar can drive
pub trait FormatEditor: NodeMatcher + TreeMutator + MarkSet {}

impl<T> FormatEditor for T where T: NodeMatcher + TreeMutator + MarkSet {}

/// Check if the selection is inside a block of type `format`
pub fn is_block_active<E>(editor: &E, format: &ElementType) -> bool
where
    E: NodeMatcher + ?Sized,
{
    editor.any_selected(&|el: &Element| el.ty == *format)
}

/// Toggle the selected blocks to or from `format`.
///
/// Enclosing lists are always unwrapped first. List formats then turn the
/// blocks into list items and, unless the list was already active, wrap them
/// in a new list. Other formats switch between `format` and paragraph.
pub fn toggle_block<E>(editor: &mut E, format: &ElementType)
where
    E: FormatEditor + ?Sized,
{
    let is_active = is_block_active(&*editor, format);
    let is_list = format.is_list();

    editor.unwrap_nodes(&|el: &Element| el.ty.is_list());

    let ty = if is_active {
        ElementType::Paragraph
    } else if is_list {
        ElementType::ListItem
    } else {
        format.clone()
    };
    debug!(%format, is_active, set = %ty, "toggling block");
    editor.set_block_type(&ty);

    if !is_active && is_list {
        editor.wrap_blocks(format);
    }
}

/// Check if `mark` is set in the active marks
pub fn is_mark_active<E>(editor: &E, mark: Mark) -> bool
where
    E: MarkSet + ?Sized,
{
    editor.marks().map(|marks| marks.get(mark)).unwrap_or(false)
}

/// Add `mark` at the selection, or remove it if already active
pub fn toggle_mark<E>(editor: &mut E, mark: Mark)
where
    E: MarkSet + ?Sized,
{
    if is_mark_active(&*editor, mark) {
        debug!(%mark, "removing mark");
        editor.remove_mark(mark);
    } else {
        debug!(%mark, "adding mark");
        editor.add_mark(mark);
    }
}
