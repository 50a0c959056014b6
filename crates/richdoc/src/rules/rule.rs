//! Rule types for HTML import.

use richdoc_core::{Element, ElementType, Mark, Marks};

use crate::dom::DomNode;

/// Type alias for element constructors. The returned element's children are
/// replaced by the converted DOM children.
pub type ElementFn = Box<dyn Fn(&DomNode) -> Element + Send + Sync>;

/// A rule defines what a matched HTML tag becomes in the document tree
pub enum Rule {
    /// Build an element node around the converted children
    Element(ElementFn),
    /// Apply marks to every converted child
    Marks(Marks),
    /// Drop the tag and its whole subtree
    Drop,
}

impl Rule {
    /// Create an element rule from a constructor
    pub fn element<F>(constructor: F) -> Self
    where
        F: Fn(&DomNode) -> Element + Send + Sync + 'static,
    {
        Rule::Element(Box::new(constructor))
    }

    /// Create an element rule with a fixed type
    pub fn element_type(ty: ElementType) -> Self {
        Self::element(move |_| Element::new(ty.clone()))
    }

    /// Create an element rule whose `url` comes from an attribute
    pub fn element_with_url(ty: ElementType, attr: &'static str) -> Self {
        Self::element(move |node| {
            Element::new(ty.clone()).with_url(node.attr(attr).map(str::to_string))
        })
    }

    /// Create a text-decorating rule for a single mark
    pub fn mark(mark: Mark) -> Self {
        Rule::Marks(Marks::only(mark))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Element(_) => f.write_str("Rule::Element(..)"),
            Rule::Marks(marks) => f.debug_tuple("Rule::Marks").field(marks).finish(),
            Rule::Drop => f.write_str("Rule::Drop"),
        }
    }
}
