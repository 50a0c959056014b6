//! Rule system for HTML import.

mod rule;
mod schema;

pub use rule::{ElementFn, Rule};
pub use schema::{anchor_rule, element_rules, mark_rules};

use indexmap::IndexMap;
use richdoc_core::Marks;

use crate::dom::DomNode;

/// Tag rules, keyed by uppercase tag name
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create the schema rules. `anchor_links` also maps `<a>` to links.
    pub fn new(anchor_links: bool) -> Self {
        let mut rules = Self::empty();
        for (tag, rule) in element_rules().into_iter().chain(mark_rules()) {
            rules.add(tag, rule);
        }
        if anchor_links {
            let (tag, rule) = anchor_rule();
            rules.add(tag, rule);
        }
        rules
    }

    /// Create a rule set with no tags mapped
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add or replace the rule for a tag
    pub fn add(&mut self, tag: &str, rule: Rule) {
        self.rules.insert(tag.to_uppercase(), rule);
    }

    /// Remove the rule for a tag, making it transparent
    pub fn remove(&mut self, tag: &str) -> Option<Rule> {
        self.rules.shift_remove(&tag.to_uppercase())
    }

    /// Find the rule for a DOM node
    pub fn for_node(&self, node: &DomNode) -> Option<&Rule> {
        if !node.is_element() {
            return None;
        }
        self.rules.get(&node.node_name.to_uppercase())
    }

    /// The marks a tag applies, if it is text-decorating
    pub fn marks_for(&self, tag: &str) -> Option<Marks> {
        match self.rules.get(&tag.to_uppercase()) {
            Some(Rule::Marks(marks)) => Some(*marks),
            _ => None,
        }
    }

    /// Tag names with rules, in insertion order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(true)
    }
}
