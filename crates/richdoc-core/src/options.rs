//! Configuration options for HTML serialization

/// How marked text is wrapped in inline tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkStyle {
    /// At most one tag per text node, chosen by precedence:
    /// bold, italic, code, underlined
    #[default]
    Single,
    /// One nested tag per set mark, outermost first:
    /// `<b>`, `<em>`, `<code>`, `<u>`, `<s>`
    Nested,
}

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Inline tag style for marked text
    pub mark_style: MarkStyle,
}
