use std::borrow::Cow;

use tree_sitter::Node;

pub trait SourceTextProvider<'a> {
    fn node_text(&self, node: Node) -> Cow<'a, str>;
}

impl<'a> SourceTextProvider<'a> for &'a str {
    fn node_text(&self, node: Node) -> Cow<'a, str> {
        let source_text: &'a str = *self;
        source_text
            .get(node.byte_range())
            .unwrap_or_default()
            .into()
    }
}
