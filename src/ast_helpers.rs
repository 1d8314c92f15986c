use std::borrow::Cow;

use itertools::Itertools;
use tree_sitter::Node;

use crate::{
    kind::{Arguments, Comment, ParenthesizedExpression},
    text::SourceTextProvider,
};

pub trait NodeExtJs<'a> {
    fn maybe_field(&self, field_name: &str) -> Option<Node<'a>>;
    fn text<'b>(&self, source_text_provider: &impl SourceTextProvider<'b>) -> Cow<'b, str>;
    fn non_comment_named_children(&self) -> Vec<Node<'a>>;
    fn first_non_comment_named_child(&self) -> Option<Node<'a>>;
}

impl<'a> NodeExtJs<'a> for Node<'a> {
    fn maybe_field(&self, field_name: &str) -> Option<Node<'a>> {
        self.child_by_field_name(field_name)
    }

    fn text<'b>(&self, source_text_provider: &impl SourceTextProvider<'b>) -> Cow<'b, str> {
        source_text_provider.node_text(*self)
    }

    fn non_comment_named_children(&self) -> Vec<Node<'a>> {
        let mut cursor = self.walk();
        self.named_children(&mut cursor)
            .filter(|child| child.kind() != Comment)
            .collect_vec()
    }

    fn first_non_comment_named_child(&self) -> Option<Node<'a>> {
        let mut cursor = self.walk();
        let child = self
            .named_children(&mut cursor)
            .find(|child| child.kind() != Comment);
        child
    }
}

pub fn skip_parenthesized_expressions(mut node: Node) -> Node {
    while node.kind() == ParenthesizedExpression {
        match node.first_non_comment_named_child() {
            Some(child) => node = child,
            None => break,
        }
    }
    node
}

/// Arguments of a call or `new` expression, or `None` for tagged templates
/// and argument-less `new Foo`.
pub fn get_call_expression_arguments(node: Node) -> Option<Vec<Node>> {
    node.maybe_field("arguments")
        .filter(|arguments| arguments.kind() == Arguments)
        .map(|arguments| arguments.non_comment_named_children())
}
