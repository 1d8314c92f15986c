use std::borrow::Cow;

use const_format::formatcp;
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use crate::{
    ast_helpers::{skip_parenthesized_expressions, NodeExtJs},
    kind::{
        ArrowFunction, Function, FunctionDeclaration, FunctionExpression, GeneratorFunction,
        GeneratorFunctionDeclaration, Identifier, MemberExpression, MethodDefinition,
        PropertyIdentifier, StringFragment,
    },
    text::SourceTextProvider,
};

static any_function_pattern: Lazy<Regex> = Lazy::new(|| {
    Regex::new(formatcp!(
        r#"^(?:{FunctionDeclaration}|{GeneratorFunctionDeclaration}|{Function}|{FunctionExpression}|{GeneratorFunction}|{ArrowFunction}|{MethodDefinition})$"#
    ))
    .unwrap()
});

pub fn is_function(node: Node) -> bool {
    any_function_pattern.is_match(node.kind())
}

/// The name of a non-computed, non-private member access (`a.b` -> `b`).
pub fn get_static_property_name<'a>(
    node: Node,
    source_text_provider: &impl SourceTextProvider<'a>,
) -> Option<Cow<'a, str>> {
    if node.kind() != MemberExpression {
        return None;
    }
    let property = node.maybe_field("property")?;
    (property.kind() == PropertyIdentifier).then(|| property.text(source_text_provider))
}

/// Walks down the `object` side of nested member accesses (`a.b.c` -> `a`).
pub fn get_root_object(node: Node) -> Node {
    let mut node = skip_parenthesized_expressions(node);
    while node.kind() == MemberExpression {
        match node.maybe_field("object") {
            Some(object) => node = skip_parenthesized_expressions(object),
            None => break,
        }
    }
    node
}

pub fn get_root_object_name<'a>(
    node: Node,
    source_text_provider: &impl SourceTextProvider<'a>,
) -> Option<Cow<'a, str>> {
    let root = get_root_object(node);
    (root.kind() == Identifier).then(|| root.text(source_text_provider))
}

/// The cooked value of a string literal without escape sequences.
pub fn get_simple_string_value<'a>(
    node: Node,
    source_text_provider: &impl SourceTextProvider<'a>,
) -> Option<Cow<'a, str>> {
    if node.kind() != crate::kind::String {
        return None;
    }
    match &node.non_comment_named_children()[..] {
        [] => Some("".into()),
        [fragment] if fragment.kind() == StringFragment => {
            Some(fragment.text(source_text_provider))
        }
        _ => None,
    }
}
