use std::collections::HashSet;

use tracing::trace;
use tree_sitter::Node;

use crate::{
    ast_helpers::{skip_parenthesized_expressions, NodeExtJs},
    kind::{
        self, is_literal_kind, CallExpression, Identifier, MemberExpression, NewExpression,
        ParenthesizedExpression,
    },
    scope::ScopeManager,
};

pub const REGEXP_CONSTRUCTOR_NAME: &str = "RegExp";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegexClassification {
    Regex,
    NotRegex,
    Unknown,
}

impl RegexClassification {
    pub fn is_regex(self) -> bool {
        self == Self::Regex
    }
}

/// The expression a name's value was declared with, following the last
/// definition of whatever `identifier` resolves to.
pub fn get_initializer<'a>(
    identifier: Node<'a>,
    scope_manager: &ScopeManager<'a>,
) -> Option<Node<'a>> {
    let reference = scope_manager.find_reference(identifier)?;
    let variable = reference.resolved()?;
    let definition = variable.defs().last()?;
    definition.init()
}

/// Follows `node` back to the expression that produced its value: through
/// identifier initializers, callees of calls and constructions, and objects
/// of member accesses.
pub fn trace_origin<'a>(node: Node<'a>, scope_manager: &ScopeManager<'a>) -> Node<'a> {
    trace_origin_inner(node, scope_manager, &mut Default::default())
}

fn trace_origin_inner<'a>(
    node: Node<'a>,
    scope_manager: &ScopeManager<'a>,
    followed_identifiers: &mut HashSet<usize>,
) -> Node<'a> {
    trace!(kind = node.kind(), "tracing origin");

    let next = match node.kind() {
        Identifier => {
            // const a = a.b;
            if !followed_identifiers.insert(node.id()) {
                return node;
            }
            get_initializer(node, scope_manager)
        }
        CallExpression => node.maybe_field("function"),
        NewExpression => node.maybe_field("constructor"),
        MemberExpression => node.maybe_field("object"),
        ParenthesizedExpression => node.first_non_comment_named_child(),
        _ => None,
    };

    match next {
        Some(next) => trace_origin_inner(next, scope_manager, followed_identifiers),
        None => node,
    }
}

pub fn classify_regex<'a>(
    node: Option<Node<'a>>,
    scope_manager: &ScopeManager<'a>,
) -> RegexClassification {
    let Some(node) = node else {
        return RegexClassification::NotRegex;
    };
    let node = skip_parenthesized_expressions(node);
    if node.kind() == kind::Regex {
        return RegexClassification::Regex;
    }

    let origin = trace_origin(node, scope_manager);
    match origin.kind() {
        kind::Regex => RegexClassification::Regex,
        Identifier if origin.text(scope_manager) == REGEXP_CONSTRUCTOR_NAME => {
            RegexClassification::Regex
        }
        kind if is_literal_kind(kind) => RegexClassification::NotRegex,
        _ => RegexClassification::Unknown,
    }
}

pub fn is_regex_expression<'a>(node: Option<Node<'a>>, scope_manager: &ScopeManager<'a>) -> bool {
    classify_regex(node, scope_manager).is_regex()
}
