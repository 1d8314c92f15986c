use tree_sitter::Node;

use crate::{
    ast_helpers::NodeExtJs,
    kind::{
        ArrayPattern, AssignmentPattern, Identifier, ObjectAssignmentPattern, ObjectPattern,
        PairPattern, RestPattern, ShorthandPropertyIdentifierPattern,
    },
};

/// The identifiers a binding pattern declares, in source order.
pub fn get_pattern_identifiers(pattern: Node) -> Vec<Node> {
    let mut identifiers = Vec::new();
    collect_pattern_identifiers(pattern, &mut identifiers);
    identifiers
}

fn collect_pattern_identifiers<'a>(pattern: Node<'a>, identifiers: &mut Vec<Node<'a>>) {
    match pattern.kind() {
        Identifier | ShorthandPropertyIdentifierPattern => identifiers.push(pattern),
        ObjectPattern | ArrayPattern => {
            for child in pattern.non_comment_named_children() {
                collect_pattern_identifiers(child, identifiers);
            }
        }
        AssignmentPattern | ObjectAssignmentPattern => {
            if let Some(left) = pattern.maybe_field("left") {
                collect_pattern_identifiers(left, identifiers);
            }
        }
        PairPattern => {
            if let Some(value) = pattern.maybe_field("value") {
                collect_pattern_identifiers(value, identifiers);
            }
        }
        RestPattern => {
            if let Some(argument) = pattern.first_non_comment_named_child() {
                collect_pattern_identifiers(argument, identifiers);
            }
        }
        _ => (),
    }
}
