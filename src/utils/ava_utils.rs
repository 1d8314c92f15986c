use tree_sitter::Node;

use super::ast_utils::{self, get_root_object, get_simple_string_value};
use crate::{
    ast_helpers::{get_call_expression_arguments, skip_parenthesized_expressions, NodeExtJs},
    kind::{Arguments, CallExpression, Identifier, ImportStatement},
    scope::{Definition, ScopeManager, Variable, VariableType},
};

pub const AVA_MODULE_NAME: &str = "ava";

fn is_ava_import(definition: &Definition, scope_manager: &ScopeManager) -> bool {
    match definition.type_() {
        // import test from 'ava';
        VariableType::ImportBinding => {
            definition.node().kind() == Identifier
                && definition.parent().is_some_and(|import_statement| {
                    import_statement.kind() == ImportStatement
                        && import_statement
                            .maybe_field("source")
                            .and_then(|source| get_simple_string_value(source, scope_manager))
                            .as_deref()
                            == Some(AVA_MODULE_NAME)
                })
        }
        // const test = require('ava');
        VariableType::Variable => definition
            .init()
            .is_some_and(|init| is_require_ava_call(init, scope_manager)),
        _ => false,
    }
}

fn is_require_ava_call(node: Node, scope_manager: &ScopeManager) -> bool {
    let node = skip_parenthesized_expressions(node);
    if node.kind() != CallExpression {
        return false;
    }
    if !node
        .maybe_field("function")
        .is_some_and(|callee| callee.kind() == Identifier && callee.text(scope_manager) == "require")
    {
        return false;
    }
    get_call_expression_arguments(node)
        .and_then(|arguments| arguments.first().copied())
        .and_then(|argument| get_simple_string_value(argument, scope_manager))
        .as_deref()
        == Some(AVA_MODULE_NAME)
}

/// Module-level bindings of the AVA `test` function.
pub fn get_test_function_variables<'a, 'b>(
    scope_manager: &'b ScopeManager<'a>,
) -> Vec<Variable<'a, 'b>> {
    let Some(global_scope) = scope_manager.global_scope() else {
        return Default::default();
    };
    global_scope
        .variables()
        .filter(|variable| {
            variable
                .defs()
                .any(|definition| is_ava_import(&definition, scope_manager))
        })
        .collect()
}

pub fn is_in_test_file(scope_manager: &ScopeManager) -> bool {
    !get_test_function_variables(scope_manager).is_empty()
}

/// `test(...)`, `test.serial(...)`, `test.before(...)` and so on, where
/// `test` resolves to the AVA import.
pub fn is_test_call<'a>(node: Node<'a>, scope_manager: &ScopeManager<'a>) -> bool {
    if node.kind() != CallExpression {
        return false;
    }
    let Some(callee) = node.maybe_field("function") else {
        return false;
    };
    let root = get_root_object(callee);
    if root.kind() != Identifier {
        return false;
    }
    let Some(variable) = scope_manager
        .find_reference(root)
        .and_then(|reference| reference.resolved())
    else {
        return false;
    };
    get_test_function_variables(scope_manager).contains(&variable)
}

/// Whether `node` sits inside a function passed to a test call.
pub fn is_in_test_node<'a>(node: Node<'a>, scope_manager: &ScopeManager<'a>) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ast_utils::is_function(ancestor) {
            let is_test_callback = ancestor
                .parent()
                .filter(|parent| parent.kind() == Arguments)
                .and_then(|arguments| arguments.parent())
                .is_some_and(|call| is_test_call(call, scope_manager));
            if is_test_callback {
                return true;
            }
        }
        current = ancestor.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;
    use crate::{
        kind::{CallExpression, Regex},
        scope::analyze,
        tests::helpers::{find_first_node_of_kind, find_nodes_of_kind, parse},
    };

    fn test_function_names(scope_manager: &ScopeManager) -> Vec<String> {
        get_test_function_variables(scope_manager)
            .iter()
            .map(|variable| variable.name().to_owned())
            .collect()
    }

    #[rstest]
    #[case("import test from 'ava';", vec!["test"])]
    #[case("import anyTest from 'ava';", vec!["anyTest"])]
    #[case("const test = require('ava');", vec!["test"])]
    #[case("const test = require(\"ava\");", vec!["test"])]
    #[case("import test from 'tape';", vec![])]
    #[case("const test = require('tape');", vec![])]
    #[case("import {serial} from 'ava';", vec![])]
    #[case("function foo() { const test = require('ava'); }", vec![])]
    fn test_get_test_function_variables(#[case] code: &str, #[case] expected: Vec<&str>) {
        let tree = parse(code);
        let scope_manager = analyze(&tree, code);

        assert_that!(test_function_names(&scope_manager)).is_equal_to(
            expected
                .into_iter()
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>(),
        );
    }

    #[rstest]
    #[case("import test from 'ava'; test(t => { /a/; });", true)]
    #[case("import test from 'ava'; test('title', function (t) { /a/; });", true)]
    #[case("import test from 'ava'; test.serial('title', async t => { /a/; });", true)]
    #[case("import test from 'ava'; test.before(t => { /a/; });", true)]
    #[case("import test from 'ava'; /a/;", false)]
    #[case("import test from 'ava'; foo(t => { /a/; });", false)]
    #[case("import test from 'ava'; function helper(t) { /a/; }", false)]
    #[case("import test from 'ava'; test(t => {}); const f = t => { /a/; };", false)]
    #[case("import test from 'ava'; foo(test => { test(t => { /a/; }); });", false)]
    #[case("test(t => { /a/; });", false)]
    fn test_is_in_test_node(#[case] code: &str, #[case] expected: bool) {
        let tree = parse(code);
        let scope_manager = analyze(&tree, code);

        let regex = find_first_node_of_kind(&tree, Regex).unwrap();
        assert_that!(is_in_test_node(regex, &scope_manager)).is_equal_to(expected);
    }

    #[test]
    fn test_is_test_call() {
        let code = "const test = require('ava'); test.cb.skip(t => {}); other(t => {});";
        let tree = parse(code);
        let scope_manager = analyze(&tree, code);

        assert_that!(is_in_test_file(&scope_manager)).is_true();
        assert_that!(find_nodes_of_kind(&tree, CallExpression)
            .into_iter()
            .map(|call| is_test_call(call, &scope_manager))
            .collect::<Vec<_>>())
        .is_equal_to(vec![false, true, false]);
        assert_that!(find_first_node_of_kind(&tree, CallExpression)
            .map(|call| call.text(&code).into_owned()))
        .is_equal_to(Some("require('ava')".to_owned()));
    }
}
