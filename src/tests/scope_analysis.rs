use itertools::Itertools;
use speculoos::prelude::*;

use super::helpers::{find_nodes_of_kind, parse, tracing_subscribe};
use crate::{
    kind::{Identifier, Regex},
    scope::{analyze, ScopeType, VariableType},
    text::SourceTextProvider,
};

fn scope_types(code: &str) -> Vec<ScopeType> {
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);
    scope_manager.scopes().map(|scope| scope.type_()).collect()
}

#[test]
fn test_nests_scopes() {
    tracing_subscribe();

    assert_that!(scope_types("")).is_equal_to(vec![ScopeType::Global]);
    assert_that!(scope_types(
        "function foo(a) { { let b; } for (let i = 0; ; ) {} }"
    ))
    .is_equal_to(vec![
        ScopeType::Global,
        ScopeType::Function,
        ScopeType::Block,
        ScopeType::For,
        ScopeType::Block,
    ]);
    assert_that!(scope_types(
        "try {} catch (e) {} switch (x) {} class C { m() {} } const f = () => 1;"
    ))
    .is_equal_to(vec![
        ScopeType::Global,
        ScopeType::Block,
        ScopeType::Catch,
        ScopeType::Block,
        ScopeType::Switch,
        ScopeType::Class,
        ScopeType::Function,
        ScopeType::Function,
    ]);
}

#[test]
fn test_defines_variables_in_their_scopes() {
    let code = "var a = 1; let b; function foo(c, {d}) { var e; { var f; const g = 2; } }";
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);

    let scopes = scope_manager.scopes().collect_vec();
    let names = |index: usize| {
        scopes[index]
            .variables()
            .map(|variable| variable.name().to_owned())
            .collect_vec()
    };
    assert_that!(names(0)).is_equal_to(
        ["a", "b", "foo"]
            .into_iter()
            .map(ToOwned::to_owned)
            .collect_vec(),
    );
    assert_that!(names(1)).is_equal_to(
        ["c", "d", "e", "f"]
            .into_iter()
            .map(ToOwned::to_owned)
            .collect_vec(),
    );
    assert_that!(names(2)).is_equal_to(vec!["g".to_owned()]);

    let foo = scopes[0].variable("foo").unwrap();
    assert_that!(foo.defs().map(|def| def.type_()).collect_vec())
        .is_equal_to(vec![VariableType::FunctionName]);
    let d = scopes[1].variable("d").unwrap();
    assert_that!(d.defs().map(|def| def.type_()).collect_vec())
        .is_equal_to(vec![VariableType::Parameter]);
    assert_that!(scopes[2].variable_scope()).is_equal_to(scopes[1].clone());
}

#[test]
fn test_defines_import_bindings() {
    let code = "import test, * as ns from 'ava'; import {a, b as c} from 'x';";
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);

    let global_scope = scope_manager.global_scope().unwrap();
    assert_that!(global_scope
        .variables()
        .map(|variable| {
            (
                variable.name().to_owned(),
                variable.defs().map(|def| def.type_()).collect_vec(),
            )
        })
        .collect_vec())
    .is_equal_to(
        ["test", "ns", "a", "c"]
            .into_iter()
            .map(|name| (name.to_owned(), vec![VariableType::ImportBinding]))
            .collect_vec(),
    );
}

#[test]
fn test_definition_init() {
    let code = "const a = /x/, [b] = [/y/]; let c; var d = 1, d = /z/;";
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);

    let global_scope = scope_manager.global_scope().unwrap();
    let init_texts = |name: &str| {
        global_scope
            .variable(name)
            .unwrap()
            .defs()
            .map(|def| def.init().map(|init| code.node_text(init).into_owned()))
            .collect_vec()
    };
    assert_that!(init_texts("a")).is_equal_to(vec![Some("/x/".to_owned())]);
    assert_that!(init_texts("b")).is_equal_to(vec![None]);
    assert_that!(init_texts("c")).is_equal_to(vec![None]);
    assert_that!(init_texts("d")).is_equal_to(vec![Some("1".to_owned()), Some("/z/".to_owned())]);
}

#[test]
fn test_find_reference_walks_enclosing_scopes() {
    let code = "const re = /a/; function f() { const inner = /b/; { re; inner; other; } }";
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);

    let identifiers = find_nodes_of_kind(&tree, Identifier);
    let resolved_scope_types = identifiers[identifiers.len() - 3..]
        .iter()
        .map(|&identifier| {
            let reference = scope_manager.find_reference(identifier).unwrap();
            reference
                .resolved()
                .map(|variable| variable.scope().type_())
        })
        .collect_vec();
    assert_that!(resolved_scope_types).is_equal_to(vec![
        Some(ScopeType::Global),
        Some(ScopeType::Function),
        None,
    ]);

    let regex = find_nodes_of_kind(&tree, Regex)[0];
    assert_that!(scope_manager.find_reference(regex).is_none()).is_true();
}

#[test]
fn test_find_reference_prefers_innermost_binding() {
    let code = "const re = /a/; function f(re) { re; }";
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);

    let identifier = *find_nodes_of_kind(&tree, Identifier).last().unwrap();
    let variable = scope_manager
        .find_reference(identifier)
        .unwrap()
        .resolved()
        .unwrap();
    assert_that!(variable.scope().type_()).is_equal_to(ScopeType::Function);
    assert_that!(variable.defs().last().unwrap().type_()).is_equal_to(VariableType::Parameter);
}

#[test]
fn test_references_and_scope_tree() {
    let code = "const test = require('ava'); test(t => { test; });";
    let tree = parse(code);
    let scope_manager = analyze(&tree, code);

    let global_scope = scope_manager.global_scope().unwrap();
    let child_scopes = global_scope.child_scopes().collect_vec();
    assert_that!(child_scopes
        .iter()
        .map(|scope| scope.type_())
        .collect_vec())
    .is_equal_to(vec![ScopeType::Function]);
    assert_that!(child_scopes[0].maybe_upper()).is_equal_to(Some(global_scope.clone()));

    let identifiers = find_nodes_of_kind(&tree, Identifier);
    let last_identifier = *identifiers.last().unwrap();
    let reference = scope_manager.find_reference(last_identifier).unwrap();
    assert_that!(reference.is_resolved()).is_true();
    assert_that!(reference.identifier()).is_equal_to(last_identifier);
    assert_that!(reference.from()).is_equal_to(child_scopes[0].clone());

    let test = reference.resolved().unwrap();
    assert_that!(test.identifiers().collect_vec()).is_equal_to(vec![identifiers[0]]);
    assert_that!(test.scope()).is_equal_to(global_scope.clone());

    let require = scope_manager.find_reference(identifiers[1]).unwrap();
    assert_that!(require.is_resolved()).is_false();
}
